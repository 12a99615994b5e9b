pub mod blkid;
pub mod device_path;
pub mod df;
pub mod filesystem;
pub mod identity;
pub mod lsblk;
pub mod mounts;
pub mod runner;
