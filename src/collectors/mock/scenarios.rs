//! Canned tool output from a host with LVM volumes on top of md RAID.

use super::MockRunner;

pub const DF_P: &str = "\
Filesystem         1024-blocks      Used Available Capacity Mounted on
/dev/mapper/sys.vg-root.lv   4805760    378716   4182924       9% /
tmpfs                  2030944         0   2030944       0% /lib/init/rw
udev                   2025576       228   2025348       1% /dev
tmpfs                  2030944      2960   2027984       1% /dev/shm
/dev/mapper/sys.vg-home.lv  97605056  53563252  44041804      55% /home
/dev/mapper/sys.vg-special.lv  97605057  53563253  44041805      56% /special
/dev/mapper/sys.vg-tmp.lv   1919048     46588   1774976       3% /tmp
/dev/mapper/sys.vg-usr.lv  19223252   5479072  12767696      31% /usr
/dev/mapper/sys.vg-var.lv  19223252   3436556  14810212      19% /var
/dev/md0                960492     36388    875312       4% /boot
";

pub const MOUNT: &str = "\
/dev/mapper/sys.vg-root.lv on / type ext4 (rw,noatime,errors=remount-ro)
tmpfs on /lib/init/rw type tmpfs (rw,nosuid,mode=0755)
proc on /proc type proc (rw,noexec,nosuid,nodev)
sysfs on /sys type sysfs (rw,noexec,nosuid,nodev)
udev on /dev type tmpfs (rw,mode=0755)
tmpfs on /dev/shm type tmpfs (rw,nosuid,nodev)
devpts on /dev/pts type devpts (rw,noexec,nosuid,gid=5,mode=620)
/dev/mapper/sys.vg-home.lv on /home type xfs (rw,noatime)
/dev/mapper/sys.vg-special.lv on /special type xfs (ro,noatime)
/dev/mapper/sys.vg-tmp.lv on /tmp type ext4 (rw,noatime)
/dev/mapper/sys.vg-usr.lv on /usr type ext4 (rw,noatime)
/dev/mapper/sys.vg-var.lv on /var type ext4 (rw,noatime)
/dev/md0 on /boot type ext3 (rw,noatime,errors=remount-ro)
fusectl on /sys/fs/fuse/connections type fusectl (rw)
binfmt_misc on /proc/sys/fs/binfmt_misc type binfmt_misc (rw,noexec,nosuid,nodev)
";

pub const PROC_MOUNTS: &str = "\
rootfs / rootfs rw 0 0
none /sys sysfs rw,nosuid,nodev,noexec,relatime 0 0
none /proc proc rw,nosuid,nodev,noexec,relatime 0 0
none /dev devtmpfs rw,relatime,size=2025576k,nr_inodes=506394,mode=755 0 0
none /dev/pts devpts rw,nosuid,noexec,relatime,gid=5,mode=620,ptmxmode=000 0 0
/dev/mapper/sys.vg-root.lv / ext4 rw,noatime,errors=remount-ro,barrier=1,data=ordered 0 0
tmpfs /lib/init/rw tmpfs rw,nosuid,relatime,mode=755 0 0
tmpfs /dev/shm tmpfs rw,nosuid,nodev,relatime 0 0
/dev/mapper/sys.vg-home.lv /home xfs rw,noatime,attr2,noquota 0 0
/dev/mapper/sys.vg-special.lv /special xfs ro,noatime,attr2,noquota 0 0
/dev/mapper/sys.vg-tmp.lv /tmp ext4 rw,noatime,barrier=1,data=ordered 0 0
/dev/mapper/sys.vg-usr.lv /usr ext4 rw,noatime,barrier=1,data=ordered 0 0
/dev/mapper/sys.vg-var.lv /var ext4 rw,noatime,barrier=1,data=ordered 0 0
/dev/md0 /boot ext3 rw,noatime,errors=remount-ro,data=ordered 0 0
fusectl /sys/fs/fuse/connections fusectl rw,relatime 0 0
binfmt_misc /proc/sys/fs/binfmt_misc binfmt_misc rw,nosuid,nodev,noexec,relatime 0 0
";

pub const BLKID_TYPE: &str = "\
/dev/sdb1: TYPE=\"linux_raid_member\"
/dev/sdb2: TYPE=\"linux_raid_member\"
/dev/sda1: TYPE=\"linux_raid_member\"
/dev/sda2: TYPE=\"linux_raid_member\"
/dev/md0: TYPE=\"ext3\"
/dev/md1: TYPE=\"LVM2_member\"
/dev/mapper/sys.vg-root.lv: TYPE=\"ext4\"
/dev/mapper/sys.vg-swap.lv: TYPE=\"swap\"
/dev/mapper/sys.vg-tmp.lv: TYPE=\"ext4\"
/dev/mapper/sys.vg-usr.lv: TYPE=\"ext4\"
/dev/mapper/sys.vg-var.lv: TYPE=\"ext4\"
/dev/mapper/sys.vg-home.lv: TYPE=\"xfs\"
";

pub const BLKID_UUID: &str = "\
/dev/sdb1: UUID=\"bd1197e0-6997-1f3a-e27e-7801388308b5\"
/dev/sdb2: UUID=\"e36d933e-e5b9-cfe5-6845-1f84d0f7fbfa\"
/dev/sda1: UUID=\"bd1197e0-6997-1f3a-e27e-7801388308b5\"
/dev/sda2: UUID=\"e36d933e-e5b9-cfe5-6845-1f84d0f7fbfa\"
/dev/md0: UUID=\"37b8de8e-0fe3-4b5a-b9b4-dde33e19bb32\"
/dev/md1: UUID=\"YsIe0R-fj1y-LXTd-imla-opKo-OuIe-TBoxSK\"
/dev/mapper/sys.vg-root.lv: UUID=\"7742d14b-80a3-4e97-9a32-478be9ea9aea\"
/dev/mapper/sys.vg-swap.lv: UUID=\"9bc2e515-8ddc-41c3-9f63-4eaebde9ce96\"
/dev/mapper/sys.vg-tmp.lv: UUID=\"74cf7eb9-428f-479e-9a4a-9943401e81e5\"
/dev/mapper/sys.vg-usr.lv: UUID=\"26ec33c5-d00b-4f88-a550-492def013bbc\"
/dev/mapper/sys.vg-var.lv: UUID=\"6b559c35-7847-4ae2-b512-c99012d3f5b3\"
/dev/mapper/sys.vg-home.lv: UUID=\"d6efda02-1b73-453c-8c74-7d8dee78fa5e\"
";

pub const BLKID_LABEL: &str = "\
/dev/sda1: LABEL=\"fuego:0\"
/dev/sda2: LABEL=\"fuego:1\"
/dev/sdb1: LABEL=\"fuego:0\"
/dev/sdb2: LABEL=\"fuego:1\"
/dev/md0: LABEL=\"/boot\"
/dev/mapper/sys.vg-root.lv: LABEL=\"/\"
/dev/mapper/sys.vg-tmp.lv: LABEL=\"/tmp\"
/dev/mapper/sys.vg-usr.lv: LABEL=\"/usr\"
/dev/mapper/sys.vg-var.lv: LABEL=\"/var\"
/dev/mapper/sys.vg-home.lv: LABEL=\"/home\"
";

pub const LSBLK_FSTYPE: &str = "\
sdb1 linux_raid_member
sdb2 linux_raid_member
sda1 linux_raid_member
sda2 linux_raid_member
md0 ext3
md1 LVM2_member
sys.vg-root.lv ext4
sys.vg-swap.lv swap
sys.vg-tmp.lv ext4
sys.vg-usr.lv ext4
sys.vg-var.lv ext4
sys.vg-home.lv xfs
";

pub const LSBLK_UUID: &str = "\
sdb1 bd1197e0-6997-1f3a-e27e-7801388308b5
sdb2 e36d933e-e5b9-cfe5-6845-1f84d0f7fbfa
sda1 bd1197e0-6997-1f3a-e27e-7801388308b5
sda2 e36d933e-e5b9-cfe5-6845-1f84d0f7fbfa
md0 37b8de8e-0fe3-4b5a-b9b4-dde33e19bb32
md1 YsIe0R-fj1y-LXTd-imla-opKo-OuIe-TBoxSK
sys.vg-root.lv 7742d14b-80a3-4e97-9a32-478be9ea9aea
sys.vg-swap.lv 9bc2e515-8ddc-41c3-9f63-4eaebde9ce96
sys.vg-tmp.lv 74cf7eb9-428f-479e-9a4a-9943401e81e5
sys.vg-usr.lv 26ec33c5-d00b-4f88-a550-492def013bbc
sys.vg-var.lv 6b559c35-7847-4ae2-b512-c99012d3f5b3
sys.vg-home.lv d6efda02-1b73-453c-8c74-7d8dee78fa5e
";

pub const LSBLK_LABEL: &str = "\
sda1 fuego:0
sda2 fuego:1
sdb1 fuego:0
sdb2 fuego:1
md0 /boot
sys.vg-root.lv /
sys.vg-tmp.lv /tmp
sys.vg-usr.lv /usr
sys.vg-var.lv /var
sys.vg-home.lv /home
";

const PLAIN_DEVICES: &[&str] = &["sdb1", "sdb2", "sda1", "sda2", "md0", "md1", "md2"];

const MAPPER_DEVICES: &[&str] = &[
    "sys.vg-root.lv",
    "sys.vg-swap.lv",
    "sys.vg-tmp.lv",
    "sys.vg-usr.lv",
    "sys.vg-var.lv",
    "sys.vg-home.lv",
];

impl MockRunner {
    /// Device nodes only: md RAID members under /dev, LVM volumes only under
    /// /dev/mapper. No tools and no /proc/mounts.
    pub fn lvm_host() -> Self {
        let mut runner = Self::new();
        for name in PLAIN_DEVICES {
            runner.add_path(format!("/dev/{}", name));
        }
        for name in MAPPER_DEVICES {
            runner.add_path(format!("/dev/mapper/{}", name));
        }
        runner
    }

    /// `lvm_host` with df, mount and blkid installed; no lsblk, no /proc/mounts.
    pub fn lvm_host_with_blkid() -> Self {
        let mut runner = Self::lvm_host();
        runner.add_command("df -P", DF_P);
        runner.add_command("mount", MOUNT);
        runner.add_command("blkid -s TYPE", BLKID_TYPE);
        runner.add_command("blkid -s UUID", BLKID_UUID);
        runner.add_command("blkid -s LABEL", BLKID_LABEL);
        runner
    }

    /// `lvm_host` with df, /proc/mounts and lsblk at /bin/lsblk.
    pub fn lvm_host_with_lsblk() -> Self {
        let mut runner = Self::lvm_host();
        runner.add_command("df -P", DF_P);
        runner.add_file("/proc/mounts", PROC_MOUNTS);
        runner.add_path("/bin/lsblk");
        runner.add_command("lsblk -r -o NAME,FSTYPE -n", LSBLK_FSTYPE);
        runner.add_command("lsblk -r -o NAME,UUID -n", LSBLK_UUID);
        runner.add_command("lsblk -r -o NAME,LABEL -n", LSBLK_LABEL);
        runner
    }
}
