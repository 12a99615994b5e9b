use crate::collectors::runner::CommandRunner;
use std::path::Path;

/// Map a bare kernel name from lsblk ("sda2", "sys.vg-root.lv") to the path
/// df and mount print for it.
///
/// Partitions and md arrays live directly under /dev; device-mapper volumes
/// often only exist under /dev/mapper. Whichever node exists first wins.
/// `None` when neither exists.
pub fn resolve_device(runner: &dyn CommandRunner, bare_name: &str) -> Option<String> {
    if bare_name.is_empty() || bare_name.contains('/') {
        return None;
    }
    ["/dev", "/dev/mapper"]
        .iter()
        .map(|dir| format!("{}/{}", dir, bare_name))
        .find(|candidate| runner.file_exists(Path::new(candidate)))
}
