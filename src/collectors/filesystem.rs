use crate::collectors::df::collect_usage;
use crate::collectors::identity::{collect_identity, IdentitySource};
use crate::collectors::mounts::{collect_mounts, MountSource};
use crate::collectors::runner::CommandRunner;
use crate::config::Config;
use crate::error::Result;
use crate::models::filesystem::FilesystemSet;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// What one inventory run needs to know about the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectOptions {
    pub timeout:     Duration,
    pub proc_mounts: PathBuf,
    pub lsblk_path:  PathBuf,
    pub identity:    bool,
}

impl From<&Config> for CollectOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            timeout:     cfg.general.command_timeout(),
            proc_mounts: cfg.sources.proc_mounts.clone(),
            lsblk_path:  cfg.sources.lsblk_path.clone(),
            identity:    cfg.sources.identity,
        }
    }
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Build a fresh record set from df, the mount table and lsblk/blkid.
///
/// Order matters: df and the mount table establish the keys, identity data is
/// then matched onto them. A failing source is logged and skipped; whatever
/// earlier sources merged stays in place.
pub fn read_filesystems(runner: &dyn CommandRunner, opts: &CollectOptions) -> FilesystemSet {
    let mut set = FilesystemSet::new();

    report("df", collect_usage(runner, &mut set, opts.timeout));

    let mounts = MountSource::detect(runner, &opts.proc_mounts);
    report("mount table", collect_mounts(runner, &mounts, &mut set, opts.timeout));

    if opts.identity {
        let identity = IdentitySource::detect(runner, &opts.lsblk_path);
        report("identity", collect_identity(runner, &identity, &mut set, opts.timeout));
    } else {
        debug!("identity collection disabled");
    }

    info!(filesystems = set.len(), "inventory complete");
    set
}

fn report(source: &str, res: Result<usize>) {
    match res {
        Ok(n)  => debug!(source, records = n, "merged"),
        Err(e) => warn!(source, "skipped: {}", e),
    }
}
