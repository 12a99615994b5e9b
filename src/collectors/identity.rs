use crate::collectors::blkid::{blkid_cmd, parse_blkid_line};
use crate::collectors::device_path::resolve_device;
use crate::collectors::lsblk::{lsblk_cmd, parse_lsblk_line};
use crate::collectors::runner::CommandRunner;
use crate::error::{CollectError, Result};
use crate::models::filesystem::{FilesystemRecord, FilesystemSet};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// One identity attribute. Both tools print a single attribute per line, so
/// each is fetched with its own invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityAttr {
    Type,
    Uuid,
    Label,
}

impl IdentityAttr {
    pub const ALL: [IdentityAttr; 3] = [IdentityAttr::Type, IdentityAttr::Uuid, IdentityAttr::Label];

    pub fn lsblk_column(self) -> &'static str {
        match self {
            IdentityAttr::Type  => "FSTYPE",
            IdentityAttr::Uuid  => "UUID",
            IdentityAttr::Label => "LABEL",
        }
    }

    pub fn blkid_tag(self) -> &'static str {
        match self {
            IdentityAttr::Type  => "TYPE",
            IdentityAttr::Uuid  => "UUID",
            IdentityAttr::Label => "LABEL",
        }
    }

    fn field(self, rec: &mut FilesystemRecord) -> &mut Option<String> {
        match self {
            IdentityAttr::Type  => &mut rec.fs_type,
            IdentityAttr::Uuid  => &mut rec.uuid,
            IdentityAttr::Label => &mut rec.label,
        }
    }
}

/// Which tool supplies UUID / label / type on this host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentitySource {
    /// lsblk at the given path; names are bare and need resolving
    Lsblk(PathBuf),
    /// blkid from PATH; prints full device paths
    Blkid,
}

impl IdentitySource {
    pub fn detect(runner: &dyn CommandRunner, lsblk_path: &Path) -> Self {
        if runner.file_exists(lsblk_path) {
            IdentitySource::Lsblk(lsblk_path.to_path_buf())
        } else {
            IdentitySource::Blkid
        }
    }
}

/// Run one invocation per attribute and merge the results into `set`.
///
/// A failing invocation only loses its own attribute. Errors out only when
/// all three failed. Returns the number of values applied.
pub fn collect_identity(
    runner: &dyn CommandRunner,
    source: &IdentitySource,
    set: &mut FilesystemSet,
    timeout: Duration,
) -> Result<usize> {
    info!(?source, "reading device identity");
    let mut applied = 0;
    let mut failed = 0;
    let mut last_err: Option<CollectError> = None;

    for attr in IdentityAttr::ALL {
        let res = match source {
            IdentitySource::Lsblk(path) => collect_lsblk(runner, path, attr, set, timeout),
            IdentitySource::Blkid       => collect_blkid(runner, attr, set, timeout),
        };
        match res {
            Ok(n) => {
                debug!(attr = attr.blkid_tag(), values = n, "identity attribute merged");
                applied += n;
            }
            Err(e) => {
                warn!(attr = attr.blkid_tag(), "identity source failed: {}", e);
                failed += 1;
                last_err = Some(e);
            }
        }
    }

    match last_err {
        Some(e) if failed == IdentityAttr::ALL.len() => Err(e),
        _ => Ok(applied),
    }
}

fn collect_lsblk(
    runner: &dyn CommandRunner,
    lsblk: &Path,
    attr: IdentityAttr,
    set: &mut FilesystemSet,
    timeout: Duration,
) -> Result<usize> {
    let cmd = lsblk_cmd(lsblk, attr);
    let mut applied = 0;
    let status = runner.stream_execute(&cmd, timeout, &mut |line: &str| {
        let Some((name, value)) = parse_lsblk_line(line) else { return };
        match resolve_device(runner, &name) {
            Some(device) => {
                *attr.field(set.entry(&device)) = Some(value);
                applied += 1;
            }
            None => debug!(name = %name, "lsblk: no device node, dropping line"),
        }
    })?;
    if status != Some(0) {
        debug!(command = %cmd, ?status, "non-zero exit");
    }
    Ok(applied)
}

fn collect_blkid(
    runner: &dyn CommandRunner,
    attr: IdentityAttr,
    set: &mut FilesystemSet,
    timeout: Duration,
) -> Result<usize> {
    let cmd = blkid_cmd(attr);
    let mut applied = 0;
    // blkid exits 2 when nothing matched the tag; lines already seen still count.
    let status = runner.stream_execute(&cmd, timeout, &mut |line: &str| {
        match parse_blkid_line(line, attr) {
            Some((device, value)) => {
                *attr.field(set.entry(device)) = Some(value.to_string());
                applied += 1;
            }
            None => {
                if !line.trim().is_empty() { debug!(line, "blkid: skipping unrecognised line"); }
            }
        }
    })?;
    if status != Some(0) {
        debug!(command = %cmd, ?status, "non-zero exit");
    }
    Ok(applied)
}
