use crate::collectors::runner::{Cmd, CommandRunner};
use crate::error::Result;
use crate::models::filesystem::FilesystemSet;
use std::time::Duration;
use tracing::{debug, warn};

/// Run `df -P` and merge size/usage columns into `set`.
///
/// df exits non-zero when a single mount is unreadable (stale NFS, permission
/// denied) but still prints every other row, so the output is parsed
/// regardless of exit status. Returns the number of records touched.
pub fn collect_usage(
    runner: &dyn CommandRunner,
    set: &mut FilesystemSet,
    timeout: Duration,
) -> Result<usize> {
    let cmd = Cmd::new("df").args(["-P"]);
    let out = runner.execute(&cmd, timeout)?;
    if !out.success() {
        warn!(command = %cmd, status = ?out.status, "non-zero exit, using partial output");
    }
    Ok(parse_df(&out.stdout, set))
}

/// POSIX `df -P` rows after the header:
/// `Filesystem 1024-blocks Used Available Capacity Mounted-on`
pub fn parse_df<S: AsRef<str>>(lines: &[S], set: &mut FilesystemSet) -> usize {
    let mut touched = 0;
    for line in lines.iter().skip(1).map(AsRef::as_ref) {
        if line.trim().is_empty() { continue; }

        let f: Vec<&str> = line.split_whitespace().collect();
        // Devices or mount points containing spaces shift the columns; not supported.
        if f.len() != 6 {
            debug!(line, "df: skipping row without six columns");
            continue;
        }

        let rec = set.entry(f[0]);
        rec.kb_size      = Some(f[1].to_string());
        rec.kb_used      = Some(f[2].to_string());
        rec.kb_available = Some(f[3].to_string());
        rec.percent_used = Some(f[4].to_string());
        rec.mount        = Some(f[5].to_string());
        touched += 1;
    }
    touched
}
