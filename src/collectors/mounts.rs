use crate::collectors::runner::{Cmd, CommandRunner};
use crate::error::{CollectError, Result};
use crate::models::filesystem::FilesystemSet;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Bytes requested per read of the mount table.
const READ_CHUNK: usize = 4096;
/// 4096 * 4096 = 16 MiB, far beyond any real mount table.
const MAX_READS: usize = 4096;

/// Where mount point, type and options come from on this host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountSource {
    /// The kernel's table, e.g. /proc/mounts
    ProcMounts(PathBuf),
    /// Fallback: parse `mount` output
    MountCommand,
}

impl MountSource {
    pub fn detect(runner: &dyn CommandRunner, proc_mounts: &Path) -> Self {
        if runner.file_exists(proc_mounts) {
            MountSource::ProcMounts(proc_mounts.to_path_buf())
        } else {
            MountSource::MountCommand
        }
    }
}

/// Merge `mount`, `fs_type` and `mount_options` into `set`, creating records
/// for pseudo-filesystems that df did not report. Returns records touched.
pub fn collect_mounts(
    runner: &dyn CommandRunner,
    source: &MountSource,
    set: &mut FilesystemSet,
    timeout: Duration,
) -> Result<usize> {
    info!(?source, "reading mount table");
    match source {
        MountSource::ProcMounts(path) => {
            let text = read_to_end_bounded(runner, path)?;
            Ok(parse_proc_mounts(&text, set))
        }
        MountSource::MountCommand => {
            let cmd = Cmd::new("mount");
            let out = runner.execute(&cmd, timeout)?;
            if !out.success() {
                return Err(CollectError::ExitStatus {
                    command: cmd.to_string(),
                    status:  out.status.unwrap_or(-1),
                    stderr:  out.stderr.join("\n"),
                });
            }
            Ok(parse_mount_output(&out.stdout, set))
        }
    }
}

/// Read `path` in fixed-size chunks until a zero-byte read (end of file).
/// Gives up after `MAX_READS` reads.
fn read_to_end_bounded(runner: &dyn CommandRunner, path: &Path) -> Result<String> {
    let mut file = runner.open_read(path)?;
    let mut buf = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];

    for _ in 0..MAX_READS {
        match file.read(&mut chunk) {
            Ok(0) => return Ok(String::from_utf8_lossy(&buf).into_owned()),
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
            Err(e) if matches!(e.kind(), ErrorKind::Interrupted | ErrorKind::WouldBlock) => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Err(CollectError::Unterminated { path: path.display().to_string(), reads: MAX_READS })
}

/// `/proc/mounts`: `device mount fs_type options dump pass`
pub fn parse_proc_mounts(text: &str, set: &mut FilesystemSet) -> usize {
    let mut touched = 0;
    for line in text.lines() {
        let f: Vec<&str> = line.split_whitespace().collect();
        if f.len() < 4 {
            if !line.trim().is_empty() { debug!(line, "mounts: skipping short line"); }
            continue;
        }
        let device = unescape_octal(f[0]);
        apply(set, &device, &unescape_octal(f[1]), f[2], f[3]);
        touched += 1;
    }
    touched
}

/// `mount` output: `<device> on <mount> type <fs_type> (<options>)`
pub fn parse_mount_output<S: AsRef<str>>(lines: &[S], set: &mut FilesystemSet) -> usize {
    let mut touched = 0;
    for line in lines.iter().map(AsRef::as_ref) {
        match parse_mount_line(line) {
            Some((device, mount, fs_type, options)) => {
                apply(set, device, mount, fs_type, options);
                touched += 1;
            }
            None => {
                if !line.trim().is_empty() { debug!(line, "mount: skipping unrecognised line"); }
            }
        }
    }
    touched
}

fn parse_mount_line(line: &str) -> Option<(&str, &str, &str, &str)> {
    let (device, rest)  = line.split_once(" on ")?;
    let (mount, rest)   = rest.split_once(" type ")?;
    let (fs_type, rest) = rest.split_once(" (")?;
    let options = rest.strip_suffix(')')?;

    let parts = [device, mount, fs_type, options];
    if parts.iter().any(|p| p.is_empty() || p.contains(char::is_whitespace)) {
        return None;
    }
    Some((device, mount, fs_type, options))
}

fn apply(set: &mut FilesystemSet, device: &str, mount: &str, fs_type: &str, options: &str) {
    let rec = set.entry(device);
    rec.mount         = Some(mount.to_string());
    rec.fs_type       = Some(fs_type.to_string());
    rec.mount_options = Some(options.split(',').map(str::to_string).collect());
}

/// The kernel escapes space, tab, newline and backslash as `\ooo`.
fn unescape_octal(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_string();
    }
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            if let Some(code) = bytes.get(i + 1..i + 4).and_then(octal_byte) {
                out.push(code);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn octal_byte(digits: &[u8]) -> Option<u8> {
    if !digits.iter().all(|b| (b'0'..=b'7').contains(b)) {
        return None;
    }
    let v = digits.iter().fold(0u32, |acc, b| acc * 8 + u32::from(b - b'0'));
    u8::try_from(v).ok()
}
