//! Process and file access used by every collector.
//!
//! Collectors never touch `std::process` or `std::fs` directly; they go
//! through a [`CommandRunner`] so that tests can swap in canned tool output.

use crate::error::{CollectError, Result};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufRead, BufReader, Read};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// A program plus its arguments. Rendered as a plain command line
/// ("lsblk -r -o NAME,UUID -n") for logs and for keying test fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cmd {
    pub program: String,
    pub args:    Vec<String>,
}

impl Cmd {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was ended by a signal.
    pub status: Option<i32>,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

pub trait CommandRunner {
    /// Run `cmd` to completion, collecting its output. Fails on spawn errors
    /// and on timeout; a non-zero exit is reported in the output, not as an
    /// error, so callers decide whether it matters.
    fn execute(&self, cmd: &Cmd, timeout: Duration) -> Result<CommandOutput>;

    /// Run `cmd` and hand each stdout line to `on_line` as it arrives.
    /// Returns the exit code once the process has finished.
    fn stream_execute(
        &self,
        cmd: &Cmd,
        timeout: Duration,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<Option<i32>>;

    fn file_exists(&self, path: &Path) -> bool;

    /// Open a file for incremental reads. A read returning zero bytes marks
    /// end of file.
    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read>>;
}

/// The real host: spawns processes and reads the live filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn execute(&self, cmd: &Cmd, timeout: Duration) -> Result<CommandOutput> {
        let mut stdout = Vec::new();
        let (status, stderr) = run_child(cmd, timeout, &mut |line: &str| stdout.push(line.to_string()))?;
        Ok(CommandOutput { status, stdout, stderr })
    }

    fn stream_execute(
        &self,
        cmd: &Cmd,
        timeout: Duration,
        on_line: &mut dyn FnMut(&str),
    ) -> Result<Option<i32>> {
        let (status, stderr) = run_child(cmd, timeout, on_line)?;
        for line in stderr.iter().filter(|l| !l.trim().is_empty()) {
            debug!(command = %cmd, "stderr: {}", line);
        }
        Ok(status)
    }

    fn file_exists(&self, path: &Path) -> bool {
        nix::sys::stat::stat(path).is_ok()
    }

    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)?;
        Ok(Box::new(file))
    }
}

fn spawn(cmd: &Cmd) -> Result<Child> {
    Command::new(&cmd.program)
        .args(&cmd.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CollectError::NotFound(cmd.program.clone()),
            _ => CollectError::Spawn { command: cmd.to_string(), source: e },
        })
}

/// Spawn `cmd`, forward stdout lines to `on_line` on the calling thread, and
/// enforce `timeout` over the whole run, until both pipes are closed and
/// the process has exited. Returns the exit code and stderr.
fn run_child(
    cmd: &Cmd,
    timeout: Duration,
    on_line: &mut dyn FnMut(&str),
) -> Result<(Option<i32>, Vec<String>)> {
    debug!(command = %cmd, "running");
    let deadline = Instant::now() + timeout;
    let mut child = spawn(cmd)?;

    let out_rx = forward_lines(child.stdout.take());
    let err_rx = forward_lines(child.stderr.take());
    let timed_out = |child: &mut Child| {
        kill(child);
        CollectError::Timeout { command: cmd.to_string(), timeout }
    };

    if !drain(&out_rx, deadline, on_line) {
        return Err(timed_out(&mut child));
    }

    // stdout is closed; the process should be exiting.
    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None if Instant::now() >= deadline => return Err(timed_out(&mut child)),
            None => thread::sleep(Duration::from_millis(5)),
        }
    };

    // A leftover descendant can still hold stderr open.
    let mut stderr = Vec::new();
    if !drain(&err_rx, deadline, &mut |line: &str| stderr.push(line.to_string())) {
        return Err(timed_out(&mut child));
    }
    Ok((status.code(), stderr))
}

fn kill(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Read `pipe` on its own thread and send each line over the returned channel.
/// The channel disconnects at end of stream.
fn forward_lines<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        if let Some(pipe) = pipe {
            for_each_line(pipe, |line| tx.send(line).is_ok());
        }
    });
    rx
}

/// Hand lines from `rx` to `on_line` until the sender hangs up. Returns false
/// if `deadline` passed first.
fn drain(rx: &Receiver<String>, deadline: Instant, on_line: &mut dyn FnMut(&str)) -> bool {
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(line) => on_line(&line),
            Err(RecvTimeoutError::Disconnected) => return true,
            Err(RecvTimeoutError::Timeout) => return false,
        }
    }
}

/// Feed a byte stream to `f` line by line, without failing on invalid UTF-8.
/// Stops early when `f` returns false.
fn for_each_line<R: Read>(r: R, mut f: impl FnMut(String) -> bool) {
    let mut reader = BufReader::new(r);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                if !f(line.trim_end_matches(['\n', '\r']).to_string()) { break; }
            }
        }
    }
}
