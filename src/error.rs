use std::time::Duration;
use thiserror::Error;

/// Why a single data source contributed nothing (or stopped contributing).
///
/// None of these abort an inventory run; the aggregator logs them and moves
/// on to the next source.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` timed out after {}s", .timeout.as_secs())]
    Timeout { command: String, timeout: Duration },

    #[error("`{command}` exited with status {status}: {stderr}")]
    ExitStatus { command: String, status: i32, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path} did not reach end of file within {reads} reads")]
    Unterminated { path: String, reads: usize },
}

pub type Result<T> = std::result::Result<T, CollectError>;
