//! Crate error types
//!
//! The diagnostics engine itself never fails: malformed filter input
//! and missing latency data degrade to smaller output. Errors exist
//! only at the snapshot-loading edge used by callers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Snapshot file could not be read
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file is not valid JSON for the expected schema
    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
