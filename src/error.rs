//! Error taxonomy for the engine.
//!
//! Every variant is a configuration or contract violation: nothing here is
//! transient, nothing is retried. The I/O variants only occur on the
//! config-loading and history-export edges, never inside the evolution loop.

use thiserror::Error;

/// Errors produced by the engine and its configuration/reporting edges.
#[derive(Debug, Error)]
pub enum EvolveError {
    /// Malformed configuration, rejected before any member is constructed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A population must contain at least one member.
    #[error("population must contain at least one member")]
    EmptyPopulation,

    /// A fitness query was made before `evaluate()` (or after a commit
    /// invalidated the snapshot).
    #[error("fitness snapshot is stale: call evaluate() before querying fitness")]
    StaleSnapshot,

    /// The comparison target's length does not match the chromosome length.
    #[error("target length {expected} does not match chromosome length {actual}")]
    InvalidTargetLength { expected: usize, actual: usize },

    /// Failed to read a configuration file or write a history export.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or serialize JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvolveError>;
