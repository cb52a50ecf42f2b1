//! Export error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while producing a result card. All of them are recoverable:
/// callers fall back to the plain-text summary.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    #[error("no export formats selected")]
    NoFormats,

    #[error("failed to write {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("image capture timed out after {0}ms")]
    Timeout(u64),
}
