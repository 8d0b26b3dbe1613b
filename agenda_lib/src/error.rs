//! Error types for the pipeline layer.
//!
//! Fetch failures never surface here; they degrade to `None` inside
//! `legistar_api` and become empty fields. What remains fatal is producing
//! the output artifact itself: an unserializable value or a failed write
//! means a contract violation or a broken environment, and propagates.

/// Fatal errors from writing the extracted agenda.
#[derive(thiserror::Error, Debug)]
pub enum AgendaError {
    /// Writing the output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
