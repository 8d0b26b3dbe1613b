//! Error types for a single fetch attempt.

/// Failure of one HTTP GET attempt. The retry layer treats every variant the
/// same way: log it, wait out the delay, try again.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be completed (connection failure, timeout,
    /// unreadable body, or a body that did not parse as the expected JSON).
    #[error("Request failed")]
    RequestFailed,
    /// The API answered with a non-success status, with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}
