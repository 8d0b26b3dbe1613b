//! Bounded-retry policy for Legistar fetches.
//!
//! The Legistar Web API is flaky in bursts, so every logical GET is wrapped in
//! a small fixed-backoff retry loop. Exhausting the budget is not an error:
//! the loop degrades to `None` and callers substitute whatever "no data"
//! means for the field they were filling in.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

use crate::Error;

/// Retry budget for one logical fetch.
///
/// Defaults match the documented policy: 3 attempts, a fixed 1-second pause
/// between them, and a 30-second timeout on each attempt. Override per client
/// with [`crate::Client::with_policy`] or per call with the `_with_policy`
/// endpoint variants.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Fixed pause between consecutive attempts. Not exponential; the budget
    /// is too small for backoff growth to matter.
    pub delay: Duration,
    /// Per-attempt timeout.
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Runs `operation` up to `policy.max_attempts` times, sleeping `policy.delay`
/// between attempts. Returns the first success, or `None` once the budget is
/// spent. Failures are logged and otherwise swallowed.
pub async fn fetch_with_retry<T, F, Fut>(policy: &RetryPolicy, url: &str, operation: F) -> Option<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    for attempt in 1..=policy.max_attempts {
        match operation().await {
            Ok(value) => return Some(value),
            Err(Error::HttpStatus { status, body }) => {
                tracing::warn!(url, attempt, status, body = %body, "request failed");
            }
            Err(e) => {
                tracing::warn!(url, attempt, error = %e, "request failed");
            }
        }
        if attempt < policy.max_attempts {
            sleep(policy.delay).await;
        }
    }
    tracing::warn!(
        url,
        attempts = policy.max_attempts,
        "giving up after exhausting retry budget"
    );
    None
}
