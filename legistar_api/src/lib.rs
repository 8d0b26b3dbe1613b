mod client;
mod errors;
mod retry;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::retry::{fetch_with_retry, RetryPolicy};
