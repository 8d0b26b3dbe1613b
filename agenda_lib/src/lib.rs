//! Pipeline layer for the Legistar agenda extractor.
//!
//! Wraps the `legistar_api` crate with event resolution by date, concurrent
//! per-item enrichment (votes and legislative history), deterministic agenda
//! ordering, and the JSON output writer.

pub mod enrich;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod resolver;
pub mod writer;

pub use legistar_api;
pub use legistar_api::types;
pub use legistar_api::{Client, RetryPolicy};

pub use error::AgendaError;
pub use model::{Attachment, EnrichedItem, HistoryEntry, Vote};
pub use pipeline::{EventSelector, DEFAULT_CONCURRENCY};
pub use writer::DEFAULT_OUTPUT_FILE;
