use serde::{Deserialize, Serialize};

/// One scheduled meeting, as returned by the `/Events` endpoint.
///
/// Only the fields the pipeline consumes are modeled; the API sends many
/// more, which serde ignores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    pub event_id: i64,

    pub event_date: Option<String>,

    pub event_body_name: Option<String>,
}
