//! Resolves a calendar date to an event identifier.

use chrono::NaiveDate;

use legistar_api::Client;

/// Looks up the event scheduled on `date` and returns its id.
///
/// When several events share the date, the first in API response order wins;
/// no secondary disambiguation is attempted. Returns `None` when the lookup
/// comes back empty or the fetch degrades to Absent.
pub async fn resolve_event_id(client: &Client, date: NaiveDate) -> Option<i64> {
    let events = client.events_on(date).await.unwrap_or_default();
    match events.first() {
        Some(event) => {
            if events.len() > 1 {
                tracing::debug!(
                    %date,
                    count = events.len(),
                    "multiple events on date, taking the first"
                );
            }
            tracing::info!(%date, event_id = event.event_id, "resolved event");
            Some(event.event_id)
        }
        None => {
            tracing::warn!(%date, "no events found for date");
            None
        }
    }
}
