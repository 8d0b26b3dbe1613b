//! Per-item enrichment: votes and legislative history.

use legistar_api::types::EventItem;
use legistar_api::Client;

use crate::model::{Attachment, EnrichedItem, HistoryEntry, Vote};

/// Builds the enriched record for one agenda item.
///
/// Attachments arrive embedded in the item list and are projected straight
/// through. Votes and history are fetched only when the item references a
/// matter; the two fetches run concurrently and fail independently, so a
/// votes failure cannot suppress history retrieval or vice versa. A fetch
/// that degrades to Absent leaves the corresponding list empty.
pub async fn enrich_item(client: &Client, item: &EventItem) -> EnrichedItem {
    let (votes, histories) = match item.event_item_matter_id {
        Some(matter_id) => tokio::join!(
            client.event_item_votes(item.event_item_id),
            client.matter_histories(matter_id),
        ),
        None => (None, None),
    };

    EnrichedItem {
        event_item_id: item.event_item_id,
        event_item_title: item.event_item_title.clone(),
        event_item_agenda_number: item.event_item_agenda_number.clone(),
        event_item_agenda_sequence: item.event_item_agenda_sequence,
        event_item_matter_id: item.event_item_matter_id,
        attachments: item
            .event_item_matter_attachments
            .iter()
            .cloned()
            .map(Attachment::from)
            .collect(),
        votes: votes
            .unwrap_or_default()
            .into_iter()
            .map(Vote::from)
            .collect(),
        matter_history: histories
            .unwrap_or_default()
            .into_iter()
            .map(HistoryEntry::from)
            .collect(),
    }
}
