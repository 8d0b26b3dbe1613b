//! Orchestration: resolve the event, fan out enrichment, order the result.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use legistar_api::types::EventItem;
use legistar_api::Client;

use crate::enrich::enrich_item;
use crate::model::EnrichedItem;
use crate::resolver::resolve_event_id;

/// Layout marker rows carry exactly this title and are never content.
const PAGE_BREAK_TITLE: &str = "page break";

/// Default cap on concurrently running enrichment tasks.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// How the target event is identified.
#[derive(Debug, Clone, Copy)]
pub enum EventSelector {
    /// Resolve the event id from a meeting date.
    Date(NaiveDate),
    /// The event id is already known.
    Known(i64),
}

/// Runs the full extraction for one event.
///
/// Returns the enriched items in agenda order, or `None` when there is
/// nothing to write: the date resolved to no event, or the item list could
/// not be fetched (or came back empty). Both are expected conditions,
/// reported through logs rather than errors.
///
/// Enrichment fans out one task per item, gated by a semaphore of
/// `max_concurrency` permits. Tasks fail soft individually and are never
/// cancelled; completion order is irrelevant because the final order comes
/// only from the sort.
pub async fn run(
    client: &Client,
    selector: EventSelector,
    max_concurrency: usize,
) -> Option<Vec<EnrichedItem>> {
    let event_id = match selector {
        EventSelector::Known(id) => id,
        EventSelector::Date(date) => resolve_event_id(client, date).await?,
    };

    let items = match client.event_items(event_id).await {
        Some(items) if !items.is_empty() => items,
        _ => {
            tracing::warn!(event_id, "failed to fetch event items");
            return None;
        }
    };
    tracing::info!(event_id, total = items.len(), "fetched event items");

    let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));
    let mut tasks = JoinSet::new();
    for (index, item) in items.into_iter().enumerate() {
        if is_page_break(&item) {
            continue;
        }
        let client = client.clone();
        let semaphore = Arc::clone(&semaphore);
        tasks.spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("semaphore is never closed");
            (index, enrich_item(&client, &item).await)
        });
    }

    let mut enriched = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(indexed) => enriched.push(indexed),
            // Enrichment itself is infallible; a join error means a task
            // panicked, which is a bug worth surfacing, not degrading.
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => {
                tracing::error!("enrichment task failed to join: {}", e);
            }
        }
    }

    Some(into_agenda_order(enriched))
}

fn is_page_break(item: &EventItem) -> bool {
    item.event_item_title.as_deref() == Some(PAGE_BREAK_TITLE)
}

/// Sorts indexed results into the output order: ascending agenda sequence,
/// items without a sequence last. Ties (including all null-sequence items)
/// keep their item-list position, carried in by `index`.
fn into_agenda_order(mut indexed: Vec<(usize, EnrichedItem)>) -> Vec<EnrichedItem> {
    indexed.sort_by_key(|(index, item)| {
        (item.event_item_agenda_sequence.unwrap_or(i64::MAX), *index)
    });
    indexed.into_iter().map(|(_, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_item(id: i64, sequence: Option<i64>) -> EnrichedItem {
        EnrichedItem {
            event_item_id: id,
            event_item_title: None,
            event_item_agenda_number: None,
            event_item_agenda_sequence: sequence,
            event_item_matter_id: None,
            attachments: vec![],
            votes: vec![],
            matter_history: vec![],
        }
    }

    #[test]
    fn orders_by_sequence_with_nulls_last() {
        let indexed = vec![
            (0, bare_item(1, Some(2))),
            (1, bare_item(2, None)),
            (2, bare_item(3, Some(1))),
        ];

        let ordered = into_agenda_order(indexed);
        let ids: Vec<i64> = ordered.iter().map(|i| i.event_item_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn null_sequences_keep_item_list_order() {
        let indexed = vec![
            (0, bare_item(10, None)),
            (1, bare_item(11, Some(3))),
            (2, bare_item(12, None)),
            (3, bare_item(13, None)),
        ];

        let ordered = into_agenda_order(indexed);
        let ids: Vec<i64> = ordered.iter().map(|i| i.event_item_id).collect();
        assert_eq!(ids, vec![11, 10, 12, 13]);
    }

    #[test]
    fn equal_sequences_keep_item_list_order() {
        let indexed = vec![
            (0, bare_item(20, Some(7))),
            (1, bare_item(21, Some(7))),
            (2, bare_item(22, Some(7))),
        ];

        let ordered = into_agenda_order(indexed);
        let ids: Vec<i64> = ordered.iter().map(|i| i.event_item_id).collect();
        assert_eq!(ids, vec![20, 21, 22]);
    }

    #[test]
    fn page_break_title_must_match_exactly() {
        let mut item = legistar_api::types::EventItem {
            event_item_id: 1,
            event_item_title: Some("page break".to_string()),
            event_item_agenda_number: None,
            event_item_agenda_sequence: None,
            event_item_matter_id: None,
            event_item_matter_attachments: vec![],
        };
        assert!(is_page_break(&item));

        item.event_item_title = Some("Page Break".to_string());
        assert!(!is_page_break(&item));

        item.event_item_title = None;
        assert!(!is_page_break(&item));
    }
}
