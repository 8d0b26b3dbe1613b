//! Output model: one enriched record per content-bearing agenda item.
//!
//! Field names serialize exactly as the consolidated document expects
//! (`EventItemId`, `Attachments`, `MatterHistory`, ...). Missing source
//! fields stay `None` and serialize as `null`, never as empty strings.

use serde::{Deserialize, Serialize};

use legistar_api::types::{MatterAttachment, MatterHistory, Vote as ApiVote};

/// An agenda item with its attachments, voting record, and legislative
/// history merged in. Built once by enrichment and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnrichedItem {
    pub event_item_id: i64,

    pub event_item_title: Option<String>,

    pub event_item_agenda_number: Option<String>,

    /// Ordering key for the final document. `None` sorts after every
    /// numbered item.
    pub event_item_agenda_sequence: Option<i64>,

    pub event_item_matter_id: Option<i64>,

    pub attachments: Vec<Attachment>,

    pub votes: Vec<Vote>,

    pub matter_history: Vec<HistoryEntry>,
}

/// Attachment metadata, carried over verbatim from the item list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attachment {
    pub matter_attachment_name: Option<String>,

    pub matter_attachment_hyperlink: Option<String>,

    pub matter_attachment_file_name: Option<String>,
}

impl From<MatterAttachment> for Attachment {
    fn from(a: MatterAttachment) -> Self {
        Self {
            matter_attachment_name: a.matter_attachment_name,
            matter_attachment_hyperlink: a.matter_attachment_hyperlink,
            matter_attachment_file_name: a.matter_attachment_file_name,
        }
    }
}

/// One recorded vote on an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vote {
    pub vote_person_name: Option<String>,

    pub vote_value_name: Option<String>,
}

impl From<ApiVote> for Vote {
    fn from(v: ApiVote) -> Self {
        Self {
            vote_person_name: v.vote_person_name,
            vote_value_name: v.vote_value_name,
        }
    }
}

/// One action from the referenced matter's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoryEntry {
    pub matter_history_action_name: Option<String>,

    pub matter_history_action_text: Option<String>,

    pub matter_history_mover_name: Option<String>,

    pub matter_history_passed_flag_name: Option<String>,

    pub matter_history_seconder_name: Option<String>,
}

impl From<MatterHistory> for HistoryEntry {
    fn from(h: MatterHistory) -> Self {
        Self {
            matter_history_action_name: h.matter_history_action_name,
            matter_history_action_text: h.matter_history_action_text,
            matter_history_mover_name: h.matter_history_mover_name,
            matter_history_passed_flag_name: h.matter_history_passed_flag_name,
            matter_history_seconder_name: h.matter_history_seconder_name,
        }
    }
}
