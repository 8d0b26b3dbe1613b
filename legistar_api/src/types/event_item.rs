use serde::{Deserialize, Serialize};

/// One agenda line item from `/Events/{id}/EventItems`.
///
/// `event_item_title` is nullable on the wire; the `"page break"` sentinel
/// the pipeline filters on lives in this field. A null or absent agenda
/// sequence means the item sorts after every numbered item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventItem {
    pub event_item_id: i64,

    pub event_item_title: Option<String>,

    pub event_item_agenda_number: Option<String>,

    pub event_item_agenda_sequence: Option<i64>,

    /// References a Matter when the item carries legislation. Drives whether
    /// votes and histories are fetched at all.
    pub event_item_matter_id: Option<i64>,

    /// Embedded when the item list is requested with `Attachments=1`.
    #[serde(default)]
    pub event_item_matter_attachments: Vec<MatterAttachment>,
}

/// A file attached to an item's underlying Matter. Arrives embedded in the
/// item list; never fetched separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatterAttachment {
    pub matter_attachment_name: Option<String>,

    pub matter_attachment_hyperlink: Option<String>,

    pub matter_attachment_file_name: Option<String>,
}
