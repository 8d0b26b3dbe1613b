use legistar_api::types::{Event, EventItem, MatterHistory, Vote};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_events() {
    let json = load_fixture("events.json");
    let events: Vec<Event> = serde_json::from_str(&json).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_id, 1192);
    assert_eq!(
        events[0].event_date.as_deref(),
        Some("2024-06-25T00:00:00")
    );
    assert_eq!(
        events[1].event_body_name.as_deref(),
        Some("Budget Committee")
    );
}

#[test]
fn deserialize_event_items() {
    let json = load_fixture("event_items.json");
    let items: Vec<EventItem> = serde_json::from_str(&json).unwrap();
    assert_eq!(items.len(), 3);

    let first = &items[0];
    assert_eq!(first.event_item_id, 50101);
    assert_eq!(first.event_item_agenda_number.as_deref(), Some("1."));
    assert_eq!(first.event_item_agenda_sequence, Some(10));
    assert_eq!(first.event_item_matter_id, Some(70001));
    assert_eq!(first.event_item_matter_attachments.len(), 1);
    assert_eq!(
        first.event_item_matter_attachments[0]
            .matter_attachment_file_name
            .as_deref(),
        Some("draft_minutes.pdf")
    );

    // Nulls stay None, they are never defaulted to empty strings.
    let page_break = &items[1];
    assert_eq!(page_break.event_item_title.as_deref(), Some("page break"));
    assert!(page_break.event_item_agenda_number.is_none());
    assert!(page_break.event_item_matter_id.is_none());
}

#[test]
fn missing_attachment_list_defaults_to_empty() {
    // The third fixture item omits EventItemMatterAttachments entirely.
    let json = load_fixture("event_items.json");
    let items: Vec<EventItem> = serde_json::from_str(&json).unwrap();
    assert!(items[2].event_item_matter_attachments.is_empty());
    assert!(items[2].event_item_agenda_sequence.is_none());
}

#[test]
fn deserialize_votes() {
    let json = load_fixture("votes.json");
    let votes: Vec<Vote> = serde_json::from_str(&json).unwrap();
    assert_eq!(votes.len(), 2);
    assert_eq!(
        votes[0].vote_person_name.as_deref(),
        Some("Commissioner R. Ellis")
    );
    assert_eq!(votes[1].vote_value_name.as_deref(), Some("Nay"));
}

#[test]
fn deserialize_histories_with_null_fields() {
    let json = load_fixture("histories.json");
    let histories: Vec<MatterHistory> = serde_json::from_str(&json).unwrap();
    assert_eq!(histories.len(), 2);
    assert_eq!(
        histories[0].matter_history_action_name.as_deref(),
        Some("Approved")
    );
    assert_eq!(
        histories[0].matter_history_passed_flag_name.as_deref(),
        Some("Pass")
    );

    let sparse = &histories[1];
    assert_eq!(sparse.matter_history_action_name.as_deref(), Some("Referred"));
    assert!(sparse.matter_history_action_text.is_none());
    assert!(sparse.matter_history_mover_name.is_none());
    assert!(sparse.matter_history_seconder_name.is_none());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"[{"EventItemId": not valid}]"#;
    let result = serde_json::from_str::<Vec<EventItem>>(bad_json);
    assert!(result.is_err());
}
