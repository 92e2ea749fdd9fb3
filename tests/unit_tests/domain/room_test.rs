use meet::domain::{Room, slugify};
use serde_json::json;

#[test]
fn given_mixed_case_name_when_slugifying_then_lowercases_and_dashes() {
    assert_eq!(slugify("Weekly Sync  #3").as_deref(), Some("weekly-sync-3"));
}

#[test]
fn given_leading_and_trailing_punctuation_when_slugifying_then_trimmed() {
    assert_eq!(slugify("  --Team Room!--  ").as_deref(), Some("team-room"));
}

#[test]
fn given_name_without_alphanumerics_when_slugifying_then_returns_none() {
    assert_eq!(slugify("!!! ???"), None);
}

#[test]
fn given_long_name_when_slugifying_then_truncated_without_trailing_dash() {
    let name = format!("{} b", "a".repeat(99));

    let slug = slugify(&name).unwrap();

    assert_eq!(slug.len(), 99);
    assert!(!slug.ends_with('-'));
}

#[test]
fn given_no_configuration_when_creating_room_then_defaults_to_empty_object() {
    let room = Room::new("Board Room".to_string(), false, None).unwrap();

    assert_eq!(room.slug, "board-room");
    assert_eq!(room.configuration, json!({}));
    assert!(!room.is_public);
}

#[test]
fn given_unusable_name_when_creating_room_then_returns_none() {
    assert!(Room::new("***".to_string(), true, Some(json!({"x": 1}))).is_none());
}
