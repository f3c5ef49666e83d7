use serde_json::json;

use crate::model::channel::ChannelType;

/// Tests the type-tag classification helpers.
///
/// Expected: DM-like types flagged direct, thread containers flagged for
/// auto-archive
#[test]
fn classifies_type_tags() {
    assert!(ChannelType::CATEGORY.is_category());
    assert!(!ChannelType::TEXT.is_category());

    assert!(ChannelType::DM.is_direct());
    assert!(ChannelType::GROUP_DM.is_direct());
    assert!(!ChannelType::TEXT.is_direct());

    assert!(ChannelType::VOICE.is_voice());
    assert!(ChannelType::TEXT.is_text());

    assert!(ChannelType::ANNOUNCEMENT.has_auto_archive());
    assert!(ChannelType::FORUM.has_auto_archive());
    assert!(ChannelType::MEDIA.has_auto_archive());
    assert!(!ChannelType::VOICE.has_auto_archive());
}

/// Tests that the type tag round-trips as a bare number on the wire.
///
/// Expected: serializes to the integer tag, deserializes from it
#[test]
fn type_tag_is_transparent_on_the_wire() {
    assert_eq!(serde_json::to_value(ChannelType::VOICE).unwrap(), json!(2));

    let parsed: ChannelType = serde_json::from_value(json!(13)).unwrap();
    assert_eq!(parsed, ChannelType::STAGE);
}
