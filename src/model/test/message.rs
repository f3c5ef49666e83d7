use serde_json::json;

use crate::model::message::{CreateMessage, Message, MessageAuthor};

fn source(content: &str, embed_count: usize) -> Message {
    Message {
        id: "m1".to_string(),
        author: MessageAuthor {
            username: "user".to_string(),
            discriminator: "1234".to_string(),
        },
        content: content.to_string(),
        embeds: (0..embed_count).map(|i| json!({ "title": i })).collect(),
        components: vec![],
    }
}

/// Tests the attributed-text reconstruction.
///
/// Expected: content prefixed with the author's display identity
#[test]
fn prefixes_author_identity() {
    let payload = CreateMessage::from_source(&source("hello there", 0));
    assert_eq!(payload.content, "**user#1234**: hello there");
}

/// Tests the placeholder for messages without text content.
///
/// Expected: "[empty]" marker in place of the missing content
#[test]
fn substitutes_placeholder_for_empty_content() {
    let payload = CreateMessage::from_source(&source("", 1));
    assert_eq!(payload.content, "**user#1234**: [empty]");
}

/// Tests the embed cap on reposted messages.
///
/// Expected: at most 10 embeds, the first ten in source order
#[test]
fn truncates_embeds_to_ten() {
    let payload = CreateMessage::from_source(&source("x", 14));
    assert_eq!(payload.embeds.len(), 10);
    assert_eq!(payload.embeds[0], json!({ "title": 0 }));
    assert_eq!(payload.embeds[9], json!({ "title": 9 }));
}

/// Tests that interactive components are forwarded verbatim.
///
/// Expected: components unchanged
#[test]
fn forwards_components_unchanged() {
    let mut message = source("x", 0);
    message.components = vec![json!({ "type": 1, "components": [] })];

    let payload = CreateMessage::from_source(&message);
    assert_eq!(payload.components, message.components);
}
