use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stands in for messages whose source content is empty (e.g. embed-only).
pub const EMPTY_CONTENT_PLACEHOLDER: &str = "[empty]";

/// A single message post accepts at most this many embeds.
pub const MAX_FORWARDED_EMBEDS: usize = 10;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MessageAuthor {
    pub username: String,
    #[serde(default)]
    pub discriminator: String,
}

/// A message as listed by the API, newest first.
///
/// Embeds and interactive components are forwarded verbatim, so they stay
/// opaque JSON values here.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub author: MessageAuthor,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub embeds: Vec<Value>,
    #[serde(default)]
    pub components: Vec<Value>,
}

/// Message creation payload.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateMessage {
    pub content: String,
    pub embeds: Vec<Value>,
    pub components: Vec<Value>,
}

impl CreateMessage {
    /// Reconstructs a source message as attributed text posted by the
    /// cloning account, carrying over at most [`MAX_FORWARDED_EMBEDS`] embeds
    /// and the original components.
    pub fn from_source(message: &Message) -> Self {
        let content = if message.content.is_empty() {
            EMPTY_CONTENT_PLACEHOLDER
        } else {
            message.content.as_str()
        };

        Self {
            content: format!(
                "**{}#{}**: {}",
                message.author.username, message.author.discriminator, content
            ),
            embeds: message
                .embeds
                .iter()
                .take(MAX_FORWARDED_EMBEDS)
                .cloned()
                .collect(),
            components: message.components.clone(),
        }
    }
}
