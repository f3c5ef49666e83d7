use serde::{Deserialize, Serialize};

/// A custom emoji as listed by the API.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Emoji {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub animated: bool,
    /// Role ids allowed to use the emoji; empty means everyone.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Emoji creation payload. `image` is a base64 data URI.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateEmoji {
    pub name: String,
    pub image: String,
    pub roles: Vec<String>,
}
