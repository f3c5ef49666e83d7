//! Remote API access: the `GuildApi` seam, its reqwest implementation, and
//! the retry layer every pipeline call goes through.

pub mod rest;
pub mod retry;


use async_trait::async_trait;

use crate::error::api::ApiError;
use crate::model::channel::{Channel, CreateChannel};
use crate::model::emoji::{CreateEmoji, Emoji};
use crate::model::message::{CreateMessage, Message};
use crate::model::role::{CreateRole, Role};
use crate::model::Created;

/// The REST surface the replication pipeline consumes.
///
/// Implemented by [`rest::RestClient`] against the live API; tests substitute
/// an in-memory fake.
#[async_trait]
pub trait GuildApi: Send + Sync {
    async fn list_roles(&self, guild_id: &str) -> Result<Vec<Role>, ApiError>;
    async fn list_channels(&self, guild_id: &str) -> Result<Vec<Channel>, ApiError>;
    async fn list_emojis(&self, guild_id: &str) -> Result<Vec<Emoji>, ApiError>;

    async fn create_role(&self, guild_id: &str, role: &CreateRole) -> Result<Created, ApiError>;
    async fn create_channel(
        &self,
        guild_id: &str,
        channel: &CreateChannel,
    ) -> Result<Created, ApiError>;
    async fn create_emoji(&self, guild_id: &str, emoji: &CreateEmoji)
        -> Result<Created, ApiError>;

    async fn delete_channel(&self, channel_id: &str) -> Result<(), ApiError>;
    async fn delete_role(&self, guild_id: &str, role_id: &str) -> Result<(), ApiError>;
    async fn delete_emoji(&self, guild_id: &str, emoji_id: &str) -> Result<(), ApiError>;

    async fn list_messages(&self, channel_id: &str, limit: u8) -> Result<Vec<Message>, ApiError>;
    async fn create_message(
        &self,
        channel_id: &str,
        message: &CreateMessage,
    ) -> Result<(), ApiError>;

    /// Raw image bytes for an emoji from the CDN (`gif` when animated,
    /// `png` otherwise).
    async fn fetch_emoji_asset(&self, emoji_id: &str, animated: bool) -> Result<Vec<u8>, ApiError>;
}
