//! In-memory [`GuildApi`] double for pipeline tests.
//!
//! Lists entities from a prepared [`FakeState`], records everything the
//! pipeline creates, deletes, or posts, and can be told to fail specific
//! operations.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::GuildApi;
use crate::config::Config;
use crate::error::api::ApiError;
use crate::model::channel::{Channel, ChannelType, CreateChannel};
use crate::model::emoji::{CreateEmoji, Emoji};
use crate::model::message::{CreateMessage, Message, MessageAuthor};
use crate::model::role::{CreateRole, Role};
use crate::model::Created;

pub const SOURCE_GUILD: &str = "guild-src";
pub const DEST_GUILD: &str = "guild-dst";

pub fn test_config() -> Config {
    Config {
        token: "token".to_string(),
        source_guild_id: SOURCE_GUILD.to_string(),
        destination_guild_id: DEST_GUILD.to_string(),
        message_fetch_limit: 50,
        api_base_url: String::new(),
        cdn_base_url: String::new(),
    }
}

pub fn transient() -> ApiError {
    ApiError::Status {
        status: 500,
        route: "/fake".to_string(),
    }
}

pub fn role(id: &str, name: &str) -> Role {
    Role {
        id: id.to_string(),
        name: name.to_string(),
        color: 0,
        hoist: false,
        mentionable: false,
        permissions: "0".to_string(),
        managed: false,
        position: 0,
    }
}

pub fn channel(id: &str, name: &str, kind: ChannelType) -> Channel {
    Channel {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        position: 0,
        parent_id: None,
        permission_overwrites: None,
        topic: None,
        nsfw: None,
        bitrate: None,
        user_limit: None,
        rate_limit_per_user: None,
        rtc_region: None,
        default_auto_archive_duration: None,
    }
}

pub fn emoji(id: &str, name: &str) -> Emoji {
    Emoji {
        id: id.to_string(),
        name: name.to_string(),
        animated: false,
        roles: vec![],
    }
}

pub fn message(content: &str) -> Message {
    Message {
        id: "m".to_string(),
        author: MessageAuthor {
            username: "user".to_string(),
            discriminator: "1234".to_string(),
        },
        content: content.to_string(),
        embeds: vec![],
        components: vec![],
    }
}

#[derive(Default)]
pub struct FakeState {
    pub source_roles: Vec<Role>,
    pub source_channels: Vec<Channel>,
    pub source_emojis: Vec<Emoji>,
    /// Source messages keyed by channel id, newest first as the API lists
    /// them.
    pub source_messages: HashMap<String, Vec<Message>>,

    pub dest_roles: Vec<Role>,
    pub dest_channels: Vec<Channel>,
    pub dest_emojis: Vec<Emoji>,

    pub created_roles: Vec<CreateRole>,
    pub created_channels: Vec<CreateChannel>,
    pub created_emojis: Vec<CreateEmoji>,
    pub posted_messages: Vec<(String, CreateMessage)>,
    pub deleted_channels: Vec<String>,
    pub deleted_roles: Vec<String>,
    pub deleted_emojis: Vec<String>,

    /// Channel names whose creation always fails with a transient error.
    pub fail_create_channels: HashSet<String>,
    /// Fail every destination channel listing with a transient error.
    pub fail_dest_channel_listing: bool,

    next_id: u64,
}

impl FakeState {
    fn issue_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("new-{prefix}-{}", self.next_id)
    }
}

#[derive(Default)]
pub struct FakeGuildApi {
    pub state: Mutex<FakeState>,
}

impl FakeGuildApi {
    pub fn new(state: FakeState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }
}

#[async_trait]
impl GuildApi for FakeGuildApi {
    async fn list_roles(&self, guild_id: &str) -> Result<Vec<Role>, ApiError> {
        let state = self.state.lock().unwrap();
        Ok(if guild_id == SOURCE_GUILD {
            state.source_roles.clone()
        } else {
            state.dest_roles.clone()
        })
    }

    async fn list_channels(&self, guild_id: &str) -> Result<Vec<Channel>, ApiError> {
        let state = self.state.lock().unwrap();
        if guild_id == SOURCE_GUILD {
            Ok(state.source_channels.clone())
        } else if state.fail_dest_channel_listing {
            Err(transient())
        } else {
            Ok(state.dest_channels.clone())
        }
    }

    async fn list_emojis(&self, guild_id: &str) -> Result<Vec<Emoji>, ApiError> {
        let state = self.state.lock().unwrap();
        Ok(if guild_id == SOURCE_GUILD {
            state.source_emojis.clone()
        } else {
            state.dest_emojis.clone()
        })
    }

    async fn create_role(&self, _guild_id: &str, role: &CreateRole) -> Result<Created, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.created_roles.push(role.clone());
        let id = state.issue_id("role");
        Ok(Created { id })
    }

    async fn create_channel(
        &self,
        _guild_id: &str,
        channel: &CreateChannel,
    ) -> Result<Created, ApiError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_create_channels.contains(&channel.name) {
            return Err(transient());
        }
        state.created_channels.push(channel.clone());
        let id = state.issue_id("channel");
        Ok(Created { id })
    }

    async fn create_emoji(
        &self,
        _guild_id: &str,
        emoji: &CreateEmoji,
    ) -> Result<Created, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.created_emojis.push(emoji.clone());
        let id = state.issue_id("emoji");
        Ok(Created { id })
    }

    async fn delete_channel(&self, channel_id: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.deleted_channels.push(channel_id.to_string());
        Ok(())
    }

    async fn delete_role(&self, _guild_id: &str, role_id: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.deleted_roles.push(role_id.to_string());
        Ok(())
    }

    async fn delete_emoji(&self, _guild_id: &str, emoji_id: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.deleted_emojis.push(emoji_id.to_string());
        Ok(())
    }

    async fn list_messages(&self, channel_id: &str, _limit: u8) -> Result<Vec<Message>, ApiError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .source_messages
            .get(channel_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_message(
        &self,
        channel_id: &str,
        message: &CreateMessage,
    ) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state
            .posted_messages
            .push((channel_id.to_string(), message.clone()));
        Ok(())
    }

    async fn fetch_emoji_asset(&self, emoji_id: &str, _animated: bool) -> Result<Vec<u8>, ApiError> {
        Ok(format!("bytes-{emoji_id}").into_bytes())
    }
}
