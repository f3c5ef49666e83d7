//! reqwest-backed implementation of [`GuildApi`] against the live REST API.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::GuildApi;
use crate::config::Config;
use crate::error::api::ApiError;
use crate::model::channel::{Channel, CreateChannel};
use crate::model::emoji::{CreateEmoji, Emoji};
use crate::model::message::{CreateMessage, Message};
use crate::model::role::{CreateRole, Role};
use crate::model::Created;

/// Body of a 429 response. `retry_after` is the suggested wait in
/// milliseconds.
#[derive(Deserialize)]
struct RateLimitBody {
    retry_after: Option<u64>,
}

pub struct RestClient {
    http: reqwest::Client,
    authorization: String,
    api_base_url: String,
    cdn_base_url: String,
}

impl RestClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            authorization: format!("User {}", config.token),
            api_base_url: config.api_base_url.clone(),
            cdn_base_url: config.cdn_base_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, route: String) -> Result<T, ApiError> {
        let response = self
            .http
            .get(format!("{}{}", self.api_base_url, route))
            .header(AUTHORIZATION, self.authorization.as_str())
            .send()
            .await?;
        let response = Self::checked(&route, response).await?;
        Ok(response.json().await?)
    }

    async fn post_json<B, T>(&self, route: String, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}{}", self.api_base_url, route))
            .header(AUTHORIZATION, self.authorization.as_str())
            .json(body)
            .send()
            .await?;
        let response = Self::checked(&route, response).await?;
        Ok(response.json().await?)
    }

    async fn post_unit<B: Serialize + Sync>(&self, route: String, body: &B) -> Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}{}", self.api_base_url, route))
            .header(AUTHORIZATION, self.authorization.as_str())
            .json(body)
            .send()
            .await?;
        Self::checked(&route, response).await?;
        Ok(())
    }

    async fn delete(&self, route: String) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(format!("{}{}", self.api_base_url, route))
            .header(AUTHORIZATION, self.authorization.as_str())
            .send()
            .await?;
        Self::checked(&route, response).await?;
        Ok(())
    }

    /// Maps throttle and failure statuses onto the error taxonomy the retry
    /// layer understands.
    async fn checked(
        route: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_ms = response
                .json::<RateLimitBody>()
                .await
                .ok()
                .and_then(|body| body.retry_after);
            return Err(ApiError::RateLimited { retry_after_ms });
        }

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                route: route.to_string(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl GuildApi for RestClient {
    async fn list_roles(&self, guild_id: &str) -> Result<Vec<Role>, ApiError> {
        self.get_json(format!("/guilds/{guild_id}/roles")).await
    }

    async fn list_channels(&self, guild_id: &str) -> Result<Vec<Channel>, ApiError> {
        self.get_json(format!("/guilds/{guild_id}/channels")).await
    }

    async fn list_emojis(&self, guild_id: &str) -> Result<Vec<Emoji>, ApiError> {
        self.get_json(format!("/guilds/{guild_id}/emojis")).await
    }

    async fn create_role(&self, guild_id: &str, role: &CreateRole) -> Result<Created, ApiError> {
        self.post_json(format!("/guilds/{guild_id}/roles"), role)
            .await
    }

    async fn create_channel(
        &self,
        guild_id: &str,
        channel: &CreateChannel,
    ) -> Result<Created, ApiError> {
        self.post_json(format!("/guilds/{guild_id}/channels"), channel)
            .await
    }

    async fn create_emoji(
        &self,
        guild_id: &str,
        emoji: &CreateEmoji,
    ) -> Result<Created, ApiError> {
        self.post_json(format!("/guilds/{guild_id}/emojis"), emoji)
            .await
    }

    async fn delete_channel(&self, channel_id: &str) -> Result<(), ApiError> {
        self.delete(format!("/channels/{channel_id}")).await
    }

    async fn delete_role(&self, guild_id: &str, role_id: &str) -> Result<(), ApiError> {
        self.delete(format!("/guilds/{guild_id}/roles/{role_id}"))
            .await
    }

    async fn delete_emoji(&self, guild_id: &str, emoji_id: &str) -> Result<(), ApiError> {
        self.delete(format!("/guilds/{guild_id}/emojis/{emoji_id}"))
            .await
    }

    async fn list_messages(&self, channel_id: &str, limit: u8) -> Result<Vec<Message>, ApiError> {
        self.get_json(format!("/channels/{channel_id}/messages?limit={limit}"))
            .await
    }

    async fn create_message(
        &self,
        channel_id: &str,
        message: &CreateMessage,
    ) -> Result<(), ApiError> {
        self.post_unit(format!("/channels/{channel_id}/messages"), message)
            .await
    }

    async fn fetch_emoji_asset(&self, emoji_id: &str, animated: bool) -> Result<Vec<u8>, ApiError> {
        let extension = if animated { "gif" } else { "png" };
        let route = format!("/emojis/{emoji_id}.{extension}");

        // CDN fetches carry no authorization.
        let response = self
            .http
            .get(format!("{}{}", self.cdn_base_url, route))
            .send()
            .await?;
        let response = Self::checked(&route, response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
