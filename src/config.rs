use crate::error::{config::ConfigError, AppError};

const DISCORD_API_BASE_URL: &str = "https://discord.com/api/v10";
const DISCORD_CDN_BASE_URL: &str = "https://cdn.discordapp.com";

/// First-page fetch size for channel history; the API caps a single page at 100.
const DEFAULT_MESSAGE_FETCH_LIMIT: u8 = 50;

pub struct Config {
    pub token: String,
    pub source_guild_id: String,
    pub destination_guild_id: String,

    /// How many recent messages to copy per text channel (first page only,
    /// no pagination).
    pub message_fetch_limit: u8,

    pub api_base_url: String,
    pub cdn_base_url: String,
}

impl Config {
    /// Loads the run configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsed
    /// - `Err(AppError)` - A required variable is missing or invalid
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            token: require_env("CLONER_TOKEN")?,
            source_guild_id: require_env("CLONER_SOURCE_GUILD_ID")?,
            destination_guild_id: require_env("CLONER_DEST_GUILD_ID")?,
            message_fetch_limit: match std::env::var("CLONER_MESSAGE_FETCH_LIMIT") {
                Ok(raw) => raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar("CLONER_MESSAGE_FETCH_LIMIT".to_string(), raw)
                })?,
                Err(_) => DEFAULT_MESSAGE_FETCH_LIMIT,
            },
            api_base_url: std::env::var("CLONER_API_BASE_URL")
                .unwrap_or_else(|_| DISCORD_API_BASE_URL.to_string()),
            cdn_base_url: std::env::var("CLONER_CDN_BASE_URL")
                .unwrap_or_else(|_| DISCORD_CDN_BASE_URL.to_string()),
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
