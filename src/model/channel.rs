use serde::{Deserialize, Serialize};

/// Numeric channel type tag as carried on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ChannelType(pub u8);

impl ChannelType {
    pub const TEXT: ChannelType = ChannelType(0);
    pub const DM: ChannelType = ChannelType(1);
    pub const VOICE: ChannelType = ChannelType(2);
    pub const GROUP_DM: ChannelType = ChannelType(3);
    pub const CATEGORY: ChannelType = ChannelType(4);
    pub const ANNOUNCEMENT: ChannelType = ChannelType(5);
    pub const STAGE: ChannelType = ChannelType(13);
    pub const FORUM: ChannelType = ChannelType(15);
    pub const MEDIA: ChannelType = ChannelType(16);

    pub fn is_category(self) -> bool {
        self == Self::CATEGORY
    }

    /// DM-like types cannot exist inside a guild and are never cloned.
    pub fn is_direct(self) -> bool {
        matches!(self, Self::DM | Self::GROUP_DM)
    }

    pub fn is_text(self) -> bool {
        self == Self::TEXT
    }

    pub fn is_voice(self) -> bool {
        self == Self::VOICE
    }

    /// Thread-container types that carry a default auto-archive duration.
    pub fn has_auto_archive(self) -> bool {
        matches!(self, Self::ANNOUNCEMENT | Self::FORUM | Self::MEDIA)
    }
}

/// A per-subject allow/deny permission override on a category or channel.
///
/// `kind` is 0 for a role subject and 1 for a member subject.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PermissionOverwrite {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub allow: String,
    pub deny: String,
}

/// A channel (or category) as listed by the API.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub permission_overwrites: Option<Vec<PermissionOverwrite>>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub nsfw: Option<bool>,
    #[serde(default)]
    pub bitrate: Option<u32>,
    #[serde(default)]
    pub user_limit: Option<u16>,
    #[serde(default)]
    pub rate_limit_per_user: Option<u32>,
    #[serde(default)]
    pub rtc_region: Option<String>,
    #[serde(default)]
    pub default_auto_archive_duration: Option<u32>,
}

/// Channel creation payload. Optional fields are omitted from the JSON body
/// when unset so type-specific fields only appear for the types that carry
/// them.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateChannel {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    pub position: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_overwrites: Option<Vec<PermissionOverwrite>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtc_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_auto_archive_duration: Option<u32>,
}
