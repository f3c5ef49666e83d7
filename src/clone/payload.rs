use crate::clone::id_map::{IdMap, MapKind};
use crate::clone::overwrites::translate_overwrites;
use crate::model::channel::{Channel, ChannelType, CreateChannel};

/// Auto-archive fallback for thread-container channels.
const DEFAULT_AUTO_ARCHIVE_MINUTES: u32 = 60;

/// Builds the creation payload for one source channel.
///
/// Name, type, position, translated overwrites, and the resolved parent are
/// always carried; the remaining fields are keyed off the channel type so a
/// payload never carries fields its type does not accept (e.g. bitrate on a
/// text channel).
pub fn build_channel_payload(channel: &Channel, ids: &IdMap) -> CreateChannel {
    let mut payload = CreateChannel {
        name: channel.name.clone(),
        kind: channel.kind,
        position: channel.position,
        // A parent category that was never mapped leaves the channel at the
        // guild root rather than pointing at a stale source id.
        parent_id: channel
            .parent_id
            .as_deref()
            .and_then(|parent| ids.get(MapKind::Category, parent))
            .map(str::to_string),
        permission_overwrites: translate_overwrites(
            channel.permission_overwrites.as_deref(),
            ids,
        ),
        topic: channel.topic.clone(),
        nsfw: channel.nsfw,
        bitrate: None,
        user_limit: None,
        rate_limit_per_user: None,
        rtc_region: None,
        default_auto_archive_duration: None,
    };

    if channel.kind.is_voice() {
        payload.bitrate = channel.bitrate;
        payload.user_limit = channel.user_limit;
    }

    if channel.kind.is_text() {
        payload.rate_limit_per_user = Some(channel.rate_limit_per_user.unwrap_or(0));
    }

    if channel.kind == ChannelType::STAGE {
        payload.rtc_region = channel.rtc_region.clone();
    }

    if channel.kind.has_auto_archive() {
        payload.default_auto_archive_duration = Some(
            channel
                .default_auto_archive_duration
                .unwrap_or(DEFAULT_AUTO_ARCHIVE_MINUTES),
        );
    }

    payload
}
