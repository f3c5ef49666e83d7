//! Phase 5: clone custom emojis.

use crate::api::retry::RetryClient;
use crate::api::GuildApi;
use crate::clone::asset::to_data_uri;
use crate::clone::id_map::{IdMap, MapKind};
use crate::clone::report::{ItemOutcome, PhaseReport};
use crate::clone::CloneContext;
use crate::model::emoji::{CreateEmoji, Emoji};

pub async fn run(ctx: &mut CloneContext<'_>) -> PhaseReport {
    let mut report = PhaseReport::new("emojis");
    tracing::info!("Cloning emojis...");

    let api = ctx.api;
    let retry = ctx.retry;
    let source = ctx.config.source_guild_id.as_str();
    let dest = ctx.config.destination_guild_id.as_str();

    let Some(source_emojis) = retry
        .execute("source emojis", || api.list_emojis(source))
        .await
    else {
        return report;
    };

    for emoji in &source_emojis {
        match clone_emoji(api, retry, &ctx.ids, dest, emoji).await {
            Some(()) => report.record(ItemOutcome::Created),
            None => report.record(ItemOutcome::Skipped),
        }
    }

    report
}

/// Any failure here (asset fetch or create) skips this emoji only.
async fn clone_emoji(
    api: &dyn GuildApi,
    retry: &RetryClient,
    ids: &IdMap,
    dest: &str,
    emoji: &Emoji,
) -> Option<()> {
    let fetch_label = format!("fetch emoji {}", emoji.name);
    let bytes = retry
        .execute(&fetch_label, || {
            api.fetch_emoji_asset(&emoji.id, emoji.animated)
        })
        .await?;

    let payload = CreateEmoji {
        name: emoji.name.clone(),
        image: to_data_uri(&bytes, emoji.animated),
        roles: emoji
            .roles
            .iter()
            .map(|role| ids.resolve(MapKind::Role, role).to_string())
            .collect(),
    };

    let create_label = format!("create emoji {}", emoji.name);
    retry
        .execute(&create_label, || api.create_emoji(dest, &payload))
        .await
        .map(|_| ())
}
