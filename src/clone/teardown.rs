//! Phase 1: empty the destination guild.

use crate::clone::report::{ItemOutcome, PhaseReport};
use crate::clone::CloneContext;

/// Deletes every destination channel, custom role, and emoji.
///
/// The three listings are independent reads fetched together; deletions then
/// run strictly sequentially. A listing the retry layer abandoned is treated
/// as empty so the other kinds still get cleared, and per-item deletion
/// failures never block the remaining deletions.
pub async fn run(ctx: &mut CloneContext<'_>) -> PhaseReport {
    let mut report = PhaseReport::new("teardown");
    tracing::info!("Clearing destination guild...");

    let api = ctx.api;
    let retry = ctx.retry;
    let dest = ctx.config.destination_guild_id.as_str();

    let (channels, roles, emojis) = tokio::join!(
        retry.execute("destination channels", || api.list_channels(dest)),
        retry.execute("destination roles", || api.list_roles(dest)),
        retry.execute("destination emojis", || api.list_emojis(dest)),
    );

    for channel in channels.unwrap_or_default() {
        match retry
            .execute("delete channel", || api.delete_channel(&channel.id))
            .await
        {
            Some(()) => report.record(ItemOutcome::Deleted),
            None => report.record(ItemOutcome::Skipped),
        }
    }

    for role in roles.unwrap_or_default() {
        if !role.is_clonable() {
            continue;
        }
        match retry
            .execute("delete role", || api.delete_role(dest, &role.id))
            .await
        {
            Some(()) => report.record(ItemOutcome::Deleted),
            None => report.record(ItemOutcome::Skipped),
        }
    }

    for emoji in emojis.unwrap_or_default() {
        match retry
            .execute("delete emoji", || api.delete_emoji(dest, &emoji.id))
            .await
        {
            Some(()) => report.record(ItemOutcome::Deleted),
            None => report.record(ItemOutcome::Skipped),
        }
    }

    report
}
