//! Phase 6: repost recent history into the recreated text channels.

use crate::clone::id_map::MapKind;
use crate::clone::report::{ItemOutcome, PhaseReport};
use crate::clone::CloneContext;
use crate::model::channel::Channel;
use crate::model::message::CreateMessage;

pub async fn run(ctx: &mut CloneContext<'_>, source_channels: &[Channel]) -> PhaseReport {
    let mut report = PhaseReport::new("messages");
    tracing::info!("Cloning messages...");

    let api = ctx.api;
    let retry = ctx.retry;
    let limit = ctx.config.message_fetch_limit;

    // Only text channels that were actually recreated receive history.
    for channel in source_channels.iter().filter(|c| c.kind.is_text()) {
        let Some(dest_channel_id) = ctx.ids.get(MapKind::Channel, &channel.id) else {
            continue;
        };

        let fetch_label = format!("fetch messages {}", channel.name);
        let Some(mut messages) = retry
            .execute(&fetch_label, || api.list_messages(&channel.id, limit))
            .await
        else {
            report.record(ItemOutcome::Skipped);
            continue;
        };

        // The API lists newest first; post oldest first.
        messages.reverse();

        let post_label = format!("message {}", channel.name);
        for message in &messages {
            let payload = CreateMessage::from_source(message);
            match retry
                .execute(&post_label, || {
                    api.create_message(dest_channel_id, &payload)
                })
                .await
            {
                Some(()) => report.record(ItemOutcome::Created),
                None => report.record(ItemOutcome::Skipped),
            }
        }
    }

    report
}
