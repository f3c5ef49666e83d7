//! Phase 4: clone all non-category channels.

use crate::clone::id_map::MapKind;
use crate::clone::payload::build_channel_payload;
use crate::clone::report::{ItemOutcome, PhaseReport};
use crate::clone::CloneContext;
use crate::model::channel::Channel;

pub async fn run(ctx: &mut CloneContext<'_>, source_channels: &[Channel]) -> PhaseReport {
    let mut report = PhaseReport::new("channels");
    tracing::info!("Cloning channels...");

    let api = ctx.api;
    let retry = ctx.retry;
    let dest = ctx.config.destination_guild_id.as_str();

    let clonable = source_channels
        .iter()
        .filter(|c| !c.kind.is_category() && !c.kind.is_direct());

    for channel in clonable {
        let payload = build_channel_payload(channel, &ctx.ids);
        let label = format!("create channel {}", channel.name);
        match retry
            .execute(&label, || api.create_channel(dest, &payload))
            .await
        {
            Some(created) => {
                ctx.ids
                    .record(MapKind::Channel, channel.id.clone(), created.id);
                report.record(ItemOutcome::Created);
            }
            None => report.record(ItemOutcome::Skipped),
        }
    }

    report
}
