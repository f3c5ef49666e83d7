//! Phase 3: clone categories so channels have parents to attach to.

use crate::clone::id_map::MapKind;
use crate::clone::payload::build_channel_payload;
use crate::clone::report::{ItemOutcome, PhaseReport};
use crate::clone::CloneContext;
use crate::model::channel::Channel;

pub async fn run(ctx: &mut CloneContext<'_>, source_channels: &[Channel]) -> PhaseReport {
    let mut report = PhaseReport::new("categories");
    tracing::info!("Cloning categories...");

    let api = ctx.api;
    let retry = ctx.retry;
    let dest = ctx.config.destination_guild_id.as_str();

    for category in source_channels.iter().filter(|c| c.kind.is_category()) {
        let payload = build_channel_payload(category, &ctx.ids);
        let label = format!("create category {}", category.name);
        match retry
            .execute(&label, || api.create_channel(dest, &payload))
            .await
        {
            Some(created) => {
                ctx.ids
                    .record(MapKind::Category, category.id.clone(), created.id);
                report.record(ItemOutcome::Created);
            }
            None => report.record(ItemOutcome::Skipped),
        }
    }

    report
}
