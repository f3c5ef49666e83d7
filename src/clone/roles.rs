//! Phase 2: clone roles and seed the role id mapping.

use crate::clone::id_map::MapKind;
use crate::clone::report::{ItemOutcome, PhaseReport};
use crate::clone::CloneContext;
use crate::model::role::CreateRole;

pub async fn run(ctx: &mut CloneContext<'_>) -> PhaseReport {
    let mut report = PhaseReport::new("roles");
    tracing::info!("Cloning roles...");

    let api = ctx.api;
    let retry = ctx.retry;
    let source = ctx.config.source_guild_id.as_str();
    let dest = ctx.config.destination_guild_id.as_str();

    let Some(source_roles) = retry
        .execute("source roles", || api.list_roles(source))
        .await
    else {
        return report;
    };

    // The listing is ascending by hierarchy position. Creating in reverse
    // order lets the destination's creation-sequence ranks approximate the
    // original relative order.
    for role in source_roles.iter().rev() {
        if !role.is_clonable() {
            continue;
        }

        let payload = CreateRole::from_source(role);
        let label = format!("create role {}", role.name);
        match retry
            .execute(&label, || api.create_role(dest, &payload))
            .await
        {
            Some(created) => {
                ctx.ids.record(MapKind::Role, role.id.clone(), created.id);
                report.record(ItemOutcome::Created);
            }
            None => report.record(ItemOutcome::Skipped),
        }
    }

    report
}
