//! The replication pipeline.
//!
//! Six strictly sequential phases over a per-run [`CloneContext`]:
//! teardown, roles, categories, channels, emojis, messages. Each phase must
//! finish before the next starts because later phases reference ids recorded
//! by earlier ones (a channel's permission overwrites name roles, its parent
//! names a category, and so on).
//!
//! No phase ever aborts the run. Individual item failures degrade to a skip
//! recorded in the phase's [`report::PhaseReport`], and the pipeline always
//! reaches completion.

pub mod asset;
pub mod categories;
pub mod channels;
pub mod emojis;
pub mod id_map;
pub mod messages;
pub mod overwrites;
pub mod payload;
pub mod report;
pub mod roles;
pub mod teardown;

#[cfg(test)]
mod test;

use crate::api::retry::RetryClient;
use crate::api::GuildApi;
use crate::clone::id_map::IdMap;
use crate::clone::report::CloneReport;
use crate::config::Config;
use crate::model::channel::Channel;

/// Per-run state threaded through every phase: the id mapping being built,
/// the run configuration, and the clients used to reach both guilds.
///
/// One context exists per run and is owned by the single driving task, so the
/// id map needs no synchronization.
pub struct CloneContext<'a> {
    pub config: &'a Config,
    pub api: &'a dyn GuildApi,
    pub retry: &'a RetryClient,
    pub ids: IdMap,
}

impl<'a> CloneContext<'a> {
    pub fn new(config: &'a Config, api: &'a dyn GuildApi, retry: &'a RetryClient) -> Self {
        Self {
            config,
            api,
            retry,
            ids: IdMap::default(),
        }
    }
}

/// Drives the phases in dependency order and returns the aggregated report.
pub async fn run(ctx: &mut CloneContext<'_>) -> CloneReport {
    let mut report = CloneReport::default();

    report.push(teardown::run(ctx).await);
    report.push(roles::run(ctx).await);

    // The source channel listing feeds three phases; fetch it once.
    let source_channels = fetch_source_channels(ctx).await;

    report.push(categories::run(ctx, &source_channels).await);
    report.push(channels::run(ctx, &source_channels).await);
    report.push(emojis::run(ctx).await);
    report.push(messages::run(ctx, &source_channels).await);

    report
}

async fn fetch_source_channels(ctx: &CloneContext<'_>) -> Vec<Channel> {
    let api = ctx.api;
    let source = ctx.config.source_guild_id.as_str();

    ctx.retry
        .execute("source channels", || api.list_channels(source))
        .await
        .unwrap_or_default()
}
