mod api;
mod clone;
mod config;
mod error;
mod model;

use api::rest::RestClient;
use api::retry::{RetryClient, RetryPolicy};
use clone::CloneContext;
use config::Config;
use error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let api = RestClient::new(&config)?;
    let retry = RetryClient::new(RetryPolicy::default());

    tracing::info!(
        "Cloning guild {} into {}",
        config.source_guild_id,
        config.destination_guild_id
    );

    let mut ctx = CloneContext::new(&config, &api, &retry);
    let report = clone::run(&mut ctx).await;

    for phase in &report.phases {
        tracing::info!(
            "{}: {} created, {} deleted, {} skipped",
            phase.phase,
            phase.created,
            phase.deleted,
            phase.skipped
        );
    }
    tracing::info!("Cloning complete without fatal errors.");

    Ok(())
}
