use crate::args::CommonArgs;
use crate::locator::ApplicationPortLocator;
use anyhow::anyhow;
use application::stream_channel::StreamChannelService;
use clap::Args;
use infrastructure::stream_channel::PostgresStreamChannelRepository;
use presentation::api::run_api;
use std::sync::Arc;
use tracing::instrument;

#[derive(Args)]
pub struct ServeArgs {
    /// The port for the HTTP API to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}

#[instrument(level = "trace", skip(common_args, args))]
pub async fn run(common_args: CommonArgs, args: ServeArgs) -> anyhow::Result<()> {
    let CommonArgs { database_url, .. } = common_args;
    let ServeArgs { port } = args;

    let database_connection = sqlx::PgPool::connect(&database_url).await?;

    let stream_channel_repository = Arc::new(PostgresStreamChannelRepository::new(
        database_connection.clone(),
    ));
    let stream_channel_adapter = Arc::new(StreamChannelService::new(stream_channel_repository));

    let locator = ApplicationPortLocator::new(stream_channel_adapter);

    let api = tokio::spawn(run_api(locator, port));

    api.await?.map_err(|e| anyhow!(e))?;

    Ok(())
}
