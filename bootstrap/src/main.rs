mod args;
mod command;
mod locator;

use crate::args::CommonArgs;
use crate::command::Command;
use clap::Parser;
use sentry::types::Dsn;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Stream channel service of the member area
#[derive(Parser)]
struct Cli {
    #[command(flatten)]
    common_args: CommonArgs,
    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let Cli {
        common_args,
        command,
    } = Cli::parse();

    // Sentry has to be initialized before the async runtime starts
    let _sentry = init_sentry(&common_args)?;
    init_tracing();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(command.run(common_args))
}

fn init_sentry(common_args: &CommonArgs) -> anyhow::Result<Option<sentry::ClientInitGuard>> {
    let Some(dsn) = common_args.sentry_dsn.as_deref() else {
        return Ok(None);
    };
    let dsn = dsn.parse::<Dsn>()?;

    let guard = sentry::init(sentry::ClientOptions {
        dsn: Some(dsn),
        release: sentry::release_name!(),
        environment: common_args.sentry_environment.clone().map(Into::into),
        sample_rate: common_args.sentry_sample_rate.unwrap_or(1.0),
        traces_sample_rate: common_args.sentry_traces_sample_rate.unwrap_or(0.0),
        ..Default::default()
    });

    Ok(Some(guard))
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();
}
