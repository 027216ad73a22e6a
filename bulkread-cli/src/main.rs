//! Bulkread CLI
//!
//! Command-line interface for submitting CRM bulk-read jobs.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bulkread")]
#[command(about = "Submit CRM bulk-read jobs", long_about = None)]
struct Cli {
    /// CRM API domain
    #[arg(long, env = "ZOHO_API_DOMAIN", default_value = config::DEFAULT_API_DOMAIN)]
    api_domain: String,

    /// OAuth access token
    #[arg(long, env = "ZOHO_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Directory exports are written to
    #[arg(long, env = "ZOHO_DATA_DIR", default_value = config::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bulkread=info,bulkread_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_domain: cli.api_domain,
        access_token: cli.access_token,
        data_dir: cli.data_dir,
    };
    config.validate()?;
    debug!("Using API domain {}", config.api_domain);

    handle_command(cli.command, &config).await
}
