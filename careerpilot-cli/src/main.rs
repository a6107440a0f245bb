//! Careerpilot CLI
//!
//! Command-line interface for the Career Copilot analysis service: runs
//! resume analyses, chats with the career coach, and tracks usage statistics
//! across runs.

mod commands;
mod config;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use careerpilot_client::DEFAULT_BASE_URL;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "careerpilot")]
#[command(about = "AI Career Copilot CLI", long_about = None)]
struct Cli {
    /// Copilot API URL
    #[arg(long, env = "CAREERPILOT_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    /// Usage stats snapshot location
    #[arg(
        long,
        env = "CAREERPILOT_STATS_FILE",
        default_value = ".careerpilot/stats.json"
    )]
    stats_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; quiet by default, RUST_LOG overrides.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        timeout: Duration::from_secs(cli.timeout_secs),
        stats_file: cli.stats_file,
    };

    handle_command(cli.command, &config).await
}
