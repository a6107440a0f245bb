//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod analyze;
mod capabilities;
mod coach;
mod stats;

pub use analyze::AnalyzeArgs;
pub use coach::CoachArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run analyses against a resume and a job description
    Analyze(AnalyzeArgs),
    /// Chat with the career coach
    Coach(CoachArgs),
    /// Show usage statistics across runs
    Stats,
    /// List available analyses and selection presets
    Capabilities,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::handle_analyze(args, config).await,
        Commands::Coach(args) => coach::handle_coach(args, config).await,
        Commands::Stats => stats::handle_stats(config),
        Commands::Capabilities => capabilities::handle_capabilities(),
    }
}
