//! Configuration module
//!
//! Settings shared by every command: where the Copilot API lives, how long
//! to wait per request, and where the usage stats snapshot is kept.

use std::path::PathBuf;
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the Copilot API service
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Usage stats snapshot location
    pub stats_file: PathBuf,
}
