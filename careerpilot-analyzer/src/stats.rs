//! Usage statistics persistence
//!
//! Stores the cross-run [`UsageStats`] snapshot as a JSON file. Writes go to
//! a temporary sibling file first and are renamed over the target, so a
//! crash mid-write never leaves a truncated snapshot behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use careerpilot_core::domain::results::AggregatedResults;
use careerpilot_core::domain::stats::{RunDigest, UsageStats};
use thiserror::Error;
use tracing::debug;

/// Failures while reading or writing the stats snapshot
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to read stats snapshot: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write stats snapshot: {0}")]
    Write(#[source] io::Error),

    #[error("stats snapshot is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// File-backed store for the usage statistics snapshot
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot; a missing file yields the empty snapshot
    pub fn load(&self) -> Result<UsageStats, StatsError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(UsageStats::default()),
            Err(e) => Err(StatsError::Read(e)),
        }
    }

    /// Folds a settled run into the snapshot and persists the result
    pub fn record(&self, results: &AggregatedResults) -> Result<UsageStats, StatsError> {
        let digest = RunDigest::from_results(results);
        let updated = self.load()?.record_run(&digest);
        self.persist(&updated)?;
        Ok(updated)
    }

    fn persist(&self, stats: &UsageStats) -> Result<(), StatsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StatsError::Write)?;
            }
        }

        let json = serde_json::to_string_pretty(stats)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(StatsError::Write)?;
        fs::rename(&tmp, &self.path).map_err(StatsError::Write)?;
        debug!("Stats snapshot written to {}", self.path.display());
        Ok(())
    }
}
