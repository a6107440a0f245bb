//! Careerpilot Analyzer
//!
//! Client-side orchestration for Career Copilot analysis runs:
//! - `api`: the trait seam between the orchestrator and the HTTP client
//! - `eligibility`: which capabilities a given context unlocks
//! - `orchestrator`: concurrent dispatch with a configurable failure policy
//! - `store`: per-run result aggregation with per-capability status
//! - `stats`: durable cross-run usage statistics

pub mod api;
pub mod eligibility;
pub mod orchestrator;
pub mod stats;
pub mod store;

pub use api::CopilotApi;
pub use orchestrator::{
    BatchFailurePolicy, DEFAULT_RUN_DEADLINE, Orchestrator, RunError, RunOptions, RunSummary,
};
pub use stats::{StatsError, StatsStore};
pub use store::{ResultStore, SlotStatus};
