//! Run result store
//!
//! Collects the reports of a single analysis run together with a
//! per-capability status. The store is wrapped in an `Arc<Mutex<..>>` so
//! concurrently settling calls can write to it while the caller observes the
//! run mid-flight; every clone is a handle to the same run.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use careerpilot_core::domain::analysis::AnalysisKind;
use careerpilot_core::domain::results::AggregatedResults;
use careerpilot_core::domain::score;
use careerpilot_core::dto::report::AnalysisReport;

/// Outcome of one capability slot within a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotStatus {
    /// Never dispatched, with the reason (not selected, or a missing input)
    NotRun { reason: String },
    /// Dispatched and settled with an error
    Failed { error: String },
    /// Dispatched and settled with a report
    Succeeded,
}

impl SlotStatus {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, SlotStatus::Succeeded)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SlotStatus::Failed { .. })
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    results: AggregatedResults,
    status: BTreeMap<AnalysisKind, SlotStatus>,
}

/// Thread-safe store for one run's reports and statuses
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner::default())),
        }
    }

    /// Discards all reports and statuses from the previous run
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.results.clear();
        inner.status.clear();
    }

    /// Records a settled report and marks its slot as succeeded
    pub fn insert(&self, report: AnalysisReport) {
        let mut inner = self.inner.lock().unwrap();
        let kind = report.kind();
        inner.results.insert(report);
        inner.status.insert(kind, SlotStatus::Succeeded);
    }

    /// Marks a dispatched slot as failed without touching other slots
    pub fn mark_failed(&self, kind: AnalysisKind, error: impl Into<String>) {
        let mut inner = self.inner.lock().unwrap();
        inner.status.insert(
            kind,
            SlotStatus::Failed {
                error: error.into(),
            },
        );
    }

    /// Marks a slot that was never dispatched, with the reason
    pub fn mark_not_run(&self, kind: AnalysisKind, reason: impl Into<String>) {
        let mut inner = self.inner.lock().unwrap();
        inner.status.insert(
            kind,
            SlotStatus::NotRun {
                reason: reason.into(),
            },
        );
    }

    /// The settled report for a capability, if it succeeded
    pub fn report(&self, kind: AnalysisKind) -> Option<AnalysisReport> {
        let inner = self.inner.lock().unwrap();
        inner.results.get(kind).cloned()
    }

    /// The status of a capability slot, if the run has touched it
    pub fn status(&self, kind: AnalysisKind) -> Option<SlotStatus> {
        let inner = self.inner.lock().unwrap();
        inner.status.get(&kind).cloned()
    }

    /// All touched slots in catalog order
    pub fn statuses(&self) -> Vec<(AnalysisKind, SlotStatus)> {
        let inner = self.inner.lock().unwrap();
        inner
            .status
            .iter()
            .map(|(kind, status)| (*kind, status.clone()))
            .collect()
    }

    /// Snapshot of the aggregated reports
    pub fn results(&self) -> AggregatedResults {
        let inner = self.inner.lock().unwrap();
        inner.results.clone()
    }

    /// Number of settled reports
    pub fn report_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.results.len()
    }

    /// Weighted overall score across the settled reports
    pub fn overall_score(&self) -> Option<u8> {
        let inner = self.inner.lock().unwrap();
        score::overall_score(&inner.results)
    }
}
