//! Analysis orchestrator
//!
//! Runs one analysis batch: validates the context, decides which selected
//! capabilities are eligible, builds their request payloads, dispatches every
//! call concurrently, and waits for all of them to settle. Failures are
//! handled per the configured policy; results land in a shared
//! [`ResultStore`] as they arrive.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use careerpilot_client::ClientError;
use careerpilot_core::domain::analysis::AnalysisKind;
use careerpilot_core::domain::context::{AnalysisContext, ContextError, ResumeAttachment};
use careerpilot_core::dto::report::AnalysisReport;
use careerpilot_core::dto::request::{
    CoverLetterRequest, JobAlertsRequest, JobMarketRequest, ProgressRequest, ResumeAndJobRequest,
    ResumeOnlyRequest, RewriteRequest, SalaryBenchmarkRequest,
};
use thiserror::Error;
use tokio::time;
use tracing::{debug, info, warn};

use crate::api::CopilotApi;
use crate::eligibility::Requirement;
use crate::store::{ResultStore, SlotStatus};

/// Default wall-clock limit for one analysis run
pub const DEFAULT_RUN_DEADLINE: Duration = Duration::from_secs(300);

/// How a run treats individual call failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchFailurePolicy {
    /// Any failed call fails the whole run once every call has settled
    Abort,
    /// Failed calls are recorded per slot and the run completes
    #[default]
    Continue,
}

/// Tunable behavior of a run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub policy: BatchFailurePolicy,
    /// Wall-clock limit for the whole batch; `None` waits indefinitely
    pub run_deadline: Option<Duration>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            policy: BatchFailurePolicy::default(),
            run_deadline: Some(DEFAULT_RUN_DEADLINE),
        }
    }
}

/// Errors that end a run
#[derive(Debug, Error)]
pub enum RunError {
    /// The context failed validation; nothing was dispatched
    #[error(transparent)]
    Context(#[from] ContextError),

    /// The selection contained no capabilities
    #[error("no analyses selected")]
    EmptySelection,

    /// A call failed under the abort policy
    #[error("{kind} analysis failed: {source}")]
    Analysis {
        kind: AnalysisKind,
        #[source]
        source: ClientError,
    },

    /// The run deadline elapsed before every call settled
    #[error("run deadline of {limit:?} elapsed before every analysis settled")]
    Deadline { limit: Duration },
}

/// Outcome of a completed run, bucketed by slot status in catalog order
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of calls actually dispatched
    pub dispatched: usize,
    pub succeeded: Vec<AnalysisKind>,
    pub failed: Vec<(AnalysisKind, String)>,
    /// Slots that never ran, with the reason
    pub skipped: Vec<(AnalysisKind, String)>,
    pub overall_score: Option<u8>,
    pub elapsed: Duration,
}

/// One eligible capability with its request payload built ahead of dispatch
enum PlannedCall {
    Ats {
        job_description: String,
        resume: ResumeAttachment,
    },
    SkillGap(ResumeAndJobRequest),
    RoleFit(ResumeAndJobRequest),
    Achievements(ResumeOnlyRequest),
    Rewrite(RewriteRequest),
    CoverLetter(CoverLetterRequest),
    Optimization(ResumeAndJobRequest),
    Visualizations(ResumeAndJobRequest),
    CareerPath(ResumeOnlyRequest),
    JobMarket(JobMarketRequest),
    JobAlerts(JobAlertsRequest),
    Portfolio(ResumeOnlyRequest),
    Interview(ResumeAndJobRequest),
    Progress(ProgressRequest),
    Salary(SalaryBenchmarkRequest),
}

impl PlannedCall {
    /// Builds the payload for an eligible capability
    ///
    /// Returns `None` only when the context cannot supply the payload, which
    /// eligibility already rules out for every kind except an ATS call whose
    /// attachment disappeared.
    fn build(kind: AnalysisKind, ctx: &AnalysisContext) -> Option<PlannedCall> {
        let call = match kind {
            AnalysisKind::Ats => PlannedCall::Ats {
                job_description: ctx.job_description.clone(),
                resume: ctx.resume_file.clone()?,
            },
            AnalysisKind::SkillGap => PlannedCall::SkillGap(ResumeAndJobRequest::from_context(ctx)),
            AnalysisKind::RoleFit => PlannedCall::RoleFit(ResumeAndJobRequest::from_context(ctx)),
            AnalysisKind::Achievements => {
                PlannedCall::Achievements(ResumeOnlyRequest::from_context(ctx))
            }
            AnalysisKind::Rewrite => PlannedCall::Rewrite(RewriteRequest::from_context(ctx)),
            AnalysisKind::CoverLetter => {
                PlannedCall::CoverLetter(CoverLetterRequest::from_context(ctx))
            }
            AnalysisKind::Optimization => {
                PlannedCall::Optimization(ResumeAndJobRequest::from_context(ctx))
            }
            AnalysisKind::Visualizations => {
                PlannedCall::Visualizations(ResumeAndJobRequest::from_context(ctx))
            }
            AnalysisKind::CareerPath => {
                PlannedCall::CareerPath(ResumeOnlyRequest::from_context(ctx))
            }
            AnalysisKind::JobMarket => PlannedCall::JobMarket(JobMarketRequest::from_context(ctx)),
            AnalysisKind::JobAlerts => PlannedCall::JobAlerts(JobAlertsRequest::from_context(ctx)),
            AnalysisKind::Portfolio => PlannedCall::Portfolio(ResumeOnlyRequest::from_context(ctx)),
            AnalysisKind::Interview => {
                PlannedCall::Interview(ResumeAndJobRequest::from_context(ctx))
            }
            AnalysisKind::Progress => PlannedCall::Progress(ProgressRequest::from_context(ctx)),
            AnalysisKind::Salary => PlannedCall::Salary(SalaryBenchmarkRequest::from_context(ctx)),
        };
        Some(call)
    }

    fn kind(&self) -> AnalysisKind {
        match self {
            PlannedCall::Ats { .. } => AnalysisKind::Ats,
            PlannedCall::SkillGap(_) => AnalysisKind::SkillGap,
            PlannedCall::RoleFit(_) => AnalysisKind::RoleFit,
            PlannedCall::Achievements(_) => AnalysisKind::Achievements,
            PlannedCall::Rewrite(_) => AnalysisKind::Rewrite,
            PlannedCall::CoverLetter(_) => AnalysisKind::CoverLetter,
            PlannedCall::Optimization(_) => AnalysisKind::Optimization,
            PlannedCall::Visualizations(_) => AnalysisKind::Visualizations,
            PlannedCall::CareerPath(_) => AnalysisKind::CareerPath,
            PlannedCall::JobMarket(_) => AnalysisKind::JobMarket,
            PlannedCall::JobAlerts(_) => AnalysisKind::JobAlerts,
            PlannedCall::Portfolio(_) => AnalysisKind::Portfolio,
            PlannedCall::Interview(_) => AnalysisKind::Interview,
            PlannedCall::Progress(_) => AnalysisKind::Progress,
            PlannedCall::Salary(_) => AnalysisKind::Salary,
        }
    }

    /// Executes the call against the API and wraps the report
    async fn execute(self, api: &dyn CopilotApi) -> Result<AnalysisReport, ClientError> {
        match self {
            PlannedCall::Ats {
                job_description,
                resume,
            } => api
                .analyze_ats(&job_description, resume)
                .await
                .map(AnalysisReport::Ats),
            PlannedCall::SkillGap(req) => api.skill_gap(req).await.map(AnalysisReport::SkillGap),
            PlannedCall::RoleFit(req) => api.role_fit(req).await.map(AnalysisReport::RoleFit),
            PlannedCall::Achievements(req) => {
                api.achievements(req).await.map(AnalysisReport::Achievements)
            }
            PlannedCall::Rewrite(req) => api.rewrite(req).await.map(AnalysisReport::Rewrite),
            PlannedCall::CoverLetter(req) => {
                api.cover_letter(req).await.map(AnalysisReport::CoverLetter)
            }
            PlannedCall::Optimization(req) => api
                .one_click_optimize(req)
                .await
                .map(AnalysisReport::Optimization),
            PlannedCall::Visualizations(req) => api
                .visualization_summary(req)
                .await
                .map(AnalysisReport::Visualizations),
            PlannedCall::CareerPath(req) => {
                api.career_path(req).await.map(AnalysisReport::CareerPath)
            }
            PlannedCall::JobMarket(req) => api.job_market(req).await.map(AnalysisReport::JobMarket),
            PlannedCall::JobAlerts(req) => api.job_alerts(req).await.map(AnalysisReport::JobAlerts),
            PlannedCall::Portfolio(req) => api.portfolio(req).await.map(AnalysisReport::Portfolio),
            PlannedCall::Interview(req) => api
                .interview_readiness(req)
                .await
                .map(AnalysisReport::Interview),
            PlannedCall::Progress(req) => api
                .progress_tracker(req)
                .await
                .map(AnalysisReport::Progress),
            PlannedCall::Salary(req) => api
                .salary_benchmark(req)
                .await
                .map(AnalysisReport::Salary),
        }
    }
}

/// Runs analysis batches against the Copilot API
pub struct Orchestrator {
    api: Arc<dyn CopilotApi>,
    store: ResultStore,
    options: RunOptions,
}

impl Orchestrator {
    /// Creates an orchestrator with the default options
    pub fn new(api: Arc<dyn CopilotApi>) -> Self {
        Self::with_options(api, RunOptions::default())
    }

    pub fn with_options(api: Arc<dyn CopilotApi>, options: RunOptions) -> Self {
        Self {
            api,
            store: ResultStore::new(),
            options,
        }
    }

    /// Handle to the result store; clones observe the same run
    pub fn store(&self) -> ResultStore {
        self.store.clone()
    }

    /// Runs one analysis batch and waits for every dispatched call to settle
    ///
    /// Duplicate selections collapse. Selected capabilities whose inputs are
    /// missing are skipped, not failed. Under
    /// [`BatchFailurePolicy::Continue`] the run completes with per-slot
    /// failures recorded; under [`BatchFailurePolicy::Abort`] the first
    /// failure in catalog order is returned once every call has settled, with
    /// the settled successes left in the store.
    pub async fn run(
        &self,
        ctx: &AnalysisContext,
        selection: &[AnalysisKind],
    ) -> Result<RunSummary, RunError> {
        ctx.validate()?;

        let selected: BTreeSet<AnalysisKind> = selection.iter().copied().collect();
        if selected.is_empty() {
            return Err(RunError::EmptySelection);
        }

        let started = Instant::now();
        self.store.reset();

        // Plan: mark the slots that will not run and build payloads for the rest.
        let mut plan = Vec::new();
        for kind in AnalysisKind::ALL {
            if !selected.contains(&kind) {
                self.store.mark_not_run(kind, "not selected");
                continue;
            }
            let requirement = Requirement::for_kind(kind);
            if !requirement.satisfied_by(ctx) {
                debug!("Skipping {}: requires {}", kind, requirement.description());
                self.store
                    .mark_not_run(kind, format!("requires {}", requirement.description()));
                continue;
            }
            match PlannedCall::build(kind, ctx) {
                Some(call) => plan.push(call),
                None => self
                    .store
                    .mark_not_run(kind, format!("requires {}", requirement.description())),
            }
        }

        info!(
            "Starting analysis run: {} of {} selected analyses eligible",
            plan.len(),
            selected.len()
        );

        let mut handles = Vec::new();
        for call in plan {
            let kind = call.kind();
            let api = Arc::clone(&self.api);
            let store = self.store.clone();

            let handle = tokio::spawn(async move {
                debug!("Dispatching {} analysis", kind);
                match call.execute(api.as_ref()).await {
                    Ok(report) => {
                        store.insert(report);
                        debug!("{} analysis settled", kind);
                        None
                    }
                    Err(e) => {
                        warn!("{} analysis failed: {}", kind, e);
                        store.mark_failed(kind, e.to_string());
                        Some(e)
                    }
                }
            });
            handles.push((kind, handle));
        }

        let dispatched = handles.len();
        let planned: Vec<AnalysisKind> = handles.iter().map(|(kind, _)| *kind).collect();
        let abort_handles: Vec<_> = handles
            .iter()
            .map(|(kind, handle)| (*kind, handle.abort_handle()))
            .collect();

        // Collects call failures in dispatch (catalog) order.
        let settle = async {
            let mut failures = Vec::new();
            for (kind, handle) in handles {
                match handle.await {
                    Ok(Some(error)) => failures.push((kind, error)),
                    Ok(None) => {}
                    Err(e) => {
                        warn!("Analysis task for {} stopped unexpectedly: {}", kind, e);
                        self.store.mark_failed(kind, "analysis task stopped unexpectedly");
                    }
                }
            }
            failures
        };

        let failures = match self.options.run_deadline {
            None => settle.await,
            Some(limit) => match time::timeout(limit, settle).await {
                Ok(failures) => failures,
                Err(_) => {
                    warn!(
                        "Run deadline of {:?} elapsed, aborting outstanding analyses",
                        limit
                    );
                    for (kind, abort) in &abort_handles {
                        if !abort.is_finished() {
                            debug!("Aborting {} analysis", kind);
                            abort.abort();
                        }
                    }
                    for kind in &planned {
                        if self.store.status(*kind).is_none() {
                            self.store.mark_failed(*kind, "run deadline elapsed");
                        }
                    }
                    if self.options.policy == BatchFailurePolicy::Abort {
                        return Err(RunError::Deadline { limit });
                    }
                    Vec::new()
                }
            },
        };

        if self.options.policy == BatchFailurePolicy::Abort {
            if let Some((kind, source)) = failures.into_iter().next() {
                return Err(RunError::Analysis { kind, source });
            }
        }

        let summary = self.build_summary(dispatched, started.elapsed());
        info!(
            "Analysis run settled in {:?}: {} succeeded, {} failed, {} skipped",
            summary.elapsed,
            summary.succeeded.len(),
            summary.failed.len(),
            summary.skipped.len()
        );

        Ok(summary)
    }

    fn build_summary(&self, dispatched: usize, elapsed: Duration) -> RunSummary {
        let mut summary = RunSummary {
            dispatched,
            succeeded: Vec::new(),
            failed: Vec::new(),
            skipped: Vec::new(),
            overall_score: self.store.overall_score(),
            elapsed,
        };

        for (kind, status) in self.store.statuses() {
            match status {
                SlotStatus::Succeeded => summary.succeeded.push(kind),
                SlotStatus::Failed { error } => summary.failed.push((kind, error)),
                SlotStatus::NotRun { reason } => summary.skipped.push((kind, reason)),
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use careerpilot_client::Result;
    use careerpilot_core::dto::report::{
        AchievementsReport, AtsReport, CareerPathReport, CoverLetterReport, InterviewReport,
        JobAlertsReport, JobMarketReport, OptimizationReport, PortfolioReport, ProgressReport,
        RewriteReport, RoleFitReport, SalaryReport, SkillGapReport, VisualizationReport,
    };
    use std::sync::Mutex;

    struct FakeApi {
        failing: BTreeSet<AnalysisKind>,
        delay: Option<Duration>,
        calls: Mutex<Vec<AnalysisKind>>,
    }

    impl FakeApi {
        fn new() -> Self {
            Self {
                failing: BTreeSet::new(),
                delay: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing(kinds: impl IntoIterator<Item = AnalysisKind>) -> Self {
            Self {
                failing: kinds.into_iter().collect(),
                ..Self::new()
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::new()
            }
        }

        fn calls(&self) -> Vec<AnalysisKind> {
            self.calls.lock().unwrap().clone()
        }

        async fn gate(&self, kind: AnalysisKind) -> Result<()> {
            self.calls.lock().unwrap().push(kind);
            if let Some(delay) = self.delay {
                time::sleep(delay).await;
            }
            if self.failing.contains(&kind) {
                return Err(ClientError::api_error(500, format!("{kind} exploded")));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CopilotApi for FakeApi {
        async fn analyze_ats(
            &self,
            _job_description: &str,
            _resume: ResumeAttachment,
        ) -> Result<AtsReport> {
            self.gate(AnalysisKind::Ats).await?;
            Ok(AtsReport {
                jd_match: "82%".to_string(),
                missing_keywords: vec!["terraform".to_string()],
                profile_summary: "Solid platform profile.".to_string(),
            })
        }

        async fn skill_gap(&self, _request: ResumeAndJobRequest) -> Result<SkillGapReport> {
            self.gate(AnalysisKind::SkillGap).await?;
            Ok(SkillGapReport {
                missing_hard_skills: Some(vec!["Go".to_string()]),
                missing_soft_skills: None,
                course_recommendations: None,
            })
        }

        async fn role_fit(&self, _request: ResumeAndJobRequest) -> Result<RoleFitReport> {
            self.gate(AnalysisKind::RoleFit).await?;
            Ok(RoleFitReport {
                overall_fit: Some("74".to_string()),
                skill_alignment: None,
                experience_alignment: None,
                growth_potential: None,
                insights: None,
            })
        }

        async fn achievements(&self, _request: ResumeOnlyRequest) -> Result<AchievementsReport> {
            self.gate(AnalysisKind::Achievements).await?;
            Ok(AchievementsReport {
                quantified_bullets: Some(vec!["Cut build times by 40%".to_string()]),
                methodology_notes: None,
            })
        }

        async fn rewrite(&self, _request: RewriteRequest) -> Result<RewriteReport> {
            self.gate(AnalysisKind::Rewrite).await?;
            Ok(RewriteReport {
                rewritten_resume: "Rewritten resume body.".to_string(),
                key_adjustments: vec!["Led platform migration".to_string()],
                keyword_alignment_score: String::new(),
            })
        }

        async fn cover_letter(&self, _request: CoverLetterRequest) -> Result<CoverLetterReport> {
            self.gate(AnalysisKind::CoverLetter).await?;
            Ok(CoverLetterReport {
                cover_letter: "Dear hiring team,".to_string(),
                talking_points: Vec::new(),
            })
        }

        async fn one_click_optimize(
            &self,
            _request: ResumeAndJobRequest,
        ) -> Result<OptimizationReport> {
            self.gate(AnalysisKind::Optimization).await?;
            Ok(OptimizationReport {
                optimized_summary: String::new(),
                priority_edits: vec!["Tighten the summary".to_string()],
                keyword_matches: Vec::new(),
            })
        }

        async fn visualization_summary(
            &self,
            _request: ResumeAndJobRequest,
        ) -> Result<VisualizationReport> {
            self.gate(AnalysisKind::Visualizations).await?;
            Ok(VisualizationReport {
                skill_heatmap: None,
                keyword_cloud: None,
                progress_tracker: None,
            })
        }

        async fn career_path(&self, _request: ResumeOnlyRequest) -> Result<CareerPathReport> {
            self.gate(AnalysisKind::CareerPath).await?;
            Ok(CareerPathReport {
                recommended_roles: None,
                upskilling_paths: None,
                long_term_projection: None,
            })
        }

        async fn job_market(&self, _request: JobMarketRequest) -> Result<JobMarketReport> {
            self.gate(AnalysisKind::JobMarket).await?;
            Ok(JobMarketReport {
                demand_level: Some("High".to_string()),
                top_skills: None,
                emerging_roles: None,
                market_commentary: None,
            })
        }

        async fn job_alerts(&self, _request: JobAlertsRequest) -> Result<JobAlertsReport> {
            self.gate(AnalysisKind::JobAlerts).await?;
            Ok(JobAlertsReport { job_alerts: None })
        }

        async fn portfolio(&self, _request: ResumeOnlyRequest) -> Result<PortfolioReport> {
            self.gate(AnalysisKind::Portfolio).await?;
            Ok(PortfolioReport {
                site_structure: None,
                highlight_projects: None,
                call_to_actions: None,
            })
        }

        async fn interview_readiness(
            &self,
            _request: ResumeAndJobRequest,
        ) -> Result<InterviewReport> {
            self.gate(AnalysisKind::Interview).await?;
            Ok(InterviewReport {
                behavioral_questions: None,
                technical_questions: None,
                prep_tips: None,
            })
        }

        async fn progress_tracker(&self, _request: ProgressRequest) -> Result<ProgressReport> {
            self.gate(AnalysisKind::Progress).await?;
            Ok(ProgressReport {
                progress_score: Some("64%".to_string()),
                milestones_achieved: None,
                next_milestones: None,
                skill_development_plan: None,
                career_trajectory_summary: None,
            })
        }

        async fn salary_benchmark(
            &self,
            _request: SalaryBenchmarkRequest,
        ) -> Result<SalaryReport> {
            self.gate(AnalysisKind::Salary).await?;
            Ok(SalaryReport {
                median_salary: Some("$150k".to_string()),
                percentile_25: None,
                percentile_75: None,
                data_sources: None,
            })
        }
    }

    const JOB_DESCRIPTION: &str = "We are hiring a staff platform engineer to own build and \
        release tooling across the company, improve developer workflows, harden the delivery \
        pipelines, and mentor a growing team of infrastructure engineers.";

    fn full_context() -> AnalysisContext {
        AnalysisContext {
            resume_text: "Senior platform engineer with ten years of experience.".to_string(),
            resume_file: Some(ResumeAttachment {
                file_name: "resume.pdf".to_string(),
                bytes: vec![0x25, 0x50, 0x44, 0x46],
            }),
            job_description: JOB_DESCRIPTION.to_string(),
            target_role: "Staff Engineer".to_string(),
            focus_role: "Platform Lead".to_string(),
            location: "Berlin".to_string(),
            candidate_name: "Alex".to_string(),
            experience_years: Some(8.0),
            certifications: vec!["CKA".to_string()],
            skills_acquired: vec!["Kubernetes".to_string()],
            ..Default::default()
        }
    }

    fn text_only_context() -> AnalysisContext {
        AnalysisContext {
            resume_text: "Senior platform engineer with ten years of experience.".to_string(),
            job_description: JOB_DESCRIPTION.to_string(),
            ..Default::default()
        }
    }

    fn orchestrator(api: Arc<FakeApi>, policy: BatchFailurePolicy) -> Orchestrator {
        Orchestrator::with_options(
            api,
            RunOptions {
                policy,
                run_deadline: None,
            },
        )
    }

    #[tokio::test]
    async fn test_full_context_settles_every_capability() {
        let api = Arc::new(FakeApi::new());
        let orch = orchestrator(Arc::clone(&api), BatchFailurePolicy::Continue);

        let summary = orch
            .run(&full_context(), &AnalysisKind::ALL)
            .await
            .unwrap();

        assert_eq!(summary.dispatched, 15);
        assert_eq!(summary.succeeded.len(), 15);
        assert!(summary.failed.is_empty());
        assert!(summary.skipped.is_empty());
        assert!(summary.overall_score.is_some());
        assert_eq!(orch.store().report_count(), 15);
        assert_eq!(api.calls().len(), 15);
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_other_reports() {
        let api = Arc::new(FakeApi::failing([AnalysisKind::SkillGap]));
        let orch = orchestrator(api, BatchFailurePolicy::Continue);

        let selection = [
            AnalysisKind::SkillGap,
            AnalysisKind::RoleFit,
            AnalysisKind::Achievements,
            AnalysisKind::Rewrite,
        ];
        let summary = orch.run(&text_only_context(), &selection).await.unwrap();

        assert_eq!(summary.dispatched, 4);
        assert_eq!(summary.succeeded.len(), 3);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, AnalysisKind::SkillGap);

        let store = orch.store();
        assert!(store.report(AnalysisKind::RoleFit).is_some());
        assert!(store.report(AnalysisKind::SkillGap).is_none());
        assert!(
            store
                .status(AnalysisKind::SkillGap)
                .is_some_and(|s| s.is_failed())
        );
    }

    #[tokio::test]
    async fn test_abort_policy_surfaces_first_failure_in_catalog_order() {
        let api = Arc::new(FakeApi::failing([
            AnalysisKind::RoleFit,
            AnalysisKind::Rewrite,
        ]));
        let orch = orchestrator(Arc::clone(&api), BatchFailurePolicy::Abort);

        let selection = [
            AnalysisKind::SkillGap,
            AnalysisKind::RoleFit,
            AnalysisKind::Rewrite,
        ];
        let err = orch
            .run(&text_only_context(), &selection)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RunError::Analysis {
                kind: AnalysisKind::RoleFit,
                ..
            }
        ));
        // Every call still settled before the run failed.
        assert_eq!(api.calls().len(), 3);
        assert!(orch.store().report(AnalysisKind::SkillGap).is_some());
    }

    #[tokio::test]
    async fn test_empty_selection_is_rejected() {
        let orch = orchestrator(Arc::new(FakeApi::new()), BatchFailurePolicy::Continue);
        let err = orch.run(&text_only_context(), &[]).await.unwrap_err();
        assert!(matches!(err, RunError::EmptySelection));
    }

    #[tokio::test]
    async fn test_invalid_context_fails_before_dispatch() {
        let api = Arc::new(FakeApi::new());
        let orch = orchestrator(Arc::clone(&api), BatchFailurePolicy::Continue);

        let mut ctx = text_only_context();
        ctx.job_description = "too short".to_string();

        let err = orch.run(&ctx, &AnalysisKind::ALL).await.unwrap_err();
        assert!(matches!(err, RunError::Context(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_ineligible_capabilities_are_skipped_not_failed() {
        let api = Arc::new(FakeApi::new());
        let orch = orchestrator(Arc::clone(&api), BatchFailurePolicy::Continue);

        let summary = orch
            .run(&text_only_context(), &AnalysisKind::ALL)
            .await
            .unwrap();

        // Text alone unlocks ten capabilities; the rest are skipped.
        assert_eq!(summary.dispatched, 10);
        assert_eq!(summary.skipped.len(), 5);
        assert!(summary.failed.is_empty());

        let calls = api.calls();
        for kind in [
            AnalysisKind::Ats,
            AnalysisKind::JobMarket,
            AnalysisKind::JobAlerts,
            AnalysisKind::Progress,
            AnalysisKind::Salary,
        ] {
            assert!(!calls.contains(&kind), "{kind} should not be dispatched");
            let status = orch.store().status(kind);
            assert!(
                matches!(status, Some(SlotStatus::NotRun { ref reason }) if reason.starts_with("requires")),
                "{kind} should be skipped with a requirement reason, got {status:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_runs_reset_the_previous_results() {
        let orch = orchestrator(Arc::new(FakeApi::new()), BatchFailurePolicy::Continue);
        let ctx = text_only_context();

        orch.run(&ctx, &[AnalysisKind::RoleFit]).await.unwrap();
        assert!(orch.store().report(AnalysisKind::RoleFit).is_some());

        orch.run(&ctx, &[AnalysisKind::Rewrite]).await.unwrap();
        let store = orch.store();
        assert!(store.report(AnalysisKind::RoleFit).is_none());
        assert_eq!(
            store.status(AnalysisKind::RoleFit),
            Some(SlotStatus::NotRun {
                reason: "not selected".to_string()
            })
        );
        assert!(store.report(AnalysisKind::Rewrite).is_some());
    }

    #[tokio::test]
    async fn test_duplicate_selection_collapses() {
        let api = Arc::new(FakeApi::new());
        let orch = orchestrator(Arc::clone(&api), BatchFailurePolicy::Continue);

        let selection = [AnalysisKind::RoleFit, AnalysisKind::RoleFit];
        let summary = orch.run(&text_only_context(), &selection).await.unwrap();

        assert_eq!(summary.dispatched, 1);
        assert_eq!(api.calls(), vec![AnalysisKind::RoleFit]);
    }

    #[tokio::test]
    async fn test_deadline_marks_outstanding_slots_failed() {
        let api = Arc::new(FakeApi::slow(Duration::from_millis(500)));
        let orch = Orchestrator::with_options(
            api,
            RunOptions {
                policy: BatchFailurePolicy::Continue,
                run_deadline: Some(Duration::from_millis(50)),
            },
        );

        let selection = [AnalysisKind::SkillGap, AnalysisKind::RoleFit];
        let summary = orch.run(&text_only_context(), &selection).await.unwrap();

        assert_eq!(summary.dispatched, 2);
        assert_eq!(summary.failed.len(), 2);
        for (_, error) in &summary.failed {
            assert_eq!(error, "run deadline elapsed");
        }
    }

    #[tokio::test]
    async fn test_deadline_fails_a_strict_run() {
        let api = Arc::new(FakeApi::slow(Duration::from_millis(500)));
        let orch = Orchestrator::with_options(
            api,
            RunOptions {
                policy: BatchFailurePolicy::Abort,
                run_deadline: Some(Duration::from_millis(50)),
            },
        );

        let err = orch
            .run(&text_only_context(), &[AnalysisKind::SkillGap])
            .await
            .unwrap_err();
        assert!(matches!(err, RunError::Deadline { .. }));
    }
}
