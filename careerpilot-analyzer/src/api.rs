//! Copilot API seam
//!
//! The orchestrator talks to the backend through this trait rather than
//! through the HTTP client directly, so tests can substitute an in-memory
//! implementation. `CopilotClient` is the production implementation.

use async_trait::async_trait;

use careerpilot_client::{CopilotClient, Result};
use careerpilot_core::domain::context::ResumeAttachment;
use careerpilot_core::dto::report::{
    AchievementsReport, AtsReport, CareerPathReport, CoverLetterReport, InterviewReport,
    JobAlertsReport, JobMarketReport, OptimizationReport, PortfolioReport, ProgressReport,
    RewriteReport, RoleFitReport, SalaryReport, SkillGapReport, VisualizationReport,
};
use careerpilot_core::dto::request::{
    CoverLetterRequest, JobAlertsRequest, JobMarketRequest, ProgressRequest, ResumeAndJobRequest,
    ResumeOnlyRequest, RewriteRequest, SalaryBenchmarkRequest,
};

/// Backend calls the orchestrator can dispatch, one per analysis capability
#[async_trait]
pub trait CopilotApi: Send + Sync {
    /// Scores a resume file against a job description
    ///
    /// The resume is uploaded as a file attachment; every other capability
    /// works from extracted resume text.
    async fn analyze_ats(
        &self,
        job_description: &str,
        resume: ResumeAttachment,
    ) -> Result<AtsReport>;

    /// Finds skills the job asks for that the resume lacks
    async fn skill_gap(&self, request: ResumeAndJobRequest) -> Result<SkillGapReport>;

    /// Assesses how well the candidate fits the role
    async fn role_fit(&self, request: ResumeAndJobRequest) -> Result<RoleFitReport>;

    /// Surfaces underselling bullet points and suggests quantified rewrites
    async fn achievements(&self, request: ResumeOnlyRequest) -> Result<AchievementsReport>;

    /// Rewrites the resume toward the focus role in the requested tone
    async fn rewrite(&self, request: RewriteRequest) -> Result<RewriteReport>;

    /// Drafts a cover letter for the job description
    async fn cover_letter(&self, request: CoverLetterRequest) -> Result<CoverLetterReport>;

    /// Produces prioritized one-click resume edits for the job description
    async fn one_click_optimize(&self, request: ResumeAndJobRequest) -> Result<OptimizationReport>;

    /// Builds skill-heat, keyword, and milestone summaries for charts
    async fn visualization_summary(
        &self,
        request: ResumeAndJobRequest,
    ) -> Result<VisualizationReport>;

    /// Suggests next career moves based on the resume
    async fn career_path(&self, request: ResumeOnlyRequest) -> Result<CareerPathReport>;

    /// Summarizes demand, salaries, and hiring companies for a role
    async fn job_market(&self, request: JobMarketRequest) -> Result<JobMarketReport>;

    /// Matches the resume against current openings for the target role
    async fn job_alerts(&self, request: JobAlertsRequest) -> Result<JobAlertsReport>;

    /// Proposes a portfolio site structure built from the resume
    async fn portfolio(&self, request: ResumeOnlyRequest) -> Result<PortfolioReport>;

    /// Generates likely interview questions and an overall readiness read
    async fn interview_readiness(&self, request: ResumeAndJobRequest) -> Result<InterviewReport>;

    /// Tracks skill growth against the candidate's stated progress
    async fn progress_tracker(&self, request: ProgressRequest) -> Result<ProgressReport>;

    /// Benchmarks expected salary for the target role and location
    async fn salary_benchmark(&self, request: SalaryBenchmarkRequest) -> Result<SalaryReport>;
}

#[async_trait]
impl CopilotApi for CopilotClient {
    async fn analyze_ats(
        &self,
        job_description: &str,
        resume: ResumeAttachment,
    ) -> Result<AtsReport> {
        CopilotClient::analyze_ats(self, job_description, resume).await
    }

    async fn skill_gap(&self, request: ResumeAndJobRequest) -> Result<SkillGapReport> {
        CopilotClient::skill_gap(self, request).await
    }

    async fn role_fit(&self, request: ResumeAndJobRequest) -> Result<RoleFitReport> {
        CopilotClient::role_fit(self, request).await
    }

    async fn achievements(&self, request: ResumeOnlyRequest) -> Result<AchievementsReport> {
        CopilotClient::achievements(self, request).await
    }

    async fn rewrite(&self, request: RewriteRequest) -> Result<RewriteReport> {
        CopilotClient::rewrite(self, request).await
    }

    async fn cover_letter(&self, request: CoverLetterRequest) -> Result<CoverLetterReport> {
        CopilotClient::cover_letter(self, request).await
    }

    async fn one_click_optimize(&self, request: ResumeAndJobRequest) -> Result<OptimizationReport> {
        CopilotClient::one_click_optimize(self, request).await
    }

    async fn visualization_summary(
        &self,
        request: ResumeAndJobRequest,
    ) -> Result<VisualizationReport> {
        CopilotClient::visualization_summary(self, request).await
    }

    async fn career_path(&self, request: ResumeOnlyRequest) -> Result<CareerPathReport> {
        CopilotClient::career_path(self, request).await
    }

    async fn job_market(&self, request: JobMarketRequest) -> Result<JobMarketReport> {
        CopilotClient::job_market(self, request).await
    }

    async fn job_alerts(&self, request: JobAlertsRequest) -> Result<JobAlertsReport> {
        CopilotClient::job_alerts(self, request).await
    }

    async fn portfolio(&self, request: ResumeOnlyRequest) -> Result<PortfolioReport> {
        CopilotClient::portfolio(self, request).await
    }

    async fn interview_readiness(&self, request: ResumeAndJobRequest) -> Result<InterviewReport> {
        CopilotClient::interview_readiness(self, request).await
    }

    async fn progress_tracker(&self, request: ProgressRequest) -> Result<ProgressReport> {
        CopilotClient::progress_tracker(self, request).await
    }

    async fn salary_benchmark(&self, request: SalaryBenchmarkRequest) -> Result<SalaryReport> {
        CopilotClient::salary_benchmark(self, request).await
    }
}
