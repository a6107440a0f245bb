//! Visualization, portfolio, interview, and salary endpoints

use crate::CopilotClient;
use crate::error::Result;
use careerpilot_core::dto::report::{
    InterviewReport, PortfolioReport, SalaryReport, VisualizationReport,
};
use careerpilot_core::dto::request::{
    ResumeAndJobRequest, ResumeOnlyRequest, SalaryBenchmarkRequest,
};

impl CopilotClient {
    /// Generate skill heatmap, keyword cloud, and milestone tracker data
    pub async fn visualization_summary(
        &self,
        req: ResumeAndJobRequest,
    ) -> Result<VisualizationReport> {
        self.post_json("/visualizations/summary", &req).await
    }

    /// Generate a portfolio site blueprint from the resume
    pub async fn portfolio(&self, req: ResumeOnlyRequest) -> Result<PortfolioReport> {
        self.post_json("/portfolio/generate", &req).await
    }

    /// Produce interview questions and prep tips
    pub async fn interview_readiness(&self, req: ResumeAndJobRequest) -> Result<InterviewReport> {
        self.post_json("/interview/readiness", &req).await
    }

    /// Benchmark compensation for the target role and location
    pub async fn salary_benchmark(&self, req: SalaryBenchmarkRequest) -> Result<SalaryReport> {
        self.post_json("/salary/benchmark", &req).await
    }
}
