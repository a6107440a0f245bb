//! Job-focused endpoints

use crate::CopilotClient;
use crate::error::Result;
use careerpilot_core::dto::report::{JobAlertsReport, OptimizationReport};
use careerpilot_core::dto::request::{JobAlertsRequest, ResumeAndJobRequest};

impl CopilotClient {
    /// Produce prioritized edits and keyword matches for the job description
    pub async fn one_click_optimize(&self, req: ResumeAndJobRequest) -> Result<OptimizationReport> {
        self.post_json("/jobs/one-click-optimize", &req).await
    }

    /// Surface matching job openings for the target role and location
    pub async fn job_alerts(&self, req: JobAlertsRequest) -> Result<JobAlertsReport> {
        self.post_json("/jobs/alerts", &req).await
    }
}
