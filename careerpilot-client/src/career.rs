//! Career planning endpoints

use crate::CopilotClient;
use crate::error::Result;
use careerpilot_core::dto::report::{CareerPathReport, CoachReply, JobMarketReport, ProgressReport};
use careerpilot_core::dto::request::{
    CoachRequest, JobMarketRequest, ProgressRequest, ResumeOnlyRequest,
};

impl CopilotClient {
    /// Forecast next-step roles and upskilling paths
    pub async fn career_path(&self, req: ResumeOnlyRequest) -> Result<CareerPathReport> {
        self.post_json("/career/path", &req).await
    }

    /// Summarize demand and skills for the target market
    pub async fn job_market(&self, req: JobMarketRequest) -> Result<JobMarketReport> {
        self.post_json("/career/job-market", &req).await
    }

    /// Measure career progress against certifications, skills, and applications
    pub async fn progress_tracker(&self, req: ProgressRequest) -> Result<ProgressReport> {
        self.post_json("/career/progress-tracker", &req).await
    }

    /// Ask the career coach one question, with conversation history
    ///
    /// # Arguments
    /// * `req` - The new message, prior turns, and optional resume context
    ///
    /// # Returns
    /// The coach's reply
    pub async fn coach(&self, req: CoachRequest) -> Result<CoachReply> {
        self.post_json("/career/coach", &req).await
    }
}
