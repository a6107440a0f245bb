//! Resume analysis endpoints

use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::CopilotClient;
use crate::error::Result;
use careerpilot_core::domain::context::ResumeAttachment;
use careerpilot_core::dto::report::{
    AchievementsReport, AtsReport, CoverLetterReport, RewriteReport, RoleFitReport, SkillGapReport,
};
use careerpilot_core::dto::request::{
    CoverLetterRequest, ResumeAndJobRequest, ResumeOnlyRequest, RewriteRequest,
};

/// Content type guessed from the attachment file name
fn attachment_mime(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lower.ends_with(".doc") {
        "application/msword"
    } else if lower.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

impl CopilotClient {
    // =============================================================================
    // ATS Upload
    // =============================================================================

    /// Run the ATS compatibility check against an uploaded resume file
    ///
    /// The one capability that ships the resume as a file: the request is a
    /// multipart form with a `job_description` text field and the `resume`
    /// file part.
    ///
    /// # Arguments
    /// * `job_description` - The job description to compare against
    /// * `resume` - The resume file to upload
    ///
    /// # Returns
    /// The ATS comparison report
    pub async fn analyze_ats(
        &self,
        job_description: &str,
        resume: ResumeAttachment,
    ) -> Result<AtsReport> {
        let url = format!("{}/analyze", self.base_url);
        debug!(%url, file = %resume.file_name, "uploading resume for ATS analysis");

        let ResumeAttachment { file_name, bytes } = resume;
        let mime = attachment_mime(&file_name);
        let part = Part::bytes(bytes).file_name(file_name).mime_str(mime)?;

        let form = Form::new()
            .text("job_description", job_description.to_string())
            .part("resume", part);

        let response = self.client.post(&url).multipart(form).send().await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Resume JSON Endpoints
    // =============================================================================

    /// Compare resume skills against the job requirements
    pub async fn skill_gap(&self, req: ResumeAndJobRequest) -> Result<SkillGapReport> {
        self.post_json("/resume/skill-gap", &req).await
    }

    /// Score how well the resume fits the target role
    pub async fn role_fit(&self, req: ResumeAndJobRequest) -> Result<RoleFitReport> {
        self.post_json("/resume/role-fit", &req).await
    }

    /// Quantify the resume's achievement bullet points
    pub async fn achievements(&self, req: ResumeOnlyRequest) -> Result<AchievementsReport> {
        self.post_json("/resume/achievements", &req).await
    }

    /// Generate a tailored resume rewrite
    ///
    /// # Arguments
    /// * `req` - Resume, job description, and the tone/focus-role persona
    pub async fn rewrite(&self, req: RewriteRequest) -> Result<RewriteReport> {
        self.post_json("/resume/rewrite", &req).await
    }

    /// Draft a personalized cover letter
    pub async fn cover_letter(&self, req: CoverLetterRequest) -> Result<CoverLetterReport> {
        self.post_json("/resume/cover-letter", &req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_mime_guesses() {
        assert_eq!(attachment_mime("resume.pdf"), "application/pdf");
        assert_eq!(attachment_mime("Resume.PDF"), "application/pdf");
        assert_eq!(attachment_mime("resume.txt"), "text/plain");
        assert_eq!(attachment_mime("resume"), "application/octet-stream");
    }
}
