//! Analysis request context
//!
//! Everything a single analysis run needs as input: resume material, the job
//! description, and the persona fields (roles, tone, location, experience).
//! The context is assembled once by the caller and shared read-only by every
//! capability call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted job description length, in characters after trimming
pub const MIN_JOB_DESCRIPTION_LEN: usize = 120;

/// Fallback focus role used when neither focus nor target role is set
pub const DEFAULT_FOCUS_ROLE: &str = "Target Role";

/// Fallback applicant name used when none is provided
pub const DEFAULT_CANDIDATE_NAME: &str = "Candidate";

/// Fallback tone for generated material
pub const DEFAULT_TONE: &str = "Professional";

/// Fallback years of experience for salary benchmarking
pub const DEFAULT_EXPERIENCE_YEARS: f64 = 3.0;

/// Resume file captured for the ATS upload
#[derive(Debug, Clone)]
pub struct ResumeAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One tracked job application, parsed from a `Company | Role | Status` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub company: String,
    pub role: String,
    pub status: String,
}

/// Input for a single analysis run
///
/// Validation covers only the hard requirements shared by every run; whether
/// an individual capability can fire is decided per capability from the
/// optional fields.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    pub resume_text: String,
    pub resume_file: Option<ResumeAttachment>,
    pub job_description: String,
    pub target_role: String,
    pub focus_role: String,
    pub location: String,
    pub tone: String,
    pub candidate_name: String,
    pub experience_years: Option<f64>,
    pub certifications: Vec<String>,
    pub skills_acquired: Vec<String>,
    pub job_applications: Vec<JobApplication>,
}

impl Default for AnalysisContext {
    fn default() -> Self {
        Self {
            resume_text: String::new(),
            resume_file: None,
            job_description: String::new(),
            target_role: String::new(),
            focus_role: String::new(),
            location: String::new(),
            tone: DEFAULT_TONE.to_string(),
            candidate_name: String::new(),
            experience_years: None,
            certifications: Vec::new(),
            skills_acquired: Vec::new(),
            job_applications: Vec::new(),
        }
    }
}

impl AnalysisContext {
    /// Validates the hard requirements every run shares
    pub fn validate(&self) -> Result<(), ContextError> {
        let jd = self.job_description.trim();

        if jd.is_empty() {
            return Err(ContextError::MissingJobDescription);
        }

        if jd.len() < MIN_JOB_DESCRIPTION_LEN {
            return Err(ContextError::JobDescriptionTooShort {
                minimum: MIN_JOB_DESCRIPTION_LEN,
            });
        }

        if self.resume_text.is_empty() && self.resume_file.is_none() {
            return Err(ContextError::MissingResume);
        }

        Ok(())
    }

    /// True when resume text is available for the text-based capabilities
    pub fn has_resume_text(&self) -> bool {
        !self.resume_text.is_empty()
    }

    /// Focus role with fallback to the target role, then the fixed default
    pub fn effective_focus_role(&self) -> &str {
        if !self.focus_role.is_empty() {
            &self.focus_role
        } else if !self.target_role.is_empty() {
            &self.target_role
        } else {
            DEFAULT_FOCUS_ROLE
        }
    }

    /// Applicant name with fallback to the fixed default
    pub fn applicant_name(&self) -> &str {
        if self.candidate_name.is_empty() {
            DEFAULT_CANDIDATE_NAME
        } else {
            &self.candidate_name
        }
    }

    /// Tone with fallback to the fixed default
    pub fn effective_tone(&self) -> &str {
        if self.tone.is_empty() {
            DEFAULT_TONE
        } else {
            &self.tone
        }
    }

    /// Role used for market-facing capabilities: target role, else focus role
    pub fn market_role(&self) -> Option<&str> {
        if !self.target_role.is_empty() {
            Some(&self.target_role)
        } else if !self.focus_role.is_empty() {
            Some(&self.focus_role)
        } else {
            None
        }
    }
}

/// Validation failures raised before any network call is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// No job description was provided
    #[error("job description is required")]
    MissingJobDescription,

    /// The job description is too short to analyze meaningfully
    #[error("job description must be at least {minimum} characters")]
    JobDescriptionTooShort { minimum: usize },

    /// Neither resume text nor a resume attachment was provided
    #[error("resume text or a resume attachment is required")]
    MissingResume,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_context() -> AnalysisContext {
        AnalysisContext {
            resume_text: "Senior engineer with ten years of experience.".to_string(),
            job_description: "We are hiring a senior platform engineer to own our build and \
                              release tooling, improve developer workflows, and mentor the team."
                .to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_context_passes() {
        assert!(valid_context().validate().is_ok());
    }

    #[test]
    fn test_missing_job_description() {
        let mut ctx = valid_context();
        ctx.job_description = "   ".to_string();
        assert_eq!(ctx.validate(), Err(ContextError::MissingJobDescription));
    }

    #[test]
    fn test_short_job_description() {
        let mut ctx = valid_context();
        ctx.job_description = "Engineer wanted.".to_string();
        assert_eq!(
            ctx.validate(),
            Err(ContextError::JobDescriptionTooShort {
                minimum: MIN_JOB_DESCRIPTION_LEN
            })
        );
    }

    #[test]
    fn test_missing_resume() {
        let mut ctx = valid_context();
        ctx.resume_text = String::new();
        assert_eq!(ctx.validate(), Err(ContextError::MissingResume));
    }

    #[test]
    fn test_attachment_alone_satisfies_resume_requirement() {
        let mut ctx = valid_context();
        ctx.resume_text = String::new();
        ctx.resume_file = Some(ResumeAttachment {
            file_name: "resume.pdf".to_string(),
            bytes: vec![0x25, 0x50, 0x44, 0x46],
        });
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_focus_role_fallback_chain() {
        let mut ctx = AnalysisContext::default();
        assert_eq!(ctx.effective_focus_role(), DEFAULT_FOCUS_ROLE);

        ctx.target_role = "Staff Engineer".to_string();
        assert_eq!(ctx.effective_focus_role(), "Staff Engineer");

        ctx.focus_role = "Platform Lead".to_string();
        assert_eq!(ctx.effective_focus_role(), "Platform Lead");
    }

    #[test]
    fn test_market_role_prefers_target() {
        let mut ctx = AnalysisContext::default();
        assert_eq!(ctx.market_role(), None);

        ctx.focus_role = "Platform Lead".to_string();
        assert_eq!(ctx.market_role(), Some("Platform Lead"));

        ctx.target_role = "Staff Engineer".to_string();
        assert_eq!(ctx.market_role(), Some("Staff Engineer"));
    }
}
