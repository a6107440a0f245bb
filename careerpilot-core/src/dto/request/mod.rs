//! Request DTOs for the Copilot API
//!
//! One struct per request body, each with a constructor that applies the
//! payload defaulting rules to an [`AnalysisContext`]. Serialized field names
//! are the wire names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::context::{AnalysisContext, DEFAULT_EXPERIENCE_YEARS, JobApplication};

/// Body shared by the capabilities that compare resume and job description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAndJobRequest {
    pub resume_text: String,
    pub job_description: String,
}

impl ResumeAndJobRequest {
    pub fn from_context(ctx: &AnalysisContext) -> Self {
        Self {
            resume_text: ctx.resume_text.clone(),
            job_description: ctx.job_description.clone(),
        }
    }
}

/// Body for the capabilities that look at the resume alone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeOnlyRequest {
    pub resume_text: String,
}

impl ResumeOnlyRequest {
    pub fn from_context(ctx: &AnalysisContext) -> Self {
        Self {
            resume_text: ctx.resume_text.clone(),
        }
    }
}

/// Body for the tailored resume rewrite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub resume_text: String,
    pub job_description: String,
    pub tone: String,
    pub focus_role: String,
}

impl RewriteRequest {
    pub fn from_context(ctx: &AnalysisContext) -> Self {
        Self {
            resume_text: ctx.resume_text.clone(),
            job_description: ctx.job_description.clone(),
            tone: ctx.effective_tone().to_string(),
            focus_role: ctx.effective_focus_role().to_string(),
        }
    }
}

/// Applicant persona attached to the cover letter request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantContext {
    pub name: String,
    pub focus_role: String,
    pub tone: String,
}

/// Body for the cover letter generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterRequest {
    pub resume_text: String,
    pub job_description: String,
    pub applicant_context: ApplicantContext,
}

impl CoverLetterRequest {
    pub fn from_context(ctx: &AnalysisContext) -> Self {
        Self {
            resume_text: ctx.resume_text.clone(),
            job_description: ctx.job_description.clone(),
            applicant_context: ApplicantContext {
                name: ctx.applicant_name().to_string(),
                focus_role: ctx.effective_focus_role().to_string(),
                tone: ctx.effective_tone().to_string(),
            },
        }
    }
}

/// Body for the job alerts feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAlertsRequest {
    pub resume_text: String,
    pub target_role: String,
    pub location: String,
}

impl JobAlertsRequest {
    pub fn from_context(ctx: &AnalysisContext) -> Self {
        Self {
            resume_text: ctx.resume_text.clone(),
            target_role: ctx.market_role().unwrap_or_default().to_string(),
            location: ctx.location.clone(),
        }
    }
}

/// Body for the job market overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMarketRequest {
    pub target_role: String,
    pub location: String,
}

impl JobMarketRequest {
    pub fn from_context(ctx: &AnalysisContext) -> Self {
        Self {
            target_role: ctx.market_role().unwrap_or_default().to_string(),
            location: ctx.location.clone(),
        }
    }
}

/// Body for the career progress tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRequest {
    pub resume_text: String,
    pub certifications: Vec<String>,
    pub skills_acquired: Vec<String>,
    pub job_applications: Vec<JobApplication>,
}

impl ProgressRequest {
    pub fn from_context(ctx: &AnalysisContext) -> Self {
        Self {
            resume_text: ctx.resume_text.clone(),
            certifications: ctx.certifications.clone(),
            skills_acquired: ctx.skills_acquired.clone(),
            job_applications: ctx.job_applications.clone(),
        }
    }
}

/// Body for the salary benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryBenchmarkRequest {
    pub role: String,
    pub location: String,
    pub experience_years: f64,
}

impl SalaryBenchmarkRequest {
    pub fn from_context(ctx: &AnalysisContext) -> Self {
        Self {
            role: ctx.target_role.clone(),
            location: ctx.location.clone(),
            experience_years: ctx.experience_years.unwrap_or(DEFAULT_EXPERIENCE_YEARS),
        }
    }
}

/// Speaker of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the coach conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Body for the career coach chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachRequest {
    pub message: String,
    pub conversation_history: Vec<ChatTurn>,
    pub resume_context: String,
}

impl CoachRequest {
    pub fn new(
        message: impl Into<String>,
        conversation_history: Vec<ChatTurn>,
        resume_context: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            conversation_history,
            resume_context: resume_context.into(),
        }
    }
}
