//! Report DTOs returned by the Copilot API
//!
//! One struct per capability response. The AI backend fills these loosely, so
//! fields the service may omit are `Option` and list fields it always sends
//! fall back to empty on absence. [`AnalysisReport`] is the closed sum over
//! all capability payloads used by the aggregation layer.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::analysis::AnalysisKind;

/// ATS comparison of the resume against the job description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    /// Match percentage as free text (e.g. "85%" or "Strong match: 85")
    pub jd_match: String,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub profile_summary: String,
}

/// Skill gaps between the resume and the job requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub missing_hard_skills: Option<Vec<String>>,
    pub missing_soft_skills: Option<Vec<String>>,
    pub course_recommendations: Option<Vec<CourseRecommendation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub name: String,
    pub provider: String,
    pub url: String,
}

/// Fit assessment against the target role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleFitReport {
    /// Fit percentage as free text
    pub overall_fit: Option<String>,
    pub skill_alignment: Option<String>,
    pub experience_alignment: Option<String>,
    pub growth_potential: Option<String>,
    pub insights: Option<Vec<String>>,
}

/// Quantified rewrites of experience bullet points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementsReport {
    pub quantified_bullets: Option<Vec<String>>,
    pub methodology_notes: Option<Vec<String>>,
}

/// Tailored resume rewrite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteReport {
    pub rewritten_resume: String,
    #[serde(default)]
    pub key_adjustments: Vec<String>,
    #[serde(default)]
    pub keyword_alignment_score: String,
}

/// Generated cover letter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterReport {
    pub cover_letter: String,
    #[serde(default)]
    pub talking_points: Vec<String>,
}

/// Prioritized one-click edits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationReport {
    #[serde(default)]
    pub optimized_summary: String,
    #[serde(default)]
    pub priority_edits: Vec<String>,
    #[serde(default)]
    pub keyword_matches: Vec<String>,
}

/// Skill heatmap, keyword cloud, and milestone tracker data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationReport {
    pub skill_heatmap: Option<Vec<SkillHeat>>,
    pub keyword_cloud: Option<Vec<KeywordCount>>,
    pub progress_tracker: Option<Vec<MilestoneEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillHeat {
    pub skill: String,
    pub proficiency: String,
    pub demand: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub frequency: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneEntry {
    pub milestone: String,
    pub status: String,
    pub impact: String,
}

/// Next-step role forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPathReport {
    pub recommended_roles: Option<Vec<RoleSuggestion>>,
    pub upskilling_paths: Option<Vec<String>>,
    pub long_term_projection: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSuggestion {
    pub title: String,
    pub salary_range: String,
    pub confidence: String,
}

/// Demand and skill landscape for the target market
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMarketReport {
    pub demand_level: Option<String>,
    pub top_skills: Option<Vec<String>>,
    pub emerging_roles: Option<Vec<String>>,
    pub market_commentary: Option<String>,
}

/// Matching job openings with fit reasoning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAlertsReport {
    pub job_alerts: Option<Vec<JobAlert>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAlert {
    pub company: String,
    pub title: String,
    pub match_score: String,
    pub reasoning: String,
    pub apply_link_placeholder: String,
}

/// Portfolio site blueprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Free-form site outline; shape is decided by the model
    pub site_structure: Option<JsonValue>,
    pub highlight_projects: Option<Vec<String>>,
    pub call_to_actions: Option<Vec<String>>,
}

/// Interview preparation material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewReport {
    pub behavioral_questions: Option<Vec<String>>,
    pub technical_questions: Option<Vec<String>>,
    pub prep_tips: Option<Vec<String>>,
}

/// Career progress measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Progress percentage as free text
    pub progress_score: Option<String>,
    pub milestones_achieved: Option<Vec<String>>,
    pub next_milestones: Option<Vec<String>>,
    pub skill_development_plan: Option<Vec<SkillPlanEntry>>,
    pub career_trajectory_summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillPlanEntry {
    pub skill: String,
    pub priority: String,
    pub timeline: String,
}

/// Compensation bands for the target role and location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryReport {
    pub median_salary: Option<String>,
    pub percentile_25: Option<String>,
    pub percentile_75: Option<String>,
    pub data_sources: Option<Vec<String>>,
}

/// Reply from the career coach chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachReply {
    pub response: Option<String>,
}

impl CoachReply {
    /// Reply text with the fixed fallback for empty responses
    pub fn message(&self) -> &str {
        self.response
            .as_deref()
            .unwrap_or("I'm here to help with your career journey.")
    }
}

/// One settled analysis result
///
/// Closed sum over the capability payloads; the variant is the capability
/// that produced it.
#[derive(Debug, Clone)]
pub enum AnalysisReport {
    Ats(AtsReport),
    SkillGap(SkillGapReport),
    RoleFit(RoleFitReport),
    Achievements(AchievementsReport),
    Rewrite(RewriteReport),
    CoverLetter(CoverLetterReport),
    Optimization(OptimizationReport),
    Visualizations(VisualizationReport),
    CareerPath(CareerPathReport),
    JobMarket(JobMarketReport),
    JobAlerts(JobAlertsReport),
    Portfolio(PortfolioReport),
    Interview(InterviewReport),
    Progress(ProgressReport),
    Salary(SalaryReport),
}

impl AnalysisReport {
    /// The capability this payload belongs to
    pub fn kind(&self) -> AnalysisKind {
        match self {
            AnalysisReport::Ats(_) => AnalysisKind::Ats,
            AnalysisReport::SkillGap(_) => AnalysisKind::SkillGap,
            AnalysisReport::RoleFit(_) => AnalysisKind::RoleFit,
            AnalysisReport::Achievements(_) => AnalysisKind::Achievements,
            AnalysisReport::Rewrite(_) => AnalysisKind::Rewrite,
            AnalysisReport::CoverLetter(_) => AnalysisKind::CoverLetter,
            AnalysisReport::Optimization(_) => AnalysisKind::Optimization,
            AnalysisReport::Visualizations(_) => AnalysisKind::Visualizations,
            AnalysisReport::CareerPath(_) => AnalysisKind::CareerPath,
            AnalysisReport::JobMarket(_) => AnalysisKind::JobMarket,
            AnalysisReport::JobAlerts(_) => AnalysisKind::JobAlerts,
            AnalysisReport::Portfolio(_) => AnalysisKind::Portfolio,
            AnalysisReport::Interview(_) => AnalysisKind::Interview,
            AnalysisReport::Progress(_) => AnalysisKind::Progress,
            AnalysisReport::Salary(_) => AnalysisKind::Salary,
        }
    }
}
