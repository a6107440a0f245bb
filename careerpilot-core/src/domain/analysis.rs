//! Analysis catalog types
//!
//! The closed set of analysis capabilities the Copilot API exposes, plus the
//! catalog metadata (titles, descriptions, score weights) used by selection
//! and presentation code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One analysis capability of the Copilot API
///
/// Serialized with the kebab-case tags used on the wire and on the CLI
/// (e.g. `skill-gap`, `cover-letter`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    Ats,
    SkillGap,
    RoleFit,
    Achievements,
    Rewrite,
    CoverLetter,
    Optimization,
    Visualizations,
    CareerPath,
    JobMarket,
    JobAlerts,
    Portfolio,
    Interview,
    Progress,
    Salary,
}

impl AnalysisKind {
    /// Every capability, in catalog order
    ///
    /// Catalog order is the order used for deterministic iteration: planning,
    /// rendering, and picking which failure to surface first.
    pub const ALL: [AnalysisKind; 15] = [
        AnalysisKind::Ats,
        AnalysisKind::SkillGap,
        AnalysisKind::RoleFit,
        AnalysisKind::Achievements,
        AnalysisKind::Rewrite,
        AnalysisKind::CoverLetter,
        AnalysisKind::Optimization,
        AnalysisKind::Visualizations,
        AnalysisKind::CareerPath,
        AnalysisKind::JobMarket,
        AnalysisKind::JobAlerts,
        AnalysisKind::Portfolio,
        AnalysisKind::Interview,
        AnalysisKind::Progress,
        AnalysisKind::Salary,
    ];

    /// Stable kebab-case identifier used on the wire and on the CLI
    pub fn id(&self) -> &'static str {
        match self {
            AnalysisKind::Ats => "ats",
            AnalysisKind::SkillGap => "skill-gap",
            AnalysisKind::RoleFit => "role-fit",
            AnalysisKind::Achievements => "achievements",
            AnalysisKind::Rewrite => "rewrite",
            AnalysisKind::CoverLetter => "cover-letter",
            AnalysisKind::Optimization => "optimization",
            AnalysisKind::Visualizations => "visualizations",
            AnalysisKind::CareerPath => "career-path",
            AnalysisKind::JobMarket => "job-market",
            AnalysisKind::JobAlerts => "job-alerts",
            AnalysisKind::Portfolio => "portfolio",
            AnalysisKind::Interview => "interview",
            AnalysisKind::Progress => "progress",
            AnalysisKind::Salary => "salary",
        }
    }

    /// Human-readable catalog title
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisKind::Ats => "ATS Compatibility",
            AnalysisKind::SkillGap => "Skill Gap Analyzer",
            AnalysisKind::RoleFit => "Role Fit Score",
            AnalysisKind::Achievements => "Achievement Quantifier",
            AnalysisKind::Rewrite => "Resume Rewrite",
            AnalysisKind::CoverLetter => "Cover Letter",
            AnalysisKind::Optimization => "One-Click Optimization",
            AnalysisKind::Visualizations => "Visualization Suite",
            AnalysisKind::CareerPath => "Career Path Forecast",
            AnalysisKind::JobMarket => "Job Market Insights",
            AnalysisKind::JobAlerts => "Job Alerts",
            AnalysisKind::Portfolio => "Portfolio Blueprint",
            AnalysisKind::Interview => "Interview Readiness",
            AnalysisKind::Progress => "Career Progress Tracker",
            AnalysisKind::Salary => "Salary Benchmark",
        }
    }

    /// One-line catalog description
    pub fn description(&self) -> &'static str {
        match self {
            AnalysisKind::Ats => {
                "Simulate applicant tracking systems, highlight missing keywords, and surface formatting flags."
            }
            AnalysisKind::SkillGap => {
                "Compare your skills against the job requirements and recommend targeted learning paths."
            }
            AnalysisKind::RoleFit => {
                "Score your experience, skills, and growth potential against the target role."
            }
            AnalysisKind::Achievements => {
                "Transform bullet points with metrics, impact verbs, and quantified outcomes."
            }
            AnalysisKind::Rewrite => {
                "Generate a tailored resume variant aligned to tone and focus role preferences."
            }
            AnalysisKind::CoverLetter => {
                "Draft a personalized cover letter with key talking points and structure."
            }
            AnalysisKind::Optimization => {
                "Receive prioritized edits and keyword matches to increase compatibility."
            }
            AnalysisKind::Visualizations => {
                "Generate skill heatmaps, keyword clouds, and progress trackers."
            }
            AnalysisKind::CareerPath => {
                "Explore next-step roles, confidence scores, and upskilling recommendations."
            }
            AnalysisKind::JobMarket => {
                "Review demand levels, emerging roles, and top skills for your target market."
            }
            AnalysisKind::JobAlerts => {
                "Surface matching job openings with fit scores and reasoning for your target role."
            }
            AnalysisKind::Portfolio => {
                "Generate a portfolio structure with highlight projects and calls to action."
            }
            AnalysisKind::Interview => {
                "Get behavioral and technical questions, along with tailored prep tips."
            }
            AnalysisKind::Progress => {
                "Measure progress score, milestones achieved, and next steps for growth."
            }
            AnalysisKind::Salary => {
                "Compare compensation bands across percentiles for your target role and location."
            }
        }
    }

    /// Weight this capability carries in the overall score
    ///
    /// Capabilities without a weight never contribute to the overall score.
    pub fn score_weight(&self) -> Option<f64> {
        match self {
            AnalysisKind::Ats => Some(0.25),
            AnalysisKind::RoleFit => Some(0.20),
            AnalysisKind::Optimization => Some(0.15),
            AnalysisKind::SkillGap => Some(0.15),
            AnalysisKind::Achievements => Some(0.10),
            AnalysisKind::Interview => Some(0.05),
            AnalysisKind::Progress => Some(0.10),
            _ => None,
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown analysis tag
#[derive(Debug, Clone, Error)]
#[error("unknown analysis kind: {0}")]
pub struct UnknownAnalysisKind(pub String);

impl FromStr for AnalysisKind {
    type Err = UnknownAnalysisKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| UnknownAnalysisKind(s.to_string()))
    }
}

/// Named selection shortcuts mirroring the quick picks of the selection UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPreset {
    /// Every capability in the catalog
    Everything,
    /// The compatibility-focused core: ats, skill-gap, role-fit, optimization
    AtsEssentials,
    /// The growth-focused set: career-path, job-market, progress, salary
    CareerGrowth,
}

impl SelectionPreset {
    /// The capabilities this preset selects
    pub fn kinds(&self) -> Vec<AnalysisKind> {
        match self {
            SelectionPreset::Everything => AnalysisKind::ALL.to_vec(),
            SelectionPreset::AtsEssentials => vec![
                AnalysisKind::Ats,
                AnalysisKind::SkillGap,
                AnalysisKind::RoleFit,
                AnalysisKind::Optimization,
            ],
            SelectionPreset::CareerGrowth => vec![
                AnalysisKind::CareerPath,
                AnalysisKind::JobMarket,
                AnalysisKind::Progress,
                AnalysisKind::Salary,
            ],
        }
    }

    /// Stable identifier used on the CLI
    pub fn id(&self) -> &'static str {
        match self {
            SelectionPreset::Everything => "everything",
            SelectionPreset::AtsEssentials => "ats-essentials",
            SelectionPreset::CareerGrowth => "career-growth",
        }
    }
}

impl fmt::Display for SelectionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown preset name
#[derive(Debug, Clone, Error)]
#[error("unknown selection preset: {0} (expected everything, ats-essentials, or career-growth)")]
pub struct UnknownPreset(pub String);

impl FromStr for SelectionPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "everything" => Ok(SelectionPreset::Everything),
            "ats-essentials" => Ok(SelectionPreset::AtsEssentials),
            "career-growth" => Ok(SelectionPreset::CareerGrowth),
            other => Err(UnknownPreset(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for kind in AnalysisKind::ALL {
            let parsed: AnalysisKind = kind.id().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_serde_tags_match_ids() {
        for kind in AnalysisKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }

    #[test]
    fn test_unknown_id_rejected() {
        assert!("resume-roast".parse::<AnalysisKind>().is_err());
    }

    #[test]
    fn test_score_weights_sum_to_one() {
        let total: f64 = AnalysisKind::ALL
            .iter()
            .filter_map(|kind| kind.score_weight())
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_presets() {
        assert_eq!(SelectionPreset::Everything.kinds().len(), 15);
        assert_eq!(SelectionPreset::AtsEssentials.kinds().len(), 4);
        assert!(
            SelectionPreset::CareerGrowth
                .kinds()
                .contains(&AnalysisKind::Salary)
        );
        let parsed: SelectionPreset = "career-growth".parse().unwrap();
        assert_eq!(parsed, SelectionPreset::CareerGrowth);
    }
}
