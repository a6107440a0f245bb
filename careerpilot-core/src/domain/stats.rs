//! Usage statistics
//!
//! The cross-run accumulator shown on the dashboard: run totals, the running
//! average ATS match, skills planned for improvement, and a capped recent
//! activity feed. Updates are a pure fold producing a new snapshot; callers
//! persist the snapshot as a whole.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::results::AggregatedResults;

/// Maximum entries kept in the recent activity feed
pub const RECENT_ACTIVITY_CAP: usize = 8;

/// Current on-disk snapshot layout version
pub const STATS_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    STATS_SCHEMA_VERSION
}

/// Cross-run usage statistics snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageStats {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub total_runs: u64,
    pub average_match: Option<f64>,
    pub skills_improved: u64,
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
}

impl Default for UsageStats {
    fn default() -> Self {
        Self {
            schema_version: STATS_SCHEMA_VERSION,
            total_runs: 0,
            average_match: None,
            skills_improved: 0,
            recent_activity: Vec::new(),
        }
    }
}

/// One line of the recent activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub title: String,
    pub match_score: Option<f64>,
    pub recorded_at: DateTime<Utc>,
}

impl ActivityEntry {
    fn from_digest(digest: &RunDigest) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: digest.headline.clone(),
            match_score: digest.match_percent,
            recorded_at: Utc::now(),
        }
    }
}

/// Summary of one run, extracted from its aggregated results
#[derive(Debug, Clone, PartialEq)]
pub struct RunDigest {
    /// ATS match percentage, when the run produced one
    pub match_percent: Option<f64>,
    /// Entries in the progress skill development plan
    pub skills_planned: u64,
    /// Activity feed title for this run
    pub headline: String,
}

impl RunDigest {
    /// Derives the digest of a settled run
    pub fn from_results(results: &AggregatedResults) -> Self {
        let match_percent = results
            .ats()
            .and_then(|report| extract_match_percent(&report.jd_match));

        let skills_planned = results
            .progress()
            .and_then(|report| report.skill_development_plan.as_ref())
            .map(|plan| plan.len() as u64)
            .unwrap_or(0);

        let headline = match match_percent {
            Some(percent) => {
                format!("Resume analysis completed • Match {}%", percent.round())
            }
            None => results
                .rewrite()
                .and_then(|report| report.key_adjustments.first())
                .cloned()
                .unwrap_or_else(|| "Resume analysis completed".to_string()),
        };

        Self {
            match_percent,
            skills_planned,
            headline,
        }
    }
}

/// Extracts a match percentage by keeping only digits and the decimal point
fn extract_match_percent(value: &str) -> Option<f64> {
    let filtered: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    filtered.parse().ok()
}

impl UsageStats {
    /// Folds one run digest into a new snapshot
    ///
    /// The previous snapshot is untouched. The running average moves only
    /// when the run produced a match percentage; the activity feed gains the
    /// run at the front and is trimmed to [`RECENT_ACTIVITY_CAP`].
    pub fn record_run(&self, digest: &RunDigest) -> UsageStats {
        let total_runs = self.total_runs + 1;

        let average_match = match digest.match_percent {
            Some(percent) => Some(match self.average_match {
                Some(average) => {
                    (average * self.total_runs as f64 + percent) / total_runs as f64
                }
                None => percent,
            }),
            None => self.average_match,
        };

        let mut recent_activity = Vec::with_capacity(RECENT_ACTIVITY_CAP);
        recent_activity.push(ActivityEntry::from_digest(digest));
        recent_activity.extend(
            self.recent_activity
                .iter()
                .take(RECENT_ACTIVITY_CAP - 1)
                .cloned(),
        );

        UsageStats {
            schema_version: STATS_SCHEMA_VERSION,
            total_runs,
            average_match,
            skills_improved: self.skills_improved + digest.skills_planned,
            recent_activity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::report::{
        AnalysisReport, AtsReport, ProgressReport, RewriteReport, SkillPlanEntry,
    };

    fn digest(match_percent: Option<f64>) -> RunDigest {
        RunDigest {
            match_percent,
            skills_planned: 0,
            headline: "Resume analysis completed".to_string(),
        }
    }

    #[test]
    fn test_fold_averages_match_percentages() {
        let stats = UsageStats::default()
            .record_run(&digest(Some(72.0)))
            .record_run(&digest(Some(88.0)));

        assert_eq!(stats.total_runs, 2);
        assert_eq!(stats.average_match, Some(80.0));
    }

    #[test]
    fn test_fold_without_match_leaves_average_untouched() {
        let stats = UsageStats::default()
            .record_run(&digest(Some(80.0)))
            .record_run(&digest(None));

        assert_eq!(stats.total_runs, 2);
        assert_eq!(stats.average_match, Some(80.0));
    }

    #[test]
    fn test_fold_accumulates_planned_skills() {
        let mut run = digest(None);
        run.skills_planned = 3;

        let stats = UsageStats::default().record_run(&run).record_run(&run);
        assert_eq!(stats.skills_improved, 6);
    }

    #[test]
    fn test_activity_feed_newest_first_and_capped() {
        let mut stats = UsageStats::default();
        for i in 0..10 {
            let run = RunDigest {
                match_percent: None,
                skills_planned: 0,
                headline: format!("run {i}"),
            };
            stats = stats.record_run(&run);
        }

        assert_eq!(stats.recent_activity.len(), RECENT_ACTIVITY_CAP);
        assert_eq!(stats.recent_activity[0].title, "run 9");
        assert_eq!(stats.recent_activity[7].title, "run 2");
    }

    #[test]
    fn test_digest_extracts_decimal_match() {
        let mut results = AggregatedResults::new();
        results.insert(AnalysisReport::Ats(AtsReport {
            jd_match: "Strong 72.5% match".to_string(),
            missing_keywords: vec![],
            profile_summary: String::new(),
        }));
        results.insert(AnalysisReport::Progress(ProgressReport {
            progress_score: None,
            milestones_achieved: None,
            next_milestones: None,
            skill_development_plan: Some(vec![
                SkillPlanEntry {
                    skill: "Kubernetes".to_string(),
                    priority: "high".to_string(),
                    timeline: "3 months".to_string(),
                },
                SkillPlanEntry {
                    skill: "Terraform".to_string(),
                    priority: "medium".to_string(),
                    timeline: "6 months".to_string(),
                },
            ]),
            career_trajectory_summary: None,
        }));

        let digest = RunDigest::from_results(&results);
        assert_eq!(digest.match_percent, Some(72.5));
        assert_eq!(digest.skills_planned, 2);
        assert_eq!(digest.headline, "Resume analysis completed • Match 73%");
    }

    #[test]
    fn test_digest_headline_falls_back_to_rewrite_adjustment() {
        let mut results = AggregatedResults::new();
        results.insert(AnalysisReport::Rewrite(RewriteReport {
            rewritten_resume: "...".to_string(),
            key_adjustments: vec!["Lead with platform impact".to_string()],
            keyword_alignment_score: String::new(),
        }));

        let digest = RunDigest::from_results(&results);
        assert_eq!(digest.match_percent, None);
        assert_eq!(digest.headline, "Lead with platform impact");
    }

    #[test]
    fn test_digest_headline_default_without_any_source() {
        let digest = RunDigest::from_results(&AggregatedResults::new());
        assert_eq!(digest.headline, "Resume analysis completed");
    }

    #[test]
    fn test_snapshot_loads_without_versioned_fields() {
        let json = r#"{"total_runs": 4, "skills_improved": 2}"#;
        let stats: UsageStats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.schema_version, STATS_SCHEMA_VERSION);
        assert_eq!(stats.total_runs, 4);
        assert_eq!(stats.average_match, None);
        assert!(stats.recent_activity.is_empty());
    }
}
