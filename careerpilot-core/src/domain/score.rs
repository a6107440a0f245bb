//! Result scoring
//!
//! Derives a 0-100 score per capability from its report and folds the
//! weighted contributions into one overall score. Only capabilities whose
//! report is present contribute; the weight denominator is renormalized to
//! the contributing subset.

use crate::domain::analysis::AnalysisKind;
use crate::domain::results::AggregatedResults;

/// Extracts the first run of up to three digits and clamps it to 0-100
///
/// The AI backend reports percentages as free text ("85%", "Strong match:
/// 92"), so scoring takes the first digit run it can find. Returns `None`
/// when the text carries no digits.
pub fn parse_percentage(value: &str) -> Option<u8> {
    let mut digits = String::new();
    for c in value.chars().skip_while(|c| !c.is_ascii_digit()) {
        if !c.is_ascii_digit() || digits.len() == 3 {
            break;
        }
        digits.push(c);
    }

    let score: u32 = digits.parse().ok()?;
    Some(score.min(100) as u8)
}

/// Score contribution of one capability, if its report is present
///
/// Defaults (85 for skill gap, 75 for achievements, 70 for interview) apply
/// when the report exists but its scored list is absent or empty; an absent
/// report never contributes.
pub fn derived_score(kind: AnalysisKind, results: &AggregatedResults) -> Option<f64> {
    match kind {
        AnalysisKind::Ats => results
            .ats()
            .and_then(|report| parse_percentage(&report.jd_match))
            .map(f64::from),
        AnalysisKind::RoleFit => results
            .role_fit()
            .and_then(|report| report.overall_fit.as_deref())
            .and_then(parse_percentage)
            .map(f64::from),
        AnalysisKind::Optimization => results.optimization().and_then(|report| {
            if report.keyword_matches.is_empty() {
                None
            } else {
                Some((report.keyword_matches.len() * 10).min(100) as f64)
            }
        }),
        AnalysisKind::SkillGap => results.skill_gap().map(|report| {
            match report.missing_hard_skills.as_deref() {
                Some(missing) if !missing.is_empty() => {
                    (100 - (missing.len() * 8).min(100)) as f64
                }
                _ => 85.0,
            }
        }),
        AnalysisKind::Achievements => results.achievements().map(|report| {
            match report.quantified_bullets.as_deref() {
                Some(bullets) if !bullets.is_empty() => (bullets.len() * 20).min(95) as f64,
                _ => 75.0,
            }
        }),
        AnalysisKind::Interview => {
            results
                .interview()
                .map(|report| match report.prep_tips.as_deref() {
                    Some(tips) if !tips.is_empty() => (tips.len() * 15).min(90) as f64,
                    _ => 70.0,
                })
        }
        AnalysisKind::Progress => results
            .progress()
            .and_then(|report| report.progress_score.as_deref())
            .and_then(parse_percentage)
            .map(f64::from),
        _ => None,
    }
}

/// Weighted overall score across the present reports
///
/// Returns `None` when no capability contributes, which callers surface as
/// "score unavailable" rather than zero.
pub fn overall_score(results: &AggregatedResults) -> Option<u8> {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for kind in AnalysisKind::ALL {
        let Some(weight) = kind.score_weight() else {
            continue;
        };
        if let Some(score) = derived_score(kind, results) {
            weighted_sum += score * weight;
            total_weight += weight;
        }
    }

    if total_weight == 0.0 {
        return None;
    }

    Some((weighted_sum / total_weight).round() as u8)
}

/// Verdict band for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Great,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Great
        } else if score >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Great => "Great Match!",
            ScoreBand::Good => "Good Match",
            ScoreBand::NeedsImprovement => "Needs Improvement",
        }
    }
}
