//! Aggregated analysis results
//!
//! The per-run mapping of capability to settled report. At most one report
//! per capability; a new run starts from an empty map. Iteration follows
//! catalog order.

use std::collections::BTreeMap;

use crate::domain::analysis::AnalysisKind;
use crate::dto::report::{
    AchievementsReport, AnalysisReport, AtsReport, CareerPathReport, CoverLetterReport,
    InterviewReport, JobAlertsReport, JobMarketReport, OptimizationReport, PortfolioReport,
    ProgressReport, RewriteReport, RoleFitReport, SalaryReport, SkillGapReport,
    VisualizationReport,
};

/// Results of one analysis run, keyed by capability
#[derive(Debug, Clone, Default)]
pub struct AggregatedResults {
    reports: BTreeMap<AnalysisKind, AnalysisReport>,
}

impl AggregatedResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a report in the slot of its capability, replacing any previous one
    pub fn insert(&mut self, report: AnalysisReport) {
        self.reports.insert(report.kind(), report);
    }

    /// Discards every stored report
    pub fn clear(&mut self) {
        self.reports.clear();
    }

    pub fn get(&self, kind: AnalysisKind) -> Option<&AnalysisReport> {
        self.reports.get(&kind)
    }

    pub fn contains(&self, kind: AnalysisKind) -> bool {
        self.reports.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Iterates stored reports in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (AnalysisKind, &AnalysisReport)> {
        self.reports.iter().map(|(kind, report)| (*kind, report))
    }

    // Typed accessors, one per capability slot.

    pub fn ats(&self) -> Option<&AtsReport> {
        match self.reports.get(&AnalysisKind::Ats) {
            Some(AnalysisReport::Ats(report)) => Some(report),
            _ => None,
        }
    }

    pub fn skill_gap(&self) -> Option<&SkillGapReport> {
        match self.reports.get(&AnalysisKind::SkillGap) {
            Some(AnalysisReport::SkillGap(report)) => Some(report),
            _ => None,
        }
    }

    pub fn role_fit(&self) -> Option<&RoleFitReport> {
        match self.reports.get(&AnalysisKind::RoleFit) {
            Some(AnalysisReport::RoleFit(report)) => Some(report),
            _ => None,
        }
    }

    pub fn achievements(&self) -> Option<&AchievementsReport> {
        match self.reports.get(&AnalysisKind::Achievements) {
            Some(AnalysisReport::Achievements(report)) => Some(report),
            _ => None,
        }
    }

    pub fn rewrite(&self) -> Option<&RewriteReport> {
        match self.reports.get(&AnalysisKind::Rewrite) {
            Some(AnalysisReport::Rewrite(report)) => Some(report),
            _ => None,
        }
    }

    pub fn cover_letter(&self) -> Option<&CoverLetterReport> {
        match self.reports.get(&AnalysisKind::CoverLetter) {
            Some(AnalysisReport::CoverLetter(report)) => Some(report),
            _ => None,
        }
    }

    pub fn optimization(&self) -> Option<&OptimizationReport> {
        match self.reports.get(&AnalysisKind::Optimization) {
            Some(AnalysisReport::Optimization(report)) => Some(report),
            _ => None,
        }
    }

    pub fn visualizations(&self) -> Option<&VisualizationReport> {
        match self.reports.get(&AnalysisKind::Visualizations) {
            Some(AnalysisReport::Visualizations(report)) => Some(report),
            _ => None,
        }
    }

    pub fn career_path(&self) -> Option<&CareerPathReport> {
        match self.reports.get(&AnalysisKind::CareerPath) {
            Some(AnalysisReport::CareerPath(report)) => Some(report),
            _ => None,
        }
    }

    pub fn job_market(&self) -> Option<&JobMarketReport> {
        match self.reports.get(&AnalysisKind::JobMarket) {
            Some(AnalysisReport::JobMarket(report)) => Some(report),
            _ => None,
        }
    }

    pub fn job_alerts(&self) -> Option<&JobAlertsReport> {
        match self.reports.get(&AnalysisKind::JobAlerts) {
            Some(AnalysisReport::JobAlerts(report)) => Some(report),
            _ => None,
        }
    }

    pub fn portfolio(&self) -> Option<&PortfolioReport> {
        match self.reports.get(&AnalysisKind::Portfolio) {
            Some(AnalysisReport::Portfolio(report)) => Some(report),
            _ => None,
        }
    }

    pub fn interview(&self) -> Option<&InterviewReport> {
        match self.reports.get(&AnalysisKind::Interview) {
            Some(AnalysisReport::Interview(report)) => Some(report),
            _ => None,
        }
    }

    pub fn progress(&self) -> Option<&ProgressReport> {
        match self.reports.get(&AnalysisKind::Progress) {
            Some(AnalysisReport::Progress(report)) => Some(report),
            _ => None,
        }
    }

    pub fn salary(&self) -> Option<&SalaryReport> {
        match self.reports.get(&AnalysisKind::Salary) {
            Some(AnalysisReport::Salary(report)) => Some(report),
            _ => None,
        }
    }
}
