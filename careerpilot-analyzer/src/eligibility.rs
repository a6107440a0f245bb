//! Capability eligibility
//!
//! Decides, per capability, whether the run context carries the inputs that
//! capability needs. An ineligible capability is never dispatched; it is
//! recorded as skipped with the missing requirement as the reason. Run-level
//! requirements (job description, some form of resume) are checked by
//! [`AnalysisContext::validate`] before eligibility is consulted.

use careerpilot_core::domain::analysis::AnalysisKind;
use careerpilot_core::domain::context::AnalysisContext;

/// Input class a capability needs before it can be dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// A resume file to upload
    ResumeAttachment,
    /// Extracted resume text
    ResumeText,
    /// A target or focus role plus a location
    RoleAndLocation,
    /// Resume text plus at least one acquired skill to track
    ResumeTextAndSkills,
    /// A target role, a location, and years of experience
    SalaryInputs,
}

impl Requirement {
    /// The requirement class of the given capability
    pub fn for_kind(kind: AnalysisKind) -> Requirement {
        match kind {
            AnalysisKind::Ats => Requirement::ResumeAttachment,
            AnalysisKind::SkillGap
            | AnalysisKind::RoleFit
            | AnalysisKind::Achievements
            | AnalysisKind::Rewrite
            | AnalysisKind::CoverLetter
            | AnalysisKind::Optimization
            | AnalysisKind::Visualizations
            | AnalysisKind::CareerPath
            | AnalysisKind::Portfolio
            | AnalysisKind::Interview => Requirement::ResumeText,
            AnalysisKind::JobMarket | AnalysisKind::JobAlerts => Requirement::RoleAndLocation,
            AnalysisKind::Progress => Requirement::ResumeTextAndSkills,
            AnalysisKind::Salary => Requirement::SalaryInputs,
        }
    }

    /// Whether the context carries the inputs this requirement names
    pub fn satisfied_by(&self, ctx: &AnalysisContext) -> bool {
        match self {
            Requirement::ResumeAttachment => ctx.resume_file.is_some(),
            Requirement::ResumeText => ctx.has_resume_text(),
            Requirement::RoleAndLocation => {
                ctx.market_role().is_some() && !ctx.location.is_empty()
            }
            Requirement::ResumeTextAndSkills => {
                ctx.has_resume_text() && !ctx.skills_acquired.is_empty()
            }
            Requirement::SalaryInputs => {
                !ctx.target_role.is_empty()
                    && !ctx.location.is_empty()
                    && ctx.experience_years.is_some()
            }
        }
    }

    /// Short description of the inputs, used in skip reasons
    pub fn description(&self) -> &'static str {
        match self {
            Requirement::ResumeAttachment => "a resume file attachment",
            Requirement::ResumeText => "resume text",
            Requirement::RoleAndLocation => "a target or focus role and a location",
            Requirement::ResumeTextAndSkills => "resume text and at least one acquired skill",
            Requirement::SalaryInputs => "a target role, a location, and years of experience",
        }
    }
}

/// True when the context unlocks the given capability
pub fn is_eligible(kind: AnalysisKind, ctx: &AnalysisContext) -> bool {
    Requirement::for_kind(kind).satisfied_by(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerpilot_core::domain::context::ResumeAttachment as Attachment;

    fn text_only_context() -> AnalysisContext {
        AnalysisContext {
            resume_text: "Senior engineer, ten years of platform work.".to_string(),
            job_description: "long enough for the capabilities under test".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resume_text_unlocks_text_capabilities() {
        let ctx = text_only_context();
        for kind in [
            AnalysisKind::SkillGap,
            AnalysisKind::RoleFit,
            AnalysisKind::Achievements,
            AnalysisKind::Rewrite,
            AnalysisKind::CoverLetter,
            AnalysisKind::Optimization,
            AnalysisKind::Visualizations,
            AnalysisKind::CareerPath,
            AnalysisKind::Portfolio,
            AnalysisKind::Interview,
        ] {
            assert!(is_eligible(kind, &ctx), "{kind} should be eligible");
        }
    }

    #[test]
    fn test_ats_requires_attachment() {
        let mut ctx = text_only_context();
        assert!(!is_eligible(AnalysisKind::Ats, &ctx));

        ctx.resume_file = Some(Attachment {
            file_name: "resume.pdf".to_string(),
            bytes: vec![1, 2, 3],
        });
        assert!(is_eligible(AnalysisKind::Ats, &ctx));
    }

    #[test]
    fn test_market_capabilities_need_role_and_location() {
        let mut ctx = text_only_context();
        assert!(!is_eligible(AnalysisKind::JobMarket, &ctx));
        assert!(!is_eligible(AnalysisKind::JobAlerts, &ctx));

        ctx.focus_role = "Platform Lead".to_string();
        assert!(!is_eligible(AnalysisKind::JobMarket, &ctx));

        ctx.location = "Berlin".to_string();
        assert!(is_eligible(AnalysisKind::JobMarket, &ctx));
        assert!(is_eligible(AnalysisKind::JobAlerts, &ctx));
    }

    #[test]
    fn test_progress_needs_acquired_skills() {
        let mut ctx = text_only_context();
        assert!(!is_eligible(AnalysisKind::Progress, &ctx));

        ctx.skills_acquired = vec!["Kubernetes".to_string()];
        assert!(is_eligible(AnalysisKind::Progress, &ctx));

        ctx.resume_text.clear();
        assert!(!is_eligible(AnalysisKind::Progress, &ctx));
    }

    #[test]
    fn test_salary_needs_all_three_inputs() {
        let mut ctx = text_only_context();
        ctx.target_role = "Staff Engineer".to_string();
        ctx.location = "Berlin".to_string();
        assert!(!is_eligible(AnalysisKind::Salary, &ctx));

        ctx.experience_years = Some(5.0);
        assert!(is_eligible(AnalysisKind::Salary, &ctx));
    }

    #[test]
    fn test_salary_ignores_focus_role_fallback() {
        let mut ctx = text_only_context();
        ctx.focus_role = "Platform Lead".to_string();
        ctx.location = "Berlin".to_string();
        ctx.experience_years = Some(5.0);

        assert!(!is_eligible(AnalysisKind::Salary, &ctx));
        assert!(is_eligible(AnalysisKind::JobMarket, &ctx));
    }

    #[test]
    fn test_every_kind_has_a_requirement() {
        let ctx = AnalysisContext::default();
        for kind in AnalysisKind::ALL {
            let requirement = Requirement::for_kind(kind);
            assert!(!requirement.description().is_empty());
            assert!(!requirement.satisfied_by(&ctx));
        }
    }
}
