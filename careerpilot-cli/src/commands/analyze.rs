//! Analyze command handler
//!
//! Builds the analysis context from files and flags, runs the selected
//! analyses concurrently, and renders every settled report along with the
//! overall score and a per-analysis outcome list.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use careerpilot_analyzer::{
    BatchFailurePolicy, Orchestrator, ResultStore, RunOptions, SlotStatus, StatsStore,
};
use careerpilot_client::CopilotClient;
use careerpilot_core::domain::analysis::{AnalysisKind, SelectionPreset};
use careerpilot_core::domain::context::{AnalysisContext, ResumeAttachment};
use careerpilot_core::domain::score::{ScoreBand, parse_percentage};
use careerpilot_core::dto::report::{
    AchievementsReport, AnalysisReport, AtsReport, CareerPathReport, CoverLetterReport,
    InterviewReport, JobAlertsReport, JobMarketReport, OptimizationReport, PortfolioReport,
    ProgressReport, RewriteReport, RoleFitReport, SalaryReport, SkillGapReport,
    VisualizationReport,
};
use careerpilot_core::parse;
use clap::Args;
use colored::*;

use crate::config::Config;

/// Arguments for the analyze command
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Resume file; uploaded for ATS scoring and read as text when possible
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Extracted resume text file, for resumes that are not plain text
    #[arg(long)]
    resume_text: Option<PathBuf>,

    /// Job description file
    #[arg(long)]
    job: PathBuf,

    /// Role to benchmark and search the market for
    #[arg(long)]
    target_role: Option<String>,

    /// Role the rewrite and cover letter should lean toward
    #[arg(long)]
    focus_role: Option<String>,

    /// Location for market and salary lookups
    #[arg(long)]
    location: Option<String>,

    /// Applicant name used in generated material
    #[arg(long)]
    name: Option<String>,

    /// Writing tone for generated material
    #[arg(long)]
    tone: Option<String>,

    /// Years of experience for salary benchmarking
    #[arg(long)]
    experience_years: Option<f64>,

    /// Certification to count toward progress tracking (repeatable)
    #[arg(long = "certification", value_delimiter = ',')]
    certifications: Vec<String>,

    /// Acquired skill to count toward progress tracking (repeatable)
    #[arg(long = "skill", value_delimiter = ',')]
    skills: Vec<String>,

    /// Tracked application as "Company | Role | Status" (repeatable)
    #[arg(long = "application")]
    applications: Vec<String>,

    /// Comma-separated analysis ids to run
    #[arg(long, value_delimiter = ',', conflicts_with = "preset")]
    analyses: Vec<String>,

    /// Selection preset: everything, ats-essentials, or career-growth
    #[arg(long)]
    preset: Option<String>,

    /// Fail the whole run if any analysis fails
    #[arg(long)]
    strict: bool,

    /// Wall-clock limit for the run, in seconds
    #[arg(long)]
    deadline_secs: Option<u64>,

    /// Directory to save the rewritten resume and cover letter into
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Skip recording this run in the usage stats
    #[arg(long)]
    no_stats: bool,
}

/// Handle the analyze command
pub async fn handle_analyze(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let ctx = build_context(&args)?;
    let selection = build_selection(&args)?;

    let client = CopilotClient::with_timeout(&config.api_url, config.timeout)?;
    let options = RunOptions {
        policy: if args.strict {
            BatchFailurePolicy::Abort
        } else {
            BatchFailurePolicy::Continue
        },
        run_deadline: args
            .deadline_secs
            .map(Duration::from_secs)
            .or(RunOptions::default().run_deadline),
    };
    let orchestrator = Orchestrator::with_options(Arc::new(client), options);

    let summary = orchestrator.run(&ctx, &selection).await?;
    let store = orchestrator.store();

    println!();
    print_overall_score(summary.overall_score);
    println!();
    print_outcomes(&store);
    println!(
        "{}",
        format!(
            "  {} dispatched, {} succeeded, {} failed, {} skipped in {:?}",
            summary.dispatched,
            summary.succeeded.len(),
            summary.failed.len(),
            summary.skipped.len(),
            summary.elapsed
        )
        .dimmed()
    );

    let results = store.results();
    for (_, report) in results.iter() {
        println!();
        print_report(report);
    }

    if let Some(dir) = &args.save_dir {
        save_documents(dir, &store)?;
    }

    if !args.no_stats {
        let stats = StatsStore::new(&config.stats_file).record(&results)?;
        println!();
        println!(
            "{}",
            format!("Usage stats updated ({} total runs)", stats.total_runs).dimmed()
        );
    }

    Ok(())
}

/// Assembles the analysis context from files and persona flags
fn build_context(args: &AnalyzeArgs) -> Result<AnalysisContext> {
    let job_description = fs::read_to_string(&args.job)
        .with_context(|| format!("Failed to read job description from {}", args.job.display()))?;

    let mut resume_text = String::new();
    let mut resume_file = None;

    if let Some(path) = &args.resume {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read resume from {}", path.display()))?;
        // Plain-text resumes double as extracted text.
        if let Ok(text) = String::from_utf8(bytes.clone()) {
            resume_text = text;
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());
        resume_file = Some(ResumeAttachment { file_name, bytes });
    }

    if let Some(path) = &args.resume_text {
        resume_text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume text from {}", path.display()))?;
    }

    let mut ctx = AnalysisContext {
        resume_text,
        resume_file,
        job_description,
        ..Default::default()
    };

    if let Some(role) = &args.target_role {
        ctx.target_role = role.clone();
    }
    if let Some(role) = &args.focus_role {
        ctx.focus_role = role.clone();
    }
    if let Some(location) = &args.location {
        ctx.location = location.clone();
    }
    if let Some(name) = &args.name {
        ctx.candidate_name = name.clone();
    }
    if let Some(tone) = &args.tone {
        ctx.tone = tone.clone();
    }
    ctx.experience_years = args.experience_years;
    ctx.certifications = args.certifications.clone();
    ctx.skills_acquired = args.skills.clone();
    ctx.job_applications = parse::parse_applications(&args.applications.join("\n"));

    Ok(ctx)
}

/// Resolves the selection from the preset or the explicit id list
fn build_selection(args: &AnalyzeArgs) -> Result<Vec<AnalysisKind>> {
    if let Some(preset) = &args.preset {
        let preset: SelectionPreset = preset.parse()?;
        return Ok(preset.kinds());
    }

    if args.analyses.is_empty() {
        return Ok(SelectionPreset::Everything.kinds());
    }

    args.analyses
        .iter()
        .map(|id| id.parse::<AnalysisKind>().map_err(anyhow::Error::from))
        .collect()
}

fn print_overall_score(score: Option<u8>) {
    match score {
        Some(score) => {
            let band = ScoreBand::for_score(score);
            let headline = format!("Overall Score: {}%  {}", score, band.label());
            let headline = match band {
                ScoreBand::Great => headline.green().bold(),
                ScoreBand::Good => headline.yellow().bold(),
                ScoreBand::NeedsImprovement => headline.red().bold(),
            };
            println!("{}", headline);
        }
        None => println!("{}", "Overall Score: not available".dimmed()),
    }
}

/// Print the per-analysis outcome list
fn print_outcomes(store: &ResultStore) {
    println!("{}", "Analyses:".bold());
    for (kind, status) in store.statuses() {
        match status {
            SlotStatus::Succeeded => {
                println!("  {} {}", "✓".green(), kind.title());
            }
            SlotStatus::Failed { error } => {
                println!("  {} {}  {}", "✗".red(), kind.title(), error.red());
            }
            SlotStatus::NotRun { reason } => {
                println!(
                    "  {} {}  {}",
                    "○".dimmed(),
                    kind.title().dimmed(),
                    reason.dimmed()
                );
            }
        }
    }
}

fn print_report(report: &AnalysisReport) {
    match report {
        AnalysisReport::Ats(report) => print_ats(report),
        AnalysisReport::SkillGap(report) => print_skill_gap(report),
        AnalysisReport::RoleFit(report) => print_role_fit(report),
        AnalysisReport::Achievements(report) => print_achievements(report),
        AnalysisReport::Rewrite(report) => print_rewrite(report),
        AnalysisReport::CoverLetter(report) => print_cover_letter(report),
        AnalysisReport::Optimization(report) => print_optimization(report),
        AnalysisReport::Visualizations(report) => print_visualizations(report),
        AnalysisReport::CareerPath(report) => print_career_path(report),
        AnalysisReport::JobMarket(report) => print_job_market(report),
        AnalysisReport::JobAlerts(report) => print_job_alerts(report),
        AnalysisReport::Portfolio(report) => print_portfolio(report),
        AnalysisReport::Interview(report) => print_interview(report),
        AnalysisReport::Progress(report) => print_progress(report),
        AnalysisReport::Salary(report) => print_salary(report),
    }
}

fn section(title: &str) {
    println!("{}", title.bold());
    println!("{}", "─".repeat(60).dimmed());
}

fn bullet_list(items: &[String]) {
    for item in items {
        println!("  {} {}", "▸".cyan(), item);
    }
}

/// Colorize a free-text percentage by its score band
fn colorize_percent(value: &str) -> ColoredString {
    match parse_percentage(value) {
        Some(score) => match ScoreBand::for_score(score) {
            ScoreBand::Great => value.green(),
            ScoreBand::Good => value.yellow(),
            ScoreBand::NeedsImprovement => value.red(),
        },
        None => value.normal(),
    }
}

fn print_ats(report: &AtsReport) {
    section("ATS Compatibility");
    println!("  Match: {}", colorize_percent(&report.jd_match).bold());
    if !report.profile_summary.is_empty() {
        println!("  {}", report.profile_summary);
    }
    if !report.missing_keywords.is_empty() {
        println!();
        println!("  {}", "Missing keywords:".bold());
        for keyword in &report.missing_keywords {
            println!("  {} {}", "▸".cyan(), keyword.yellow());
        }
    }
}

fn print_skill_gap(report: &SkillGapReport) {
    section("Skill Gap Analyzer");
    if let Some(skills) = &report.missing_hard_skills {
        println!("  {}", "Missing hard skills:".bold());
        bullet_list(skills);
    }
    if let Some(skills) = &report.missing_soft_skills {
        println!("  {}", "Missing soft skills:".bold());
        bullet_list(skills);
    }
    if let Some(courses) = &report.course_recommendations {
        println!("  {}", "Recommended courses:".bold());
        for course in courses {
            println!(
                "  {} {} ({})  {}",
                "▸".cyan(),
                course.name,
                course.provider,
                course.url.dimmed()
            );
        }
    }
}

fn print_role_fit(report: &RoleFitReport) {
    section("Role Fit Score");
    if let Some(fit) = &report.overall_fit {
        println!("  Overall fit: {}", colorize_percent(fit).bold());
    }
    if let Some(value) = &report.skill_alignment {
        println!("  Skills:      {}", value);
    }
    if let Some(value) = &report.experience_alignment {
        println!("  Experience:  {}", value);
    }
    if let Some(value) = &report.growth_potential {
        println!("  Growth:      {}", value);
    }
    if let Some(insights) = &report.insights {
        println!();
        bullet_list(insights);
    }
}

fn print_achievements(report: &AchievementsReport) {
    section("Achievement Quantifier");
    if let Some(bullets) = &report.quantified_bullets {
        bullet_list(bullets);
    }
    if let Some(notes) = &report.methodology_notes {
        println!();
        for note in notes {
            println!("  {}", note.dimmed());
        }
    }
}

fn print_rewrite(report: &RewriteReport) {
    section("Resume Rewrite");
    if !report.keyword_alignment_score.is_empty() {
        println!(
            "  Keyword alignment: {}",
            colorize_percent(&report.keyword_alignment_score)
        );
    }
    if !report.key_adjustments.is_empty() {
        println!("  {}", "Key adjustments:".bold());
        bullet_list(&report.key_adjustments);
        println!();
    }
    println!("{}", report.rewritten_resume);
}

fn print_cover_letter(report: &CoverLetterReport) {
    section("Cover Letter");
    println!("{}", report.cover_letter);
    if !report.talking_points.is_empty() {
        println!();
        println!("  {}", "Talking points:".bold());
        bullet_list(&report.talking_points);
    }
}

fn print_optimization(report: &OptimizationReport) {
    section("One-Click Optimization");
    if !report.optimized_summary.is_empty() {
        println!("  {}", report.optimized_summary);
        println!();
    }
    if !report.priority_edits.is_empty() {
        println!("  {}", "Priority edits:".bold());
        for (i, edit) in report.priority_edits.iter().enumerate() {
            println!("  {} {}", format!("{}.", i + 1).cyan(), edit);
        }
    }
    if !report.keyword_matches.is_empty() {
        println!("  {}", "Matched keywords:".bold());
        println!("  {}", report.keyword_matches.join(", ").green());
    }
}

fn print_visualizations(report: &VisualizationReport) {
    section("Visualization Suite");
    if let Some(heatmap) = &report.skill_heatmap {
        println!("  {}", "Skill heatmap:".bold());
        for entry in heatmap {
            println!(
                "  {} {:<20} proficiency {:<12} demand {}",
                "▸".cyan(),
                entry.skill,
                entry.proficiency,
                entry.demand
            );
        }
    }
    if let Some(cloud) = &report.keyword_cloud {
        println!("  {}", "Keyword cloud:".bold());
        for entry in cloud {
            println!("  {} {} x{}", "▸".cyan(), entry.keyword, entry.frequency);
        }
    }
    if let Some(milestones) = &report.progress_tracker {
        println!("  {}", "Milestones:".bold());
        for entry in milestones {
            println!(
                "  {} {} [{}]  {}",
                "▸".cyan(),
                entry.milestone,
                entry.status,
                entry.impact.dimmed()
            );
        }
    }
}

fn print_career_path(report: &CareerPathReport) {
    section("Career Path Forecast");
    if let Some(roles) = &report.recommended_roles {
        for role in roles {
            println!(
                "  {} {}  {}  {}",
                "▸".cyan(),
                role.title.bold(),
                role.salary_range.green(),
                format!("confidence {}", role.confidence).dimmed()
            );
        }
    }
    if let Some(paths) = &report.upskilling_paths {
        println!();
        println!("  {}", "Upskilling paths:".bold());
        bullet_list(paths);
    }
    if let Some(projection) = &report.long_term_projection {
        println!();
        println!("  {}", projection);
    }
}

fn print_job_market(report: &JobMarketReport) {
    section("Job Market Insights");
    if let Some(level) = &report.demand_level {
        println!("  Demand: {}", level.bold());
    }
    if let Some(skills) = &report.top_skills {
        println!("  {}", "Top skills:".bold());
        bullet_list(skills);
    }
    if let Some(roles) = &report.emerging_roles {
        println!("  {}", "Emerging roles:".bold());
        bullet_list(roles);
    }
    if let Some(commentary) = &report.market_commentary {
        println!();
        println!("  {}", commentary);
    }
}

fn print_job_alerts(report: &JobAlertsReport) {
    section("Job Alerts");
    match &report.job_alerts {
        Some(alerts) if !alerts.is_empty() => {
            for alert in alerts {
                println!(
                    "  {} {} at {}",
                    "▸".cyan(),
                    alert.title.bold(),
                    alert.company
                );
                println!("    Match: {}", colorize_percent(&alert.match_score));
                println!("    {}", alert.reasoning);
                println!("    {}", alert.apply_link_placeholder.dimmed());
            }
        }
        _ => println!("  {}", "No matching openings right now.".yellow()),
    }
}

fn print_portfolio(report: &PortfolioReport) {
    section("Portfolio Blueprint");
    if let Some(structure) = &report.site_structure {
        if let Ok(pretty) = serde_json::to_string_pretty(structure) {
            println!("{}", pretty);
        }
    }
    if let Some(projects) = &report.highlight_projects {
        println!("  {}", "Highlight projects:".bold());
        bullet_list(projects);
    }
    if let Some(ctas) = &report.call_to_actions {
        println!("  {}", "Calls to action:".bold());
        bullet_list(ctas);
    }
}

fn print_interview(report: &InterviewReport) {
    section("Interview Readiness");
    if let Some(questions) = &report.behavioral_questions {
        println!("  {}", "Behavioral questions:".bold());
        bullet_list(questions);
    }
    if let Some(questions) = &report.technical_questions {
        println!("  {}", "Technical questions:".bold());
        bullet_list(questions);
    }
    if let Some(tips) = &report.prep_tips {
        println!("  {}", "Prep tips:".bold());
        bullet_list(tips);
    }
}

fn print_progress(report: &ProgressReport) {
    section("Career Progress Tracker");
    if let Some(score) = &report.progress_score {
        println!("  Progress: {}", colorize_percent(score).bold());
    }
    if let Some(milestones) = &report.milestones_achieved {
        println!("  {}", "Milestones achieved:".bold());
        for milestone in milestones {
            println!("  {} {}", "✓".green(), milestone);
        }
    }
    if let Some(milestones) = &report.next_milestones {
        println!("  {}", "Next milestones:".bold());
        bullet_list(milestones);
    }
    if let Some(plan) = &report.skill_development_plan {
        println!("  {}", "Skill development plan:".bold());
        for entry in plan {
            println!(
                "  {} {} ({}, {})",
                "▸".cyan(),
                entry.skill,
                entry.priority,
                entry.timeline
            );
        }
    }
    if let Some(summary) = &report.career_trajectory_summary {
        println!();
        println!("  {}", summary);
    }
}

fn print_salary(report: &SalaryReport) {
    section("Salary Benchmark");
    if let Some(median) = &report.median_salary {
        println!("  Median:          {}", median.green().bold());
    }
    if let Some(p25) = &report.percentile_25 {
        println!("  25th percentile: {}", p25);
    }
    if let Some(p75) = &report.percentile_75 {
        println!("  75th percentile: {}", p75);
    }
    if let Some(sources) = &report.data_sources {
        println!("  {}", format!("Sources: {}", sources.join(", ")).dimmed());
    }
}

/// Writes the generated documents into the requested directory
fn save_documents(dir: &Path, store: &ResultStore) -> Result<()> {
    let results = store.results();
    let has_documents = results.rewrite().is_some() || results.cover_letter().is_some();
    if !has_documents {
        return Ok(());
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    if let Some(report) = results.rewrite() {
        let path = dir.join("rewritten_resume.md");
        fs::write(&path, &report.rewritten_resume)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "{}",
            format!("Saved rewritten resume to {}", path.display()).dimmed()
        );
    }

    if let Some(report) = results.cover_letter() {
        let path = dir.join("cover_letter.md");
        fs::write(&path, &report.cover_letter)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "{}",
            format!("Saved cover letter to {}", path.display()).dimmed()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> AnalyzeArgs {
        AnalyzeArgs {
            resume: None,
            resume_text: None,
            job: PathBuf::from("job.txt"),
            target_role: None,
            focus_role: None,
            location: None,
            name: None,
            tone: None,
            experience_years: None,
            certifications: Vec::new(),
            skills: Vec::new(),
            applications: Vec::new(),
            analyses: Vec::new(),
            preset: None,
            strict: false,
            deadline_secs: None,
            save_dir: None,
            no_stats: false,
        }
    }

    #[test]
    fn test_selection_defaults_to_everything() {
        let selection = build_selection(&base_args()).unwrap();
        assert_eq!(selection.len(), AnalysisKind::ALL.len());
    }

    #[test]
    fn test_selection_from_ids() {
        let mut args = base_args();
        args.analyses = vec!["ats".to_string(), "skill-gap".to_string()];

        let selection = build_selection(&args).unwrap();
        assert_eq!(selection, vec![AnalysisKind::Ats, AnalysisKind::SkillGap]);
    }

    #[test]
    fn test_selection_rejects_unknown_id() {
        let mut args = base_args();
        args.analyses = vec!["resume-roast".to_string()];
        assert!(build_selection(&args).is_err());
    }

    #[test]
    fn test_selection_from_preset() {
        let mut args = base_args();
        args.preset = Some("career-growth".to_string());

        let selection = build_selection(&args).unwrap();
        assert_eq!(selection, SelectionPreset::CareerGrowth.kinds());
    }
}
