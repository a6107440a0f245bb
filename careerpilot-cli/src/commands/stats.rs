//! Stats command handler

use anyhow::Result;
use careerpilot_analyzer::StatsStore;
use colored::*;

use crate::config::Config;

/// Print the usage statistics dashboard
pub fn handle_stats(config: &Config) -> Result<()> {
    let stats = StatsStore::new(&config.stats_file).load()?;

    println!("{}", "Usage Statistics:".bold());
    println!("  Total runs:      {}", stats.total_runs);
    match stats.average_match {
        Some(average) => println!("  Average match:   {:.1}%", average),
        None => println!("  Average match:   {}", "not available".dimmed()),
    }
    println!("  Skills improved: {}", stats.skills_improved);
    println!();

    if stats.recent_activity.is_empty() {
        println!("{}", "No recent activity.".yellow());
        return Ok(());
    }

    println!("{}", "Recent Activity:".bold());
    for entry in &stats.recent_activity {
        let timestamp = entry.recorded_at.format("%Y-%m-%d %H:%M").to_string();
        match entry.match_score {
            Some(score) => println!(
                "  {} {} {}  {}",
                "▸".cyan(),
                timestamp.dimmed(),
                entry.title,
                format!("{}%", score.round()).green()
            ),
            None => println!("  {} {} {}", "▸".cyan(), timestamp.dimmed(), entry.title),
        }
    }

    Ok(())
}
