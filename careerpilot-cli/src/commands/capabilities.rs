//! Capabilities command handler

use anyhow::Result;
use careerpilot_analyzer::eligibility::Requirement;
use careerpilot_core::domain::analysis::{AnalysisKind, SelectionPreset};
use colored::*;

/// List every analysis in the catalog along with what it needs to run
pub fn handle_capabilities() -> Result<()> {
    println!(
        "{}",
        format!("{} available analyses:", AnalysisKind::ALL.len()).bold()
    );
    println!();

    for kind in AnalysisKind::ALL {
        println!("  {} {}  {}", "▸".cyan(), kind.id().cyan(), kind.title().bold());
        println!("    {}", kind.description().dimmed());
        println!(
            "    {}",
            format!("needs {}", Requirement::for_kind(kind).description()).dimmed()
        );
        println!();
    }

    println!("{}", "Presets:".bold());
    for preset in [
        SelectionPreset::Everything,
        SelectionPreset::AtsEssentials,
        SelectionPreset::CareerGrowth,
    ] {
        let kinds: Vec<&str> = preset.kinds().iter().map(|kind| kind.id()).collect();
        println!("  {} {}", preset.id().cyan(), kinds.join(", ").dimmed());
    }

    Ok(())
}
