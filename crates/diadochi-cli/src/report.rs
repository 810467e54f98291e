//! Human-readable report rendering.
//!
//! Mirrors the layout long used for these investigations: per-file progress
//! lines, an aggregate summary with a format verdict, and a detailed
//! breakdown of every matching save.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use diadochi_core::{BatchSummary, Encoding, FormatVerdict, SaveAnalysis, rules};

const WIDTH: usize = 80;

fn divider(c: char) -> String {
    c.to_string().repeat(WIDTH)
}

pub fn print_header() {
    println!("Old World Save File Dynasty Format Analyzer");
    println!("{}", divider('='));
}

pub fn print_search_paths(paths: &[PathBuf]) {
    println!("\nSearching in:");
    for path in paths {
        println!("  - {}", path.display());
    }
}

/// Print the aggregate summary and per-save breakdown for all analyzed saves.
pub fn print_summary(analyses: &[SaveAnalysis]) -> anyhow::Result<()> {
    let summary = BatchSummary::of(analyses);

    println!("\n{}", divider('='));
    println!("DYNASTY FORMAT ANALYSIS SUMMARY");
    println!("{}", divider('='));

    println!("\nTotal save files analyzed: {}", summary.total);
    println!(
        "Files with Diadochi (Greek successors): {}",
        summary.with_diadochi
    );
    println!("  - Encoded as separate nations: {}", summary.legacy);
    println!("  - Encoded as dynasties: {}", summary.modern);

    match summary.verdict() {
        FormatVerdict::Both => {
            println!("\nWARNING: BOTH FORMATS DETECTED!");
            println!("   This confirms the format changed between game versions.");
        }
        FormatVerdict::LegacyOnly => {
            println!("\n✓  All Diadochi encoded as separate nations (legacy format)");
        }
        FormatVerdict::ModernOnly => {
            println!("\n✓  All Diadochi encoded as dynasties (modern format)");
        }
        FormatVerdict::Neither => {}
    }

    if summary.with_diadochi > 0 {
        print_breakdown(analyses);
    }

    Ok(())
}

fn print_breakdown(analyses: &[SaveAnalysis]) {
    println!("\n{}", divider('-'));
    println!("DETAILED BREAKDOWN");
    println!("{}", divider('-'));

    for analysis in analyses.iter().filter(|a| a.has_diadochi) {
        println!("\n{}", analysis.file_name());
        if let Some(modified) = analysis.modified {
            let local: DateTime<Local> = modified.into();
            println!("  Modified: {}", local.format("%Y-%m-%d %H:%M"));
        }
        if let Some(version) = &analysis.game_version {
            println!("  Version: {version}");
        }
        if let Some(save_date) = &analysis.save_date {
            println!("  Save Date: {save_date}");
        }

        for (player, encoding) in analysis.diadochi_players() {
            let nation = player.nation.as_deref().unwrap_or("None");
            let dynasty = player.dynasty.as_deref().unwrap_or("None");
            println!("    Player: {}", player.name.as_deref().unwrap_or("None"));
            println!("      Nation={nation}, Dynasty={dynasty}");

            match encoding {
                Encoding::Legacy => {
                    println!("      → Format: LEGACY (separate nation)");
                    if let Some((modern_nation, modern_dynasty)) = rules::expected_modern(nation) {
                        println!(
                            "      → Expected modern: Nation={modern_nation}, Dynasty={modern_dynasty}"
                        );
                    }
                }
                Encoding::Modern => {
                    println!("      → Format: MODERN (dynasty-based)");
                }
            }
        }
    }
}
