mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use diadochi_core::{ScanError, analyze_save, discover};

/// Inspect Old World save archives and report how the Greek successor
/// dynasties (Diadochi) are encoded: as separate nations (legacy format)
/// or as dynasty attributes on a Greece player (modern format).
#[derive(Parser)]
#[command(name = "diadochi", version)]
struct Cli {
    /// Save archives or directories to scan; defaults to the standard
    /// Old World save locations when omitted
    paths: Vec<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt::init();
    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    report::print_header();

    let explicit = !cli.paths.is_empty();
    let search_paths = if explicit {
        cli.paths
    } else {
        discover::default_search_paths()
    };

    if search_paths.is_empty() {
        println!("No save directories found. Please provide a path as an argument.");
        println!("Usage: diadochi <path_to_saves>");
        return Ok(ExitCode::FAILURE);
    }

    report::print_search_paths(&search_paths);

    let save_files = discover::find_save_files(&search_paths);
    if save_files.is_empty() {
        println!("\nNo save files found!");
        return Ok(ExitCode::FAILURE);
    }

    println!("\nFound {} save file(s)", save_files.len());
    println!("Analyzing...\n");

    let mut analyses = Vec::new();
    for save_file in &save_files {
        let name = save_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| save_file.display().to_string());
        print!("Analyzing: {name}... ");

        match analyze_save(save_file) {
            Ok(analysis) => {
                let status = if analysis.has_diadochi { "✓" } else { "-" };
                println!("{status} ({} players)", analysis.players.len());
                analyses.push(analysis);
            }
            Err(ScanError::MissingDocument) => {
                println!("✗ (failed)");
                println!("  Warning: no .xml entry found in {name}");
            }
            Err(err) => {
                println!("✗ (failed)");
                println!("  Error reading {name}: {err}");
                tracing::debug!(archive = %save_file.display(), %err, "analysis failed");
            }
        }
    }

    report::print_summary(&analyses)?;
    Ok(ExitCode::SUCCESS)
}
