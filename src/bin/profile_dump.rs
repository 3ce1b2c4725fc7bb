//! Dump every field of a saved profile snapshot as JSON
//!
//! The snapshot must already have its collapsible sections expanded.
//! Logs go to stderr (and optionally a file); the JSON summary goes to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use profile_parser::ProfileExtractor;
use profile_parser::infrastructure::{AppConfig, ProfileRules, init_logging_with_config};

#[derive(Parser, Debug)]
#[command(name = "profile_dump")]
#[command(about = "Print the fields of a saved profile snapshot as JSON")]
struct Args {
    /// Saved profile page (HTML)
    snapshot: PathBuf,

    /// Configuration file layered under PROFILE_PARSER__* environment overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    init_logging_with_config(&config.logging)?;

    let html = std::fs::read_to_string(&args.snapshot)
        .with_context(|| format!("Failed to read snapshot {}", args.snapshot.display()))?;
    info!("Read snapshot {} ({} bytes)", args.snapshot.display(), html.len());

    let rules = Arc::new(ProfileRules::with_config(&config.selectors)?);
    let extractor = ProfileExtractor::with_rules(&html, rules);
    let summary = extractor
        .summary()
        .with_context(|| format!("Failed to summarize {}", args.snapshot.display()))?;

    let json = if args.compact {
        serde_json::to_string(&summary)?
    } else {
        serde_json::to_string_pretty(&summary)?
    };
    println!("{json}");

    info!(
        "Extracted profile '{}' with {} tree walks",
        summary.name,
        extractor.document().walk_count()
    );
    Ok(())
}
