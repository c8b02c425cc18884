//! `gridpointer` - replay a pointer event script against an in-memory grid
//! and print what the grid's collaborators observed.

use anyhow::{Context, Result};
use clap::Parser;
use gridpointer::replay::ReplayScript;
use gridpointer::settings::InteractionSettings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridpointer", version, about = "Replay grid pointer-event scripts")]
struct Cli {
    /// Replay script (JSON)
    script: PathBuf,

    /// Interaction settings file, overriding the script's settings
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Pretty-print the report
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gridpointer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let json = std::fs::read_to_string(&cli.script)
        .with_context(|| format!("reading script {}", cli.script.display()))?;
    let script = ReplayScript::from_json(&json)
        .with_context(|| format!("parsing script {}", cli.script.display()))?;

    let settings = cli
        .settings
        .as_deref()
        .map(InteractionSettings::load_from)
        .transpose()
        .context("loading settings")?;

    tracing::info!(events = script.events.len(), "Replaying script");
    let report = script.run(settings);

    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("serializing report")?;
    println!("{output}");
    Ok(())
}
