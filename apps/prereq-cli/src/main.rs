//! Prerequisite Extraction Binary
//!
//! Entry point for extracting candidate requirements from prerequisite text.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use prereq_cli::{extract_one, parse_records, run_batch};
use prereq_engine::{ExtractorConfig, PrereqExtractor, SequentialIds};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "prereq-extract")]
#[command(
    version,
    about = "Propose structured requirements from course-prerequisite text"
)]
struct Args {
    /// Prerequisite text (read from stdin when neither this nor --input is given)
    #[arg(long, conflicts_with = "input")]
    prereq: Option<String>,

    /// Corequisite text, appended to the prerequisite text
    #[arg(long, conflicts_with = "input")]
    coreq: Option<String>,

    /// JSON array of catalog records: [{ "id", "prerequisites", "corequisites"? }]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON extractor configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit editor suggestion trees instead of candidate bundles
    #[arg(long)]
    tree: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries the JSON output, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting prereq-extract v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => ExtractorConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ExtractorConfig::default(),
    };
    let engine = PrereqExtractor::with_config(config);

    let output = if let Some(path) = &args.input {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let records = parse_records(&json)
            .with_context(|| format!("{} is not a JSON array of catalog records", path.display()))?;
        tracing::info!(records = records.len(), input = %path.display(), "running batch");
        serde_json::to_value(run_batch(&engine, &records, args.tree))?
    } else {
        let prereq = match args.prereq {
            Some(text) => text,
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read prerequisite text from stdin")?;
                text
            }
        };
        let mut ids = SequentialIds::default();
        let tree_ids = args.tree.then_some(&mut ids);
        serde_json::to_value(extract_one(&engine, &prereq, args.coreq.as_deref(), tree_ids))?
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    Ok(())
}
