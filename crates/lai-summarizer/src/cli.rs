//! Command line front end: `serve` the HTTP API or `summarize` a document
//! from a file or stdin.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::summarizer::{Strategy, Summarizer};

#[derive(Debug, Parser)]
#[command(name = "lai-summarizer", version, about = "Extractive text summarizer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP API (default)
    Serve,
    /// Summarize a document and print the result
    Summarize(SummarizeArgs),
}

#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Read the document from this file instead of stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// `frequency` or `truncate`; defaults to DEFAULT_STRATEGY
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Summarize even when the input is empty or below the minimum length
    #[arg(long)]
    pub skip_validation: bool,

    /// Print the full summary record as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read document from stdin")?;
            Ok(buffer)
        }
    }
}

/// Summarize `document` according to `args`, returning what should be printed
pub fn summarize_document(args: &SummarizeArgs, config: &Config, document: &str) -> Result<String> {
    let strategy = match args.strategy.as_deref() {
        Some(raw) => raw.parse::<Strategy>()?,
        None => config.default_strategy,
    };

    let text = if args.skip_validation {
        document
    } else {
        config.input_policy().validate(document)?
    };

    let summarizer = strategy.summarizer(config);
    let summary = summarizer.summarize_document(text);
    debug!(
        "CLI {} summary: {} of {} sentences",
        summary.strategy,
        summary.selected.len(),
        summary.sentence_count
    );

    if args.json {
        Ok(serde_json::to_string_pretty(&summary)?)
    } else {
        Ok(summary.text)
    }
}

pub fn run_summarize(args: &SummarizeArgs, config: &Config) -> Result<String> {
    let document = read_document(args.file.as_deref())?;
    summarize_document(args, config, &document)
}
