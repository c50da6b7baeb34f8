//! Command line front end for one-off span extraction.

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::app::extract;
use crate::domain::model::Span;
use crate::infra::config::Config;
use crate::infra::source::SourceBuffer;

/// Output renderings supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Raw extracted text, or the placeholder when absent.
    Text,
    /// JSON object carrying the path, the span, and the optional text.
    Json,
}

impl FromStr for OutputFormat {
    type Err = OutputFormatParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(OutputFormatParseError::UnknownFormat(other.to_string())),
        }
    }
}

/// Error returned when parsing an [`OutputFormat`] fails.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum OutputFormatParseError {
    #[error("unknown output format '{0}'")]
    UnknownFormat(String),
}

/// Reconstruct the source text behind syntax-tree node positions.
#[derive(Debug, Parser)]
#[command(
    name = "srcspan",
    version,
    about = "Reconstruct the exact source text behind node line/column positions"
)]
pub struct Cli {
    /// Source file to read.
    pub path: PathBuf,
    /// First line of the span (1-based).
    #[arg(long)]
    pub start_line: usize,
    /// Last line of the span (1-based, inclusive).
    #[arg(long)]
    pub end_line: usize,
    /// Column just past the span on the last line (1-based).
    #[arg(long)]
    pub end_column: usize,
    /// Output rendering; defaults to the configured format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Text printed when no source is available; defaults to the configured placeholder.
    #[arg(long)]
    pub placeholder: Option<String>,
}

#[derive(Serialize)]
struct ExtractionReport<'a> {
    path: String,
    span: Span,
    text: Option<&'a str>,
}

/// Run the CLI with layered configuration, writing to the provided sink.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = Config::load()?;
    run_with_config(cli, &config, out)
}

fn run_with_config(cli: Cli, config: &Config, out: &mut impl Write) -> Result<()> {
    let span = Span::new(cli.start_line, cli.end_line, cli.end_column)
        .context("invalid span arguments")?;
    tracing::debug!(
        path = %cli.path.display(),
        lines = span.line_count(),
        "extracting span"
    );

    let buffer = SourceBuffer::from_path(&cli.path)?;
    let text = extract::extract(span, &buffer);

    let format = cli.format.unwrap_or_else(|| {
        <OutputFormat as FromStr>::from_str(&config.output.format()).unwrap_or(OutputFormat::Text)
    });

    match format {
        OutputFormat::Text => {
            let placeholder = cli
                .placeholder
                .unwrap_or_else(|| config.output.placeholder());
            let rendered = text.as_deref().unwrap_or(&placeholder);
            writeln!(out, "{rendered}")?;
        }
        OutputFormat::Json => {
            let report = ExtractionReport {
                path: cli.path.display().to_string(),
                span,
                text: text.as_deref(),
            };
            let data = serde_json::to_string_pretty(&report)
                .context("failed to serialize extraction report")?;
            writeln!(out, "{data}")?;
        }
    }

    Ok(())
}
