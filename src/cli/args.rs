//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the diagnostic stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiagnosticFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if the stream supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// Redirgen CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "redirgen")]
#[command(about = "Generate Apache rewrite directives from a CSV of URL redirects")]
#[command(version)]
pub struct Cli {
    /// Semicolon-delimited CSV with 'Anciennes URLs' and 'Nouvelles URLs' columns
    pub csv_file: PathBuf,

    /// Diagnostic stream format (the rule document is always plain text)
    #[arg(short, long, default_value = "human")]
    pub format: DiagnosticFormat,

    /// Diagnostic coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Exit non-zero when any row was skipped with a warning or error
    #[arg(long)]
    pub strict: bool,
}
