//! CLI argument parsing for bushou

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the cluster report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown report (default)
    Markdown,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "bushou")]
#[command(version)]
#[command(
    about = "Group characters sharing a component in the same position, annotated with vocabulary",
    long_about = None
)]
pub struct Cli {
    /// Vocabulary CSV file (term, pinyin, part of speech, translation)
    #[arg(value_name = "VOCABULARY")]
    pub vocabulary: PathBuf,

    /// Tab-separated character decomposition database
    #[arg(value_name = "DECOMPOSITION_DB")]
    pub decomposition: PathBuf,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "markdown")]
    pub format: OutputFormat,

    /// Log pipeline progress to stderr
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}
