use anyhow::{Context, Result};
use bushou::catalog::CharacterCatalog;
use bushou::cli::{Cli, OutputFormat};
use bushou::cluster::KnownCharacters;
use bushou::json_output::JsonOutput;
use bushou::markdown_output::MarkdownOutput;
use bushou::vocabulary::VocabularyIndex;
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Cluster the known characters and render the sorted report
fn build_report(
    catalog: &CharacterCatalog,
    vocabulary: &VocabularyIndex,
    format: OutputFormat,
) -> Result<String> {
    let mut known = KnownCharacters::new(catalog, vocabulary);
    known.sort_vocabulary();

    let mut clustering = known.clusters();
    clustering.sort();

    tracing::debug!(
        "{} isolated characters left out of the report",
        clustering.isolated.len()
    );

    match format {
        OutputFormat::Markdown => Ok(MarkdownOutput::render(&clustering.clusters)),
        OutputFormat::Json => JsonOutput::from_clusters(&clustering.clusters)
            .to_json()
            .context("Failed to serialize JSON report"),
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let vocabulary = VocabularyIndex::from_file(&args.vocabulary).with_context(|| {
        format!(
            "Failed to load vocabulary source {}",
            args.vocabulary.display()
        )
    })?;

    let catalog = CharacterCatalog::from_file(&args.decomposition).with_context(|| {
        format!(
            "Failed to load decomposition database {}",
            args.decomposition.display()
        )
    })?;

    let report = build_report(&catalog, &vocabulary, args.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .context("Failed to write report")?;
    stdout.flush().context("Failed to write report")?;

    Ok(())
}
