//! Markdown report for component clusters
//!
//! One section per cluster: a heading naming the component and position, the
//! member characters, then a vocabulary table per character.

use crate::cluster::{Cluster, KnownCharacter};
use crate::vocabulary::VocabularyEntry;
use std::fmt::Write;

/// Markdown output formatter
#[derive(Debug, Default)]
pub struct MarkdownOutput {
    output: String,
}

impl MarkdownOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape table cell text (pipes would split the cell, newlines the row)
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn push_vocabulary_row(&mut self, entry: &VocabularyEntry) {
        // Writing into a String cannot fail
        let _ = writeln!(
            self.output,
            "| {} | {} | {} | {} |",
            Self::escape_cell(&entry.term),
            Self::escape_cell(&entry.pinyin),
            Self::escape_cell(&entry.part_of_speech),
            Self::escape_cell(&entry.translation)
        );
    }

    fn push_character(&mut self, known: &KnownCharacter<'_>) {
        let _ = writeln!(self.output, "### {} vocabulary", known.character());
        self.output.push_str("| Term | Pinyin | PoS | Translation |\n");
        self.output.push_str("| --- | --- | --- | --- |\n");

        for entry in &known.vocabulary {
            self.push_vocabulary_row(entry);
        }
    }

    /// Append one cluster section
    pub fn add_cluster(&mut self, cluster: &Cluster<'_>) {
        let _ = writeln!(
            self.output,
            "# Cluster for {} in position {}",
            cluster.component,
            cluster.position.label()
        );
        let _ = writeln!(self.output, "## {}", cluster.member_string());

        for known in &cluster.characters {
            self.push_character(known);
        }
    }

    /// Render clusters in the order given
    pub fn render(clusters: &[Cluster<'_>]) -> String {
        let mut report = Self::new();
        for cluster in clusters {
            report.add_cluster(cluster);
        }
        report.into_markdown()
    }

    pub fn into_markdown(self) -> String {
        self.output
    }
}
