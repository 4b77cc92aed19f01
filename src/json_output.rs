//! JSON output format for component clusters
//!
//! `--format json`: the same ordering as the markdown report, for machine
//! consumption.

use crate::cluster::{Cluster, KnownCharacter};
use crate::decomposition::Position;
use crate::vocabulary::VocabularyEntry;
use serde::Serialize;

/// Format tag written at the top of every JSON report
pub const FORMAT: &str = "bushou-json-v1";

/// A vocabulary row of a clustered character
#[derive(Debug, Clone, Serialize)]
pub struct JsonVocabulary {
    pub term: String,
    pub pinyin: String,
    pub part_of_speech: String,
    pub translation: String,
}

impl From<&VocabularyEntry> for JsonVocabulary {
    fn from(entry: &VocabularyEntry) -> Self {
        Self {
            term: entry.term.clone(),
            pinyin: entry.pinyin.clone(),
            part_of_speech: entry.part_of_speech.clone(),
            translation: entry.translation.clone(),
        }
    }
}

/// A cluster member
#[derive(Debug, Clone, Serialize)]
pub struct JsonCharacter {
    pub character: String,
    pub strokes: u32,
    pub vocabulary: Vec<JsonVocabulary>,
}

impl From<&KnownCharacter<'_>> for JsonCharacter {
    fn from(known: &KnownCharacter<'_>) -> Self {
        Self {
            character: known.character().to_string(),
            strokes: known.strokes(),
            vocabulary: known.vocabulary.iter().map(|v| (*v).into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonCluster {
    pub component: String,
    pub position: Position,
    /// Human-readable position label
    pub position_label: &'static str,
    pub characters: Vec<JsonCharacter>,
}

/// Complete JSON report
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    pub format: &'static str,
    pub version: &'static str,
    pub clusters: Vec<JsonCluster>,
}

impl JsonOutput {
    /// Convert clusters, keeping their order
    pub fn from_clusters(clusters: &[Cluster<'_>]) -> Self {
        Self {
            format: FORMAT,
            version: env!("CARGO_PKG_VERSION"),
            clusters: clusters
                .iter()
                .map(|cluster| JsonCluster {
                    component: cluster.component.to_string(),
                    position: cluster.position,
                    position_label: cluster.position.label(),
                    characters: cluster.characters.iter().map(|k| (*k).into()).collect(),
                })
                .collect(),
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
