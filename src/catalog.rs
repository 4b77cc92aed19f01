//! Character decomposition catalog
//!
//! Loads the tab-separated decomposition database: one row per character,
//! ten columns, no header.

use crate::decomposition::CompositionType;
use crate::error::{BushouError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Number of columns in a decomposition database row
pub const FIELD_COUNT: usize = 10;

/// Decomposition of a single character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub character: String,
    pub strokes: u32,
    /// `None` when the database uses a composition symbol we don't cluster on
    pub composition_type: Option<CompositionType>,
    pub left_component: String,
    pub left_component_strokes: u32,
    pub right_component: String,
    pub right_component_strokes: u32,
    pub signature: String,
    pub notes: String,
    pub section: String,
}

impl CharacterRecord {
    /// Parse one tab-separated row
    ///
    /// `line` is the 1-based line number reported on failure.
    pub fn from_tsv_row(row: &str, line: usize) -> Result<Self> {
        let fields: Vec<&str> = row.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(BushouError::MalformedRecord {
                line,
                reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            });
        }

        let strokes = |index: usize, name: &str| -> Result<u32> {
            fields[index]
                .trim()
                .parse::<u32>()
                .map_err(|e| BushouError::MalformedRecord {
                    line,
                    reason: format!("invalid {} '{}': {}", name, fields[index], e),
                })
        };

        let composition_type = CompositionType::parse(fields[2]);
        if composition_type.is_none() {
            tracing::debug!(
                "Line {}: composition type '{}' of {} contributes no components",
                line,
                fields[2],
                fields[0]
            );
        }

        Ok(Self {
            character: fields[0].to_string(),
            strokes: strokes(1, "stroke count")?,
            composition_type,
            left_component: fields[3].to_string(),
            left_component_strokes: strokes(4, "left component stroke count")?,
            right_component: fields[5].to_string(),
            right_component_strokes: strokes(6, "right component stroke count")?,
            signature: fields[7].to_string(),
            notes: fields[8].to_string(),
            section: fields[9].to_string(),
        })
    }
}

/// Decomposition records keyed by character
///
/// Iteration is in character order, which keeps every downstream stage
/// deterministic.
#[derive(Debug, Default)]
pub struct CharacterCatalog {
    records: BTreeMap<String, CharacterRecord>,
}

impl CharacterCatalog {
    /// Load a decomposition database file
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read and `MalformedRecord` for the
    /// first row with a wrong column count or an invalid stroke count.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BushouError::io(path, e))?;
        let catalog = Self::from_tsv(&content)?;

        tracing::info!(
            "Loaded {} character decompositions from {}",
            catalog.len(),
            path.display()
        );

        Ok(catalog)
    }

    /// Parse tab-separated content
    ///
    /// Blank lines are skipped but still counted for line numbers.
    pub fn from_tsv(content: &str) -> Result<Self> {
        let mut catalog = Self::default();

        for (i, row) in content.lines().enumerate() {
            let row = row.strip_suffix('\r').unwrap_or(row);
            if row.is_empty() {
                continue;
            }
            catalog.insert(CharacterRecord::from_tsv_row(row, i + 1)?);
        }

        Ok(catalog)
    }

    /// Insert a record, replacing any earlier record for the same character
    pub fn insert(&mut self, record: CharacterRecord) {
        if let Some(previous) = self.records.insert(record.character.clone(), record) {
            tracing::debug!(
                "Duplicate decomposition for {}, keeping the later row",
                previous.character
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, character: &str) -> Option<&CharacterRecord> {
        self.records.get(character)
    }

    /// Records in character order
    pub fn iter(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<CharacterRecord> for CharacterCatalog {
    fn from_iter<I: IntoIterator<Item = CharacterRecord>>(iter: I) -> Self {
        let mut catalog = Self::default();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}
