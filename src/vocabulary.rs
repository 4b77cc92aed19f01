//! Vocabulary loading and the character → vocabulary index
//!
//! The vocabulary source is a header-less CSV file with up to four columns:
//! term, pinyin, part of speech, translation. Only the term is required.

use crate::error::{BushouError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A single vocabulary term with its optional annotations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VocabularyEntry {
    pub term: String,
    pub pinyin: String,
    pub part_of_speech: String,
    pub translation: String,
}

impl VocabularyEntry {
    /// Build an entry from a term with every annotation left empty
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    /// Build an entry from raw CSV fields
    ///
    /// Missing trailing columns default to empty strings and columns past the
    /// fourth are ignored. Returns `None` when the term is empty.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        let column = |i: usize| {
            fields
                .get(i)
                .map(|f| f.as_ref().to_string())
                .unwrap_or_default()
        };

        let term = column(0);
        if term.is_empty() {
            return None;
        }

        Some(Self {
            term,
            pinyin: column(1),
            part_of_speech: column(2),
            translation: column(3),
        })
    }

    /// Distinct characters of the term, in order of first appearance
    pub fn characters(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for c in self.term.chars() {
            let c = c.to_string();
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        seen
    }
}

/// Maps each character to the vocabulary entries whose term contains it
///
/// Entries are stored once; each character keeps indices into the entry
/// list in first-seen order.
#[derive(Debug, Default)]
pub struct VocabularyIndex {
    entries: Vec<VocabularyEntry>,
    by_character: HashMap<String, Vec<usize>>,
}

impl VocabularyIndex {
    /// Load and index a vocabulary CSV file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BushouError::io(path, e))?;
        let index = Self::from_csv(&content)?;

        tracing::info!(
            "Loaded {} vocabulary entries covering {} characters from {}",
            index.entries.len(),
            index.by_character.len(),
            path.display()
        );

        Ok(index)
    }

    /// Parse and index CSV content
    pub fn from_csv(content: &str) -> Result<Self> {
        let rows = parse_csv(content)?;
        Ok(Self::from_entries(rows.iter().filter_map(|row| {
            let entry = VocabularyEntry::from_fields(&row.fields);
            if entry.is_none() {
                tracing::debug!("Line {}: empty term, row skipped", row.line);
            }
            entry
        })))
    }

    /// Index already-built entries
    ///
    /// Entries with an empty term are skipped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = VocabularyEntry>,
    {
        let mut index = Self::default();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    fn insert(&mut self, entry: VocabularyEntry) {
        if entry.term.is_empty() {
            return;
        }

        let slot = self.entries.len();
        for character in entry.characters() {
            self.by_character.entry(character).or_default().push(slot);
        }
        self.entries.push(entry);
    }

    /// Entries containing `character`, in first-seen order
    pub fn lookup(&self, character: &str) -> Option<Vec<&VocabularyEntry>> {
        self.by_character
            .get(character)
            .map(|slots| slots.iter().map(|&i| &self.entries[i]).collect())
    }

    /// Whether any entry contains `character`
    #[cfg(test)]
    pub(crate) fn contains(&self, character: &str) -> bool {
        self.by_character.contains_key(character)
    }

    /// Number of indexed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct characters covered by the index
    pub fn character_count(&self) -> usize {
        self.by_character.len()
    }
}

/// One parsed CSV record and the line it started on
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CsvRow {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Split CSV content into records
///
/// Handles quoted fields (with `""` escapes and embedded newlines) and
/// CRLF line endings. Blank lines produce no record.
pub(crate) fn parse_csv(content: &str) -> Result<Vec<CsvRow>> {
    let mut rows = Vec::new();
    let mut chars = content.chars().peekable();
    let mut line = 1;

    while chars.peek().is_some() {
        let row_line = line;
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut at_field_start = true;

        loop {
            match chars.next() {
                None => {
                    fields.push(std::mem::take(&mut field));
                    break;
                }
                Some('\r') if chars.peek() == Some(&'\n') => continue,
                Some('\n') => {
                    line += 1;
                    fields.push(std::mem::take(&mut field));
                    break;
                }
                Some(',') => {
                    fields.push(std::mem::take(&mut field));
                    at_field_start = true;
                    continue;
                }
                Some('"') if at_field_start => {
                    let quote_line = line;
                    loop {
                        match chars.next() {
                            None => {
                                return Err(BushouError::MalformedVocabulary {
                                    line: quote_line,
                                    reason: "unterminated quoted field".to_string(),
                                })
                            }
                            Some('"') if chars.peek() == Some(&'"') => {
                                chars.next();
                                field.push('"');
                            }
                            Some('"') => break,
                            Some(c) => {
                                if c == '\n' {
                                    line += 1;
                                }
                                field.push(c);
                            }
                        }
                    }
                }
                Some(c) => field.push(c),
            }
            at_field_start = false;
        }

        let blank = fields.len() == 1 && fields[0].is_empty();
        if !blank {
            rows.push(CsvRow {
                line: row_line,
                fields,
            });
        }
    }

    Ok(rows)
}
