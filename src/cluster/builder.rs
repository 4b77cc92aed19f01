use crate::catalog::{CharacterCatalog, CharacterRecord};
use crate::cluster::sorter;
use crate::decomposition::{extract, Position};
use crate::vocabulary::{VocabularyEntry, VocabularyIndex};
use std::collections::BTreeMap;

/// A catalog character together with the vocabulary that uses it
#[derive(Debug, Clone)]
pub struct KnownCharacter<'a> {
    pub record: &'a CharacterRecord,
    /// Never empty
    pub vocabulary: Vec<&'a VocabularyEntry>,
}

impl KnownCharacter<'_> {
    pub fn character(&self) -> &str {
        &self.record.character
    }

    pub fn strokes(&self) -> u32 {
        self.record.strokes
    }
}

/// Two or more characters sharing a component in the same position
#[derive(Debug, Clone)]
pub struct Cluster<'k> {
    pub component: &'k str,
    pub position: Position,
    pub characters: Vec<&'k KnownCharacter<'k>>,
}

impl Cluster<'_> {
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Member characters concatenated in their current order
    pub fn member_string(&self) -> String {
        self.characters.iter().map(|c| c.character()).collect()
    }
}

/// The only character reaching a (component, position) pair
#[derive(Debug, Clone)]
pub struct IsolatedCharacter<'k> {
    pub component: &'k str,
    pub position: Position,
    pub character: &'k KnownCharacter<'k>,
}

/// Result of grouping known characters
#[derive(Debug, Clone, Default)]
pub struct Clustering<'k> {
    pub clusters: Vec<Cluster<'k>>,
    pub isolated: Vec<IsolatedCharacter<'k>>,
}

impl Clustering<'_> {
    /// Order clusters by size and their members by stroke count
    pub fn sort(&mut self) {
        sorter::sort_clusters(&mut self.clusters);
    }
}

/// Catalog characters that have at least one vocabulary entry
#[derive(Debug, Clone, Default)]
pub struct KnownCharacters<'a> {
    characters: Vec<KnownCharacter<'a>>,
}

impl<'a> KnownCharacters<'a> {
    /// Attach vocabulary to every catalog character found in the index
    ///
    /// Characters without vocabulary are dropped. Catalog order is kept.
    pub fn new(catalog: &'a CharacterCatalog, vocabulary: &'a VocabularyIndex) -> Self {
        let characters: Vec<_> = catalog
            .iter()
            .filter_map(|record| {
                vocabulary
                    .lookup(&record.character)
                    .map(|entries| KnownCharacter {
                        record,
                        vocabulary: entries,
                    })
            })
            .collect();

        tracing::info!(
            "{} of {} catalog characters appear in the vocabulary",
            characters.len(),
            catalog.len()
        );

        Self { characters }
    }

    /// Order each character's vocabulary by term
    pub fn sort_vocabulary(&mut self) {
        sorter::sort_vocabulary(&mut self.characters);
    }

    /// Group the known characters into clusters
    pub fn clusters(&self) -> Clustering<'_> {
        build_clusters(&self.characters)
    }

    pub fn as_slice(&self) -> &[KnownCharacter<'a>] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

/// Group characters by identical (component, position) pairs
///
/// A character joins one group per pair it contributes, so it can appear in
/// several clusters, including twice under one component in different
/// positions. Output is ordered by component, then position; members keep
/// input order.
pub fn build_clusters<'k>(characters: &'k [KnownCharacter<'k>]) -> Clustering<'k> {
    let mut groups: BTreeMap<(&'k str, Position), Vec<&'k KnownCharacter<'k>>> = BTreeMap::new();

    for known in characters {
        for (component, positions) in extract(known.record) {
            for position in positions {
                groups.entry((component, position)).or_default().push(known);
            }
        }
    }

    let mut clustering = Clustering::default();
    for ((component, position), members) in groups {
        if members.len() < 2 {
            clustering.isolated.push(IsolatedCharacter {
                component,
                position,
                character: members[0],
            });
        } else {
            clustering.clusters.push(Cluster {
                component,
                position,
                characters: members,
            });
        }
    }

    tracing::info!(
        "Built {} clusters, {} isolated characters",
        clustering.clusters.len(),
        clustering.isolated.len()
    );

    clustering
}
