// Component clustering
//
// Groups the characters of the catalog that appear in the vocabulary by the
// exact (component, position) pairs their decompositions contribute. Groups
// of two or more characters are clusters; single-member groups are kept
// apart as isolated characters.
//
// Pipeline:
//   KnownCharacters::new   restrict the catalog to characters with vocabulary
//   sort_vocabulary        order each character's vocabulary by term
//   clusters()             group by (component, position)
//   Clustering::sort       order clusters by size and members by strokes
//
// Vocabulary must be ordered before grouping, since clusters borrow the
// known characters they list.

mod builder;
mod sorter;

pub use builder::{
    build_clusters, Cluster, Clustering, IsolatedCharacter, KnownCharacter, KnownCharacters,
};
pub use sorter::{sort_clusters, sort_members, sort_vocabulary};

#[cfg(test)]
mod tests;
