use crate::cluster::{Cluster, KnownCharacter};

/// Order clusters by descending size, then each cluster's members
///
/// The sort is stable: equally sized clusters keep their builder order
/// (component, then position).
pub fn sort_clusters(clusters: &mut [Cluster<'_>]) {
    clusters.sort_by(|a, b| b.characters.len().cmp(&a.characters.len()));

    for cluster in clusters.iter_mut() {
        sort_members(cluster);
    }
}

/// Order a cluster's characters by ascending stroke count, stable on ties
pub fn sort_members(cluster: &mut Cluster<'_>) {
    cluster.characters.sort_by_key(|c| c.strokes());
}

/// Order each character's vocabulary by term, stable on ties
pub fn sort_vocabulary(characters: &mut [KnownCharacter<'_>]) {
    for known in characters {
        known.vocabulary.sort_by(|a, b| a.term.cmp(&b.term));
    }
}
