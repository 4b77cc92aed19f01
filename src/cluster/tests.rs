// Tests for component clustering over small hand-built catalogs
//
// Rows mirror the decomposition database layout; vocabulary is CSV text.

use super::*;
use crate::catalog::CharacterCatalog;
use crate::decomposition::Position;
use crate::vocabulary::VocabularyIndex;
use std::collections::BTreeSet;

fn row(character: &str, strokes: u32, composition: &str, left: &str, right: &str) -> String {
    format!("{character}\t{strokes}\t{composition}\t{left}\t0\t{right}\t0\t\t\t")
}

fn catalog(rows: &[String]) -> CharacterCatalog {
    CharacterCatalog::from_tsv(&rows.join("\n")).unwrap()
}

fn vocabulary(csv: &str) -> VocabularyIndex {
    VocabularyIndex::from_csv(csv).unwrap()
}

/// Membership as (component, position, characters) triples, order-independent
fn membership(clustering: &Clustering<'_>) -> BTreeSet<(String, Position, BTreeSet<String>)> {
    clustering
        .clusters
        .iter()
        .map(|c| {
            (
                c.component.to_string(),
                c.position,
                c.characters.iter().map(|k| k.character().to_string()).collect(),
            )
        })
        .collect()
}

fn wood_catalog() -> CharacterCatalog {
    catalog(&[
        row("材", 7, "Horizontal", "木", "才"),
        row("树", 9, "Horizontal", "木", "对"),
        row("木", 4, "Primitive", "木", "*"),
    ])
}

#[test]
fn test_shared_left_component_forms_cluster() {
    let catalog = wood_catalog();
    let vocab = vocabulary("木材,mucai,n,lumber\n树木,shumu,n,tree\n");
    let known = KnownCharacters::new(&catalog, &vocab);
    let clustering = known.clusters();

    assert_eq!(clustering.clusters.len(), 1);
    let cluster = &clustering.clusters[0];
    assert_eq!(cluster.component, "木");
    assert_eq!(cluster.position, Position::Left);
    assert_eq!(cluster.member_string(), "材树");
}

#[test]
fn test_whole_character_does_not_join_component_cluster() {
    let catalog = wood_catalog();
    let vocab = vocabulary("木材,mucai,n,lumber\n树木,shumu,n,tree\n");
    let known = KnownCharacters::new(&catalog, &vocab);
    let clustering = known.clusters();

    assert!(clustering.clusters[0]
        .characters
        .iter()
        .all(|c| c.character() != "木"));

    // 木 reaches (木, Primitive) alone
    assert!(clustering.isolated.iter().any(|i| i.component == "木"
        && i.position == Position::Primitive
        && i.character.character() == "木"));
}

#[test]
fn test_characters_without_vocabulary_are_excluded() {
    let catalog = catalog(&[
        row("材", 7, "吅", "木", "才"),
        row("树", 9, "吅", "木", "对"),
        row("林", 8, "吅", "木", "木"),
    ]);
    let vocab = vocabulary("木材,mucai,n,lumber\n");
    let known = KnownCharacters::new(&catalog, &vocab);

    assert_eq!(known.len(), 1);
    assert_eq!(known.as_slice()[0].character(), "材");

    let clustering = known.clusters();
    assert!(clustering.clusters.is_empty());
    assert_eq!(clustering.isolated.len(), 2);
}

#[test]
fn test_isolated_pair_never_becomes_cluster() {
    let catalog = catalog(&[
        row("材", 7, "吅", "木", "才"),
        row("树", 9, "吅", "木", "对"),
    ]);
    let vocab = vocabulary("材\n树\n");
    let known = KnownCharacters::new(&catalog, &vocab);
    let clustering = known.clusters();

    assert!(clustering.clusters.iter().all(|c| c.component != "才"));
    let isolated: BTreeSet<_> = clustering
        .isolated
        .iter()
        .map(|i| (i.component, i.position, i.character.character()))
        .collect();
    assert_eq!(
        isolated,
        BTreeSet::from([
            ("才", Position::Right, "材"),
            ("对", Position::Right, "树")
        ])
    );
}

#[test]
fn test_same_component_different_positions_not_merged() {
    // 班 = 王 刂 王
    let catalog = catalog(&[
        row("班", 10, "弼", "王", "刂"),
        row("珠", 10, "吅", "王", "朱"),
        row("球", 11, "吅", "王", "求"),
    ]);
    let vocab = vocabulary("班\n珠\n球\n");
    let known = KnownCharacters::new(&catalog, &vocab);
    let clustering = known.clusters();

    assert_eq!(clustering.clusters.len(), 1);
    let left = &clustering.clusters[0];
    assert_eq!((left.component, left.position), ("王", Position::Left));
    assert_eq!(left.len(), 3);

    // 班 also holds 王 on the right, alone
    assert!(clustering
        .isolated
        .iter()
        .any(|i| i.component == "王" && i.position == Position::Right));
}

#[test]
fn test_character_in_multiple_clusters() {
    let catalog = catalog(&[
        row("林", 8, "吅", "木", "木"),
        row("材", 7, "吅", "木", "才"),
        row("休", 6, "吅", "亻", "木"),
    ]);
    let vocab = vocabulary("森林\n木材\n休息\n");
    let known = KnownCharacters::new(&catalog, &vocab);
    let clustering = known.clusters();

    let membership = membership(&clustering);
    assert!(membership.contains(&(
        "木".to_string(),
        Position::Left,
        BTreeSet::from(["林".to_string(), "材".to_string()])
    )));
    assert!(membership.contains(&(
        "木".to_string(),
        Position::Right,
        BTreeSet::from(["林".to_string(), "休".to_string()])
    )));
}

#[test]
fn test_builder_is_idempotent() {
    let catalog = catalog(&[
        row("材", 7, "吅", "木", "才"),
        row("树", 9, "吅", "木", "对"),
        row("林", 8, "吅", "木", "木"),
        row("想", 13, "吕", "相", "心"),
        row("思", 9, "吕", "田", "心"),
    ]);
    let vocab = vocabulary("木材\n树林\n思想\n");
    let known = KnownCharacters::new(&catalog, &vocab);

    let first = known.clusters();
    let second = known.clusters();
    assert_eq!(membership(&first), membership(&second));
    assert_eq!(first.isolated.len(), second.isolated.len());
}

#[test]
fn test_sort_members_by_strokes() {
    let catalog = catalog(&[
        row("树", 9, "吅", "木", "对"),
        row("杠", 4, "吅", "木", "工"),
        row("札", 7, "吅", "木", "乚"),
    ]);
    let vocab = vocabulary("树\n杠\n札\n");
    let known = KnownCharacters::new(&catalog, &vocab);
    let mut clustering = known.clusters();
    clustering.sort();

    let strokes: Vec<u32> = clustering.clusters[0]
        .characters
        .iter()
        .map(|c| c.strokes())
        .collect();
    assert_eq!(strokes, vec![4, 7, 9]);
}

#[test]
fn test_sort_clusters_by_size_with_deterministic_ties() {
    let catalog = catalog(&[
        // 氵 left: three members
        row("河", 8, "吅", "氵", "可"),
        row("湖", 12, "吅", "氵", "胡"),
        row("海", 10, "吅", "氵", "每"),
        // 心 bottom and 口 left: two members each
        row("想", 13, "吕", "相", "心"),
        row("思", 9, "吕", "田", "心"),
        row("吃", 6, "吅", "口", "乞"),
        row("喝", 12, "吅", "口", "曷"),
    ]);
    let vocab = vocabulary("河\n湖\n海\n想\n思\n吃\n喝\n");
    let known = KnownCharacters::new(&catalog, &vocab);
    let mut clustering = known.clusters();
    clustering.sort();

    let order: Vec<_> = clustering
        .clusters
        .iter()
        .map(|c| (c.component, c.position, c.len()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("氵", Position::Left, 3),
            ("口", Position::Left, 2),
            ("心", Position::Bottom, 2),
        ]
    );
    assert_eq!(clustering.clusters[0].member_string(), "河海湖");
}

#[test]
fn test_sort_vocabulary_by_term() {
    let catalog = wood_catalog();
    let vocab = vocabulary("树木,shumu\n木材,mucai\n木头,mutou\n");
    let mut known = KnownCharacters::new(&catalog, &vocab);
    known.sort_vocabulary();

    let wood = known
        .as_slice()
        .iter()
        .find(|k| k.character() == "木")
        .unwrap();
    let terms: Vec<_> = wood.vocabulary.iter().map(|v| v.term.as_str()).collect();
    assert_eq!(terms, vec!["木头", "木材", "树木"]);
}

#[test]
fn test_unrecognized_composition_contributes_nothing() {
    let catalog = catalog(&[
        row("材", 7, "?", "木", "才"),
        row("树", 9, "?", "木", "对"),
    ]);
    let vocab = vocabulary("材\n树\n");
    let known = KnownCharacters::new(&catalog, &vocab);
    let clustering = known.clusters();

    assert_eq!(known.len(), 2);
    assert!(clustering.clusters.is_empty());
    assert!(clustering.isolated.is_empty());
}

#[test]
fn test_empty_inputs() {
    let catalog = CharacterCatalog::default();
    let vocab = VocabularyIndex::default();
    let known = KnownCharacters::new(&catalog, &vocab);
    assert!(known.is_empty());

    let clustering = known.clusters();
    assert!(clustering.clusters.is_empty());
    assert!(clustering.isolated.is_empty());
}
