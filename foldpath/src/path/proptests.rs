//! Property-based tests for resolution and relationship checks.
//!
//! Resolution properties run against an in-memory tree so they can create
//! case-colliding siblings on any host filesystem.

use super::candidates::CaseResolver;
use super::lister::{DirectoryLister, MemoryLister};
use super::relationship::{is_child, is_equal_or_child, PathRelationship};
use super::root::Root;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn recase(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().cycle())
        .map(|(c, &upper)| {
            if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

// A tree of several absolute paths, some of which may collide by case.
fn tree_strategy() -> impl Strategy<Value = (MemoryLister, Vec<String>)> {
    prop::collection::vec(absolute_path_strategy(), 1..6).prop_map(|files| {
        let mut tree = MemoryLister::new();
        for file in &files {
            tree.add_file(file);
        }
        (tree, files)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // A path is never a child of itself, with or without trailing separators
    #[test]
    fn is_child_irreflexive(path in absolute_path_strategy(), a in 0..3usize, b in 0..3usize) {
        let left = format!("{path}{}", "/".repeat(a));
        let right = format!("{path}{}", "/".repeat(b));
        prop_assert!(!is_child(&left, &right).unwrap());
        prop_assert!(is_equal_or_child(&left, &right).unwrap());
    }

    // Appending whole segments always yields a child
    #[test]
    fn appended_segments_are_children(base in absolute_path_strategy(), tail in prop::collection::vec(component_strategy(), 1..4)) {
        let child = format!("{base}/{}", tail.join("/"));
        prop_assert!(is_child(&child, &base).unwrap());
        prop_assert_eq!(PathRelationship::between(&base, &child).unwrap(), PathRelationship::Ancestor);
        prop_assert_eq!(PathRelationship::between(&child, &base).unwrap(), PathRelationship::Descendant);
    }

    // Extending the last segment textually never makes a child
    #[test]
    fn unaligned_prefix_is_not_child(base in absolute_path_strategy(), extra in component_strategy()) {
        let sibling = format!("{base}{extra}");
        prop_assert!(!is_child(&sibling, &base).unwrap());
        prop_assert_eq!(PathRelationship::between(&base, &sibling).unwrap(), PathRelationship::Unrelated);
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn relationship_symmetric(path1 in absolute_path_strategy(), path2 in absolute_path_strategy()) {
        let rel_12 = PathRelationship::between(&path1, &path2).unwrap();
        let rel_21 = PathRelationship::between(&path2, &path1).unwrap();

        let is_symmetric = matches!(
            (rel_12, rel_21),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );
        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_12, rel_21);
    }
}

#[cfg(unix)]
proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        .. ProptestConfig::default()
    })]

    // Any re-casing of an existing path resolves, and only to existing entries
    #[test]
    fn recased_existing_paths_resolve((tree, files) in tree_strategy(), pick in any::<prop::sample::Index>(), mask in prop::collection::vec(any::<bool>(), 1..16)) {
        let original = pick.get(&files);
        let scrambled = recase(original, &mask);
        let resolver = CaseResolver::with_lister(tree);

        let found = resolver.equivalent_path_candidates(&scrambled, &Root::Filesystem).unwrap();
        prop_assert!(!found.is_empty());
        prop_assert!(found.iter().any(|p| p.to_str() == Some(original.as_str())));
        for candidate in &found {
            prop_assert!(resolver.lister().exists(candidate));
        }
    }

    // Existence agrees with the candidate set
    #[test]
    fn exists_matches_candidates((tree, files) in tree_strategy(), probe in absolute_path_strategy(), pick in any::<prop::sample::Index>(), use_probe in any::<bool>()) {
        let path = if use_probe { probe } else { pick.get(&files).to_uppercase() };
        let resolver = CaseResolver::with_lister(tree);

        let found = resolver.equivalent_path_candidates(&path, &Root::Filesystem).unwrap();
        let exists = resolver.normalized_path_exists(&path, &Root::Filesystem).unwrap();
        prop_assert_eq!(exists, !found.is_empty());
    }

    // Denormalizing is idempotent
    #[test]
    fn denormalize_idempotent((tree, files) in tree_strategy(), pick in any::<prop::sample::Index>(), mask in prop::collection::vec(any::<bool>(), 1..16)) {
        let scrambled = recase(pick.get(&files), &mask);
        let resolver = CaseResolver::with_lister(tree);

        let once = resolver.denormalize_path(&scrambled);
        let twice = resolver.denormalize_path(&once);
        prop_assert_eq!(once, twice);
    }
}
