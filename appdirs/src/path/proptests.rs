//! Property-based tests for path handling and keyword transcoding.
//!
//! Note: The normalize module already has property tests for cleaning.
//! This module focuses on relative paths and the registry round trip.

use super::normalize::clean;
use super::relationship::{relative_to, PathRelationship};
use crate::dir::{Dir, DirOptions};
use crate::kind::DirKind;
use crate::registry::AppDirs;
use proptest::prelude::*;
use std::path::{Path, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn registry() -> AppDirs {
    let mut dirs = AppDirs::new();
    for (kind, path) in [
        (DirKind::Cache, "/appdirs-prop/cache/Test"),
        (DirKind::Home, "/appdirs-prop/home"),
        (DirKind::Temp, "/appdirs-prop/tmp/Test"),
        (DirKind::Workspace, "/appdirs-prop/home/src/repo"),
    ] {
        dirs.assign(Dir::new(kind, "Test", DirOptions::new().path(path)).unwrap());
    }
    dirs
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Joining a relative path back onto its base reproduces the target
    #[test]
    fn relative_to_rejoins(base in absolute_path_strategy(), target in absolute_path_strategy()) {
        let rel = relative_to(&base, &target).expect("absolute paths are comparable");
        prop_assert_eq!(clean(&base.join(rel)), clean(&target));
    }

    // A descendant's relative path never climbs out of the base
    #[test]
    fn relative_to_descendant_has_no_parent_refs(
        base in absolute_path_strategy(),
        tail in prop::collection::vec(path_component_strategy(), 1..4),
    ) {
        let target = tail.iter().fold(base.clone(), |acc, part| acc.join(part));
        prop_assert_eq!(
            PathRelationship::between(&base, &target),
            PathRelationship::Ancestor
        );
        let rel = relative_to(&base, &target).unwrap();
        prop_assert!(!rel.to_string_lossy().contains(".."));
    }

    // Expanding a parameterized path under a registered directory round trips
    #[test]
    fn parameterize_round_trip(
        kind in prop_oneof![
            Just(DirKind::Cache),
            Just(DirKind::Home),
            Just(DirKind::Temp),
            Just(DirKind::Workspace),
        ],
        tail in prop::collection::vec("[a-z]{3,12}", 1..5),
    ) {
        let dirs = registry();
        let root = dirs.dir(kind).unwrap().path().to_path_buf();
        let original = tail.iter().fold(root, |acc, part| acc.join(part));

        let portable = dirs.parameterize("/", &original);
        prop_assert_eq!(dirs.make_absolute("/", &portable), original);
    }

    // Expansion of a plain relative path is just a join with the base
    #[test]
    fn make_absolute_without_keywords_joins_base(
        base in absolute_path_strategy(),
        tail in prop::collection::vec(path_component_strategy(), 1..5),
    ) {
        let dirs = registry();
        let input = tail.join("/");
        prop_assert_eq!(dirs.make_absolute(&base, &input), base.join(Path::new(&input)));
    }
}
