//! Property-based tests across normalization and matching.
//!
//! The individual modules already carry small property tests. These run many
//! more cases and cover the interplay between locator syntaxes and roots.

use super::normalize::normalize;
use super::{Locator, MatchMode, Matcher, Root, RootSet};
use proptest::prelude::*;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..6)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn syntax_strategy(path: String) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(path.clone()),
        Just(format!("{path}/")),
        Just(format!("file:{path}")),
        Just(format!("file://{path}/")),
        Just(format!("jar:file:{path}!/")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 5000,
        .. ProptestConfig::default()
    })]

    // Every syntax for one path normalizes identically
    #[test]
    fn syntax_independent(
        (path, spelled) in absolute_path_strategy()
            .prop_flat_map(|p| (Just(p.clone()), syntax_strategy(p)))
    ) {
        prop_assert_eq!(normalize(&spelled), normalize(&path));
    }

    // A resource built under a root maps back to that root, whatever syntax
    // the root was discovered with
    #[test]
    fn resource_maps_back_to_root(
        (path, spelled) in absolute_path_strategy()
            .prop_flat_map(|p| (Just(p.clone()), syntax_strategy(p))),
        relative in prop::collection::vec(path_component_strategy(), 1..4),
    ) {
        let root = Root::new(spelled);
        let resource = Locator::new(format!("{path}/{}.class", relative.join("/")));
        let owner = Matcher::new().best_match(&resource, std::slice::from_ref(&root));
        prop_assert_eq!(owner, root);
    }

    // Deduplicated sets never hold two roots with the same normalized form
    #[test]
    fn root_set_has_unique_normalized_forms(
        paths in prop::collection::vec(absolute_path_strategy(), 0..12)
    ) {
        let set: RootSet = paths.iter().map(|p| Locator::from(p.as_str())).collect();
        let mut seen = std::collections::HashSet::new();
        for root in &set {
            prop_assert!(seen.insert(root.normalized().clone()));
        }
    }

    // Longest-prefix never returns a shorter root than first-match
    #[test]
    fn longest_prefix_at_least_as_specific(
        locator in absolute_path_strategy(),
        candidates in prop::collection::vec(absolute_path_strategy(), 0..6),
    ) {
        let locator = Locator::from(locator);
        let candidates: Vec<Root> = candidates.into_iter().map(Root::from).collect();
        let first = Matcher::new().best_match(&locator, &candidates);
        let longest = Matcher::new()
            .with_mode(MatchMode::LongestPrefix)
            .best_match(&locator, &candidates);
        prop_assert!(longest.normalized().len() >= first.normalized().len()
            || longest.locator() == &locator);
    }
}
