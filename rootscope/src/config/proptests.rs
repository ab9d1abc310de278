//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, LayerConfig};
use crate::locator::MatchMode;
use proptest::prelude::*;

fn match_mode_strategy() -> impl Strategy<Value = MatchMode> {
    prop_oneof![Just(MatchMode::FirstMatch), Just(MatchMode::LongestPrefix)]
}

fn layer_strategy() -> impl Strategy<Value = LayerConfig> {
    (
        "[a-z]{1,10}",
        prop::option::of(prop::collection::vec("/[a-z]{1,8}(/[a-z]{1,8}){0,3}", 0..4)),
    )
        .prop_map(|(name, roots)| LayerConfig { name, roots })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[A-Z_]{1,12}"),
        prop::option::of(prop_oneof![Just(':'), Just(';'), Just(',')]),
        prop::option::of(match_mode_strategy()),
        prop::option::of(prop::collection::vec(layer_strategy(), 0..4)),
    )
        .prop_map(|(path_list_var, path_separator, match_mode, layers)| Config {
            path_list_var,
            path_separator,
            match_mode,
            layers,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Merging an empty config changes nothing
    #[test]
    fn merge_empty_is_right_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging into an empty config copies every value
    #[test]
    fn merge_into_empty_copies(config in config_strategy()) {
        let mut merged = Config::default();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // A set field in the higher source always wins; an unset one never does
    #[test]
    fn higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(
            merged.path_list_var,
            high.path_list_var.clone().or(low.path_list_var.clone())
        );
        prop_assert_eq!(merged.path_separator, high.path_separator.or(low.path_separator));
        prop_assert_eq!(merged.match_mode, high.match_mode.or(low.match_mode));
        prop_assert_eq!(merged.layers, high.layers.or(low.layers));
    }
}
