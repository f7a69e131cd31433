//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::ConfigValidator;
use proptest::prelude::*;
use std::path::PathBuf;

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Text), Just(OutputFormat::Json)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        proptest::option::of("/[a-z]{1,8}(/[a-zA-Z ]{1,8}){0,3}"),
        proptest::option::of("[a-z][a-z ]{0,15}"),
        proptest::option::of(any::<bool>()),
        proptest::option::of(format_strategy()),
    )
        .prop_map(|(root, conflict_suffix, probe_fallback, output_format)| Config {
            root: root.map(PathBuf::from),
            conflict_suffix,
            probe_fallback,
            output_format,
        })
}

proptest! {
    // Merging into defaults reproduces the source
    #[test]
    fn merge_into_default_is_identity(config in config_strategy()) {
        let mut target = Config::default();
        ConfigMerger::merge_into(&mut target, &config);
        prop_assert_eq!(target, config);
    }

    // Merging is idempotent
    #[test]
    fn merge_idempotent(base in config_strategy(), layer in config_strategy()) {
        let mut once = base;
        ConfigMerger::merge_into(&mut once, &layer);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &layer);
        prop_assert_eq!(once, twice);
    }

    // A set field in the higher layer always wins
    #[test]
    fn higher_layer_wins(base in config_strategy(), layer in config_strategy()) {
        let mut merged = base.clone();
        ConfigMerger::merge_into(&mut merged, &layer);
        prop_assert_eq!(merged.root, layer.root.or(base.root));
        prop_assert_eq!(merged.conflict_suffix, layer.conflict_suffix.or(base.conflict_suffix));
        prop_assert_eq!(merged.probe_fallback, layer.probe_fallback.or(base.probe_fallback));
        prop_assert_eq!(merged.output_format, layer.output_format.or(base.output_format));
    }

    // Generated configurations stay within the validated shape
    #[cfg(unix)]
    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }
}
