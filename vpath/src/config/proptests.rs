//! Property-based tests for the configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use crate::OsKind;
use proptest::prelude::*;

fn os_strategy() -> impl Strategy<Value = OsKind> {
    prop_oneof![
        Just(OsKind::Unknown),
        Just(OsKind::Linux),
        Just(OsKind::Darwin),
        Just(OsKind::Windows),
    ]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Text), Just(OutputFormat::Json)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(os_strategy()),
        prop::option::of(format_strategy()),
    )
        .prop_map(|(os, output_format)| Config { os, output_format })
}

proptest! {
    // Set fields of the higher-precedence config always win.
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);
        prop_assert_eq!(merged.os, high.os.or(low.os));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // Merging an empty config changes nothing.
    #[test]
    fn merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // YAML serialization round-trips.
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }

    // Display and FromStr agree.
    #[test]
    fn os_kind_display_parses_back(os in os_strategy()) {
        prop_assert_eq!(os.to_string().parse::<OsKind>(), Ok(os));
    }
}
