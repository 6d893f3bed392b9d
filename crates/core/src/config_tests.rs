// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write as _;

#[test]
fn defaults_match_the_shipped_worker() {
    let config = WorkerConfig::default();

    assert_eq!(config.rates.idle, 10);
    assert_eq!(config.rates.preparing, TICKS_PER_SECOND);
    assert_eq!(config.rates.active, 5);
    assert_eq!(config.xp_per_dig, 0.5);
    assert_eq!(config.odds.base_cap, 0.10);
}

#[test]
fn empty_toml_yields_defaults() {
    let config = WorkerConfig::from_toml_str("").unwrap();
    assert_eq!(config.rates.idle, 10);
    assert_eq!(config.odds.mana_level_weight, 0.0025);
}

#[test]
fn partial_toml_overrides_only_named_keys() {
    let config = WorkerConfig::from_toml_str(
        r#"
        xp_per_dig = 1.0

        [rates]
        idle = 40

        [odds]
        base_cap = 0.25
        "#,
    )
    .unwrap();

    assert_eq!(config.xp_per_dig, 1.0);
    assert_eq!(config.rates.idle, 40);
    assert_eq!(config.rates.active, 5);
    assert_eq!(config.odds.base_cap, 0.25);
    assert_eq!(config.odds.mystical_bonus, 0.01);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = WorkerConfig::from_toml_str("rates = \"fast\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reads_a_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[rates]\npreparing = 30").unwrap();

    let config = WorkerConfig::load(file.path()).unwrap();
    assert_eq!(config.rates.preparing, 30);
}

#[test]
fn load_missing_file_is_an_io_error() {
    let err = WorkerConfig::load(Path::new("/nonexistent/sexton.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
