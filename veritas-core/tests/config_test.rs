//! Config loading and validation tests.

use std::io::Write;

use veritas_core::config::EngineConfig;
use veritas_core::errors::ConfigError;

#[test]
fn load_missing_file_is_not_found() {
    let err = EngineConfig::load_from_file("/nonexistent/veritas.toml").unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn load_partial_toml_fills_defaults() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        f,
        r#"
[level_thresholds]
moderate = 50
high = 65
exceptional = 80

[fairness]
min_group_size = 50
"#
    )
    .unwrap();

    let cfg = EngineConfig::load_from_file(f.path()).unwrap();
    assert_eq!(cfg.level_thresholds.moderate, 50);
    assert_eq!(cfg.fairness.min_group_size, 50);
    // Unspecified sections keep defaults.
    assert_eq!(cfg.scale.min, 1);
    assert_eq!(cfg.scale.max, 5);
    assert_eq!(cfg.fairness.four_fifths_threshold, 80);
    assert_eq!(cfg.validity.straightline_window, 10);
}

#[test]
fn load_invalid_thresholds_fails_validation() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        f,
        r#"
[level_thresholds]
moderate = 90
high = 65
exceptional = 80
"#
    )
    .unwrap();

    let err = EngineConfig::load_from_file(f.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn load_malformed_toml_is_parse_error() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "level_thresholds = [[[").unwrap();

    let err = EngineConfig::load_from_file(f.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
