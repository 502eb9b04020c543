//! Tests for configuration module.

use super::*;

#[test_log::test]
fn defaults_when_toml_is_empty() {
    let settings = Settings::from_toml("").unwrap();
    tracing::debug!(?settings, "Loaded defaults");

    assert_eq!(settings, Settings::default());
    assert!(settings.parser.require_calendar_root);
    assert!(!settings.parser.multi_document);
    assert!(!settings.parser.skip_invalid_lines);
    assert_eq!(settings.parser.max_depth, 256);
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn toml_overrides_parser_section() {
    let settings = Settings::from_toml(
        "[parser]\nmulti_document = true\nskip_invalid_lines = true\n\n[logging]\nlevel = \"kunai_ical=trace\"\n",
    )
    .unwrap();

    assert!(settings.parser.multi_document);
    assert!(settings.parser.skip_invalid_lines);
    assert!(settings.parser.require_calendar_root);
    assert_eq!(settings.logging.level, "kunai_ical=trace");
}

#[test]
fn toml_overrides_max_depth() {
    let settings = Settings::from_toml("[parser]\nmax_depth = 8\n").unwrap();
    assert_eq!(settings.parser.max_depth, 8);
    assert!(Settings::from_toml("[parser]\nmax_depth = -1\n").is_err());
}

#[test]
fn toml_with_wrong_type_is_rejected() {
    let result = Settings::from_toml("[parser]\nmulti_document = \"often\"\n");
    assert!(result.is_err());
}

#[test]
fn parser_config_is_copy() {
    let config = ParserConfig {
        multi_document: true,
        ..ParserConfig::default()
    };
    let copied = config;
    assert_eq!(copied, config);
}
