//! Parser policy taken from configuration.

use kunai_ical::parse::{ParseErrorKind, parse_all_with};
use kunai_ical::{ParseOptions, RfcError, parse_with};
use kunai_test::config::Settings;
use kunai_test::{init_tracing, read_fixture};

#[test_log::test(tokio::test)]
async fn lenient_settings_skip_bad_lines() {
    let settings = Settings::from_toml(
        r#"
        [parser]
        skip_invalid_lines = true

        [logging]
        level = "kunai_ical=debug"
        "#,
    )
    .unwrap();
    init_tracing(&settings.logging);

    let input = read_fixture("bad_quote.ics").await.unwrap();
    let options = ParseOptions::from(&settings.parser);
    let ical = parse_with(&input, &options).unwrap();

    let event = ical.events()[0];
    assert!(event.get_property("ATTENDEE").is_none());
    assert_eq!(event.view().summary().as_deref(), Some("Still here"));
}

#[test_log::test(tokio::test)]
async fn default_settings_are_strict() {
    let settings = Settings::from_toml("").unwrap();
    let input = read_fixture("bad_quote.ics").await.unwrap();

    let result = parse_with(&input, &ParseOptions::from(&settings.parser));
    assert!(matches!(result, Err(RfcError::PropertyDecode(_))));
}

#[test_log::test(tokio::test)]
async fn multi_document_from_settings() {
    let settings = Settings::from_toml("[parser]\nmulti_document = true\n").unwrap();
    let input = read_fixture("two_calendars.ics").await.unwrap();

    let roots = parse_all_with(&input, &ParseOptions::from(&settings.parser)).unwrap();
    assert_eq!(roots.len(), 2);
}

#[test]
fn non_calendar_root_follows_settings() {
    let input = "BEGIN:VEVENT\r\nUID:loose\r\nEND:VEVENT\r\n";

    let strict = Settings::default();
    let err = parse_all_with(input, &ParseOptions::from(&strict.parser)).unwrap_err();
    assert_eq!(
        err.parse_error().map(|e| e.kind),
        Some(ParseErrorKind::UnexpectedRoot)
    );

    let relaxed = Settings::from_toml("[parser]\nrequire_calendar_root = false\n").unwrap();
    let roots = parse_all_with(input, &ParseOptions::from(&relaxed.parser)).unwrap();
    assert_eq!(roots[0].uid(), Some("loose"));
}

#[test_log::test(tokio::test)]
async fn nesting_limit_follows_settings() {
    let input = read_fixture("rfc5545_journal.ics").await.unwrap();

    let settings = Settings::from_toml("[parser]\nmax_depth = 1\n").unwrap();
    let err = parse_with(&input, &ParseOptions::from(&settings.parser)).unwrap_err();
    assert!(matches!(err, RfcError::Structural(_)));
    assert_eq!(
        err.parse_error().map(|e| e.kind),
        Some(ParseErrorKind::NestingTooDeep)
    );

    let settings = Settings::from_toml("[parser]\nmax_depth = 2\n").unwrap();
    assert!(parse_with(&input, &ParseOptions::from(&settings.parser)).is_ok());
}
