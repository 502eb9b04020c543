//! Async and reader-driven parsing over files.

use kunai_ical::parse::{ParseErrorKind, parse_components_async};
use kunai_ical::{ParseOptions, RfcError, parse_async, write_component};
use kunai_test::open_fixture;

#[test_log::test(tokio::test)]
async fn parse_file_asynchronously() {
    let reader = open_fixture("rfc5545_journal.ics").await.unwrap();
    let ical = parse_async(reader, &ParseOptions::default()).await.unwrap();

    let journal = ical.journals()[0];
    assert_eq!(journal.uid(), Some("uid5@example.com"));
    assert!(
        journal
            .view()
            .description()
            .unwrap()
            .starts_with("Project xyz Review Meeting Minutes\nAgenda\n1. Review")
    );
}

#[test_log::test(tokio::test)]
async fn concatenated_calendars_need_multi_document() {
    let reader = open_fixture("two_calendars.ics").await.unwrap();
    let err = parse_async(reader, &ParseOptions::default())
        .await
        .unwrap_err();
    assert_eq!(
        err.parse_error().map(|e| e.kind),
        Some(ParseErrorKind::MultipleRoots)
    );

    let options = ParseOptions {
        multi_document: true,
        ..ParseOptions::default()
    };
    let reader = open_fixture("two_calendars.ics").await.unwrap();
    let roots = parse_components_async(reader, &options).await.unwrap();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].children[0].name, "VTODO");
    assert_eq!(roots[1].children[0].name, "VFREEBUSY");
}

#[test_log::test(tokio::test)]
async fn bad_quote_aborts_with_position() {
    let reader = open_fixture("bad_quote.ics").await.unwrap();
    match parse_async(reader, &ParseOptions::default()).await {
        Err(RfcError::PropertyDecode(err)) => {
            assert_eq!(err.kind, ParseErrorKind::UnexpectedQuote);
            assert_eq!((err.line, err.column), (6, 16));
        }
        other => panic!("expected decode failure, got {other:?}"),
    }
}

#[test_log::test(tokio::test)]
async fn streamed_output_reparses_to_same_tree() {
    let reader = open_fixture("rfc5545_group_meeting.ics").await.unwrap();
    let ical = parse_async(reader, &ParseOptions::default()).await.unwrap();

    let mut out = Vec::new();
    write_component(&ical.root, &mut out).unwrap();

    let again = parse_async(out.as_slice(), &ParseOptions::default())
        .await
        .unwrap();
    assert_eq!(again, ical);
}

#[test_log::test(tokio::test)]
async fn missing_fixture_is_reported() {
    let err = open_fixture("does-not-exist.ics").await.unwrap_err();
    assert!(err.to_string().contains("does-not-exist.ics"));
}
