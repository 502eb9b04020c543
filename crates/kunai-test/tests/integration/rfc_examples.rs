//! RFC 5545 §4 examples read from disk.

use kunai_ical::parse::parse_reader;
use kunai_ical::{ComponentKind, parse, serialize};
use kunai_test::{fixture_path, read_fixture, to_crlf};

#[test_log::test(tokio::test)]
async fn group_meeting_parses_and_refolds() {
    let input = read_fixture("rfc5545_group_meeting.ics").await.unwrap();
    let ical = parse(&input).unwrap();

    assert_eq!(
        ical.prodid(),
        Some("-//RDU Software//NONSGML HandCal//EN")
    );
    assert_eq!(ical.root.children.len(), 2);
    assert_eq!(ical.root.children[0].kind, ComponentKind::Timezone);
    assert_eq!(ical.root.children[1].kind, ComponentKind::Event);

    // The ATTENDEE line is 82 octets once unfolded, so it is refolded at 75.
    let out = serialize(&ical);
    assert!(out.contains(
        "ATTENDEE;RSVP=TRUE;ROLE=REQ-PARTICIPANT;CUTYPE=GROUP:mailto:employee-A@exam\r\n ple.com\r\n"
    ));
    assert!(out.split("\r\n").all(|line| line.len() <= 75));
    assert_eq!(parse(&out).unwrap(), ical);
}

#[test]
fn bare_lf_input_matches_crlf_input() {
    let crlf = std::fs::read_to_string(fixture_path("rfc5545_journal.ics")).unwrap();
    let lf = std::fs::read_to_string(fixture_path("rfc5545_journal_lf.ics")).unwrap();

    assert_eq!(to_crlf(&lf), crlf);
    assert_eq!(parse(&lf).unwrap(), parse(&crlf).unwrap());
}

#[test]
fn reader_and_string_parses_agree() {
    let path = fixture_path("rfc5545_group_meeting.ics");
    let file = std::fs::File::open(&path).unwrap();
    let from_reader = parse_reader(std::io::BufReader::new(file)).unwrap();
    let from_string = parse(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(from_reader, from_string);
}

#[test]
fn continuation_merge_keeps_everything_but_the_fold_space() {
    let input = to_crlf(
        "BEGIN:VCALENDAR\n\
         ATTENDEE;RSVP=TRUE;ROLE=REQ-PARTICIPANT;CUTYPE=GROUP:\n\
         \x20mailto:employee-A@example.com\n\
         DESCRIPTION:Project XYZ Review Meeting\n\
         CATEGORIES:MEETING\n\
         CLASS:PUBLIC\n\
         END:VCALENDAR\n",
    );
    let ical = parse(&input).unwrap();
    let lines: Vec<String> = ical
        .root
        .properties
        .iter()
        .map(kunai_ical::build::content_line)
        .collect();

    assert_eq!(
        lines,
        [
            "ATTENDEE;RSVP=TRUE;ROLE=REQ-PARTICIPANT;CUTYPE=GROUP:mailto:employee-A@example.com",
            "DESCRIPTION:Project XYZ Review Meeting",
            "CATEGORIES:MEETING",
            "CLASS:PUBLIC",
        ]
    );
}
