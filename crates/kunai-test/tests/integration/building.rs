//! Building calendars in code and reading them back.

use kunai_ical::core::{ComponentKind, ICalendar, Parameter};
use kunai_ical::{ComponentView, parse, serialize};

#[test_log::test]
fn built_calendar_round_trips() {
    let mut cal = ICalendar::default();
    cal.set_method("REQUEST");

    cal.add_event("meeting-1@example.com")
        .edit()
        .set_dtstamp_raw("20260301T080000Z")
        .set_start_raw("20260302T090000Z")
        .set_end_raw("20260302T100000Z")
        .set_summary("Quarterly planning, part 2")
        .set_description("Agenda:\n1. Numbers\n2. Hiring; backfills")
        .set_status("CONFIRMED")
        .set_organizer("mailto:boss@example.com", Some("Pat Boss"))
        .add_attendee(
            "mailto:a@example.com",
            [Parameter::partstat("ACCEPTED"), Parameter::rsvp(false)],
        )
        .add_attendee("mailto:b@example.com", [Parameter::cn("Lee, Sam")]);

    cal.add_todo("todo-1@example.com")
        .edit()
        .set_summary("Send minutes");

    let text = serialize(&cal);
    let parsed = parse(&text).unwrap();
    assert_eq!(parsed, cal);
    assert_eq!(parsed.method(), Some("REQUEST"));
    assert_eq!(
        parsed.uids(),
        ["meeting-1@example.com", "todo-1@example.com"]
    );

    let ComponentView::Event(event) = parsed.root.children[0].view() else {
        panic!("first child should be an event");
    };
    let view = event.view();
    assert_eq!(
        view.description().as_deref(),
        Some("Agenda:\n1. Numbers\n2. Hiring; backfills")
    );
    let attendees: Vec<&str> = view.attendees().iter().map(|a| a.value.as_str()).collect();
    assert_eq!(attendees, ["mailto:a@example.com", "mailto:b@example.com"]);
    assert_eq!(
        view.attendees()[1].get_param_value("CN"),
        Some("Lee, Sam")
    );
}

#[test]
fn default_calendar_header() {
    let cal = ICalendar::default();
    assert_eq!(
        serialize(&cal),
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Kunai//Kunai iCalendar//EN\r\nEND:VCALENDAR\r\n"
    );
    assert_eq!(cal.root.kind, ComponentKind::Calendar);
}
