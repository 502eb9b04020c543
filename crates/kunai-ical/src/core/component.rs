//! iCalendar component types (RFC 5545 §3.4-3.6).

use kunai_core::constants::{DEFAULT_PRODID, ICALENDAR_VERSION};

use super::Property;
use super::names;

/// Classification of a component name.
///
/// Only the kinds the views care about get a variant; every other token,
/// `X-` components included, is `Unknown` and keeps its text in
/// [`Component::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Calendar,
    Event,
    Todo,
    Journal,
    FreeBusy,
    Timezone,
    Alarm,
    /// Standard-time observance inside VTIMEZONE.
    Standard,
    /// Daylight-saving observance inside VTIMEZONE.
    Daylight,
    Unknown,
}

const KNOWN_KINDS: [(ComponentKind, &str); 9] = [
    (ComponentKind::Calendar, "VCALENDAR"),
    (ComponentKind::Event, "VEVENT"),
    (ComponentKind::Todo, "VTODO"),
    (ComponentKind::Journal, "VJOURNAL"),
    (ComponentKind::FreeBusy, "VFREEBUSY"),
    (ComponentKind::Timezone, "VTIMEZONE"),
    (ComponentKind::Alarm, "VALARM"),
    (ComponentKind::Standard, "STANDARD"),
    (ComponentKind::Daylight, "DAYLIGHT"),
];

impl ComponentKind {
    /// Wire name of a known kind; `None` for `Unknown`.
    #[must_use]
    pub fn as_str(self) -> Option<&'static str> {
        KNOWN_KINDS
            .iter()
            .find_map(|&(kind, name)| (kind == self).then_some(name))
    }

    /// Classifies a component name, ignoring ASCII case.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        KNOWN_KINDS
            .iter()
            .find_map(|&(kind, known)| known.eq_ignore_ascii_case(name).then_some(kind))
            .unwrap_or(Self::Unknown)
    }

    /// VEVENT, VTODO and VJOURNAL carry scheduling data.
    #[must_use]
    pub const fn is_schedulable(self) -> bool {
        matches!(self, Self::Event | Self::Todo | Self::Journal)
    }
}

/// A `BEGIN:<name>` ... `END:<name>` block.
///
/// Holds properties and nested components in the order they were added or
/// parsed; nothing here reorders or deduplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub kind: ComponentKind,
    /// Name as written after `BEGIN:`, the source of truth for unknown kinds.
    pub name: String,
    pub properties: Vec<Property>,
    pub children: Vec<Component>,
}

impl Component {
    /// Creates an empty component; `kind` is derived from `name`, ignoring
    /// case, and `name` is kept verbatim.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: ComponentKind::parse(&name),
            name,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    fn of_kind(kind: ComponentKind) -> Self {
        Self::named(kind.as_str().unwrap_or_default())
    }

    #[must_use]
    pub fn calendar() -> Self {
        Self::of_kind(ComponentKind::Calendar)
    }

    #[must_use]
    pub fn event() -> Self {
        Self::of_kind(ComponentKind::Event)
    }

    #[must_use]
    pub fn todo() -> Self {
        Self::of_kind(ComponentKind::Todo)
    }

    #[must_use]
    pub fn alarm() -> Self {
        Self::of_kind(ComponentKind::Alarm)
    }

    pub fn add_property(&mut self, prop: Property) {
        self.properties.push(prop);
    }

    /// Overwrites the first property named like `prop` where it stands, or
    /// appends `prop` when there is none.
    pub fn set_property(&mut self, prop: Property) {
        match self.properties.iter_mut().find(|p| p.name == prop.name) {
            Some(slot) => *slot = prop,
            None => self.properties.push(prop),
        }
    }

    /// Drops every property called `name`; returns how many went.
    pub fn remove_properties(&mut self, name: &str) -> usize {
        let before = self.properties.len();
        self.properties.retain(|p| !p.name.eq_ignore_ascii_case(name));
        before - self.properties.len()
    }

    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// First property called `name` (ASCII case-insensitive).
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.properties_named(name).next()
    }

    /// Every property called `name`, in stored order.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&Property> {
        self.properties_named(name).collect()
    }

    fn properties_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Property> {
        self.properties
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    /// Raw UID value.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.value_of(names::UID)
    }

    /// Raw value of the first property called `name`.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.get_property(name).map(|p| p.value.as_str())
    }

    #[must_use]
    pub fn children_of_kind(&self, kind: ComponentKind) -> Vec<&Component> {
        self.children.iter().filter(|c| c.kind == kind).collect()
    }
}

/// A parsed or built calendar document: a `VCALENDAR` root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ICalendar {
    pub root: Component,
}

impl ICalendar {
    /// Starts a calendar whose root carries `VERSION:2.0` then `PRODID`.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut root = Component::calendar();
        root.add_property(Property::new(names::VERSION, ICALENDAR_VERSION));
        root.add_property(Property::new(names::PRODID, prodid));
        Self { root }
    }

    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.root.value_of(names::PRODID)
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root.value_of(names::VERSION)
    }

    /// iTIP method (RFC 5546), e.g. `REQUEST`.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.root.value_of(names::METHOD)
    }

    pub fn set_method(&mut self, method: impl Into<String>) {
        self.root.set_property(Property::new(names::METHOD, method));
    }

    /// Appends a VEVENT whose first property is `UID` and hands it back.
    pub fn add_event(&mut self, uid: impl Into<String>) -> &mut Component {
        self.push_with_uid(Component::event(), uid)
    }

    /// Appends a VTODO whose first property is `UID` and hands it back.
    pub fn add_todo(&mut self, uid: impl Into<String>) -> &mut Component {
        self.push_with_uid(Component::todo(), uid)
    }

    pub fn add_component(&mut self, component: Component) {
        self.root.add_child(component);
    }

    fn push_with_uid(&mut self, mut component: Component, uid: impl Into<String>) -> &mut Component {
        component.add_property(Property::new(names::UID, uid));
        let index = self.root.children.len();
        self.root.add_child(component);
        &mut self.root.children[index]
    }

    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::Event)
    }

    #[must_use]
    pub fn todos(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::Todo)
    }

    #[must_use]
    pub fn journals(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::Journal)
    }

    #[must_use]
    pub fn freebusy(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::FreeBusy)
    }

    #[must_use]
    pub fn timezones(&self) -> Vec<&Component> {
        self.root.children_of_kind(ComponentKind::Timezone)
    }

    /// Distinct UIDs of the top-level children, sorted.
    #[must_use]
    pub fn uids(&self) -> Vec<&str> {
        let mut uids: Vec<&str> = self.root.children.iter().filter_map(Component::uid).collect();
        uids.sort_unstable();
        uids.dedup();
        uids
    }
}

impl Default for ICalendar {
    fn default() -> Self {
        Self::new(DEFAULT_PRODID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_classify_case_insensitively() {
        assert_eq!(ComponentKind::parse("VEVENT"), ComponentKind::Event);
        assert_eq!(ComponentKind::parse("vtodo"), ComponentKind::Todo);
        assert_eq!(ComponentKind::parse("Daylight"), ComponentKind::Daylight);
        assert_eq!(ComponentKind::parse("X-CUSTOM"), ComponentKind::Unknown);
        assert_eq!(ComponentKind::FreeBusy.as_str(), Some("VFREEBUSY"));
        assert_eq!(ComponentKind::Unknown.as_str(), None);
        assert_eq!(Component::alarm().name, "VALARM");
    }

    #[test]
    fn unknown_component_keeps_its_name() {
        let component = Component::named("x-wr-thing");
        assert_eq!(component.kind, ComponentKind::Unknown);
        assert_eq!(component.name, "x-wr-thing");

        let event = Component::named("vEvent");
        assert_eq!(event.kind, ComponentKind::Event);
        assert_eq!(event.name, "vEvent");
    }

    #[test]
    fn new_calendar_header() {
        let ical = ICalendar::new("-//Test//Test//EN");
        assert_eq!(ical.version(), Some("2.0"));
        assert_eq!(ical.prodid(), Some("-//Test//Test//EN"));
        assert_eq!(ical.method(), None);
        assert_eq!(ICalendar::default().prodid(), Some(DEFAULT_PRODID));
    }

    #[test]
    fn set_method_keeps_a_single_property() {
        let mut ical = ICalendar::default();
        ical.set_method("REQUEST");
        ical.set_method("CANCEL");
        assert_eq!(ical.method(), Some("CANCEL"));
        assert_eq!(ical.root.get_properties("METHOD").len(), 1);
    }

    #[test]
    fn set_property_replaces_first_in_place() {
        let mut event = Component::event();
        event.add_property(Property::new("UID", "u"));
        event.add_property(Property::new("SUMMARY", "old"));
        event.add_property(Property::new("LOCATION", "here"));

        event.set_property(Property::new("SUMMARY", "new"));

        let names: Vec<&str> = event.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["UID", "SUMMARY", "LOCATION"]);
        assert_eq!(event.get_property("summary").unwrap().value, "new");
    }

    #[test]
    fn remove_properties_counts() {
        let mut event = Component::event();
        event.add_property(Property::new("ATTENDEE", "mailto:a@example.com"));
        event.add_property(Property::new("UID", "u"));
        event.add_property(Property::new("ATTENDEE", "mailto:b@example.com"));

        assert_eq!(event.remove_properties("attendee"), 2);
        assert_eq!(event.properties.len(), 1);
    }

    #[test]
    fn add_event_and_todo_filters() {
        let mut ical = ICalendar::default();
        ical.add_event("event2");
        ical.add_event("event1").add_property(Property::new("SUMMARY", "First"));
        ical.add_todo("todo1");

        assert_eq!(ical.events().len(), 2);
        assert_eq!(ical.todos().len(), 1);
        assert_eq!(ical.uids(), vec!["event1", "event2", "todo1"]);
        assert_eq!(ical.events()[1].get_property("SUMMARY").unwrap().value, "First");
    }
}
