//! Typed views over components.
//!
//! A view is a borrowed handle tagged with the component's kind. Reads go
//! through the generic property list, so unknown properties are untouched.

mod editor;

pub use editor::ComponentEditor;

use crate::core::{Component, ComponentKind, Property, names};
use crate::parse::unescape_text;

/// Borrowed view of a component, keyed by kind.
#[derive(Debug, Clone, Copy)]
pub enum ComponentView<'a> {
    /// VEVENT
    Event(&'a Component),
    /// VTODO
    Todo(&'a Component),
    /// VJOURNAL
    Journal(&'a Component),
    /// VFREEBUSY
    FreeBusy(&'a Component),
    /// VTIMEZONE
    Timezone(&'a Component),
    /// VALARM
    Alarm(&'a Component),
    /// VCALENDAR, timezone observances and unknown components.
    Other(&'a Component),
}

impl<'a> ComponentView<'a> {
    /// Wraps a component according to its kind.
    #[must_use]
    pub fn new(component: &'a Component) -> Self {
        match component.kind {
            ComponentKind::Event => Self::Event(component),
            ComponentKind::Todo => Self::Todo(component),
            ComponentKind::Journal => Self::Journal(component),
            ComponentKind::FreeBusy => Self::FreeBusy(component),
            ComponentKind::Timezone => Self::Timezone(component),
            ComponentKind::Alarm => Self::Alarm(component),
            ComponentKind::Calendar
            | ComponentKind::Standard
            | ComponentKind::Daylight
            | ComponentKind::Unknown => Self::Other(component),
        }
    }

    /// Returns the underlying component.
    #[must_use]
    pub fn component(self) -> &'a Component {
        match self {
            Self::Event(c)
            | Self::Todo(c)
            | Self::Journal(c)
            | Self::FreeBusy(c)
            | Self::Timezone(c)
            | Self::Alarm(c)
            | Self::Other(c) => c,
        }
    }

    /// Returns whether the component carries scheduling data.
    #[must_use]
    pub fn is_schedulable(self) -> bool {
        self.component().kind.is_schedulable()
    }

    #[must_use]
    pub fn uid(self) -> Option<&'a str> {
        self.component().uid()
    }

    /// Returns the unescaped SUMMARY.
    #[must_use]
    pub fn summary(self) -> Option<String> {
        self.text(names::SUMMARY)
    }

    /// Returns the unescaped DESCRIPTION.
    #[must_use]
    pub fn description(self) -> Option<String> {
        self.text(names::DESCRIPTION)
    }

    /// Returns the unescaped LOCATION.
    #[must_use]
    pub fn location(self) -> Option<String> {
        self.text(names::LOCATION)
    }

    #[must_use]
    pub fn status(self) -> Option<&'a str> {
        self.raw(names::STATUS)
    }

    #[must_use]
    pub fn url(self) -> Option<&'a str> {
        self.raw(names::URL)
    }

    #[must_use]
    pub fn organizer(self) -> Option<&'a Property> {
        self.component().get_property(names::ORGANIZER)
    }

    /// Returns ATTENDEE properties in stored order.
    #[must_use]
    pub fn attendees(self) -> Vec<&'a Property> {
        self.component().get_properties(names::ATTENDEE)
    }

    /// Returns the raw value of the first property named `name`.
    #[must_use]
    pub fn raw(self, name: &str) -> Option<&'a str> {
        self.component()
            .get_property(name)
            .map(|p| p.value.as_str())
    }

    fn text(self, name: &str) -> Option<String> {
        self.raw(name).map(unescape_text)
    }
}

impl Component {
    /// Returns a kind-tagged view of this component.
    #[must_use]
    pub fn view(&self) -> ComponentView<'_> {
        ComponentView::new(self)
    }

    /// Returns an editor for this component.
    pub fn edit(&mut self) -> ComponentEditor<'_> {
        ComponentEditor::new(self)
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
