//! Setters for the common descriptive and scheduling properties.

use crate::build::escape_text;
use crate::core::{Component, Parameter, Property, names};
use crate::error::RfcResult;

/// Mutable handle that writes named properties onto a component.
///
/// Setters replace the first property of the same name in place, so the
/// original position is kept; new properties are appended. TEXT values are
/// escaped, date-time setters take already formatted values.
#[derive(Debug)]
pub struct ComponentEditor<'a> {
    component: &'a mut Component,
}

impl<'a> ComponentEditor<'a> {
    #[must_use]
    pub fn new(component: &'a mut Component) -> Self {
        Self { component }
    }

    /// Returns the component being edited.
    #[must_use]
    pub fn component(&self) -> &Component {
        self.component
    }

    fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.component.set_property(Property::new(name, value));
        self
    }

    fn set_text(&mut self, name: &str, text: &str) -> &mut Self {
        self.set(name, escape_text(text))
    }

    pub fn set_summary(&mut self, summary: &str) -> &mut Self {
        self.set_text(names::SUMMARY, summary)
    }

    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.set_text(names::DESCRIPTION, description)
    }

    pub fn set_location(&mut self, location: &str) -> &mut Self {
        self.set_text(names::LOCATION, location)
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.set(names::URL, url)
    }

    /// Sets STATUS, e.g. `CONFIRMED` or `NEEDS-ACTION`.
    pub fn set_status(&mut self, status: impl Into<String>) -> &mut Self {
        self.set(names::STATUS, status)
    }

    /// Sets ORGANIZER with an optional common name.
    pub fn set_organizer(&mut self, address: impl Into<String>, cn: Option<&str>) -> &mut Self {
        let mut organizer = Property::new(names::ORGANIZER, address);
        if let Some(cn) = cn {
            organizer.set_param(Parameter::cn(cn));
        }
        self.component.set_property(organizer);
        self
    }

    /// Appends an ATTENDEE; parameters are written in the order given.
    pub fn add_attendee(
        &mut self,
        address: impl Into<String>,
        params: impl IntoIterator<Item = Parameter>,
    ) -> &mut Self {
        let attendee = params
            .into_iter()
            .fold(Property::new(names::ATTENDEE, address), Property::with_param);
        self.component.add_property(attendee);
        self
    }

    /// Sets an arbitrary property, typically an `X-` extension, from a
    /// caller-supplied name and raw value.
    ///
    /// ## Errors
    /// Returns `RfcError::CoreError` if the name would not survive a parse.
    pub fn set_raw(&mut self, name: &str, value: impl Into<String>) -> RfcResult<&mut Self> {
        let prop = Property::try_new(name, value)?;
        self.component.set_property(prop);
        Ok(self)
    }

    pub fn set_dtstamp_raw(&mut self, value: impl Into<String>) -> &mut Self {
        self.set(names::DTSTAMP, value)
    }

    pub fn set_start_raw(&mut self, value: impl Into<String>) -> &mut Self {
        self.set(names::DTSTART, value)
    }

    pub fn set_end_raw(&mut self, value: impl Into<String>) -> &mut Self {
        self.set(names::DTEND, value)
    }

    pub fn set_created_raw(&mut self, value: impl Into<String>) -> &mut Self {
        self.set(names::CREATED, value)
    }

    pub fn set_last_modified_raw(&mut self, value: impl Into<String>) -> &mut Self {
        self.set(names::LAST_MODIFIED, value)
    }
}
