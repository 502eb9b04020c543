//! iCalendar property types (RFC 5545 §3.1, §3.8).

use kunai_core::error::{CoreError, CoreResult};

use super::Parameter;

/// Returns whether `c` may appear in a property or parameter name.
#[must_use]
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// A decoded content line: name, parameters and raw value.
///
/// The value is kept exactly as written on the wire (after unfolding), so
/// TEXT escapes such as `\,` and `\n` are still present. Parameter names are
/// unique within a property; see [`Property::set_param`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name (normalized to uppercase, never empty).
    pub name: String,
    /// Parameters in order of first appearance.
    pub params: Vec<Parameter>,
    /// Unfolded but still escaped.
    pub value: String,
}

impl Property {
    /// Creates a property without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Creates a property, rejecting names the decoder would not accept.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidInput` if the name is empty or contains a
    /// character other than ASCII alphanumerics and `-`.
    pub fn try_new(name: impl Into<String>, value: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::InvalidInput(
                "property name must not be empty".to_string(),
            ));
        }
        if let Some(bad) = name.chars().find(|&c| !is_name_char(c)) {
            return Err(CoreError::InvalidInput(format!(
                "invalid character {bad:?} in property name {name:?}"
            )));
        }
        Ok(Self::new(name, value))
    }

    /// Adds a parameter and returns the property (builder style).
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.set_param(param);
        self
    }

    /// Parameter called `name`, ignoring ASCII case.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name).and_then(Parameter::value)
    }

    /// Returns whether this property has a parameter with the given name.
    #[must_use]
    pub fn has_param(&self, name: &str) -> bool {
        self.get_param(name).is_some()
    }

    /// Sets a parameter, replacing the values of any parameter with the same
    /// name in place. New names are appended.
    pub fn set_param(&mut self, param: Parameter) {
        if let Some(existing) = self.params.iter_mut().find(|p| p.name == param.name) {
            existing.values = param.values;
        } else {
            self.params.push(param);
        }
    }

    /// Appends values to the parameter with the same name, or adds it.
    pub fn add_param(&mut self, param: Parameter) {
        if let Some(existing) = self.params.iter_mut().find(|p| p.name == param.name) {
            existing.values.extend(param.values);
        } else {
            self.params.push(param);
        }
    }

    /// Removes a parameter, returning it if it was present.
    pub fn remove_param(&mut self, name: &str) -> Option<Parameter> {
        let pos = self
            .params
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))?;
        Some(self.params.remove(pos))
    }

    /// `TZID` parameter of a date-time property.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.get_param_value(super::params::TZID)
    }

    /// Returns whether this is one of the structural `BEGIN`/`END` markers.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        self.name == names::BEGIN || self.name == names::END
    }
}

/// Property names the crate reads or writes itself.
pub mod names {
    // Structure
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";

    // Calendar properties
    pub const METHOD: &str = "METHOD";
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";

    // Descriptive
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const LOCATION: &str = "LOCATION";
    pub const STATUS: &str = "STATUS";
    pub const SUMMARY: &str = "SUMMARY";

    // Date and time
    pub const DTEND: &str = "DTEND";
    pub const DTSTART: &str = "DTSTART";

    // Relationship
    pub const ATTENDEE: &str = "ATTENDEE";
    pub const ORGANIZER: &str = "ORGANIZER";
    pub const UID: &str = "UID";
    pub const URL: &str = "URL";

    // Timezone
    pub const TZID: &str = "TZID";

    // Change management
    pub const CREATED: &str = "CREATED";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const LAST_MODIFIED: &str = "LAST-MODIFIED";
}
