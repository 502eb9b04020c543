//! Property parameters (RFC 5545 §3.2).

use std::fmt::{self, Write as _};

/// One `NAME=value[,value...]` parameter of a content line.
///
/// Values are stored unquoted. Quoting is decided again on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Upper-cased parameter name.
    pub name: String,
    /// Values in written order; `MEMBER` and `DELEGATED-TO` may carry several.
    pub values: Vec<String>,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_values(name, [value])
    }

    /// Creates a parameter with several values, kept in iteration order.
    ///
    /// No values at all is stored as one empty value, which is what
    /// `NAME=` decodes to.
    #[must_use]
    pub fn with_values<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut name = name.into();
        name.make_ascii_uppercase();
        let mut values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            values.push(String::new());
        }
        Self { name, values }
    }

    /// First value, which for most parameters is the only one.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Whether any value equals `value`, ignoring ASCII case.
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    #[must_use]
    pub fn tzid(tzid: impl Into<String>) -> Self {
        Self::new(params::TZID, tzid)
    }

    #[must_use]
    pub fn cn(common_name: impl Into<String>) -> Self {
        Self::new(params::CN, common_name)
    }

    /// `CUTYPE`, e.g. `INDIVIDUAL` or `GROUP`.
    #[must_use]
    pub fn cutype(user_type: impl Into<String>) -> Self {
        Self::new(params::CUTYPE, user_type)
    }

    /// `PARTSTAT`, e.g. `NEEDS-ACTION` or `ACCEPTED`.
    #[must_use]
    pub fn partstat(status: impl Into<String>) -> Self {
        Self::new(params::PARTSTAT, status)
    }

    /// `ROLE`, e.g. `CHAIR` or `REQ-PARTICIPANT`.
    #[must_use]
    pub fn role(role: impl Into<String>) -> Self {
        Self::new(params::ROLE, role)
    }

    #[must_use]
    pub fn rsvp(expected: bool) -> Self {
        Self::new(params::RSVP, if expected { "TRUE" } else { "FALSE" })
    }
}

impl fmt::Display for Parameter {
    /// Writes `NAME=v1,v2`, quoting each value that holds `:`, `;` or `,`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        let mut separator = '=';
        for value in &self.values {
            f.write_char(separator)?;
            separator = ',';
            if needs_quoting(value) {
                write!(f, "\"{value}\"")?;
            } else {
                f.write_str(value)?;
            }
        }
        if self.values.is_empty() {
            f.write_str("=")?;
        }
        Ok(())
    }
}

pub(crate) fn needs_quoting(value: &str) -> bool {
    value.contains([':', ';', ','])
}

/// Parameter names used by the constructors above.
pub mod params {
    pub const CN: &str = "CN";
    pub const CUTYPE: &str = "CUTYPE";
    pub const PARTSTAT: &str = "PARTSTAT";
    pub const ROLE: &str = "ROLE";
    pub const RSVP: &str = "RSVP";
    pub const TZID: &str = "TZID";
}
