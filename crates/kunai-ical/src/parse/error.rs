//! Positioned parse errors.

use std::fmt;

pub type ParseResult<T> = Result<T, ParseError>;

/// A decode or structural failure, positioned in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based physical line on which the offending content line starts.
    pub line: usize,
    /// 1-based byte offset within the unfolded content line.
    pub column: usize,
    /// Free-form detail, e.g. the component names of a mismatched END.
    pub context: Option<String>,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            ..self
        }
    }

    /// True for failures confined to one content line; false for failures
    /// of the component structure.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        self.kind.is_decode()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            kind,
            line,
            column,
            context,
        } = self;
        write!(f, "{kind} at line {line}, column {column}")?;
        match context {
            Some(context) => write!(f, ": {context}"),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    // Content line decoding
    /// Empty content line.
    EmptyLine,
    /// Missing property name.
    MissingPropertyName,
    /// Invalid property name character.
    InvalidPropertyName,
    /// Missing colon separator.
    MissingColon,
    /// Invalid parameter format.
    InvalidParameter,
    /// Unclosed quoted string.
    UnclosedQuote,
    /// Double quote inside an unquoted parameter value.
    UnexpectedQuote,

    // Component structure
    /// No component found in the input.
    MissingBegin,
    /// Input ended inside a component.
    MissingEnd,
    /// END does not match the innermost open BEGIN.
    MismatchedComponent,
    /// END with no open component.
    UnexpectedEnd,
    /// Property appears outside of any component.
    PropertyOutsideComponent,
    /// More than one top-level component in a single-document parse.
    MultipleRoots,
    /// Root component is not VCALENDAR.
    UnexpectedRoot,
    /// BEGIN nested deeper than the configured limit.
    NestingTooDeep,
}

impl ParseErrorKind {
    /// Returns whether this kind is reported by the content line decoder.
    #[must_use]
    pub const fn is_decode(self) -> bool {
        matches!(
            self,
            Self::EmptyLine
                | Self::MissingPropertyName
                | Self::InvalidPropertyName
                | Self::MissingColon
                | Self::InvalidParameter
                | Self::UnclosedQuote
                | Self::UnexpectedQuote
        )
    }
}

impl ParseErrorKind {
    const fn message(self) -> &'static str {
        match self {
            Self::EmptyLine => "empty content line",
            Self::MissingPropertyName => "missing property name",
            Self::InvalidPropertyName => "invalid property name",
            Self::MissingColon => "missing colon separator",
            Self::InvalidParameter => "invalid parameter format",
            Self::UnclosedQuote => "unclosed quoted string",
            Self::UnexpectedQuote => "unexpected quote in parameter value",
            Self::MissingBegin => "missing BEGIN line",
            Self::MissingEnd => "missing END line",
            Self::MismatchedComponent => "mismatched BEGIN/END",
            Self::UnexpectedEnd => "END without matching BEGIN",
            Self::PropertyOutsideComponent => "property outside of any component",
            Self::MultipleRoots => "more than one top-level component",
            Self::UnexpectedRoot => "unexpected root component",
            Self::NestingTooDeep => "component nesting too deep",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
