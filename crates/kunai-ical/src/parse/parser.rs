//! iCalendar document parser (RFC 5545).
//!
//! Drives the unfolder and content line decoder, and assembles the decoded
//! properties into a component tree.

use std::io::BufRead;

use kunai_core::config::ParserConfig;

use super::content_line::parse_content_line;
use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{LogicalLine, Unfolder};
use crate::core::{Component, ComponentKind, ICalendar, Property, names};
use crate::error::RfcResult;

/// Parser policy, usually built from [`ParserConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept several top-level components.
    pub multi_document: bool,
    /// Skip content lines that fail to decode instead of failing the parse.
    pub skip_invalid_lines: bool,
    /// Reject top-level components other than `VCALENDAR`.
    pub require_calendar_root: bool,
    /// Deepest allowed component nesting, the root counting as one.
    pub max_depth: usize,
}

impl From<&ParserConfig> for ParseOptions {
    fn from(config: &ParserConfig) -> Self {
        Self {
            multi_document: config.multi_document,
            skip_invalid_lines: config.skip_invalid_lines,
            require_calendar_root: config.require_calendar_root,
            max_depth: usize::try_from(config.max_depth).unwrap_or(usize::MAX),
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::from(&ParserConfig::default())
    }
}

/// Builds the component tree from decoded properties.
///
/// Each parse owns its assembler; nothing is shared between parses.
#[derive(Debug)]
pub struct Assembler {
    stack: Vec<Component>,
    roots: Vec<Component>,
    options: ParseOptions,
    last_line: usize,
}

impl Assembler {
    #[must_use]
    pub fn new(options: ParseOptions) -> Self {
        Self {
            stack: Vec::new(),
            roots: Vec::new(),
            options,
            last_line: 0,
        }
    }

    /// Consumes one property decoded from content line `line`.
    ///
    /// ## Errors
    /// Returns a structural error for an `END` that does not close the
    /// innermost open component, a property outside any component, a second
    /// root in single-document mode, a non-`VCALENDAR` root when one is
    /// required, or a `BEGIN` nested deeper than `max_depth`.
    pub fn push(&mut self, property: Property, line: usize) -> ParseResult<()> {
        self.last_line = line;

        if property.is_structural() {
            return if property.name == names::BEGIN {
                self.begin(property.value, line)
            } else {
                self.end(&property.value, line)
            };
        }

        let Some(current) = self.stack.last_mut() else {
            return Err(
                ParseError::new(ParseErrorKind::PropertyOutsideComponent, line, 1)
                    .with_context(format!("{} appears before any BEGIN", property.name)),
            );
        };
        current.add_property(property);
        Ok(())
    }

    fn begin(&mut self, name: String, line: usize) -> ParseResult<()> {
        if self.stack.len() >= self.options.max_depth {
            return Err(ParseError::new(ParseErrorKind::NestingTooDeep, line, 1)
                .with_context(format!(
                    "BEGIN:{name} exceeds the limit of {} nested components",
                    self.options.max_depth
                )));
        }

        let component = Component::named(name);

        if self.stack.is_empty() {
            if !self.roots.is_empty() && !self.options.multi_document {
                return Err(
                    ParseError::new(ParseErrorKind::MultipleRoots, line, 1).with_context(format!(
                        "BEGIN:{} after the end of the document",
                        component.name
                    )),
                );
            }
            if self.options.require_calendar_root && component.kind != ComponentKind::Calendar {
                return Err(ParseError::new(ParseErrorKind::UnexpectedRoot, line, 1)
                    .with_context(format!("expected VCALENDAR, got {}", component.name)));
            }
        }

        tracing::trace!(line, component = %component.name, depth = self.stack.len(), "BEGIN");
        self.stack.push(component);
        Ok(())
    }

    fn end(&mut self, name: &str, line: usize) -> ParseResult<()> {
        let Some(component) = self.stack.pop() else {
            return Err(ParseError::new(ParseErrorKind::UnexpectedEnd, line, 1)
                .with_context(format!("END:{name} with no open component")));
        };

        if !component.name.eq_ignore_ascii_case(name) {
            return Err(
                ParseError::new(ParseErrorKind::MismatchedComponent, line, 1).with_context(
                    format!("expected END:{}, got END:{name}", component.name),
                ),
            );
        }

        tracing::trace!(line, component = %component.name, depth = self.stack.len(), "END");
        match self.stack.last_mut() {
            Some(parent) => parent.add_child(component),
            None => self.roots.push(component),
        }
        Ok(())
    }

    /// Finishes assembly and returns the top-level components in order.
    ///
    /// ## Errors
    /// Returns a structural error if a component is still open or no
    /// component was found.
    pub fn finish(self) -> ParseResult<Vec<Component>> {
        if let Some(open) = self.stack.last() {
            return Err(ParseError::new(ParseErrorKind::MissingEnd, self.last_line, 1)
                .with_context(format!("missing END:{}", open.name)));
        }

        if self.roots.is_empty() {
            return Err(ParseError::new(ParseErrorKind::MissingBegin, 1, 1)
                .with_context("no component found"));
        }

        Ok(self.roots)
    }
}

/// Decodes one logical line, honouring the skip policy.
pub(crate) fn decode_line(
    logical: &LogicalLine,
    options: &ParseOptions,
) -> ParseResult<Option<Property>> {
    match parse_content_line(&logical.text, logical.line) {
        Ok(property) => Ok(Some(property)),
        Err(err) if options.skip_invalid_lines => {
            tracing::warn!(error = %err, "Skipping undecodable content line");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Wraps the single root of a single-document parse.
pub(crate) fn single_calendar(roots: Vec<Component>) -> RfcResult<ICalendar> {
    let mut roots = roots.into_iter();
    match (roots.next(), roots.next()) {
        (Some(root), None) => Ok(ICalendar { root }),
        (Some(_), Some(extra)) => Err(ParseError::new(ParseErrorKind::MultipleRoots, 1, 1)
            .with_context(format!("unexpected second component {}", extra.name))
            .into()),
        (None, _) => Err(ParseError::new(ParseErrorKind::MissingBegin, 1, 1).into()),
    }
}

/// Parses an iCalendar document from a string.
///
/// ## Errors
///
/// Returns an error if the input is not a single well-formed `VCALENDAR`.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> RfcResult<ICalendar> {
    parse_with(input, &ParseOptions::default())
}

/// Parses a single document from a string with explicit options.
///
/// `multi_document` is ignored; use [`parse_all_with`] for concatenated input.
///
/// ## Errors
///
/// Returns a decode or structural error as described by the options.
pub fn parse_with(input: &str, options: &ParseOptions) -> RfcResult<ICalendar> {
    parse_reader_with(input.as_bytes(), options)
}

/// Parses every top-level component of a possibly concatenated input.
///
/// ## Errors
///
/// Returns a decode or structural error; no partial result is returned.
pub fn parse_all(input: &str) -> RfcResult<Vec<Component>> {
    let options = ParseOptions {
        multi_document: true,
        ..ParseOptions::default()
    };
    parse_all_with(input, &options)
}

/// Parses top-level components from a string, honouring every option.
///
/// ## Errors
///
/// Returns a decode or structural error as described by the options.
pub fn parse_all_with(input: &str, options: &ParseOptions) -> RfcResult<Vec<Component>> {
    parse_components(input.as_bytes(), options)
}

/// Parses a single document from a buffered reader.
///
/// ## Errors
///
/// Returns `RfcError::StreamRead` if the reader fails, otherwise a decode or
/// structural error.
pub fn parse_reader<R: BufRead>(reader: R) -> RfcResult<ICalendar> {
    parse_reader_with(reader, &ParseOptions::default())
}

/// Parses a single document from a buffered reader with explicit options.
///
/// ## Errors
///
/// Returns `RfcError::StreamRead` if the reader fails, otherwise a decode or
/// structural error.
pub fn parse_reader_with<R: BufRead>(reader: R, options: &ParseOptions) -> RfcResult<ICalendar> {
    let options = ParseOptions {
        multi_document: false,
        ..*options
    };
    single_calendar(parse_components(reader, &options)?)
}

/// Runs the whole pipeline over a buffered reader and returns the
/// top-level components.
///
/// ## Errors
///
/// Returns `RfcError::StreamRead` if the reader fails, otherwise a decode or
/// structural error.
#[tracing::instrument(skip(reader))]
pub fn parse_components<R: BufRead>(
    reader: R,
    options: &ParseOptions,
) -> RfcResult<Vec<Component>> {
    tracing::debug!("Parsing iCalendar stream");

    let mut unfolder = Unfolder::new(reader);
    let mut assembler = Assembler::new(*options);

    for logical in unfolder.by_ref() {
        let logical = logical?;
        tracing::trace!(line = logical.line, text = %logical.text, "Content line");
        if let Some(property) = decode_line(&logical, options)? {
            assembler.push(property, logical.line).inspect_err(|err| {
                tracing::warn!(error = %err, "Unbalanced component structure");
            })?;
        }
    }

    let roots = assembler.finish().inspect_err(|err| {
        tracing::warn!(error = %err, "Unbalanced component structure");
    })?;

    tracing::debug!(
        components = roots.len(),
        physical_lines = unfolder.physical_lines(),
        "iCalendar stream parsed"
    );

    Ok(roots)
}
