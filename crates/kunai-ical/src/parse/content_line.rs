//! Content line decoding for iCalendar (RFC 5545 §3.1, §3.2).
//!
//! Format: `name *(";" param) ":" value`

use std::iter::Peekable;
use std::str::CharIndices;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::core::{Parameter, Property, is_name_char};

type Chars<'a> = Peekable<CharIndices<'a>>;

/// Parses a single unfolded content line into a property.
///
/// The value after the separating colon is kept verbatim. Repeated parameter
/// names keep the position of their first occurrence and the values of the
/// last one.
///
/// ## Errors
/// Returns an error if the line is empty, the name is missing or malformed,
/// a parameter is malformed or badly quoted, or no `:` ends the parameters.
/// No partial property is ever returned.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<Property> {
    if line.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyLine, line_num, 1));
    }

    let mut chars = line.char_indices().peekable();

    // Find the property name (ends at ';' or ':')
    let mut name_end = None;
    while let Some(&(i, c)) = chars.peek() {
        if c == ';' || c == ':' {
            name_end = Some(i);
            break;
        }
        if !is_name_char(c) {
            return Err(
                ParseError::new(ParseErrorKind::InvalidPropertyName, line_num, i + 1)
                    .with_context(format!("unexpected character '{c}'")),
            );
        }
        chars.next();
    }

    let Some(name_end) = name_end else {
        return Err(ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            line.len(),
        ));
    };

    if name_end == 0 {
        return Err(ParseError::new(
            ParseErrorKind::MissingPropertyName,
            line_num,
            1,
        ));
    }

    let mut property = Property::new(&line[..name_end], "");

    // Parse parameters until the separator is ':'
    let mut colon_pos = name_end;
    let mut at_colon = line[name_end..].starts_with(':');
    chars.next(); // consume the separator
    while !at_colon {
        let (param, separator_pos, is_colon) = parse_parameter(&mut chars, line, line_num)?;
        property.set_param(param);
        colon_pos = separator_pos;
        at_colon = is_colon;
    }

    property.value = line[colon_pos + 1..].to_string();
    Ok(property)
}

/// Parses a single parameter from the character stream, consuming the `;` or
/// `:` that follows it.
///
/// Returns the parameter, the separator's byte offset, and whether the
/// separator was `:`.
fn parse_parameter(
    chars: &mut Chars<'_>,
    line: &str,
    line_num: usize,
) -> ParseResult<(Parameter, usize, bool)> {
    let start = chars.peek().map_or(line.len(), |&(i, _)| i);

    // Parse parameter name (up to '=')
    let mut name_end = None;
    while let Some(&(i, c)) = chars.peek() {
        if c == '=' {
            name_end = Some(i);
            chars.next(); // consume '='
            break;
        }
        if !is_name_char(c) {
            return Err(
                ParseError::new(ParseErrorKind::InvalidParameter, line_num, i + 1)
                    .with_context(format!("unexpected character '{c}' in parameter name")),
            );
        }
        chars.next();
    }

    let Some(name_end) = name_end else {
        return Err(
            ParseError::new(ParseErrorKind::InvalidParameter, line_num, start + 1)
                .with_context("expected '=' after parameter name"),
        );
    };

    if name_end == start {
        return Err(
            ParseError::new(ParseErrorKind::InvalidParameter, line_num, start + 1)
                .with_context("empty parameter name"),
        );
    }

    let param_name = &line[start..name_end];

    // Parse parameter values (comma-separated, may be quoted)
    let mut values = Vec::new();
    loop {
        values.push(parse_param_value(chars, line, line_num)?);

        match chars.next() {
            Some((_, ',')) => {}
            Some((i, ';')) => return Ok((Parameter::with_values(param_name, values), i, false)),
            Some((i, ':')) => return Ok((Parameter::with_values(param_name, values), i, true)),
            Some((i, c)) => {
                return Err(
                    ParseError::new(ParseErrorKind::InvalidParameter, line_num, i + 1)
                        .with_context(format!("unexpected character '{c}'")),
                );
            }
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::MissingColon,
                    line_num,
                    line.len(),
                ));
            }
        }
    }
}

/// Parses a parameter value, stopping before the `,` `;` or `:` that ends it.
///
/// Quoted values are returned without their quotes. A double quote inside an
/// unquoted value, or a quote that is never closed, is an error.
fn parse_param_value(chars: &mut Chars<'_>, line: &str, line_num: usize) -> ParseResult<String> {
    let Some(&(start, first)) = chars.peek() else {
        return Err(ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            line.len(),
        ));
    };

    if first == '"' {
        chars.next(); // consume opening quote
        let content_start = start + 1;
        for (i, c) in chars.by_ref() {
            if c == '"' {
                return Ok(line[content_start..i].to_string());
            }
        }
        return Err(ParseError::new(
            ParseErrorKind::UnclosedQuote,
            line_num,
            start + 1,
        ));
    }

    let mut end = start;
    while let Some(&(i, c)) = chars.peek() {
        match c {
            ',' | ';' | ':' => break,
            '"' => {
                return Err(
                    ParseError::new(ParseErrorKind::UnexpectedQuote, line_num, i + 1)
                        .with_context("quote inside unquoted parameter value"),
                );
            }
            _ => {
                end = i + c.len_utf8();
                chars.next();
            }
        }
    }
    Ok(line[start..end].to_string())
}
