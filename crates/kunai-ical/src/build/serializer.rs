//! iCalendar serializer (RFC 5545).
//!
//! Walks the tree depth-first and writes every content line folded, in
//! stored order. Nothing is reordered, deduplicated or validated.

use std::convert::Infallible;
use std::fmt::{self, Write as _};
use std::io;

use kunai_core::constants::{CRLF, FOLD_PREFIX};

use super::fold::{fold_segments, push_folded};
use crate::core::{Component, ICalendar, Property, names};

/// Renders a property as one unfolded content line, without CRLF.
#[must_use]
pub fn content_line(prop: &Property) -> String {
    let mut line = String::with_capacity(prop.name.len() + prop.value.len() + 1);
    line.push_str(&prop.name);
    for param in &prop.params {
        line.push(';');
        line.push_str(&param.to_string());
    }
    line.push(':');
    line.push_str(&prop.value);
    line
}

/// Serializes an iCalendar document to a string.
#[must_use]
#[tracing::instrument(skip_all, fields(components = ical.root.children.len()))]
pub fn serialize(ical: &ICalendar) -> String {
    serialize_component(&ical.root)
}

/// Serializes a component, its properties and its children.
#[must_use]
pub fn serialize_component(component: &Component) -> String {
    let mut out = String::new();
    let Ok(()) = walk(component, &mut |line: &str| {
        push_folded(&mut out, line);
        Ok::<(), Infallible>(())
    });
    out
}

/// Serializes a single property as folded physical lines.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut out = String::new();
    push_folded(&mut out, &content_line(prop));
    out
}

/// Writes a component to an I/O sink.
///
/// ## Errors
///
/// Returns the sink's error; output written before the failure stays written.
#[tracing::instrument(skip_all, fields(component = %component.name))]
pub fn write_component<W: io::Write>(component: &Component, out: &mut W) -> io::Result<()> {
    walk(component, &mut |line: &str| {
        for (i, segment) in fold_segments(line).enumerate() {
            if i > 0 {
                let mut prefix = [0; 4];
                out.write_all(FOLD_PREFIX.encode_utf8(&mut prefix).as_bytes())?;
            }
            out.write_all(segment.as_bytes())?;
            out.write_all(CRLF.as_bytes())?;
        }
        Ok::<(), io::Error>(())
    })
}

impl fmt::Display for Component {
    /// Writes the folded wire form, same as [`serialize_component`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        walk(self, &mut |line: &str| {
            for (i, segment) in fold_segments(line).enumerate() {
                if i > 0 {
                    f.write_char(FOLD_PREFIX)?;
                }
                f.write_str(segment)?;
                f.write_str(CRLF)?;
            }
            Ok::<(), fmt::Error>(())
        })
    }
}

impl fmt::Display for ICalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

fn walk<E>(
    component: &Component,
    emit: &mut impl FnMut(&str) -> Result<(), E>,
) -> Result<(), E> {
    emit(&format!("{}:{}", names::BEGIN, component.name))?;
    for prop in &component.properties {
        emit(&content_line(prop))?;
    }
    for child in &component.children {
        walk(child, emit)?;
    }
    emit(&format!("{}:{}", names::END, component.name))
}
