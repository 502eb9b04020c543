//! Content line folding for iCalendar (RFC 5545 §3.1).

use kunai_core::constants::{CRLF, FOLD_PREFIX, MAX_LINE_OCTETS};

/// Splits a content line into physical line bodies of at most 75 octets
/// (74 after the first, leaving room for the fold prefix).
///
/// Splits land on character boundaries, so a segment may fall short of its
/// budget. An empty line yields a single empty segment.
#[derive(Debug, Clone)]
pub struct FoldSegments<'a> {
    rest: &'a str,
    first: bool,
}

impl<'a> Iterator for FoldSegments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() && !self.first {
            return None;
        }

        let budget = if self.first {
            MAX_LINE_OCTETS
        } else {
            MAX_LINE_OCTETS - FOLD_PREFIX.len_utf8()
        };
        self.first = false;

        if self.rest.len() <= budget {
            return Some(std::mem::take(&mut self.rest));
        }

        let mut end = budget;
        while !self.rest.is_char_boundary(end) {
            end -= 1;
        }
        if end == 0 {
            // A single character wider than the budget is emitted whole.
            end = self.rest.chars().next().map_or(self.rest.len(), char::len_utf8);
        }

        let (segment, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(segment)
    }
}

impl std::iter::FusedIterator for FoldSegments<'_> {}

/// Returns the fold segments of `line`.
#[must_use]
pub fn fold_segments(line: &str) -> FoldSegments<'_> {
    FoldSegments {
        rest: line,
        first: true,
    }
}

/// Folds a content line and terminates every physical line with CRLF.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + (line.len() / 74 + 1) * 3);
    push_folded(&mut out, line);
    out
}

/// Appends the folded form of `line` to `out`.
pub(crate) fn push_folded(out: &mut String, line: &str) {
    for (i, segment) in fold_segments(line).enumerate() {
        if i > 0 {
            out.push(FOLD_PREFIX);
        }
        out.push_str(segment);
        out.push_str(CRLF);
    }
}
