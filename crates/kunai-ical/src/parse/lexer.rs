//! Content line unfolding for iCalendar (RFC 5545 §3.1).
//!
//! Turns a stream of physical lines into logical content lines.

use std::io::{self, BufRead};
use std::iter::FusedIterator;

/// One unfolded content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Physical line number (1-based) on which this content line starts.
    pub line: usize,
    /// Line text with folds removed and no line terminator.
    pub text: String,
}

/// Merges folded physical lines into logical lines.
///
/// Per RFC 5545 §3.1:
/// - Lines are folded by inserting CRLF followed by whitespace (SPACE or HTAB)
/// - Unfolding removes the line break and the single whitespace character
/// - Folding may split UTF-8 sequences, so unfold at byte level before decoding
///
/// Blank physical lines are skipped. A continuation with nothing before it
/// starts a new logical line, unless it is whitespace only.
#[derive(Debug, Default)]
pub(crate) struct LineJoiner {
    pending: Option<(usize, Vec<u8>)>,
}

impl LineJoiner {
    /// Feeds one physical line without its terminator. Returns the previous
    /// logical line once `physical` shows that it is complete.
    pub(crate) fn push(&mut self, line: usize, physical: &[u8]) -> Option<io::Result<LogicalLine>> {
        match physical.split_first() {
            None => None,
            Some((b' ' | b'\t', continuation)) => {
                match &mut self.pending {
                    Some((_, text)) => text.extend_from_slice(continuation),
                    None if continuation.iter().all(u8::is_ascii_whitespace) => {}
                    None => self.pending = Some((line, continuation.to_vec())),
                }
                None
            }
            Some(_) => self
                .pending
                .replace((line, physical.to_vec()))
                .map(into_logical),
        }
    }

    /// Flushes the last logical line at end of input.
    pub(crate) fn finish(&mut self) -> Option<io::Result<LogicalLine>> {
        self.pending.take().map(into_logical)
    }

    /// Drops any partially assembled line.
    pub(crate) fn clear(&mut self) {
        self.pending = None;
    }
}

fn into_logical((line, bytes): (usize, Vec<u8>)) -> io::Result<LogicalLine> {
    String::from_utf8(bytes)
        .map(|text| LogicalLine { line, text })
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Strips a trailing CRLF or bare LF.
pub(crate) fn trim_line_ending(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

/// Lazy iterator of logical lines over a buffered reader.
///
/// Yields `Err` once if the reader fails (or a logical line is not valid
/// UTF-8) and then ends; end of input is simply the end of iteration.
#[derive(Debug)]
pub struct Unfolder<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
    joiner: LineJoiner,
    done: bool,
}

impl<R: BufRead> Unfolder<R> {
    /// Creates an unfolder reading from `reader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
            joiner: LineJoiner::default(),
            done: false,
        }
    }

    /// Number of physical lines consumed so far.
    #[must_use]
    pub fn physical_lines(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for Unfolder<R> {
    type Item = io::Result<LogicalLine>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line += 1;
                    if let Some(logical) = self.joiner.push(self.line, trim_line_ending(&self.buf)) {
                        if logical.is_err() {
                            self.done = true;
                            self.joiner.clear();
                        }
                        return Some(logical);
                    }
                }
                Err(e) => {
                    self.done = true;
                    self.joiner.clear();
                    return Some(Err(e));
                }
            }
        }
        self.joiner.finish()
    }
}

impl<R: BufRead> FusedIterator for Unfolder<R> {}
