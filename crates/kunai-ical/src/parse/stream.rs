//! Asynchronous parsing over `tokio` readers.
//!
//! Lines are pulled on demand, so a large upload is never buffered whole.
//! Dropping the returned future abandons the parse.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::lexer::{LineJoiner, LogicalLine, trim_line_ending};
use super::parser::{Assembler, ParseOptions, decode_line, single_calendar};
use crate::core::{Component, ICalendar};
use crate::error::RfcResult;

/// Async counterpart of [`Unfolder`](super::Unfolder).
#[derive(Debug)]
pub struct AsyncUnfolder<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
    joiner: LineJoiner,
    done: bool,
}

impl<R: AsyncBufRead + Unpin> AsyncUnfolder<R> {
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

    /// Returns the next logical line, or `None` at end of input.
    ///
    /// ## Errors
    /// Returns the reader's error once; later calls return `Ok(None)`.
    pub async fn next_line(&mut self) -> io::Result<Option<LogicalLine>> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf).await {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line += 1;
                    if let Some(logical) = self.joiner.push(self.line, trim_line_ending(&self.buf)) {
                        if logical.is_err() {
                            self.done = true;
                            self.joiner.clear();
                        }
                        return logical.map(Some);
                    }
                }
                Err(e) => {
                    self.done = true;
                    self.joiner.clear();
                    return Err(e);
                }
            }
        }
        self.joiner.finish().transpose()
    }
}

/// Parses a single document from an async reader.
///
/// ## Errors
///
/// Returns `RfcError::StreamRead` if the reader fails, otherwise a decode or
/// structural error.
pub async fn parse_async<R>(reader: R, options: &ParseOptions) -> RfcResult<ICalendar>
where
    R: AsyncBufRead + Unpin,
{
    let options = ParseOptions {
        multi_document: false,
        ..*options
    };
    single_calendar(parse_components_async(reader, &options).await?)
}

/// Parses top-level components from an async reader.
///
/// ## Errors
///
/// Returns `RfcError::StreamRead` if the reader fails, otherwise a decode or
/// structural error.
#[tracing::instrument(skip(reader))]
pub async fn parse_components_async<R>(
    reader: R,
    options: &ParseOptions,
) -> RfcResult<Vec<Component>>
where
    R: AsyncBufRead + Unpin,
{
    tracing::debug!("Parsing iCalendar stream asynchronously");

    let mut unfolder = AsyncUnfolder::new(reader);
    let mut assembler = Assembler::new(*options);

    while let Some(logical) = unfolder.next_line().await? {
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

#[cfg(test)]
mod tests {
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use tokio::io::{AsyncRead, BufReader, ReadBuf};

    use super::*;
    use crate::error::RfcError;
    use crate::parse::ParseErrorKind;

    #[test_log::test(tokio::test)]
    async fn async_parse_matches_sync() {
        let input = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\nUID:1\r\nSUMMARY:a long\r\n  folded summary\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";

        let from_async = parse_async(input.as_bytes(), &ParseOptions::default())
            .await
            .unwrap();
        let from_sync = crate::parse::parse(input).unwrap();

        assert_eq!(from_async, from_sync);
        assert_eq!(
            from_async.events()[0].get_property("SUMMARY").unwrap().value,
            "a long folded summary"
        );
    }

    #[tokio::test]
    async fn async_unfolder_reports_line_numbers() {
        let mut unfolder = AsyncUnfolder::new("A:1\r\n B\r\n\r\nC:2\r\n".as_bytes());

        let first = unfolder.next_line().await.unwrap().unwrap();
        assert_eq!((first.line, first.text.as_str()), (1, "A:1B"));

        let second = unfolder.next_line().await.unwrap().unwrap();
        assert_eq!((second.line, second.text.as_str()), (4, "C:2"));

        assert!(unfolder.next_line().await.unwrap().is_none());
        assert!(unfolder.next_line().await.unwrap().is_none());
        assert_eq!(unfolder.physical_lines(), 4);
    }

    #[tokio::test]
    async fn async_structural_error() {
        let input = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nEND:VCALENDAR\r\n";
        let err = parse_async(input.as_bytes(), &ParseOptions::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.parse_error().map(|e| e.kind),
            Some(ParseErrorKind::MismatchedComponent)
        );
    }

    struct FailingReader {
        sent: bool,
    }

    impl AsyncRead for FailingReader {
        fn poll_read(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            if self.sent {
                Poll::Ready(Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer gone")))
            } else {
                self.sent = true;
                buf.put_slice(b"BEGIN:VCALENDAR\r\nVERSION:2.0\r\n");
                Poll::Ready(Ok(()))
            }
        }
    }

    #[tokio::test]
    async fn async_read_failure_is_stream_error() {
        let reader = BufReader::new(FailingReader { sent: false });
        match parse_async(reader, &ParseOptions::default()).await {
            Err(RfcError::StreamRead(e)) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
            other => panic!("expected stream failure, got {other:?}"),
        }
    }
}
