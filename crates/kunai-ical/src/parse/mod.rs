//! iCalendar parsing (RFC 5545).

mod content_line;
mod error;
mod lexer;
mod parser;
mod stream;
mod values;

pub use content_line::parse_content_line;
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{LogicalLine, Unfolder};
pub use parser::{
    Assembler, ParseOptions, parse, parse_all, parse_all_with, parse_components, parse_reader,
    parse_reader_with, parse_with,
};
pub use stream::{AsyncUnfolder, parse_async, parse_components_async};
pub use values::unescape_text;
