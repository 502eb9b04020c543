//! iCalendar (RFC 5545) content-line transcoding.
//!
//! Text is unfolded into content lines, decoded into properties and assembled
//! into a component tree; serialization walks the tree back out, folding every
//! line at 75 octets.
//!
//! ```
//! use kunai_ical::{parse, serialize};
//!
//! let input = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nBEGIN:VEVENT\r\nUID:1\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n";
//! let ical = parse(input)?;
//! assert_eq!(ical.events()[0].uid(), Some("1"));
//! assert_eq!(serialize(&ical), input);
//! # Ok::<(), kunai_ical::RfcError>(())
//! ```

pub mod build;
pub mod core;
pub mod error;
pub mod parse;
pub mod view;


pub use build::{serialize, serialize_component, serialize_property, write_component};
pub use crate::core::{Component, ComponentKind, ICalendar, Parameter, Property};
pub use error::{RfcError, RfcResult};
pub use parse::{ParseOptions, parse, parse_all, parse_async, parse_reader, parse_with};
pub use view::{ComponentEditor, ComponentView};
