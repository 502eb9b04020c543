//! iCalendar serialization (RFC 5545).

mod escape;
mod fold;
mod serializer;

pub use escape::escape_text;
pub use fold::{FoldSegments, fold_line, fold_segments};
pub use serializer::{
    content_line, serialize, serialize_component, serialize_property, write_component,
};
