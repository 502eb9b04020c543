//! iCalendar core models (RFC 5545).
//!
//! These types carry the content-line tree exactly as it appears on the wire:
//! - Round-trip fidelity: unknown components, properties and parameters survive
//! - Order preservation: properties and children keep their parse order
//! - Raw values: property values stay escaped; interpretation happens above

mod component;
mod parameter;
mod property;

pub use component::{Component, ComponentKind, ICalendar};
pub use parameter::{Parameter, params};
pub use property::{Property, is_name_char, names};
