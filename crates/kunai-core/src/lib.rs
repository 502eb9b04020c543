//! Shared building blocks for the Kunai iCalendar crates.
//!
//! - `config`: layered settings (defaults, `kunai.toml`, environment)
//! - `constants`: wire-format constants shared by parser and serializer
//! - `error`: the core error type

pub mod config;
pub mod constants;
pub mod error;
