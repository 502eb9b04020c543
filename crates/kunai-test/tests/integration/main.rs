//! End-to-end tests for the iCalendar pipeline.

mod building;
mod config_driven;
mod rfc_examples;
mod streaming;
