//! Shared test utilities used across kajiki crates.
//!
//! - [`recording`] captures `tracing` spans and events so tests can assert
//!   instrumentation.
//! - [`ci`] reads the environment-driven knobs that tune property suites.

pub mod ci;
pub mod recording;
