//! Chronoshim — execution-context environment.
//!
//! Assembles the clock and random overrides into the two delivery forms of
//! the shim: an [`environment::Environment`] a host binds into its embedded
//! script engine at setup time, and the [`script::ShimScript`] snippet a host
//! injects into a browser page.

pub mod config;
pub mod environment;
pub mod globals;
pub mod script;
