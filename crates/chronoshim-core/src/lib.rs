//! Chronoshim Core — shared capability traits and value types.
//!
//! This crate defines the seams every execution context is assembled from:
//! the clock and random-source capabilities, the date-constructor binding,
//! and the reference instant all determinism is anchored to. It contains no
//! override logic of its own.

pub mod clock;
pub mod date;
pub mod error;
pub mod instant;
pub mod rng;
