//! Shared test doubles for the Chronoshim determinism shim.

mod clock;
mod date;
mod rng;

pub use clock::FixedClock;
pub use date::RecordingDate;
pub use rng::{MockRng, SequenceRng};
