//! Test random sources — deterministic `RandomSource` implementations.

use chronoshim_core::rng::RandomSource;

/// A random source that always returns `0.0`. Suitable as the "native"
/// binding in tests that only check it gets replaced.
#[derive(Debug)]
pub struct MockRng;

impl RandomSource for MockRng {
    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// A random source that returns values from a predetermined sequence.
/// Panics if the sequence is exhausted.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
