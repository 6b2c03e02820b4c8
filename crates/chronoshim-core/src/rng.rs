//! Random source abstraction for determinism.
//!
//! A random source is what an execution context binds as its uniform-random
//! function. Natively this wraps a real RNG; once the shim is installed, a
//! seeded generator is bound in its place.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over the uniform-random function of an execution context.
pub trait RandomSource: Send + Sync + std::fmt::Debug {
    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Generate a random `u32` in the range `[min, max]` inclusive.
    ///
    /// Derived from [`next_f64`](Self::next_f64) the way page scripts scale
    /// the uniform function (`min + floor(random() * span)`), so a seeded
    /// source stays reproducible through this path too.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = u64::from(max - min) + 1;
        let offset = (self.next_f64() * span as f64).floor() as u64;
        min + offset.min(span - 1) as u32
    }
}

/// Production random source backed by an OS-seeded `StdRng`.
#[derive(Debug)]
pub struct SystemRng(StdRng);

impl SystemRng {
    /// Create a random source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl Default for SystemRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for SystemRng {
    fn next_f64(&mut self) -> f64 {
        self.0.random::<f64>()
    }

    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.0.random_range(min..=max)
    }
}
