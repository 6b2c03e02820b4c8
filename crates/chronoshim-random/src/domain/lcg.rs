//! Linear congruential generator.
//!
//! `state = (state * A + C) mod M`, returning `state / M`.
//!
//! # Arithmetic
//!
//! The recurrence is evaluated in IEEE-754 double precision with a truncated
//! remainder, which is exactly how a script engine evaluates the injected
//! snippet. For real epoch-millisecond seeds the first product exceeds 2^53
//! and rounds, so integer arithmetic would diverge from the in-page sequence
//! on the very first draw. After that step the state is below `M` and every
//! operation is exact.
//!
//! # Period
//!
//! The state space has at most `M` values, so the sequence cycles after at
//! most `M` draws. This generator is neither statistically strong nor
//! cryptographically secure.

use chronoshim_core::error::ShimError;
use chronoshim_core::instant::ReferenceInstant;
use chronoshim_core::rng::RandomSource;

/// Constants of a linear congruential generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcgParams {
    /// Multiplier `A`.
    pub multiplier: u32,
    /// Increment `C`.
    pub increment: u32,
    /// Modulus `M`.
    pub modulus: u32,
}

impl LcgParams {
    /// The constants baked into the injected page script.
    pub const REFERENCE: Self = Self {
        multiplier: 9301,
        increment: 49297,
        modulus: 233_280,
    };

    /// Checks that the constants cannot produce a degenerate sequence.
    ///
    /// # Errors
    ///
    /// Returns `ShimError::InvalidGenerator` if the modulus is zero or if
    /// zero would be an absorbing state (`C mod M == 0`).
    pub fn validate(&self) -> Result<(), ShimError> {
        if self.modulus == 0 {
            return Err(ShimError::InvalidGenerator("modulus must be non-zero".to_owned()));
        }
        if self.increment % self.modulus == 0 {
            return Err(ShimError::InvalidGenerator(format!(
                "increment {} is a multiple of modulus {}; zero would be absorbing",
                self.increment, self.modulus
            )));
        }
        Ok(())
    }

    /// Returns `true` if the Hull–Dobell theorem guarantees a period of
    /// exactly `M` from any integer seed.
    #[must_use]
    pub fn has_full_period(&self) -> bool {
        let m = u64::from(self.modulus);
        let a_minus_one = u64::from(self.multiplier).wrapping_sub(1);
        if m == 0 || gcd(u64::from(self.increment), m) != 1 {
            return false;
        }
        if m % 4 == 0 && a_minus_one % 4 != 0 {
            return false;
        }
        prime_factors(m).all(|p| a_minus_one % p == 0)
    }
}

const _: () = assert!(
    LcgParams::REFERENCE.modulus != 0
        && LcgParams::REFERENCE.increment % LcgParams::REFERENCE.modulus != 0
);

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn prime_factors(mut n: u64) -> impl Iterator<Item = u64> {
    let mut factors = Vec::new();
    let mut p = 2;
    while p * p <= n {
        if n % p == 0 {
            factors.push(p);
            while n % p == 0 {
                n /= p;
            }
        }
        p += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors.into_iter()
}

/// A seeded LCG bound as the uniform-random function of one execution
/// context.
///
/// The state register is private; it is observable only through the values
/// returned by [`RandomSource::next_f64`].
#[derive(Debug, Clone)]
pub struct LcgRandom {
    multiplier: f64,
    increment: f64,
    modulus: f64,
    state: f64,
}

impl LcgRandom {
    /// Creates a generator with custom constants.
    ///
    /// # Errors
    ///
    /// Returns `ShimError::InvalidGenerator` if `params` fail
    /// [`LcgParams::validate`].
    pub fn new(params: LcgParams, seed: ReferenceInstant) -> Result<Self, ShimError> {
        params.validate()?;
        Ok(Self::from_valid(params, seed))
    }

    /// Creates a generator with [`LcgParams::REFERENCE`], seeded from the
    /// reference instant.
    #[must_use]
    pub fn seeded(seed: ReferenceInstant) -> Self {
        Self::from_valid(LcgParams::REFERENCE, seed)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_valid(params: LcgParams, seed: ReferenceInstant) -> Self {
        Self {
            multiplier: f64::from(params.multiplier),
            increment: f64::from(params.increment),
            modulus: f64::from(params.modulus),
            state: seed.as_millis() as f64,
        }
    }
}

impl RandomSource for LcgRandom {
    fn next_f64(&mut self) -> f64 {
        self.state = (self.state * self.multiplier + self.increment) % self.modulus;
        self.state / self.modulus
    }
}
