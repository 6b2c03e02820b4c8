//! Chronoshim — Random Override.
//!
//! Responsible for the uniform-random function of an execution context:
//! a linear congruential generator seeded from the reference instant,
//! producing the same sequence as the injected page script.

pub mod application;
pub mod domain;
