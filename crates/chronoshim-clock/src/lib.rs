//! Chronoshim — Clock Override.
//!
//! Responsible for the date constructor of an execution context: the native
//! constructor semantics page scripts rely on, and the override that pins
//! every zero-argument construction to the reference instant while passing
//! explicit arguments through untouched.

pub mod application;
pub mod domain;
