//! Application layer for the Clock Override context.

pub mod install;
