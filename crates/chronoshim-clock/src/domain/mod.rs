//! Domain layer for the Clock Override context.

pub mod native;
pub mod overrides;
mod parse;
