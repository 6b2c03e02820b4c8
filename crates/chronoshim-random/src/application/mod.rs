//! Application layer for the Random Override context.

pub mod install;
