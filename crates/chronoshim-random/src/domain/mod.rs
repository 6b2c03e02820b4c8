//! Domain layer for the Random Override context.

pub mod lcg;
