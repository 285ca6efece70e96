//! Built-in content sets shipped with the crate.

pub mod coast_maze;
