//! Procedural world population: where collectables and marine life start.

pub mod population;

pub use population::*;
