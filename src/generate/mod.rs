//! Random instance generation.
//!
//! Produces cost matrices with a zero diagonal and off-diagonal costs drawn
//! uniformly from a configured range. Useful for demos, benchmarks and
//! property tests; seeded configurations are reproducible.

mod config;
mod generator;

pub use config::MatrixConfig;
pub use generator::random_matrix;
