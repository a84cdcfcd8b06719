//! Benchmark support crate for kajiki.
//!
//! Provides seeded synthetic graphs and union sequences plus parameter types
//! used by the Criterion benchmarks for the disjoint-set forest, the spanning
//! tree calculators, and connected components.

pub mod error;
pub mod params;
pub mod source;
