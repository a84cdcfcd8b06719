//! Property-based tests for the Kruskal and Prim calculators.
//!
//! Checks both algorithms against a dense O(n²) Prim oracle, validates the
//! structural invariants of every produced forest (acyclicity, edge count,
//! membership in the input graph), and checks that the two algorithms agree
//! on every component of graphs drawn from several generated topologies.

mod agreement;
mod equivalence;
mod helpers;
mod strategies;
mod structural;
