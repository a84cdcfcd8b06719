//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use kajiki_core::{ComponentsError, DisjointSetError, MstError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic input generation failed.
    #[error("synthetic input generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Populating a disjoint-set forest failed.
    #[error("disjoint-set setup failed: {0}")]
    DisjointSet(#[from] DisjointSetError),
    /// A warm-up spanning tree computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A warm-up components computation failed.
    #[error("components computation failed: {0}")]
    Components(#[from] ComponentsError),
}
