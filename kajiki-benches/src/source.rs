//! Seeded synthetic inputs for benchmarking.
//!
//! Graphs are connected by construction: every node after the first is
//! attached to a random earlier node, and extra random edges are layered on
//! top. Weights are uniform in `[0, 1)`.

use kajiki_core::{AdjacencyMatrixGraph, GraphError};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic input generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node or element count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// Inserting a generated edge failed.
    #[error("edge insertion failed: {0}")]
    Graph(#[from] GraphError),
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Random edges attempted on top of the spanning tree. Self-loops and
    /// repeated pairs are skipped, so fewer edges may be added.
    pub extra_edges: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected weighted graph labelled `0..node_count`.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroNodes`] if `node_count` is zero, or
/// [`SyntheticError::Graph`] if an edge cannot be inserted.
///
/// # Examples
///
/// ```
/// use kajiki_benches::source::{SyntheticGraphConfig, generate_graph};
/// use kajiki_core::Graph;
///
/// let config = SyntheticGraphConfig { node_count: 10, extra_edges: 5, seed: 42 };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!(graph.node_count(), 10);
/// assert!(graph.edge_count() >= 9);
/// ```
pub fn generate_graph(
    config: &SyntheticGraphConfig,
) -> Result<AdjacencyMatrixGraph<usize>, SyntheticError> {
    if config.node_count == 0 {
        return Err(SyntheticError::ZeroNodes);
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = AdjacencyMatrixGraph::with_capacity(config.node_count);
    for node in 0..config.node_count {
        graph.add_node(node);
    }
    populate(&mut graph, config, &mut rng)?;
    Ok(graph)
}

fn populate(
    graph: &mut AdjacencyMatrixGraph<usize>,
    config: &SyntheticGraphConfig,
    rng: &mut SmallRng,
) -> Result<(), GraphError> {
    for node in 1..config.node_count {
        let parent = rng.gen_range(0..node);
        graph.add_weighted_edge(&parent, &node, rng.gen_range(0.0..1.0))?;
    }
    for _ in 0..config.extra_edges {
        let left = rng.gen_range(0..config.node_count);
        let right = rng.gen_range(0..config.node_count);
        if left != right {
            graph.add_weighted_edge(&left, &right, rng.gen_range(0.0..1.0))?;
        }
    }
    Ok(())
}

/// Generates `union_count` random element pairs over `0..element_count`.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroNodes`] if `element_count` is zero.
pub fn union_pairs(
    element_count: usize,
    union_count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, SyntheticError> {
    if element_count == 0 {
        return Err(SyntheticError::ZeroNodes);
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..union_count)
        .map(|_| {
            (
                rng.gen_range(0..element_count),
                rng.gen_range(0..element_count),
            )
        })
        .collect())
}
