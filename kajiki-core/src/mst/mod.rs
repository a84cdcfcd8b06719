//! Minimum spanning tree (MST) construction.
//!
//! Two greedy algorithms are provided:
//!
//! - [`KruskalMst`] sorts every edge by weight and grows a spanning forest
//!   with a [`crate::DisjointSetForest`] as the cycle check.
//! - [`PrimMst`] grows a single tree outward from a source node using a
//!   priority frontier.
//!
//! Both require an undirected graph whose edges all carry a finite,
//! non-negative weight. Inputs are validated in full before any state is
//! touched, so a rejected graph leaves no partial result behind.

mod kruskal;
mod prim;

use tracing::warn;

use crate::{
    error::MstError,
    graph::{Graph, GraphEdge, NodeLabel},
};

pub use self::{
    kruskal::{KruskalMst, kruskal},
    prim::{PrimMst, PrimTree, VisitState, prim},
};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug)]
pub struct MinimumSpanningForest<L> {
    edges: Vec<GraphEdge<L>>,
    component_count: usize,
}

impl<L: NodeLabel> MinimumSpanningForest<L> {
    /// Returns the forest edges in acceptance order (non-decreasing weight).
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[GraphEdge<L>] { &self.edges }

    /// Consumes the forest, returning its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<GraphEdge<L>> { self.edges }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the sum of the edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().filter_map(GraphEdge::weight).sum()
    }

    /// Returns `true` if the forest contains an edge joining `a` and `b`.
    #[must_use]
    pub fn contains_edge(&self, a: &L, b: &L) -> bool {
        self.edges.iter().any(|edge| edge.connects(a, b))
    }
}

impl<L: NodeLabel> PartialEq for MinimumSpanningForest<L> {
    fn eq(&self, other: &Self) -> bool {
        self.component_count == other.component_count && self.edges == other.edges
    }
}

fn reject(err: MstError) -> MstError {
    warn!(code = %err.code(), error = %err, "rejecting spanning tree input");
    err
}

/// Checks that `graph` is undirected and every edge has a finite,
/// non-negative weight, returning each edge paired with its weight.
fn collect_weighted_edges<G: Graph>(
    graph: &G,
) -> Result<Vec<(GraphEdge<G::Label>, f64)>, MstError> {
    if graph.is_directed() {
        return Err(reject(MstError::DirectedGraph));
    }
    graph
        .edges()
        .map(|edge| {
            let weight = checked_weight(&edge)?;
            Ok((edge, weight))
        })
        .collect()
}

fn checked_weight<L: NodeLabel>(edge: &GraphEdge<L>) -> Result<f64, MstError> {
    let endpoints = || (format!("{:?}", edge.left()), format!("{:?}", edge.right()));
    let Some(weight) = edge.weight() else {
        let (left, right) = endpoints();
        return Err(reject(MstError::UnweightedEdge { left, right }));
    };
    if !weight.is_finite() {
        let (left, right) = endpoints();
        return Err(reject(MstError::NonFiniteWeight { left, right }));
    }
    if weight < 0.0 {
        let (left, right) = endpoints();
        return Err(reject(MstError::NegativeWeight {
            left,
            right,
            weight,
        }));
    }
    Ok(weight)
}

#[cfg(test)]
mod property;
