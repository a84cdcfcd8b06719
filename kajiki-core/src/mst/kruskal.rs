//! Sequential Kruskal minimum spanning forest.

use tracing::{Span, field, info, instrument};

use super::{MinimumSpanningForest, collect_weighted_edges};
use crate::{DisjointSetForest, error::MstError, graph::Graph, graph::NodeIndex};

/// Kruskal's algorithm over a reusable disjoint-set forest.
///
/// The forest is cleared at the start of every computation, so one instance
/// can serve any number of sequential calls.
///
/// # Examples
/// ```
/// use kajiki_core::{AdjacencyMatrixGraph, KruskalMst};
///
/// let mut graph = AdjacencyMatrixGraph::new();
/// for label in ["a", "b", "c"] {
///     graph.add_node(label);
/// }
/// graph.add_weighted_edge(&"a", &"b", 1.0)?;
/// graph.add_weighted_edge(&"b", &"c", 2.0)?;
/// graph.add_weighted_edge(&"a", &"c", 5.0)?;
///
/// let forest = KruskalMst::new().compute(&graph)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct KruskalMst {
    pub(super) forest: DisjointSetForest<usize>,
}

impl KruskalMst {
    /// Creates a calculator with an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator whose forest is pre-sized for graphs of up to
    /// `node_count` nodes.
    #[must_use]
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            forest: DisjointSetForest::with_capacity(node_count),
        }
    }

    /// Computes a minimum spanning forest of `graph`.
    ///
    /// Edges are stably sorted by weight, so equal-weight edges are considered
    /// in the order the graph enumerates them. Self-loops never join two sets
    /// and are therefore never selected.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - the graph is directed,
    /// - any edge is unweighted, or
    /// - any edge weight is negative or non-finite.
    #[instrument(
        name = "mst.kruskal",
        err,
        skip(self, graph),
        fields(nodes = graph.node_count(), edges = field::Empty),
    )]
    pub fn compute<G: Graph>(
        &mut self,
        graph: &G,
    ) -> Result<MinimumSpanningForest<G::Label>, MstError> {
        let mut edges = collect_weighted_edges(graph)?;
        Span::current().record("edges", edges.len());

        let nodes = NodeIndex::of(graph);
        self.forest.clear();
        for position in 0..nodes.len() {
            self.forest.make_set(position)?;
        }

        edges.sort_by(|(_, left), (_, right)| left.total_cmp(right));

        let target = nodes.len().saturating_sub(1);
        let mut accepted = Vec::with_capacity(target);
        for (edge, _) in edges {
            if accepted.len() == target {
                break;
            }
            let left = nodes.position(edge.left())?;
            let right = nodes.position(edge.right())?;
            if self.forest.union(&left, &right)? {
                accepted.push(edge);
            }
        }

        let component_count = self.forest.set_count();
        info!(
            accepted = accepted.len(),
            components = component_count,
            "kruskal completed"
        );
        Ok(MinimumSpanningForest {
            edges: accepted,
            component_count,
        })
    }
}

/// Computes a minimum spanning forest of `graph` with a one-off
/// [`KruskalMst`].
///
/// # Errors
/// See [`KruskalMst::compute`].
pub fn kruskal<G: Graph>(graph: &G) -> Result<MinimumSpanningForest<G::Label>, MstError> {
    KruskalMst::with_capacity(graph.node_count()).compute(graph)
}
