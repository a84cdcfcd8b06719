//! Prim (Jarník) minimum spanning tree grown from a source node.
//!
//! The per-node scratch state (tentative distance, visit marker, and previous
//! node) is kept in a [`PrimTree`] owned by each computation, never on the
//! graph itself, so a graph can be shared freely between computations.

use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::{debug, info, instrument};

use super::{checked_weight, collect_weighted_edges, reject};
use crate::{
    error::MstError,
    graph::{Graph, GraphEdge, NodeIndex, NodeLabel},
};

/// Visitation marker recorded for each node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisitState {
    /// Never reached from the source.
    Unvisited,
    /// Reached through at least one edge but not yet extracted. Only seen
    /// while the computation runs; every reached node ends up finalised.
    Frontier,
    /// Part of the spanning tree.
    Finalized,
}

/// Prim's algorithm with a reusable priority frontier.
///
/// # Examples
/// ```
/// use kajiki_core::{AdjacencyMatrixGraph, PrimMst, VisitState};
///
/// let mut graph = AdjacencyMatrixGraph::new();
/// for label in [1, 2, 3] {
///     graph.add_node(label);
/// }
/// graph.add_weighted_edge(&1, &2, 4.0)?;
/// graph.add_weighted_edge(&2, &3, 1.0)?;
///
/// let tree = PrimMst::new().compute(&graph, &1)?;
/// assert_eq!(tree.previous(&3), Some(&2));
/// assert_eq!(tree.visit_state(&3), Some(VisitState::Finalized));
/// assert_eq!(tree.total_weight(), 5.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PrimMst {
    frontier: BinaryHeap<FrontierEntry>,
}

impl PrimMst {
    /// Creates a calculator with an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator whose frontier is pre-sized for `capacity`
    /// pending entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frontier: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Computes a minimum spanning tree of the component containing `source`.
    ///
    /// Nodes outside that component keep an infinite distance, no previous
    /// node, and [`VisitState::Unvisited`].
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - `source` is not a node of `graph`,
    /// - the graph is directed,
    /// - any edge is unweighted, or
    /// - any edge weight is negative or non-finite.
    #[instrument(
        name = "mst.prim",
        err,
        skip(self, graph, source),
        fields(nodes = graph.node_count(), source = ?source),
    )]
    pub fn compute<G: Graph>(
        &mut self,
        graph: &G,
        source: &G::Label,
    ) -> Result<PrimTree<G::Label>, MstError> {
        if !graph.contains_node(source) {
            return Err(reject(MstError::SourceNotFound {
                node: format!("{source:?}"),
            }));
        }
        collect_weighted_edges(graph)?;

        let nodes = NodeIndex::of(graph);
        let start = nodes.position(source)?;
        let mut tree = PrimTree::unreached(nodes, start);
        let mut done = vec![false; tree.nodes.len()];
        let frontier = &mut self.frontier;
        frontier.clear();

        tree.distance[start] = 0.0;
        tree.state[start] = VisitState::Frontier;
        frontier.push(FrontierEntry {
            distance: 0.0,
            position: start,
        });

        while let Some(FrontierEntry { position: u, .. }) = frontier.pop() {
            if done[u] {
                continue;
            }
            done[u] = true;
            tree.state[u] = VisitState::Finalized;

            let label = tree.nodes.label(u).clone();
            for edge in graph.incident_edges(&label)? {
                let Some(neighbour) = edge.opposite(&label) else {
                    continue;
                };
                let v = tree.nodes.position(neighbour)?;
                if done[v] {
                    continue;
                }
                let weight = checked_weight(&edge)?;
                if weight < tree.distance[v] {
                    tree.distance[v] = weight;
                    tree.previous[v] = Some(u);
                    tree.state[v] = VisitState::Frontier;
                    frontier.push(FrontierEntry {
                        distance: weight,
                        position: v,
                    });
                }
            }
        }

        let reached = tree.reached_count();
        if reached < tree.nodes.len() {
            debug!(
                unreached = tree.nodes.len() - reached,
                "graph is disconnected; tree covers the source component only"
            );
        }
        info!(reached, "prim completed");
        Ok(tree)
    }
}

/// Computes a minimum spanning tree rooted at `source` with a one-off
/// [`PrimMst`].
///
/// # Errors
/// See [`PrimMst::compute`].
pub fn prim<G: Graph>(graph: &G, source: &G::Label) -> Result<PrimTree<G::Label>, MstError> {
    PrimMst::with_capacity(graph.node_count()).compute(graph, source)
}

/// Frontier entry ordered so that [`BinaryHeap`] pops the smallest distance
/// first, breaking ties on the lower node position.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    distance: f64,
    position: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Spanning tree produced by [`PrimMst`], stored as a side table keyed by
/// node.
///
/// For every node the table records the weight of the edge that attached it
/// to the tree (its distance), the node it was attached from (its previous
/// node), and its [`VisitState`].
#[derive(Clone, Debug)]
pub struct PrimTree<L> {
    nodes: NodeIndex<L>,
    source: usize,
    distance: Vec<f64>,
    state: Vec<VisitState>,
    previous: Vec<Option<usize>>,
}

impl<L: NodeLabel> PrimTree<L> {
    fn unreached(nodes: NodeIndex<L>, source: usize) -> Self {
        let n = nodes.len();
        Self {
            nodes,
            source,
            distance: vec![f64::INFINITY; n],
            state: vec![VisitState::Unvisited; n],
            previous: vec![None; n],
        }
    }

    /// Returns the root of the tree.
    #[must_use]
    pub fn source(&self) -> &L {
        self.nodes.label(self.source)
    }

    /// Returns the weight of the edge attaching `node` to the tree: `0` for
    /// the source and infinity for unreached nodes. `None` if `node` is not
    /// part of the graph.
    #[must_use]
    pub fn distance(&self, node: &L) -> Option<f64> {
        self.nodes.get(node).map(|position| self.distance[position])
    }

    /// Returns the tree parent of `node`, or `None` for the source, unreached
    /// nodes, and unknown labels.
    #[must_use]
    pub fn previous(&self, node: &L) -> Option<&L> {
        let position = self.nodes.get(node)?;
        self.previous[position].map(|parent| self.nodes.label(parent))
    }

    /// Returns the visitation marker of `node`, or `None` for unknown labels.
    #[must_use]
    pub fn visit_state(&self, node: &L) -> Option<VisitState> {
        self.nodes.get(node).map(|position| self.state[position])
    }

    /// Returns the tree edges implied by the previous-node references, in
    /// graph node order.
    #[must_use]
    pub fn edges(&self) -> Vec<GraphEdge<L>> {
        self.previous
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| {
                let parent = (*parent)?;
                Some(GraphEdge::weighted(
                    self.nodes.label(parent).clone(),
                    self.nodes.label(child).clone(),
                    self.distance[child],
                ))
            })
            .collect()
    }

    /// Returns the sum of the tree edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.previous
            .iter()
            .zip(&self.distance)
            .filter(|(parent, _)| parent.is_some())
            .map(|(_, distance)| distance)
            .sum()
    }

    /// Returns the number of nodes connected to the source, the source
    /// included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.distance.iter().filter(|d| d.is_finite()).count()
    }

    /// Returns `true` when the tree reaches every node of the graph.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.reached_count() == self.nodes.len()
    }
}
