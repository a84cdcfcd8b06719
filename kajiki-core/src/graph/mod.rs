//! Graph abstraction consumed by the spanning-tree and component algorithms.
//!
//! Algorithms are written against the [`Graph`] trait so callers can plug in
//! their own storage. [`AdjacencyMatrixGraph`] is the bundled undirected
//! implementation.

mod matrix;

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::error::GraphError;

pub use self::matrix::AdjacencyMatrixGraph;

/// Requirements for node labels.
///
/// Labels identify nodes, so they must be comparable and hashable. `Debug` is
/// used to render labels inside error messages.
pub trait NodeLabel: Clone + Eq + Hash + Debug {}

impl<T> NodeLabel for T where T: Clone + Eq + Hash + Debug {}

/// An edge between two labelled nodes with an optional weight.
///
/// Undirected edges compare equal regardless of endpoint order.
#[derive(Clone, Debug)]
pub struct GraphEdge<L> {
    left: L,
    right: L,
    directed: bool,
    weight: Option<f64>,
}

impl<L: NodeLabel> GraphEdge<L> {
    /// Creates an edge from its parts.
    #[must_use]
    pub const fn new(left: L, right: L, directed: bool, weight: Option<f64>) -> Self {
        Self {
            left,
            right,
            directed,
            weight,
        }
    }

    /// Creates an undirected edge carrying `weight`.
    #[must_use]
    pub const fn weighted(left: L, right: L, weight: f64) -> Self {
        Self::new(left, right, false, Some(weight))
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn left(&self) -> &L { &self.left }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn right(&self) -> &L { &self.right }

    /// Returns `true` for directed edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_directed(&self) -> bool { self.directed }

    /// Returns the weight, if the edge carries one.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Option<f64> { self.weight }

    /// Returns `true` when the edge carries a weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn has_weight(&self) -> bool { self.weight.is_some() }

    /// Returns `true` when the edge starts and ends at the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.left == self.right
    }

    /// Returns `true` if the edge joins `a` and `b`, in either order for
    /// undirected edges.
    #[must_use]
    pub fn connects(&self, a: &L, b: &L) -> bool {
        (self.left == *a && self.right == *b)
            || (!self.directed && self.left == *b && self.right == *a)
    }

    /// Returns the endpoint opposite `node`, or `None` if `node` is not an
    /// endpoint.
    #[must_use]
    pub fn opposite(&self, node: &L) -> Option<&L> {
        if self.left == *node {
            Some(&self.right)
        } else if self.right == *node {
            Some(&self.left)
        } else {
            None
        }
    }
}

impl<L: NodeLabel> PartialEq for GraphEdge<L> {
    fn eq(&self, other: &Self) -> bool {
        self.directed == other.directed
            && self.weight == other.weight
            && self.connects(&other.left, &other.right)
    }
}

/// Read access to a graph, as required by the algorithms in this crate.
///
/// Implementations must enumerate every node and every edge exactly once.
pub trait Graph {
    /// Label type identifying nodes.
    type Label: NodeLabel;

    /// Returns `true` if the graph's edges are directed.
    fn is_directed(&self) -> bool;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Iterates over every node label, without duplicates.
    fn nodes(&self) -> impl Iterator<Item = &Self::Label>;

    /// Iterates over every edge, without duplicates.
    fn edges(&self) -> impl Iterator<Item = GraphEdge<Self::Label>>;

    /// Returns the stored label equal to `label`, if the node exists.
    fn node(&self, label: &Self::Label) -> Option<&Self::Label>;

    /// Returns `true` if a node equal to `label` exists.
    fn contains_node(&self, label: &Self::Label) -> bool {
        self.node(label).is_some()
    }

    /// Returns the nodes adjacent to `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `label` is not in the graph.
    fn adjacent_nodes(&self, label: &Self::Label) -> Result<Vec<&Self::Label>, GraphError>;

    /// Returns the edges incident on `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `label` is not in the graph.
    fn incident_edges(&self, label: &Self::Label)
    -> Result<Vec<GraphEdge<Self::Label>>, GraphError>;

    /// Returns the edge joining `left` and `right`, if any.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is not in the
    /// graph.
    fn edge(
        &self,
        left: &Self::Label,
        right: &Self::Label,
    ) -> Result<Option<GraphEdge<Self::Label>>, GraphError>;
}

/// Dense `0..node_count` positions for the nodes of a graph, in the order the
/// graph enumerates them.
#[derive(Clone, Debug)]
pub(crate) struct NodeIndex<L> {
    labels: Vec<L>,
    positions: HashMap<L, usize>,
}

impl<L: NodeLabel> NodeIndex<L> {
    pub(crate) fn of<G: Graph<Label = L>>(graph: &G) -> Self {
        let labels: Vec<L> = graph.nodes().cloned().collect();
        let positions = labels
            .iter()
            .enumerate()
            .map(|(position, label)| (label.clone(), position))
            .collect();
        Self { labels, positions }
    }

    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }

    pub(crate) fn get(&self, label: &L) -> Option<usize> {
        self.positions.get(label).copied()
    }

    pub(crate) fn position(&self, label: &L) -> Result<usize, GraphError> {
        self.get(label).ok_or_else(|| GraphError::NodeNotFound {
            label: format!("{label:?}"),
        })
    }

    pub(crate) fn label(&self, position: usize) -> &L {
        &self.labels[position]
    }
}
