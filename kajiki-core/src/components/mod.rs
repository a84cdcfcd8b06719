//! Connected components of an undirected graph.
//!
//! Components are found by registering every node in a
//! [`DisjointSetForest`] and uniting the endpoints of every edge; the sets
//! left at the end are the components.

use std::collections::HashMap;

use tracing::{Span, field, info, instrument, warn};

use crate::{
    DisjointSetForest,
    error::{ComponentsError, DisjointSetError},
    graph::{Graph, NodeIndex, NodeLabel},
};

/// Computes connected components over a reusable disjoint-set forest.
///
/// # Examples
/// ```
/// use kajiki_core::{AdjacencyMatrixGraph, ConnectedComponentsComputer};
///
/// let mut graph = AdjacencyMatrixGraph::new();
/// for label in ['a', 'b', 'c'] {
///     graph.add_node(label);
/// }
/// graph.add_edge(&'a', &'c')?;
///
/// let components = ConnectedComponentsComputer::new().compute(&graph)?;
/// assert_eq!(components.len(), 2);
/// assert_eq!(components.component_of(&'c'), Some(&['a', 'c'][..]));
/// assert_eq!(components.sizes(), vec![2, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConnectedComponentsComputer {
    forest: DisjointSetForest<usize>,
}

impl ConnectedComponentsComputer {
    /// Creates a computer with an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a computer whose forest is pre-sized for graphs of up to
    /// `node_count` nodes.
    #[must_use]
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            forest: DisjointSetForest::with_capacity(node_count),
        }
    }

    /// Partitions the nodes of `graph` into connected components.
    ///
    /// Edge weights are ignored. Components are ordered by the position of
    /// their first node in the graph's node order, and each component lists
    /// its members in that same order.
    ///
    /// # Errors
    /// Returns [`ComponentsError::DirectedGraph`] for directed graphs.
    #[instrument(
        name = "components.compute",
        err,
        skip(self, graph),
        fields(nodes = graph.node_count(), edges = field::Empty),
    )]
    pub fn compute<G: Graph>(
        &mut self,
        graph: &G,
    ) -> Result<ConnectedComponents<G::Label>, ComponentsError> {
        if graph.is_directed() {
            let err = ComponentsError::DirectedGraph;
            warn!(code = %err.code(), "rejecting directed graph");
            return Err(err);
        }

        let nodes = NodeIndex::of(graph);
        self.forest.clear();
        for position in 0..nodes.len() {
            self.forest.make_set(position)?;
        }

        let mut edge_count = 0_usize;
        for edge in graph.edges() {
            let left = nodes.position(edge.left())?;
            let right = nodes.position(edge.right())?;
            self.forest.union(&left, &right)?;
            edge_count += 1;
        }
        Span::current().record("edges", edge_count);

        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut components: Vec<Vec<G::Label>> = Vec::with_capacity(self.forest.set_count());
        let mut membership = HashMap::with_capacity(nodes.len());
        for position in 0..nodes.len() {
            let root = self
                .forest
                .find_set(&position)
                .copied()
                .ok_or_else(|| DisjointSetError::NotPresent {
                    element: position.to_string(),
                })?;
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            let label = nodes.label(position).clone();
            membership.insert(label.clone(), slot);
            components[slot].push(label);
        }

        info!(
            components = components.len(),
            "connected components computed"
        );
        Ok(ConnectedComponents {
            components,
            membership,
        })
    }
}

/// Partition of a graph's nodes into connected components.
#[derive(Clone, Debug)]
pub struct ConnectedComponents<L> {
    components: Vec<Vec<L>>,
    membership: HashMap<L, usize>,
}

impl<L: NodeLabel> ConnectedComponents<L> {
    /// Iterates over the components in order.
    pub fn iter(&self) -> impl Iterator<Item = &[L]> {
        self.components.iter().map(Vec::as_slice)
    }

    /// Returns the number of components.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.components.len() }

    /// Returns `true` when the graph had no nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.components.is_empty() }

    /// Returns the component containing `node`, or `None` if `node` was not
    /// part of the graph.
    #[must_use]
    pub fn component_of(&self, node: &L) -> Option<&[L]> {
        self.membership
            .get(node)
            .map(|&slot| self.components[slot].as_slice())
    }

    /// Returns `true` when `a` and `b` lie in the same component.
    #[must_use]
    pub fn same_component(&self, a: &L, b: &L) -> bool {
        match (self.membership.get(a), self.membership.get(b)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }

    /// Returns the size of each component, in component order.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.components.iter().map(Vec::len).collect()
    }

    /// Consumes the result, returning the components.
    #[must_use]
    pub fn into_vec(self) -> Vec<Vec<L>> {
        self.components
    }
}

impl<L: NodeLabel> PartialEq for ConnectedComponents<L> {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl<L: NodeLabel> Eq for ConnectedComponents<L> {}

/// Computes the connected components of `graph` with a one-off
/// [`ConnectedComponentsComputer`].
///
/// # Errors
/// See [`ConnectedComponentsComputer::compute`].
pub fn connected_components<G: Graph>(
    graph: &G,
) -> Result<ConnectedComponents<G::Label>, ComponentsError> {
    ConnectedComponentsComputer::with_capacity(graph.node_count()).compute(graph)
}
