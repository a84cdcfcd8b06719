//! Undirected graph stored as an adjacency matrix.
//!
//! Nodes are indexed from zero in insertion order, so the matrix is always
//! `node_count × node_count`. Cell `(i, j)` holds the edge between nodes `i`
//! and `j`; the same cell value is mirrored at `(j, i)`.

use std::collections::HashMap;

use super::{Graph, GraphEdge, NodeLabel};
use crate::error::GraphError;

#[derive(Clone, Copy, Debug, PartialEq)]
struct EdgeCell {
    weight: Option<f64>,
}

/// Undirected graph backed by a growable adjacency matrix.
///
/// # Examples
/// ```
/// use kajiki_core::{AdjacencyMatrixGraph, Graph};
///
/// let mut graph = AdjacencyMatrixGraph::new();
/// graph.add_node("a");
/// graph.add_node("b");
/// graph.add_weighted_edge(&"a", &"b", 2.5)?;
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.adjacent_nodes(&"a")?, vec![&"b"]);
/// # Ok::<(), kajiki_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyMatrixGraph<L> {
    labels: Vec<L>,
    positions: HashMap<L, usize>,
    matrix: Vec<Vec<Option<EdgeCell>>>,
}

impl<L> Default for AdjacencyMatrixGraph<L> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            positions: HashMap::new(),
            matrix: Vec::new(),
        }
    }
}

impl<L: NodeLabel> AdjacencyMatrixGraph<L> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            matrix: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .enumerate()
            .map(|(i, row)| row.iter().skip(i).filter(|cell| cell.is_some()).count())
            .sum()
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.labels.clear();
        self.positions.clear();
        self.matrix.clear();
    }

    /// Inserts a node labelled `label`.
    ///
    /// Returns `false` without modifying the graph if the label is already
    /// present. The new node receives index `node_count() - 1`.
    pub fn add_node(&mut self, label: L) -> bool {
        if self.positions.contains_key(&label) {
            return false;
        }
        let index = self.labels.len();
        self.positions.insert(label.clone(), index);
        self.labels.push(label);
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix.push(vec![None; index + 1]);
        true
    }

    /// Inserts an unweighted edge between `left` and `right`.
    ///
    /// Returns `false` if the two nodes are already connected.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is missing.
    pub fn add_edge(&mut self, left: &L, right: &L) -> Result<bool, GraphError> {
        self.insert_cell(left, right, EdgeCell { weight: None })
    }

    /// Inserts an edge of the given `weight` between `left` and `right`.
    ///
    /// Returns `false` if the two nodes are already connected. Weights are
    /// stored as given; algorithms validate them.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is missing.
    pub fn add_weighted_edge(
        &mut self,
        left: &L,
        right: &L,
        weight: f64,
    ) -> Result<bool, GraphError> {
        self.insert_cell(
            left,
            right,
            EdgeCell {
                weight: Some(weight),
            },
        )
    }

    /// Removes the edge between `left` and `right`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is missing, or
    /// [`GraphError::EdgeNotFound`] if the nodes are not connected.
    pub fn remove_edge(&mut self, left: &L, right: &L) -> Result<(), GraphError> {
        let i = self.node_index(left)?;
        let j = self.node_index(right)?;
        if self.matrix[i][j].take().is_none() {
            return Err(GraphError::EdgeNotFound {
                left: format!("{left:?}"),
                right: format!("{right:?}"),
            });
        }
        self.matrix[j][i] = None;
        Ok(())
    }

    /// Returns the insertion index of `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if the node is missing.
    pub fn node_index(&self, label: &L) -> Result<usize, GraphError> {
        self.positions
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound {
                label: format!("{label:?}"),
            })
    }

    /// Returns the label stored at `index`.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfBounds`] if `index >= node_count()`.
    pub fn node_at(&self, index: usize) -> Result<&L, GraphError> {
        self.labels
            .get(index)
            .ok_or(GraphError::IndexOutOfBounds {
                index,
                node_count: self.labels.len(),
            })
    }

    fn insert_cell(&mut self, left: &L, right: &L, cell: EdgeCell) -> Result<bool, GraphError> {
        let i = self.node_index(left)?;
        let j = self.node_index(right)?;
        if self.matrix[i][j].is_some() {
            return Ok(false);
        }
        self.matrix[i][j] = Some(cell);
        self.matrix[j][i] = Some(cell);
        Ok(true)
    }

    fn edge_at(&self, i: usize, j: usize) -> Option<GraphEdge<L>> {
        let cell = self.matrix[i][j]?;
        Some(GraphEdge::new(
            self.labels[i].clone(),
            self.labels[j].clone(),
            false,
            cell.weight,
        ))
    }
}

impl<L: NodeLabel> Graph for AdjacencyMatrixGraph<L> {
    type Label = L;

    fn is_directed(&self) -> bool {
        false
    }

    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn nodes(&self) -> impl Iterator<Item = &L> {
        self.labels.iter()
    }

    fn edges(&self) -> impl Iterator<Item = GraphEdge<L>> {
        let n = self.labels.len();
        (0..n).flat_map(move |i| (i..n).filter_map(move |j| self.edge_at(i, j)))
    }

    fn node(&self, label: &L) -> Option<&L> {
        self.positions.get(label).map(|&index| &self.labels[index])
    }

    fn adjacent_nodes(&self, label: &L) -> Result<Vec<&L>, GraphError> {
        let i = self.node_index(label)?;
        Ok(self.matrix[i]
            .iter()
            .zip(&self.labels)
            .filter(|(cell, _)| cell.is_some())
            .map(|(_, neighbour)| neighbour)
            .collect())
    }

    fn incident_edges(&self, label: &L) -> Result<Vec<GraphEdge<L>>, GraphError> {
        let i = self.node_index(label)?;
        Ok((0..self.labels.len())
            .filter_map(|j| self.edge_at(i, j))
            .collect())
    }

    fn edge(&self, left: &L, right: &L) -> Result<Option<GraphEdge<L>>, GraphError> {
        let i = self.node_index(left)?;
        let j = self.node_index(right)?;
        Ok(self.edge_at(i, j))
    }
}
