//! Property 2: structural invariants of Kruskal and Prim output.
//!
//! For Kruskal:
//! - every forest edge exists in the graph with the same weight,
//! - no edge is a self-loop,
//! - edges are accepted in non-decreasing weight order,
//! - the forest is acyclic and holds `V - C` edges, where `C` is checked
//!   against an independent union-find pass over the graph.
//!
//! For Prim, every reached node other than the source is attached by a graph
//! edge whose weight equals its recorded distance, and following previous
//! nodes always leads back to the source.

use proptest::test_runner::TestCaseResult;

use crate::{
    graph::{AdjacencyMatrixGraph, Graph, GraphEdge},
    mst::{VisitState, kruskal, prim},
};

use super::helpers::{count_components, fail, find_root};
use super::types::MstFixture;

pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let context = fixture.context();
    let graph = fixture.graph();
    let forest = kruskal(&graph).map_err(|e| fail(format!("kruskal failed: {e}"), &context))?;

    validate_edges_in_graph(&graph, forest.edges(), &context)?;
    validate_weight_order(forest.edges(), &context)?;

    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    for (i, edge) in forest.edges().iter().enumerate() {
        if edge.is_self_loop() {
            return Err(fail(format!("edge {i} is a self-loop"), &context));
        }
        let a = find_root(&mut parent, *edge.left());
        let b = find_root(&mut parent, *edge.right());
        if a == b {
            return Err(fail(format!("edge {i} closes a cycle"), &context));
        }
        parent[a] = b;
    }

    let pairs: Vec<(usize, usize)> = graph
        .edges()
        .map(|edge| (*edge.left(), *edge.right()))
        .collect();
    let components = count_components(fixture.node_count, &pairs);
    if forest.component_count() != components {
        return Err(fail(
            format!(
                "component count {} != {components} found by relabelling",
                forest.component_count()
            ),
            &context,
        ));
    }

    let expected = fixture.node_count - components;
    if forest.edges().len() != expected {
        return Err(fail(
            format!(
                "edge count {} != nodes - components = {expected}",
                forest.edges().len()
            ),
            &context,
        ));
    }

    if fixture.node_count > 0 {
        validate_prim_tree(&graph, &context)?;
    }
    Ok(())
}

fn validate_edges_in_graph(
    graph: &AdjacencyMatrixGraph<usize>,
    edges: &[GraphEdge<usize>],
    context: &str,
) -> TestCaseResult {
    for (i, edge) in edges.iter().enumerate() {
        let stored = graph
            .edge(edge.left(), edge.right())
            .map_err(|e| fail(format!("edge {i}: {e}"), context))?;
        if stored.as_ref() != Some(edge) {
            return Err(fail(
                format!("edge {i} ({edge:?}) is not a graph edge"),
                context,
            ));
        }
    }
    Ok(())
}

fn validate_weight_order(edges: &[GraphEdge<usize>], context: &str) -> TestCaseResult {
    let weights: Vec<f64> = edges.iter().filter_map(GraphEdge::weight).collect();
    if let Some(i) = weights.windows(2).position(|pair| pair[0] > pair[1]) {
        return Err(fail(
            format!("weights decrease at edge {}", i + 1),
            context,
        ));
    }
    Ok(())
}

fn validate_prim_tree(graph: &AdjacencyMatrixGraph<usize>, context: &str) -> TestCaseResult {
    let source = graph.node_count() / 2;
    let tree = prim(graph, &source).map_err(|e| fail(format!("prim failed: {e}"), context))?;

    for node in 0..graph.node_count() {
        let reached = tree.distance(&node).is_some_and(f64::is_finite);
        let state = tree.visit_state(&node);
        let expected_state = if reached {
            VisitState::Finalized
        } else {
            VisitState::Unvisited
        };
        if state != Some(expected_state) {
            return Err(fail(
                format!("node {node}: state {state:?}, expected {expected_state:?}"),
                context,
            ));
        }
        if !reached || node == source {
            continue;
        }

        let parent = tree
            .previous(&node)
            .ok_or_else(|| fail(format!("reached node {node} has no previous node"), context))?;
        let stored = graph
            .edge(parent, &node)
            .map_err(|e| fail(format!("node {node}: {e}"), context))?
            .and_then(|edge| edge.weight());
        if stored != tree.distance(&node) {
            return Err(fail(
                format!("node {node}: distance does not match edge from {parent}"),
                context,
            ));
        }

        let mut current = node;
        let mut steps = 0;
        while let Some(&next) = tree.previous(&current) {
            current = next;
            steps += 1;
            if steps > graph.node_count() {
                return Err(fail(format!("node {node}: previous chain loops"), context));
            }
        }
        if current != source {
            return Err(fail(
                format!("node {node}: previous chain ends at {current}"),
                context,
            ));
        }
    }

    if tree.edges().len() + 1 != tree.reached_count() {
        return Err(fail(
            format!(
                "prim tree has {} edges for {} reached nodes",
                tree.edges().len(),
                tree.reached_count()
            ),
            context,
        ));
    }
    Ok(())
}
