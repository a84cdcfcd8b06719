//! Property 3: Kruskal and Prim agree on every component.
//!
//! Running Prim once from the lowest node of each component must reach every
//! node exactly once and reproduce Kruskal's total forest weight. Running Prim
//! from any node must reproduce the Kruskal weight of that node's component.

use proptest::test_runner::TestCaseResult;

use crate::mst::{PrimMst, kruskal};

use super::helpers::{fail, find_root, weights_match};
use super::types::MstFixture;

pub(super) fn run_algorithm_agreement_property(fixture: &MstFixture) -> TestCaseResult {
    let context = fixture.context();
    let graph = fixture.graph();
    let forest = kruskal(&graph).map_err(|e| fail(format!("kruskal failed: {e}"), &context))?;

    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    for edge in forest.edges() {
        let a = find_root(&mut parent, *edge.left());
        let b = find_root(&mut parent, *edge.right());
        parent[a] = b;
    }
    let mut sources = Vec::new();
    let mut seen_roots = Vec::new();
    for node in 0..fixture.node_count {
        let root = find_root(&mut parent, node);
        if !seen_roots.contains(&root) {
            seen_roots.push(root);
            sources.push(node);
        }
    }

    let mut calculator = PrimMst::with_capacity(fixture.node_count);
    let mut total = 0.0;
    let mut reached = 0;
    for source in &sources {
        let tree = calculator
            .compute(&graph, source)
            .map_err(|e| fail(format!("prim from {source} failed: {e}"), &context))?;
        total += tree.total_weight();
        reached += tree.reached_count();
    }

    let mut component_weight = vec![0.0; fixture.node_count];
    let mut component_size = vec![0_usize; fixture.node_count];
    for edge in forest.edges() {
        let root = find_root(&mut parent, *edge.left());
        component_weight[root] += edge.weight().unwrap_or_default();
    }
    for node in 0..fixture.node_count {
        let root = find_root(&mut parent, node);
        component_size[root] += 1;
    }
    for source in 0..fixture.node_count {
        let tree = calculator
            .compute(&graph, &source)
            .map_err(|e| fail(format!("prim from {source} failed: {e}"), &context))?;
        let root = find_root(&mut parent, source);
        if tree.reached_count() != component_size[root] {
            return Err(fail(
                format!(
                    "prim from {source} reached {} nodes, component holds {}",
                    tree.reached_count(),
                    component_size[root]
                ),
                &context,
            ));
        }
        if !weights_match(tree.total_weight(), component_weight[root]) {
            return Err(fail(
                format!(
                    "weight mismatch from {source}: prim={}, kruskal component={}",
                    tree.total_weight(),
                    component_weight[root]
                ),
                &context,
            ));
        }
    }

    if sources.len() != forest.component_count() {
        return Err(fail(
            format!(
                "forest spans {} components, kruskal reports {}",
                sources.len(),
                forest.component_count()
            ),
            &context,
        ));
    }
    if reached != fixture.node_count {
        return Err(fail(
            format!("prim reached {reached} of {} nodes", fixture.node_count),
            &context,
        ));
    }
    if !weights_match(total, forest.total_weight()) {
        return Err(fail(
            format!(
                "total weight mismatch: prim={total}, kruskal={}",
                forest.total_weight()
            ),
            &context,
        ));
    }
    Ok(())
}
