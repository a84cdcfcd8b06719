//! Property 1: equivalence with the dense oracle.
//!
//! Kruskal must report the same total weight, edge count, and component
//! count as [`dense_prim`] for every generated graph.

use proptest::test_runner::TestCaseResult;

use crate::mst::kruskal;

use super::helpers::{fail, weights_match};
use super::oracle::dense_prim;
use super::types::MstFixture;

pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let context = fixture.context();
    let graph = fixture.graph();
    let forest = kruskal(&graph).map_err(|e| fail(format!("kruskal failed: {e}"), &context))?;
    let oracle = dense_prim(&graph);

    if !weights_match(forest.total_weight(), oracle.total_weight) {
        return Err(fail(
            format!(
                "total weight mismatch: kruskal={}, oracle={}",
                forest.total_weight(),
                oracle.total_weight
            ),
            &context,
        ));
    }
    if forest.edges().len() != oracle.edge_count {
        return Err(fail(
            format!(
                "edge count mismatch: kruskal={}, oracle={}",
                forest.edges().len(),
                oracle.edge_count
            ),
            &context,
        ));
    }
    if forest.component_count() != oracle.component_count {
        return Err(fail(
            format!(
                "component count mismatch: kruskal={}, oracle={}",
                forest.component_count(),
                oracle.component_count
            ),
            &context,
        ));
    }
    Ok(())
}
