//! Shared helpers for MST property-based tests.

use proptest::test_runner::TestCaseError;

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts connected components with a plain parent array.
pub(super) fn count_components(node_count: usize, pairs: &[(usize, usize)]) -> usize {
    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut components = node_count;
    for &(left, right) in pairs {
        let a = find_root(&mut parent, left);
        let b = find_root(&mut parent, right);
        if a != b {
            parent[a] = b;
            components -= 1;
        }
    }
    components
}

/// Compares two weight sums accumulated in different orders.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}

/// Builds a failure carrying the fixture context.
pub(super) fn fail(message: impl std::fmt::Display, context: &str) -> TestCaseError {
    TestCaseError::fail(format!("{message} ({context})"))
}
