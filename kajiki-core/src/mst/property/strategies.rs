//! Graph generators for MST property-based tests.
//!
//! Each generator draws from a seeded [`SmallRng`], so a failing case can be
//! replayed from its shape and seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphShape, MstFixture};

/// Minimum node count for most generated graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 48;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 24;

/// Generates fixtures covering every [`GraphShape`].
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture of the requested shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> MstFixture {
    match shape {
        GraphShape::Unique => random_pairs(rng, MAX_NODES, (0.1, 0.5), shape, |r| {
            r.gen_range(0.1..100.0)
        }),
        GraphShape::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(0_u8..=10)))
                .collect();
            random_pairs(rng, MAX_NODES, (0.2, 0.6), shape, move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        GraphShape::Sparse => sparse(rng),
        GraphShape::Dense => random_pairs(rng, DENSE_MAX_NODES, (0.7, 0.95), shape, |r| {
            r.gen_range(0.0..10.0)
        }),
        GraphShape::Disconnected => disconnected(rng),
    }
}

/// Adds each unordered pair with a probability drawn from `probability`.
fn random_pairs(
    rng: &mut SmallRng,
    max_nodes: usize,
    probability: (f64, f64),
    shape: GraphShape,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let p = rng.gen_range(probability.0..=probability.1);
    let mut edges = Vec::new();
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(p) {
                let w = weight(rng);
                edges.push((i, j, w));
            }
        }
    }
    MstFixture {
        node_count,
        edges,
        shape,
    }
}

/// Random spanning path over a shuffled node order plus extra random edges,
/// some of which repeat an existing pair or form self-loops.
fn sparse(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<(usize, usize, f64)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(0.1..100.0)))
        .collect();
    for _ in 0..rng.gen_range(node_count / 2..=node_count) {
        let i = rng.gen_range(0..node_count);
        let j = rng.gen_range(0..node_count);
        edges.push((i, j, rng.gen_range(0.1..100.0)));
    }
    MstFixture {
        node_count,
        edges,
        shape: GraphShape::Sparse,
    }
}

/// Two to five components with random internal edges and no cross edges.
/// Singleton components are allowed.
fn disconnected(rng: &mut SmallRng) -> MstFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &sizes {
        let p = rng.gen_range(0.3..=0.8);
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(p) {
                    edges.push((offset + i, offset + j, rng.gen_range(0.1..100.0)));
                }
            }
        }
        offset += size;
    }
    MstFixture {
        node_count: offset,
        edges,
        shape: GraphShape::Disconnected,
    }
}

/// Fisher-Yates shuffle.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
