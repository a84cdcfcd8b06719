//! Kajiki core library.
//!
//! Graph connectivity primitives: a union-find [`DisjointSetForest`],
//! minimum spanning trees via [`KruskalMst`] and [`PrimMst`], and
//! [`ConnectedComponentsComputer`]. The algorithms read graphs through the
//! [`Graph`] trait; [`AdjacencyMatrixGraph`] is the bundled implementation.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod components;
mod disjoint_set;
mod error;
mod graph;
mod mst;

pub use crate::{
    components::{ConnectedComponents, ConnectedComponentsComputer, connected_components},
    disjoint_set::DisjointSetForest,
    error::{
        ComponentsError, ComponentsErrorCode, DisjointSetError, DisjointSetErrorCode, GraphError,
        GraphErrorCode, MstError, MstErrorCode,
    },
    graph::{AdjacencyMatrixGraph, Graph, GraphEdge, NodeLabel},
    mst::{
        KruskalMst, MinimumSpanningForest, PrimMst, PrimTree, VisitState, kruskal, prim,
    },
};
