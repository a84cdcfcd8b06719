//! Error types for the Kajiki core library.
//!
//! Each public operation reports failures through one of the enums below.
//! Every enum carries a stable, machine-readable code so callers can branch on
//! failures without matching on display strings.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSetForest`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// `make_set` was called for an element that is already registered.
    #[error("element {element} is already present in the forest")]
    AlreadyPresent {
        /// Debug rendering of the offending element.
        element: String,
    },
    /// The operation referenced an element that was never registered.
    #[error("element {element} is not present in the forest")]
    NotPresent {
        /// Debug rendering of the missing element.
        element: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element was already registered.
        AlreadyPresent => AlreadyPresent { .. } => "DISJOINT_SET_ALREADY_PRESENT",
        /// The element was never registered.
        NotPresent => NotPresent { .. } => "DISJOINT_SET_NOT_PRESENT",
    }
}

/// An error produced by [`crate::Graph`] queries and
/// [`crate::AdjacencyMatrixGraph`] mutations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A label did not identify any node of the graph.
    #[error("node {label} does not exist in the graph")]
    NodeNotFound {
        /// Debug rendering of the unknown label.
        label: String,
    },
    /// A positional lookup fell outside `0..node_count`.
    #[error("node index {index} is out of bounds for {node_count} nodes")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of nodes currently stored.
        node_count: usize,
    },
    /// No edge connects the two nodes.
    #[error("no edge connects {left} and {right}")]
    EdgeNotFound {
        /// Debug rendering of the first endpoint.
        left: String,
        /// Debug rendering of the second endpoint.
        right: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A label did not identify any node of the graph.
        NodeNotFound => NodeNotFound { .. } => "GRAPH_NODE_NOT_FOUND",
        /// A positional lookup fell outside the node range.
        IndexOutOfBounds => IndexOutOfBounds { .. } => "GRAPH_INDEX_OUT_OF_BOUNDS",
        /// No edge connects the two nodes.
        EdgeNotFound => EdgeNotFound { .. } => "GRAPH_EDGE_NOT_FOUND",
    }
}

/// Errors returned while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// Spanning trees are only defined here for undirected graphs.
    #[error("minimum spanning trees require an undirected graph")]
    DirectedGraph,
    /// The requested source node is not part of the graph.
    #[error("source node {node} does not exist in the graph")]
    SourceNotFound {
        /// Debug rendering of the missing source label.
        node: String,
    },
    /// An edge carried no weight.
    #[error("edge ({left}, {right}) has no weight")]
    UnweightedEdge {
        /// Debug rendering of the first endpoint.
        left: String,
        /// Debug rendering of the second endpoint.
        right: String,
    },
    /// An edge carried a negative weight.
    #[error("edge ({left}, {right}) has negative weight {weight}")]
    NegativeWeight {
        /// Debug rendering of the first endpoint.
        left: String,
        /// Debug rendering of the second endpoint.
        right: String,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// Debug rendering of the first endpoint.
        left: String,
        /// Debug rendering of the second endpoint.
        right: String,
    },
    /// A graph query failed while walking the input.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The internal forest rejected an operation, indicating a logic error.
    #[error(transparent)]
    Forest(#[from] DisjointSetError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The graph was directed.
        DirectedGraph => DirectedGraph => "MST_DIRECTED_GRAPH",
        /// The source node was missing.
        SourceNotFound => SourceNotFound { .. } => "MST_SOURCE_NOT_FOUND",
        /// An edge had no weight.
        UnweightedEdge => UnweightedEdge { .. } => "MST_UNWEIGHTED_EDGE",
        /// An edge had a negative weight.
        NegativeWeight => NegativeWeight { .. } => "MST_NEGATIVE_WEIGHT",
        /// An edge had a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "MST_NON_FINITE_WEIGHT",
        /// A graph query failed.
        Graph => Graph { .. } => "MST_GRAPH",
        /// The internal forest rejected an operation.
        Forest => Forest { .. } => "MST_FOREST",
    }
}

/// Errors returned by [`crate::ConnectedComponentsComputer`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ComponentsError {
    /// Connected components are only computed for undirected graphs.
    #[error("connected components require an undirected graph")]
    DirectedGraph,
    /// A graph query failed while walking the input.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The internal forest rejected an operation, indicating a logic error.
    #[error(transparent)]
    Forest(#[from] DisjointSetError),
}

define_error_codes! {
    /// Stable codes describing [`ComponentsError`] variants.
    enum ComponentsErrorCode for ComponentsError {
        /// The graph was directed.
        DirectedGraph => DirectedGraph => "COMPONENTS_DIRECTED_GRAPH",
        /// A graph query failed.
        Graph => Graph { .. } => "COMPONENTS_GRAPH",
        /// The internal forest rejected an operation.
        Forest => Forest { .. } => "COMPONENTS_FOREST",
    }
}
