use std::fmt;

use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library
/// can potentially return.
///
/// Every variant marks a programming-contract violation at the point of the
/// offending call; none are transient, and nothing is retried internally.
/// The absence of a unique lca is deliberately **not** an error - it is the
/// `Ok(None)` outcome of [`crate::lca::unique_lca`].
///
/// # Examples
///
/// ```rust
/// use phylodag::{Dag, Error};
/// use phylodag::lca::cluster_of;
///
/// let network: Dag<u32> = Dag::from_edges([(1, 2), (1, 3)]);
///
/// match cluster_of(&network, &99) {
///     Err(Error::InvalidNode(node)) => {
///         eprintln!("no such node: {}", node);
///     }
///     other => panic!("expected InvalidNode, got {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The graph contains a directed cycle.
    ///
    /// Every core operation assumes an acyclic graph and verifies the
    /// assumption on entry. A cycle is fatal to the call; the operation
    /// performs no partial work before raising it.
    #[error("graph contains a directed cycle")]
    NotAcyclic,

    /// A referenced node is absent from the graph.
    ///
    /// The payload is the debug rendering of the offending node key.
    #[error("node {0} is not present in the graph")]
    InvalidNode(String),

    /// A referenced edge is absent from the graph.
    ///
    /// The payload is the debug rendering of the offending endpoint pair.
    #[error("edge {0} is not present in the graph")]
    InvalidEdge(String),

    /// The leaf-subset argument of an LCA query is invalid.
    ///
    /// Raised when the subset is empty or contains an element that is not a
    /// leaf of the graph at the time of the call. Leaves are derived from the
    /// current structure (out-degree zero), so a subset that was valid before
    /// a mutation may no longer be.
    #[error("invalid leaf subset: {0}")]
    InvalidSubset(String),
}

impl Error {
    pub(crate) fn invalid_node(node: &impl fmt::Debug) -> Self {
        Error::InvalidNode(format!("{node:?}"))
    }

    pub(crate) fn invalid_edge(from: &impl fmt::Debug, to: &impl fmt::Debug) -> Self {
        Error::InvalidEdge(format!("({from:?}, {to:?})"))
    }

    pub(crate) fn invalid_subset(message: impl Into<String>) -> Self {
        Error::InvalidSubset(message.into())
    }
}
