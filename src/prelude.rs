//! # phylodag Prelude
//!
//! Convenient re-exports of the types and functions most callers need.
//! Import the whole module to work with networks without spelling out the
//! module paths:
//!
//! ```rust
//! use phylodag::prelude::*;
//!
//! let network = Dag::from_edges([(1, 2), (2, 3)]);
//! assert!(is_acyclic(&network));
//! ```

/// The main error type for all phylodag operations
pub use crate::Error;

/// The result type used throughout phylodag
pub use crate::Result;

/// The mutable DAG type and the bound on its node keys
pub use crate::dag::{Dag, NodeKey};

/// Ordering and acyclicity checks
pub use crate::dag::{is_acyclic, topological_sort};

/// Traversal primitives
pub use crate::dag::{descendants, postorder};

/// Cluster and LCA computation
pub use crate::lca::{cluster_of, lca_set, unique_lca};

/// Contraction, shortcut removal, and the relevance reducers
pub use crate::reduce::{
    contract, is_shortcut, lca_relevant_dag, remove_shortcuts, unique_lca_relevant_dag,
};
