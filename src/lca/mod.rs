//! Cluster and lowest-common-ancestor computation.
//!
//! The *cluster* of a vertex is the set of leaves (taxa) reachable from it.
//! The *LCA set* of a leaf subset `A` contains every vertex whose cluster
//! covers `A` while no child's cluster does - the "lowest" common ancestors.
//! In a tree the LCA set is always a single vertex; in a network with
//! reticulation it can hold several, which is exactly the situation the
//! reducers in [`crate::reduce`] care about.
//!
//! # Key Components
//!
//! - [`cluster_of`] - leaf descendants of a vertex
//! - [`lca_set`] - all lowest common ancestors of a leaf subset
//! - [`unique_lca`] - the single LCA when exactly one exists; `Ok(None)`
//!   otherwise, which is an expected outcome and not an error

mod cluster;
mod lca_set;

pub use cluster::cluster_of;
pub use lca_set::{lca_set, unique_lca};
