//! Mutable directed acyclic graph abstraction.
//!
//! This module provides [`Dag`], a key-addressed directed graph, together with
//! the traversal and ordering primitives the rest of the crate is built on.
//!
//! # Key Components
//!
//! - [`Dag`] - the graph type: node/edge insertion and removal, adjacency and
//!   degree queries, derived leaf and root enumeration
//! - [`descendants`] / [`postorder`] - iterative depth-first traversal
//! - [`topological_sort`] / [`is_acyclic`] - Kahn ordering and cycle
//!   rejection
//!
//! # Determinism
//!
//! A phylogenetic reduction pass that mutates while it iterates is only
//! reproducible if enumeration order is pinned down. [`Dag`] therefore
//! enumerates nodes in insertion order and the adjacency of each node in edge
//! insertion order; removal preserves the relative order of the survivors.
//! All algorithms in this crate inherit that order.
//!
//! # Acyclicity
//!
//! [`Dag`] itself does not forbid inserting a cycle - it is a plain directed
//! graph under mutation. Instead, every algorithm that requires acyclicity
//! checks it on entry via [`topological_sort`] and fails with
//! [`Error::NotAcyclic`](crate::Error::NotAcyclic) rather than looping or
//! returning garbage.

mod graph;
mod topological;
mod traversal;

pub use graph::{Dag, NodeKey};
pub use topological::{is_acyclic, topological_sort};
pub use traversal::{descendants, postorder, Descendants};

pub(crate) use topological::ensure_acyclic;
