#![doc(html_no_source)]
#![deny(missing_docs)]

//! # phylodag
//!
//! Lowest-common-ancestor (LCA) relevance reduction for rooted phylogenetic
//! network DAGs.
//!
//! A phylogenetic network is a rooted directed acyclic graph whose sinks are
//! the taxa (leaves) and whose internal vertices may have several parents
//! (reticulation). Not every internal vertex of such a network is a genuine
//! LCA witness for the set of taxa below it. This crate determines which
//! vertices are, contracts away the ones that are not, and can strip the
//! redundant "shortcut" edges that contraction leaves behind.
//!
//! ## Features
//!
//! - **Mutable DAG abstraction** - key-addressed directed graph with
//!   deterministic (insertion-order) enumeration and derived leaf/root sets
//! - **Cluster and LCA-set computation** - bottom-up dynamic programming over
//!   a topological order, correct under multiple ancestors per vertex
//! - **Relevance reducers** - the all-LCA-relevant and unique-lca-relevant
//!   DAG reductions, built on the node contraction operator
//! - **Shortcut removal** - detection and deletion of edges made redundant by
//!   a longer directed path
//!
//! ## Quick Start
//!
//! ```rust
//! use phylodag::prelude::*;
//!
//! // Root 1 branches to 2 and 3, both of which converge on taxon 4.
//! let network = Dag::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
//!
//! // Only the taxon itself witnesses its own cluster, so every internal
//! // vertex is contracted away.
//! let reduced = lca_relevant_dag(&network)?;
//! assert_eq!(reduced.node_count(), 1);
//! assert!(reduced.has_node(&4));
//! # Ok::<(), phylodag::Error>(())
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into three modules:
//!
//! - [`dag`] - the [`Dag`] graph type, traversal, and topological ordering
//! - [`lca`] - cluster and LCA-set computation over a [`Dag`]
//! - [`reduce`] - contraction, shortcut removal, and the two relevance
//!   reducers
//!
//! All transformations borrow their input and return a fresh graph; the
//! caller's network is never mutated. Every operation validates acyclicity
//! on entry and reports cyclic input as [`Error::NotAcyclic`].
//!
//! Parsing of network descriptions (e.g. extended Newick), rendering, and
//! file I/O are deliberately out of scope: callers construct a [`Dag`] from
//! whatever source they have and consume the reduced graph however they like.

pub mod dag;
pub mod lca;
pub mod prelude;
pub mod reduce;

mod error;

pub use dag::{Dag, NodeKey};
pub use error::Error;

/// The result type used throughout phylodag.
pub type Result<T> = std::result::Result<T, Error>;
