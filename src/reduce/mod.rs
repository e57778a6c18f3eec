//! DAG reduction: contraction, shortcut removal, and the relevance reducers.
//!
//! A vertex of a phylogenetic network is *relevant* when it is itself one of
//! the LCA witnesses of its own cluster. The two reducers here remove the
//! vertices that are not, using the [`contract`] operator, which splices a
//! vertex out of the graph while rewiring its parents to its children:
//!
//! - [`lca_relevant_dag`] keeps every vertex that is *a* witness; the removal
//!   set is decided entirely against the unmodified input, so the result does
//!   not depend on contraction order
//! - [`unique_lca_relevant_dag`] keeps only vertices that are *the* unique
//!   witness, re-evaluating each vertex against the partially reduced graph;
//!   the result depends on the documented insertion-order iteration
//!
//! Contraction can leave behind edges that merely parallel a longer path.
//! [`remove_shortcuts`] strips those as a post-pass.
//!
//! Every function borrows its input and returns a new graph; the caller's
//! network is never touched.

mod contract;
mod relevant;
mod shortcuts;

pub use contract::contract;
pub use relevant::{lca_relevant_dag, unique_lca_relevant_dag};
pub use shortcuts::{is_shortcut, remove_shortcuts};

pub(crate) use contract::contract_in_place;
