//! Topological ordering and acyclicity checking.

use std::collections::{HashMap, VecDeque};

use crate::dag::{Dag, NodeKey};
use crate::{Error, Result};

/// Computes a topological ordering of the graph.
///
/// Returns `Some(order)` with every ancestor before its descendants if the
/// graph is acyclic, `None` if it contains a cycle. Uses Kahn's algorithm;
/// the ready queue is seeded and drained in node insertion order, so the
/// ordering is deterministic for a given construction sequence.
///
/// # Examples
///
/// ```rust
/// use phylodag::Dag;
/// use phylodag::dag::topological_sort;
///
/// let dag = Dag::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
/// let order = topological_sort(&dag).unwrap();
/// let pos = |k: u32| order.iter().position(|&n| n == k).unwrap();
/// assert!(pos(1) < pos(2));
/// assert!(pos(2) < pos(4));
/// assert!(pos(3) < pos(4));
/// ```
#[must_use]
pub fn topological_sort<K: NodeKey>(graph: &Dag<K>) -> Option<Vec<K>> {
    let mut in_degree: HashMap<&K, usize> = graph
        .nodes()
        .map(|node| (node, graph.in_degree(node)))
        .collect();

    let mut ready: VecDeque<&K> = graph.roots().collect();
    let mut order = Vec::with_capacity(graph.node_count());

    while let Some(node) = ready.pop_front() {
        order.push(node.clone());
        for succ in graph.successors(node) {
            if let Some(degree) = in_degree.get_mut(succ) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push_back(succ);
                }
            }
        }
    }

    // Nodes on a cycle never reach in-degree zero
    (order.len() == graph.node_count()).then_some(order)
}

/// Returns `true` if the graph contains no directed cycle.
#[must_use]
pub fn is_acyclic<K: NodeKey>(graph: &Dag<K>) -> bool {
    topological_sort(graph).is_some()
}

/// Entry guard shared by every core operation: cyclic input is a contract
/// violation, not something to work around.
pub(crate) fn ensure_acyclic<K: NodeKey>(graph: &Dag<K>) -> Result<()> {
    if is_acyclic(graph) {
        Ok(())
    } else {
        Err(Error::NotAcyclic)
    }
}
