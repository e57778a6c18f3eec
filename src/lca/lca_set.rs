//! LCA-set computation over a leaf subset.

use std::collections::{HashMap, HashSet};

use crate::dag::{topological_sort, Dag, NodeKey};
use crate::{Error, Result};

/// Computes the set of lowest common ancestors of the leaf subset `subset`.
///
/// A vertex `v` belongs to the result iff its cluster covers `subset` and no
/// child of `v` has a cluster that does. In a tree this is the familiar
/// single LCA; under reticulation several incomparable vertices can qualify
/// at once.
///
/// # Algorithm
///
/// Rather than materializing every cluster, the computation runs one
/// bottom-up pass over the reverse topological order. Each vertex carries an
/// "uncovered" set: the members of `subset` its cluster does *not* contain.
/// A leaf starts with `subset` minus itself; an internal vertex intersects
/// the uncovered sets of its children. A vertex is an LCA exactly when its
/// own uncovered set is empty but every child still misses something.
/// Worst-case time is O(nodes x |subset|).
///
/// # Errors
///
/// - [`Error::InvalidSubset`] if `subset` is empty or contains a node that is
///   not currently a leaf of the graph
/// - [`Error::NotAcyclic`] if the graph has a cycle
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use phylodag::Dag;
/// use phylodag::lca::lca_set;
///
/// // Two incomparable ancestors both cover {4, 5}
/// let network = Dag::from_edges([(1, 2), (1, 3), (2, 4), (2, 5), (3, 4), (3, 5)]);
/// let witnesses = lca_set(&network, &HashSet::from([4, 5]))?;
/// assert_eq!(witnesses, HashSet::from([2, 3]));
/// # Ok::<(), phylodag::Error>(())
/// ```
pub fn lca_set<K: NodeKey>(graph: &Dag<K>, subset: &HashSet<K>) -> Result<HashSet<K>> {
    if subset.is_empty() {
        return Err(Error::invalid_subset("the leaf subset is empty"));
    }

    let order = topological_sort(graph).ok_or(Error::NotAcyclic)?;

    let leaves: HashSet<&K> = graph.leaves().collect();
    for member in subset {
        if !leaves.contains(member) {
            return Err(Error::invalid_subset(format!(
                "{member:?} is not a leaf of the graph"
            )));
        }
    }

    // A single leaf is its own lowest common ancestor.
    if subset.len() == 1 {
        return Ok(subset.clone());
    }

    let mut uncovered: HashMap<&K, HashSet<&K>> = HashMap::with_capacity(order.len());
    let mut witnesses = HashSet::new();

    // Leaves before parents, so every child is resolved before its ancestors.
    for v in order.iter().rev() {
        if graph.out_degree(v) == 0 {
            let mut missing: HashSet<&K> = subset.iter().collect();
            missing.remove(v);
            uncovered.insert(v, missing);
            continue;
        }

        let mut intersection: Option<HashSet<&K>> = None;
        let mut every_child_misses_some = true;
        for child in graph.successors(v) {
            if let Some(child_uncovered) = uncovered.get(child) {
                if child_uncovered.is_empty() {
                    every_child_misses_some = false;
                }
                intersection = Some(match intersection {
                    None => child_uncovered.clone(),
                    Some(acc) => acc.intersection(child_uncovered).copied().collect(),
                });
            }
        }

        let missing = intersection.unwrap_or_default();
        if missing.is_empty() && every_child_misses_some {
            witnesses.insert(v.clone());
        }
        uncovered.insert(v, missing);
    }

    Ok(witnesses)
}

/// Computes the unique lowest common ancestor of `subset`, if one exists.
///
/// Returns `Ok(Some(v))` when the LCA set has exactly one member and
/// `Ok(None)` otherwise. The absence of a unique lca is a normal outcome of
/// reticulate networks, so it is reported in the success channel, not as an
/// error.
///
/// # Errors
///
/// Same contract as [`lca_set`].
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use phylodag::Dag;
/// use phylodag::lca::unique_lca;
///
/// let tree = Dag::from_edges([(1, 2), (1, 3), (2, 4), (2, 5)]);
/// assert_eq!(unique_lca(&tree, &HashSet::from([4, 5]))?, Some(2));
/// assert_eq!(unique_lca(&tree, &HashSet::from([3, 4]))?, Some(1));
/// # Ok::<(), phylodag::Error>(())
/// ```
pub fn unique_lca<K: NodeKey>(graph: &Dag<K>, subset: &HashSet<K>) -> Result<Option<K>> {
    let witnesses = lca_set(graph, subset)?;
    if witnesses.len() == 1 {
        Ok(witnesses.into_iter().next())
    } else {
        Ok(None)
    }
}
