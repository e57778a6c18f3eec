//! Cluster computation: the leaf descendants of a vertex.

use std::collections::HashSet;

use crate::dag::{ensure_acyclic, postorder, Dag, NodeKey};
use crate::{Error, Result};

/// Computes the cluster of `v`: the set of leaves reachable from `v` by
/// directed paths, `v` included if it is itself a leaf.
///
/// The result is derived from the current graph structure and is never
/// cached; after any mutation, call again.
///
/// # Errors
///
/// - [`Error::InvalidNode`] if `v` is not in the graph
/// - [`Error::NotAcyclic`] if the graph has a cycle
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use phylodag::Dag;
/// use phylodag::lca::cluster_of;
///
/// let network = Dag::from_edges([(1, 2), (1, 3), (2, 4), (3, 4), (3, 5)]);
/// assert_eq!(cluster_of(&network, &1)?, HashSet::from([4, 5]));
/// assert_eq!(cluster_of(&network, &2)?, HashSet::from([4]));
/// assert_eq!(cluster_of(&network, &4)?, HashSet::from([4]));
/// # Ok::<(), phylodag::Error>(())
/// ```
pub fn cluster_of<K: NodeKey>(graph: &Dag<K>, v: &K) -> Result<HashSet<K>> {
    if !graph.has_node(v) {
        return Err(Error::invalid_node(v));
    }
    ensure_acyclic(graph)?;

    Ok(postorder(graph, v)
        .into_iter()
        .filter(|node| graph.out_degree(node) == 0)
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reticulate() -> Dag<u32> {
        // 1 -> {2, 3}, both 2 and 3 reach taxon 4; 3 also reaches taxon 5
        Dag::from_edges([(1, 2), (1, 3), (2, 4), (3, 4), (3, 5)])
    }

    #[test]
    fn test_cluster_of_root() {
        let dag = reticulate();
        assert_eq!(cluster_of(&dag, &1).unwrap(), HashSet::from([4, 5]));
    }

    #[test]
    fn test_cluster_of_internal() {
        let dag = reticulate();
        assert_eq!(cluster_of(&dag, &2).unwrap(), HashSet::from([4]));
        assert_eq!(cluster_of(&dag, &3).unwrap(), HashSet::from([4, 5]));
    }

    #[test]
    fn test_cluster_of_leaf_is_itself() {
        let dag = reticulate();
        assert_eq!(cluster_of(&dag, &5).unwrap(), HashSet::from([5]));
    }

    #[test]
    fn test_cluster_nonempty_and_all_leaves() {
        let dag = reticulate();
        for v in dag.nodes() {
            let cluster = cluster_of(&dag, v).unwrap();
            assert!(!cluster.is_empty());
            assert!(cluster.iter().all(|l| dag.out_degree(l) == 0));
        }
    }

    #[test]
    fn test_cluster_of_absent_node() {
        let dag = reticulate();
        assert!(matches!(
            cluster_of(&dag, &42),
            Err(Error::InvalidNode(_))
        ));
    }

    #[test]
    fn test_cluster_of_cyclic_graph() {
        let dag = Dag::from_edges([(1, 2), (2, 3), (3, 1)]);
        assert!(matches!(cluster_of(&dag, &1), Err(Error::NotAcyclic)));
    }
}
