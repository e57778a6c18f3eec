//! Node contraction: splicing a vertex out of the graph.

use crate::dag::{ensure_acyclic, Dag, NodeKey};
use crate::{Error, Result};

/// Contracts `v` out of the graph: every parent of `v` is wired directly to
/// every child of `v` (edges that already exist are left alone), then `v`
/// and its incident edges are removed.
///
/// The input graph is untouched; the contracted graph is returned. Because
/// the only edges added run from an ancestor of `v` to a descendant of `v`,
/// the existing partial order is preserved and the result is again acyclic.
/// Leaves other than `v` keep their out-degree, so contraction of an
/// internal vertex never changes the leaf set.
///
/// # Errors
///
/// - [`Error::InvalidNode`] if `v` is not in the graph
/// - [`Error::NotAcyclic`] if the graph has a cycle on entry
///
/// # Examples
///
/// ```rust
/// use phylodag::Dag;
/// use phylodag::reduce::contract;
///
/// let network = Dag::from_edges([(1, 2), (2, 3), (2, 4)]);
/// let spliced = contract(&network, &2)?;
///
/// assert!(!spliced.has_node(&2));
/// assert!(spliced.has_edge(&1, &3));
/// assert!(spliced.has_edge(&1, &4));
/// # Ok::<(), phylodag::Error>(())
/// ```
pub fn contract<K: NodeKey>(graph: &Dag<K>, v: &K) -> Result<Dag<K>> {
    if !graph.has_node(v) {
        return Err(Error::invalid_node(v));
    }
    ensure_acyclic(graph)?;

    let mut contracted = graph.clone();
    contract_in_place(&mut contracted, v);
    Ok(contracted)
}

/// The mutating core of [`contract`], used by the reducers to avoid cloning
/// the whole graph once per removed vertex. The caller guarantees `v` is
/// present and the graph acyclic.
pub(crate) fn contract_in_place<K: NodeKey>(graph: &mut Dag<K>, v: &K) {
    let parents: Vec<K> = graph.predecessors(v).cloned().collect();
    let children: Vec<K> = graph.successors(v).cloned().collect();

    for parent in &parents {
        for child in &children {
            // add_edge skips pairs that are already connected
            graph.add_edge(parent.clone(), child.clone());
        }
    }
    graph.remove_node(v);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_rewires_parents_to_children() {
        let dag = Dag::from_edges([(1, 2), (5, 2), (2, 3), (2, 4)]);
        let spliced = contract(&dag, &2).unwrap();

        assert_eq!(spliced.node_count(), 4);
        for parent in [1, 5] {
            for child in [3, 4] {
                assert!(spliced.has_edge(&parent, &child));
            }
        }
    }

    #[test]
    fn test_contract_keeps_existing_edges() {
        // 1 -> 3 already exists alongside 1 -> 2 -> 3
        let dag = Dag::from_edges([(1, 2), (2, 3), (1, 3)]);
        let spliced = contract(&dag, &2).unwrap();

        assert!(spliced.has_edge(&1, &3));
        assert_eq!(spliced.edge_count(), 1);
    }

    #[test]
    fn test_contract_removes_exactly_one_node() {
        let dag = Dag::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
        let spliced = contract(&dag, &3).unwrap();
        assert_eq!(spliced.node_count(), dag.node_count() - 1);
        assert!(!spliced.has_node(&3));
    }

    #[test]
    fn test_contract_preserves_leaf_set() {
        let dag = Dag::from_edges([(1, 2), (1, 3), (2, 4), (3, 4), (3, 5)]);
        let before: Vec<u32> = dag.leaves().copied().collect();
        let spliced = contract(&dag, &3).unwrap();
        let after: Vec<u32> = spliced.leaves().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_contract_root() {
        let dag = Dag::from_edges([(1, 2), (1, 3)]);
        let spliced = contract(&dag, &1).unwrap();
        // No parents to rewire; 2 and 3 become roots
        assert_eq!(spliced.node_count(), 2);
        assert_eq!(spliced.edge_count(), 0);
        assert_eq!(spliced.roots().count(), 2);
    }

    #[test]
    fn test_contract_leaf() {
        let dag = Dag::from_edges([(1, 2), (2, 3)]);
        let spliced = contract(&dag, &3).unwrap();
        // No children to rewire; 2 becomes the new leaf
        assert_eq!(spliced.leaves().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_contract_input_untouched() {
        let dag = Dag::from_edges([(1, 2), (2, 3)]);
        let _ = contract(&dag, &2).unwrap();
        assert!(dag.has_node(&2));
        assert_eq!(dag.edge_count(), 2);
    }

    #[test]
    fn test_contract_preserves_acyclicity() {
        use crate::dag::is_acyclic;

        let dag = Dag::from_edges([(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]);
        let spliced = contract(&dag, &4).unwrap();
        assert!(is_acyclic(&spliced));
    }

    #[test]
    fn test_contract_absent_node() {
        let dag = Dag::from_edges([(1, 2)]);
        assert!(matches!(contract(&dag, &9), Err(Error::InvalidNode(_))));
    }

    #[test]
    fn test_contract_cyclic_graph() {
        let dag = Dag::from_edges([(1, 2), (2, 1)]);
        assert!(matches!(contract(&dag, &1), Err(Error::NotAcyclic)));
    }
}
