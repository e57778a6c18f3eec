//! The two relevance reducers.

use crate::dag::{ensure_acyclic, Dag, NodeKey};
use crate::lca::{cluster_of, lca_set, unique_lca};
use crate::reduce::contract_in_place;
use crate::Result;

/// Reduces the graph to its LCA-relevant vertices: those that belong to the
/// LCA set of their own cluster.
///
/// Relevance is decided for every vertex against the **unmodified** input,
/// so the removal set is well-defined before any mutation happens; the
/// collected vertices are then contracted one by one on a copy. The surviving
/// node set does not depend on contraction order. Leaves are trivially
/// relevant (a leaf is the unique LCA of its own singleton cluster) and are
/// never removed.
///
/// Running the reducer on its own output is a no-op: every surviving vertex
/// witnesses its own cluster in the reduced graph as well.
///
/// # Errors
///
/// [`Error::NotAcyclic`](crate::Error::NotAcyclic) if the graph has a cycle.
///
/// # Examples
///
/// ```rust
/// use phylodag::Dag;
/// use phylodag::reduce::lca_relevant_dag;
///
/// // Every internal vertex subtends only taxon 4, whose sole LCA witness
/// // is the taxon itself - so all three are contracted away.
/// let network = Dag::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
/// let reduced = lca_relevant_dag(&network)?;
/// assert_eq!(reduced.nodes().collect::<Vec<_>>(), vec![&4]);
/// assert_eq!(reduced.edge_count(), 0);
/// # Ok::<(), phylodag::Error>(())
/// ```
pub fn lca_relevant_dag<K: NodeKey>(graph: &Dag<K>) -> Result<Dag<K>> {
    ensure_acyclic(graph)?;

    let mut removal = Vec::new();
    for v in graph.nodes() {
        let cluster = cluster_of(graph, v)?;
        let witnesses = lca_set(graph, &cluster)?;
        if !witnesses.contains(v) {
            removal.push(v.clone());
        }
    }

    let mut reduced = graph.clone();
    for v in &removal {
        contract_in_place(&mut reduced, v);
    }
    Ok(reduced)
}

/// Reduces the graph to its unique-lca-relevant vertices: those that are
/// *the* unique LCA of their own cluster.
///
/// Unlike [`lca_relevant_dag`], this reducer mutates as it goes. The vertex
/// order is captured from the input (insertion order), and each vertex is
/// re-evaluated against the current, possibly already-reduced graph. A vertex
/// whose cluster has no unique LCA witness at its turn - whether because
/// there are several or because the vertex is simply not the one - is
/// contracted. Since earlier contractions change what later vertices see,
/// the outcome for genuinely ambiguous networks depends on this documented
/// iteration order.
///
/// # Errors
///
/// [`Error::NotAcyclic`](crate::Error::NotAcyclic) if the graph has a cycle.
///
/// # Examples
///
/// ```rust
/// use phylodag::Dag;
/// use phylodag::reduce::unique_lca_relevant_dag;
///
/// let network = Dag::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
/// let reduced = unique_lca_relevant_dag(&network)?;
/// assert_eq!(reduced.nodes().collect::<Vec<_>>(), vec![&4]);
/// # Ok::<(), phylodag::Error>(())
/// ```
pub fn unique_lca_relevant_dag<K: NodeKey>(graph: &Dag<K>) -> Result<Dag<K>> {
    ensure_acyclic(graph)?;

    // Contraction only ever removes the vertex under evaluation, so every
    // vertex in the captured order is still present at its turn.
    let order: Vec<K> = graph.nodes().cloned().collect();
    let mut reduced = graph.clone();

    for v in &order {
        let cluster = cluster_of(&reduced, v)?;
        let witness = unique_lca(&reduced, &cluster)?;
        if witness.as_ref() != Some(v) {
            contract_in_place(&mut reduced, v);
        }
    }
    Ok(reduced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::is_acyclic;

    /// Root 1 splits to 2 and 3, which both converge on the single taxon 4.
    fn funnel() -> Dag<u32> {
        Dag::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)])
    }

    /// Two incomparable vertices 2 and 3 each cover both taxa {4, 5}.
    fn double_cover() -> Dag<u32> {
        Dag::from_edges([(1, 2), (1, 3), (2, 4), (2, 5), (3, 4), (3, 5)])
    }

    #[test]
    fn test_lca_relevant_funnel_collapses_to_taxon() {
        let reduced = lca_relevant_dag(&funnel()).unwrap();
        assert_eq!(reduced.nodes().copied().collect::<Vec<_>>(), vec![4]);
        assert_eq!(reduced.edge_count(), 0);
    }

    #[test]
    fn test_lca_relevant_keeps_every_witness() {
        // 2 and 3 are both LCA witnesses of {4, 5}; only 1 is irrelevant
        let reduced = lca_relevant_dag(&double_cover()).unwrap();
        assert!(!reduced.has_node(&1));
        for node in [2, 3, 4, 5] {
            assert!(reduced.has_node(&node));
        }
    }

    #[test]
    fn test_lca_relevant_tree_is_fixed_point() {
        // In a tree every internal vertex is the unique LCA of its cluster
        let tree = Dag::from_edges([(1, 2), (1, 3), (2, 4), (2, 5)]);
        let reduced = lca_relevant_dag(&tree).unwrap();
        assert_eq!(reduced.node_count(), 5);
        assert_eq!(reduced.edge_count(), 4);
    }

    #[test]
    fn test_lca_relevant_idempotent() {
        for dag in [funnel(), double_cover()] {
            let once = lca_relevant_dag(&dag).unwrap();
            let twice = lca_relevant_dag(&once).unwrap();
            let a: Vec<u32> = once.nodes().copied().collect();
            let b: Vec<u32> = twice.nodes().copied().collect();
            assert_eq!(a, b);
            assert_eq!(once.edge_count(), twice.edge_count());
        }
    }

    #[test]
    fn test_lca_relevant_preserves_leaves() {
        let dag = double_cover();
        let before: Vec<u32> = dag.leaves().copied().collect();
        let reduced = lca_relevant_dag(&dag).unwrap();
        let after: Vec<u32> = reduced.leaves().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_lca_relevant_result_acyclic() {
        let reduced = lca_relevant_dag(&double_cover()).unwrap();
        assert!(is_acyclic(&reduced));
    }

    #[test]
    fn test_unique_lca_relevant_funnel() {
        let reduced = unique_lca_relevant_dag(&funnel()).unwrap();
        assert_eq!(reduced.nodes().copied().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_unique_lca_relevant_ambiguity_contracts_in_order() {
        // Vertices are visited in insertion order 1, 2, 3, 4, 5.
        // At 1's turn {4, 5} has witnesses {2, 3}: no unique lca, contract.
        // At 2's turn the witnesses are still {2, 3}: contract.
        // At 3's turn it has become the unique witness and survives.
        let reduced = unique_lca_relevant_dag(&double_cover()).unwrap();
        assert_eq!(reduced.nodes().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert!(reduced.has_edge(&3, &4));
        assert!(reduced.has_edge(&3, &5));
        assert_eq!(reduced.edge_count(), 2);
    }

    #[test]
    fn test_unique_lca_relevant_tree_unchanged() {
        let tree = Dag::from_edges([(1, 2), (1, 3), (2, 4), (2, 5)]);
        let reduced = unique_lca_relevant_dag(&tree).unwrap();
        assert_eq!(reduced.node_count(), 5);
        assert_eq!(reduced.edge_count(), 4);
    }

    #[test]
    fn test_unique_lca_relevant_preserves_leaves() {
        let dag = double_cover();
        let before: Vec<u32> = dag.leaves().copied().collect();
        let reduced = unique_lca_relevant_dag(&dag).unwrap();
        let after: Vec<u32> = reduced.leaves().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reducers_reject_cycles() {
        use crate::Error;

        let dag = Dag::from_edges([(1, 2), (2, 1)]);
        assert!(matches!(lca_relevant_dag(&dag), Err(Error::NotAcyclic)));
        assert!(matches!(
            unique_lca_relevant_dag(&dag),
            Err(Error::NotAcyclic)
        ));
    }
}
