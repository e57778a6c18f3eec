//! Shortcut edges: detection and removal.

use crate::dag::{descendants, ensure_acyclic, Dag, NodeKey};
use crate::{Error, Result};

/// Returns `true` if the edge `(from, to)` is a shortcut: some other child
/// of `from` reaches `to` by a directed path, so the edge merely parallels a
/// longer route.
///
/// Each sibling child is probed with a depth-first search that stops as soon
/// as `to` is hit. In an acyclic graph no such path can re-enter `from`, so
/// the probe never traverses the edge under test.
///
/// # Errors
///
/// - [`Error::InvalidEdge`] if `(from, to)` is not in the graph
/// - [`Error::NotAcyclic`] if the graph has a cycle
///
/// # Examples
///
/// ```rust
/// use phylodag::Dag;
/// use phylodag::reduce::is_shortcut;
///
/// // Direct edge 1 -> 4 alongside the path 1 -> 2 -> 4
/// let network = Dag::from_edges([(1, 2), (2, 4), (1, 4)]);
/// assert!(is_shortcut(&network, &1, &4)?);
/// assert!(!is_shortcut(&network, &1, &2)?);
/// # Ok::<(), phylodag::Error>(())
/// ```
pub fn is_shortcut<K: NodeKey>(graph: &Dag<K>, from: &K, to: &K) -> Result<bool> {
    if !graph.has_edge(from, to) {
        return Err(Error::invalid_edge(from, to));
    }
    ensure_acyclic(graph)?;
    Ok(shortcut_unchecked(graph, from, to))
}

/// Removes every shortcut edge from the graph.
///
/// The edge list is captured once at entry, in the graph's insertion-order
/// enumeration, and each edge is then tested against the progressively
/// mutated copy: an edge is deleted only if it still qualifies as a shortcut
/// at its turn. When several shortcuts overlap, which of them survive can
/// therefore depend on that (documented, deterministic) order. The final
/// graph contains no shortcut with respect to itself, regardless.
///
/// The input graph is untouched; the stripped graph is returned.
///
/// # Errors
///
/// [`Error::NotAcyclic`] if the graph has a cycle on entry.
///
/// # Examples
///
/// ```rust
/// use phylodag::Dag;
/// use phylodag::reduce::remove_shortcuts;
///
/// let network = Dag::from_edges([(1, 2), (2, 4), (1, 4)]);
/// let stripped = remove_shortcuts(&network)?;
/// assert!(!stripped.has_edge(&1, &4));
/// assert!(stripped.has_edge(&1, &2));
/// assert!(stripped.has_edge(&2, &4));
/// # Ok::<(), phylodag::Error>(())
/// ```
pub fn remove_shortcuts<K: NodeKey>(graph: &Dag<K>) -> Result<Dag<K>> {
    ensure_acyclic(graph)?;

    let mut stripped = graph.clone();
    let edges: Vec<(K, K)> = graph
        .edges()
        .map(|(from, to)| (from.clone(), to.clone()))
        .collect();

    // Removing edges cannot create a cycle, so the entry check stands for
    // the whole pass.
    for (from, to) in edges {
        if shortcut_unchecked(&stripped, &from, &to) {
            stripped.remove_edge(&from, &to);
        }
    }
    Ok(stripped)
}

fn shortcut_unchecked<K: NodeKey>(graph: &Dag<K>, from: &K, to: &K) -> bool {
    graph
        .successors(from)
        .filter(|sibling| *sibling != to)
        .any(|sibling| descendants(graph, sibling).any(|node| node == to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_shortcut_direct_vs_path() {
        let dag = Dag::from_edges([(1, 2), (2, 4), (1, 4)]);
        assert!(is_shortcut(&dag, &1, &4).unwrap());
    }

    #[test]
    fn test_is_shortcut_long_alternate_path() {
        let dag = Dag::from_edges([(1, 2), (2, 3), (3, 4), (1, 4)]);
        assert!(is_shortcut(&dag, &1, &4).unwrap());
    }

    #[test]
    fn test_is_not_shortcut() {
        let dag = Dag::from_edges([(1, 2), (1, 3), (2, 4), (3, 5)]);
        for (from, to) in dag.edges() {
            assert!(!is_shortcut(&dag, from, to).unwrap());
        }
    }

    #[test]
    fn test_is_shortcut_absent_edge() {
        let dag = Dag::from_edges([(1, 2)]);
        assert!(matches!(
            is_shortcut(&dag, &2, &1),
            Err(Error::InvalidEdge(_))
        ));
    }

    #[test]
    fn test_is_shortcut_cyclic_graph() {
        let dag = Dag::from_edges([(1, 2), (2, 1)]);
        assert!(matches!(is_shortcut(&dag, &1, &2), Err(Error::NotAcyclic)));
    }

    #[test]
    fn test_remove_shortcuts_single() {
        let dag = Dag::from_edges([(1, 2), (2, 4), (1, 4)]);
        let stripped = remove_shortcuts(&dag).unwrap();
        assert_eq!(stripped.edge_count(), 2);
        assert!(!stripped.has_edge(&1, &4));
    }

    #[test]
    fn test_remove_shortcuts_none_to_remove() {
        let dag = Dag::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
        let stripped = remove_shortcuts(&dag).unwrap();
        assert_eq!(stripped.edge_count(), 4);
    }

    #[test]
    fn test_remove_shortcuts_final_graph_is_shortcut_free() {
        // Nested shortcuts: 1->4 shortcuts 1->2->3->4, 1->3 shortcuts 1->2->3
        let dag = Dag::from_edges([(1, 2), (2, 3), (3, 4), (1, 3), (1, 4)]);
        let stripped = remove_shortcuts(&dag).unwrap();
        for (from, to) in stripped.edges() {
            assert!(!is_shortcut(&stripped, from, to).unwrap());
        }
    }

    #[test]
    fn test_remove_shortcuts_input_untouched() {
        let dag = Dag::from_edges([(1, 2), (2, 4), (1, 4)]);
        let _ = remove_shortcuts(&dag).unwrap();
        assert!(dag.has_edge(&1, &4));
    }

    #[test]
    fn test_remove_shortcuts_leaves_nodes_alone() {
        let dag = Dag::from_edges([(1, 2), (2, 4), (1, 4)]);
        let stripped = remove_shortcuts(&dag).unwrap();
        assert_eq!(stripped.node_count(), dag.node_count());
    }
}
