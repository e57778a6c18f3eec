//! Depth-first traversal over [`Dag`].
//!
//! Both traversals are iterative with an explicit stack. Phylogenetic
//! networks can be deep enough that call-stack recursion is a liability, so
//! nothing in this crate recurses.

use std::collections::HashSet;

use crate::dag::{Dag, NodeKey};

/// Depth-first iterator over the nodes reachable from a start node.
///
/// Visits each reachable node exactly once in pre-order (a node before its
/// descendants). The start node itself is yielded first. Constructed by
/// [`descendants`].
pub struct Descendants<'g, K: NodeKey> {
    graph: &'g Dag<K>,
    stack: Vec<&'g K>,
    visited: HashSet<&'g K>,
}

impl<'g, K: NodeKey> Iterator for Descendants<'g, K> {
    type Item = &'g K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push unvisited successors in reverse so they pop in edge order
        let successors: Vec<&K> = self.graph.successors(node).collect();
        for &succ in successors.iter().rev() {
            if self.visited.insert(succ) {
                self.stack.push(succ);
            }
        }
        Some(node)
    }
}

/// Returns a depth-first iterator over the nodes reachable from `start`,
/// `start` included.
///
/// If `start` is absent from the graph the iterator is empty; callers that
/// need a hard failure check presence first.
///
/// # Examples
///
/// ```rust
/// use phylodag::Dag;
/// use phylodag::dag::descendants;
///
/// let dag = Dag::from_edges([(1, 2), (2, 3), (1, 4)]);
/// let reached: Vec<u32> = descendants(&dag, &2).copied().collect();
/// assert_eq!(reached, vec![2, 3]);
/// ```
pub fn descendants<'g, K: NodeKey>(graph: &'g Dag<K>, start: &K) -> Descendants<'g, K> {
    let mut stack = Vec::new();
    let mut visited = HashSet::new();
    if let Some(start) = graph.key_of(start) {
        stack.push(start);
        visited.insert(start);
    }
    Descendants {
        graph,
        stack,
        visited,
    }
}

/// Computes the postorder of nodes reachable from `start`.
///
/// A node appears after all of its reachable descendants, which is the order
/// the cluster computation wants: leaves surface before the internal nodes
/// above them. Empty if `start` is absent.
pub fn postorder<'g, K: NodeKey>(graph: &'g Dag<K>, start: &K) -> Vec<&'g K> {
    enum State {
        Enter,
        Exit,
    }

    let Some(start) = graph.key_of(start) else {
        return Vec::new();
    };

    let mut visited: HashSet<&K> = HashSet::new();
    let mut result = Vec::new();
    let mut stack = vec![(start, State::Enter)];

    while let Some((node, state)) = stack.pop() {
        match state {
            State::Enter => {
                if !visited.insert(node) {
                    continue;
                }
                stack.push((node, State::Exit));
                let successors: Vec<&K> = graph.successors(node).collect();
                for &succ in successors.iter().rev() {
                    if !visited.contains(succ) {
                        stack.push((succ, State::Enter));
                    }
                }
            }
            State::Exit => result.push(node),
        }
    }

    result
}
