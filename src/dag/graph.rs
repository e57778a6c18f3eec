//! Key-addressed directed graph implementation.
//!
//! This module provides the [`Dag`] type used throughout the crate. Nodes are
//! identified by opaque caller-supplied keys (integers, strings, or any other
//! hashable value) rather than by dense indices, because the reduction passes
//! remove nodes and an index arena would leave holes behind.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Bound required of node identifiers.
///
/// Any hashable, clonable, debug-printable type qualifies; the blanket
/// implementation means callers never implement this trait by hand. `Debug`
/// is required so that contract violations can name the offending node in
/// [`Error`](crate::Error) payloads.
pub trait NodeKey: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> NodeKey for T {}

/// A mutable directed graph over opaque node keys.
///
/// `Dag<K>` stores adjacency in both directions, so predecessor and successor
/// queries are both cheap. Nodes enumerate in insertion order and the
/// successors/predecessors of a node enumerate in edge insertion order;
/// removing an element preserves the relative order of the rest. That
/// ordering contract is what makes the mutating reduction passes
/// ([`remove_shortcuts`](crate::reduce::remove_shortcuts),
/// [`unique_lca_relevant_dag`](crate::reduce::unique_lca_relevant_dag))
/// deterministic for a given construction sequence.
///
/// Despite the name, the type does not enforce acyclicity during mutation;
/// see the [module docs](crate::dag) for how cycles are rejected.
///
/// # Examples
///
/// ```rust
/// use phylodag::Dag;
///
/// let mut network: Dag<&str> = Dag::new();
/// network.add_edge("root", "x");
/// network.add_edge("root", "y");
/// network.add_edge("x", "taxon-a");
/// network.add_edge("y", "taxon-a");
///
/// assert_eq!(network.node_count(), 4);
/// assert_eq!(network.leaves().collect::<Vec<_>>(), vec![&"taxon-a"]);
/// assert_eq!(network.in_degree(&"taxon-a"), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Dag<K: NodeKey> {
    /// Live nodes in insertion order.
    order: Vec<K>,
    /// Successor adjacency, per node in edge insertion order.
    succ: HashMap<K, Vec<K>>,
    /// Predecessor adjacency, per node in edge insertion order.
    pred: HashMap<K, Vec<K>>,
    edge_count: usize,
}

impl<K: NodeKey> Default for Dag<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: NodeKey> Dag<K> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Dag {
            order: Vec::new(),
            succ: HashMap::new(),
            pred: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new graph with pre-allocated node capacity.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Dag {
            order: Vec::with_capacity(nodes),
            succ: HashMap::with_capacity(nodes),
            pred: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Builds a graph from an edge list, creating nodes on first mention.
    ///
    /// Node insertion order is first-mention order, so two calls with the
    /// same edge sequence produce identically ordered graphs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use phylodag::Dag;
    ///
    /// let network = Dag::from_edges([(1, 2), (1, 3), (3, 4)]);
    /// assert_eq!(network.node_count(), 4);
    /// assert_eq!(network.edge_count(), 3);
    /// ```
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K)>,
    {
        let mut dag = Dag::new();
        for (from, to) in edges {
            dag.add_edge(from, to);
        }
        dag
    }

    /// Adds a node, returning `false` if the key was already present.
    ///
    /// The call is idempotent: repeated insertion of the same key neither
    /// duplicates the node nor moves it in the enumeration order.
    pub fn add_node(&mut self, node: K) -> bool {
        if self.succ.contains_key(&node) {
            return false;
        }
        self.succ.insert(node.clone(), Vec::new());
        self.pred.insert(node.clone(), Vec::new());
        self.order.push(node);
        true
    }

    /// Adds a directed edge, creating either endpoint if absent.
    ///
    /// Returns `false` if the edge already existed; parallel edges are never
    /// stored.
    pub fn add_edge(&mut self, from: K, to: K) -> bool {
        self.add_node(from.clone());
        self.add_node(to.clone());
        if self.has_edge(&from, &to) {
            return false;
        }
        self.succ.entry(from.clone()).or_default().push(to.clone());
        self.pred.entry(to).or_default().push(from);
        self.edge_count += 1;
        true
    }

    /// Removes a node together with all its incident edges.
    ///
    /// Returns `false` if the node was not present.
    pub fn remove_node(&mut self, node: &K) -> bool {
        let Some(children) = self.succ.remove(node) else {
            return false;
        };
        let mut removed_edges = children.len();
        for child in &children {
            if child == node {
                // A self-loop appears in both adjacency lists but is one edge.
                continue;
            }
            if let Some(parents) = self.pred.get_mut(child) {
                parents.retain(|p| p != node);
            }
        }
        let parents = self.pred.remove(node).unwrap_or_default();
        for parent in &parents {
            if parent == node {
                continue;
            }
            removed_edges += 1;
            if let Some(children) = self.succ.get_mut(parent) {
                children.retain(|c| c != node);
            }
        }
        self.edge_count -= removed_edges;
        self.order.retain(|n| n != node);
        true
    }

    /// Removes a directed edge, returning `false` if it was not present.
    pub fn remove_edge(&mut self, from: &K, to: &K) -> bool {
        let Some(children) = self.succ.get_mut(from) else {
            return false;
        };
        let Some(position) = children.iter().position(|c| c == to) else {
            return false;
        };
        children.remove(position);
        if let Some(parents) = self.pred.get_mut(to) {
            if let Some(position) = parents.iter().position(|p| p == from) {
                parents.remove(position);
            }
        }
        self.edge_count -= 1;
        true
    }

    /// Returns `true` if the node is present.
    #[must_use]
    pub fn has_node(&self, node: &K) -> bool {
        self.succ.contains_key(node)
    }

    /// Returns `true` if the directed edge is present.
    #[must_use]
    pub fn has_edge(&self, from: &K, to: &K) -> bool {
        self.succ.get(from).is_some_and(|children| children.contains(to))
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Returns an iterator over all edges.
    ///
    /// Edges enumerate grouped by source node (in node insertion order) and
    /// within a source in edge insertion order. This is the order the
    /// shortcut-removal pass walks.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> {
        self.order
            .iter()
            .flat_map(move |from| self.successors(from).map(move |to| (from, to)))
    }

    /// Returns an iterator over the successors of a node in edge insertion
    /// order. Empty if the node is absent.
    pub fn successors<'a>(&'a self, node: &K) -> impl Iterator<Item = &'a K> + 'a {
        self.succ.get(node).into_iter().flatten()
    }

    /// Returns an iterator over the predecessors of a node in edge insertion
    /// order. Empty if the node is absent.
    pub fn predecessors<'a>(&'a self, node: &K) -> impl Iterator<Item = &'a K> + 'a {
        self.pred.get(node).into_iter().flatten()
    }

    /// Returns the out-degree of a node, or zero if it is absent.
    #[must_use]
    pub fn out_degree(&self, node: &K) -> usize {
        self.succ.get(node).map_or(0, Vec::len)
    }

    /// Returns the in-degree of a node, or zero if it is absent.
    #[must_use]
    pub fn in_degree(&self, node: &K) -> usize {
        self.pred.get(node).map_or(0, Vec::len)
    }

    /// Returns an iterator over the leaves (out-degree zero) in insertion
    /// order.
    ///
    /// Leaf identity is structural and never declared: the set is derived
    /// from the current edges on every call, so it tracks mutation
    /// automatically.
    pub fn leaves(&self) -> impl Iterator<Item = &K> {
        self.order
            .iter()
            .filter(move |node| self.out_degree(node) == 0)
    }

    /// Returns an iterator over the roots (in-degree zero) in insertion
    /// order.
    ///
    /// A rooted phylogenetic network has exactly one, but nothing in this
    /// type requires that.
    pub fn roots(&self) -> impl Iterator<Item = &K> {
        self.order
            .iter()
            .filter(move |node| self.in_degree(node) == 0)
    }

    /// Returns the graph's own reference for an equal key, if present.
    ///
    /// Used by traversals to hand out references that live as long as the
    /// graph rather than as long as the caller's lookup key.
    pub(crate) fn key_of(&self, node: &K) -> Option<&K> {
        self.succ.get_key_value(node).map(|(key, _)| key)
    }
}
