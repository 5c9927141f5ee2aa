//! Undirected graph representation over a fixed node-index space

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;

/// An undirected graph over nodes `0..node_count`.
///
/// The adjacency relation is kept symmetric at all times: adding the
/// edge `(u, v)` records both `v ∈ adj[u]` and `u ∈ adj[v]`. Self-loops
/// are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    node_count: usize,
    adjacency: Vec<BTreeSet<usize>>,
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            adjacency: vec![BTreeSet::new(); node_count],
        }
    }

    /// Build a graph from an explicit edge list
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(node_count);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Add an undirected edge between `u` and `v`.
    ///
    /// Adding an existing edge is a no-op; both endpoints must be in
    /// range and distinct.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        if u >= self.node_count || v >= self.node_count {
            anyhow::bail!(
                "Edge ({}, {}) out of bounds for graph with {} nodes",
                u,
                v,
                self.node_count
            );
        }
        if u == v {
            anyhow::bail!("Self-loop ({}, {}) is not allowed", u, v);
        }
        self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
        Ok(())
    }

    /// Total node count
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Membership test: is `v` a neighbor of `u`?
    ///
    /// Out-of-range indices are simply not neighbors.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency.get(u).is_some_and(|n| n.contains(&v))
    }

    /// Neighbors of `u` in ascending order
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[u].iter().copied()
    }

    /// Degree of `u`
    pub fn degree(&self, u: usize) -> usize {
        self.adjacency[u].len()
    }

    /// All edges as `(u, v)` pairs with `u < v`, in ascending order
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for u in 0..self.node_count {
            for &v in &self.adjacency[u] {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    /// Whether every node is reachable from node 0
    pub fn is_connected(&self) -> bool {
        if self.node_count == 0 {
            return true;
        }
        let mut seen = vec![false; self.node_count];
        let mut queue = VecDeque::from([0usize]);
        seen[0] = true;
        let mut count = 1;
        while let Some(u) = queue.pop_front() {
            for v in self.neighbors(u) {
                if !seen[v] {
                    seen[v] = true;
                    count += 1;
                    queue.push_back(v);
                }
            }
        }
        count == self.node_count
    }

    /// Breadth-first edge distance from `source` to `target`, if any.
    ///
    /// Used by the validator to cross-check minimality of SAT results;
    /// the solve driver itself never calls this.
    pub fn bfs_distance(&self, source: usize, target: usize) -> Option<usize> {
        if source >= self.node_count || target >= self.node_count {
            return None;
        }
        if source == target {
            return Some(0);
        }
        let mut dist = vec![usize::MAX; self.node_count];
        let mut queue = VecDeque::from([source]);
        dist[source] = 0;
        while let Some(u) = queue.pop_front() {
            for v in self.neighbors(u) {
                if dist[v] == usize::MAX {
                    dist[v] = dist[u] + 1;
                    if v == target {
                        return Some(dist[v]);
                    }
                    queue.push_back(v);
                }
            }
        }
        None
    }

    /// Check structural invariants (symmetry, no self-loops, in-range ids).
    ///
    /// The constructors maintain these; this guards graphs deserialized
    /// from files or JSON.
    pub fn validate(&self) -> Result<()> {
        if self.adjacency.len() != self.node_count {
            anyhow::bail!(
                "Adjacency table has {} rows, expected {}",
                self.adjacency.len(),
                self.node_count
            );
        }
        for u in 0..self.node_count {
            for &v in &self.adjacency[u] {
                if v >= self.node_count {
                    anyhow::bail!("Node {} has out-of-range neighbor {}", u, v);
                }
                if v == u {
                    anyhow::bail!("Node {} has a self-loop", u);
                }
                if !self.adjacency[v].contains(&u) {
                    anyhow::bail!("Asymmetric adjacency: {} -> {} but not {} -> {}", u, v, v, u);
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph with {} nodes, {} edges:", self.node_count, self.edge_count())?;
        for u in 0..self.node_count {
            let neighbors: Vec<String> = self.neighbors(u).map(|v| v.to_string()).collect();
            writeln!(f, "  Node {}: connected to [{}]", u, neighbors.join(", "))?;
        }
        Ok(())
    }
}
