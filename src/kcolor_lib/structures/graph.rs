//! Undirected graphs, as read from a DIMACS `.col` description.
//!
//! Vertices are 1-indexed at the interface, as in DIMACS, and stored 0-indexed in a [petgraph] graph.

use petgraph::graph::{NodeIndex, UnGraph};

#[derive(Clone, Debug)]
pub struct Graph {
    /// The edge count declared by the problem line, which may differ from the count of edges read.
    declared_edges: usize,

    inner: UnGraph<(), ()>,
}

impl Graph {
    /// The most vertices a graph may have, as vertices are indexed by `u32`.
    pub const MAX_VERTICES: usize = u32::MAX as usize;

    /// A graph with `vertices` vertices and no edges.
    ///
    /// The declared edge count is only recorded, and no space is reserved for it.
    pub fn new(vertices: usize, declared_edges: usize) -> Self {
        let mut inner = UnGraph::with_capacity(vertices, 0);
        for _ in 0..vertices {
            inner.add_node(());
        }
        Graph {
            declared_edges,
            inner,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn declared_edge_count(&self) -> usize {
        self.declared_edges
    }

    /// Adds an edge between the (1-indexed) vertices `u` and `v`.
    ///
    /// Returns false, without adding an edge, if either vertex is undeclared.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if !self.contains(u) || !self.contains(v) {
            return false;
        }
        self.inner
            .add_edge(NodeIndex::new(u - 1), NodeIndex::new(v - 1), ());
        true
    }

    pub fn contains(&self, vertex: usize) -> bool {
        0 < vertex && vertex <= self.vertex_count()
    }

    /// The edges of the graph, in the order they were added, as 1-indexed pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.inner
            .edge_indices()
            .filter_map(|edge| self.inner.edge_endpoints(edge))
            .map(|(u, v)| (u.index() + 1, v.index() + 1))
    }
}
