use crate::error::{AltPathError, Result, VertexRole};
use crate::graph::algos::{alternating_bfs, SearchOutcome};
use crate::graph::types::{Color, ColoredNeighbor, Distances, Edge};

/// Immutable two-colored directed graph over vertices `0..n`.
///
/// Adjacency lists keep insertion order: every red edge in input order,
/// then every blue edge in input order. Parallel edges and self-loops are
/// stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<ColoredNeighbor>>,
    edge_count: usize,
}

/// Reject `vertex` unless it names a vertex of an `n`-vertex graph
pub(crate) fn check_vertex(vertex: i64, n: usize, role: VertexRole) -> Result<usize> {
    match usize::try_from(vertex) {
        Ok(v) if v < n => Ok(v),
        _ => Err(AltPathError::out_of_range(role, vertex, n)),
    }
}

fn signed(vertex: usize) -> i64 {
    i64::try_from(vertex).unwrap_or(i64::MAX)
}

impl Graph {
    /// Build the adjacency for `n` vertices from one edge list per color.
    ///
    /// Fails fast when `n == 0` or an endpoint is not in `[0, n)`.
    pub fn new(
        n: usize,
        red_edges: &[(usize, usize)],
        blue_edges: &[(usize, usize)],
    ) -> Result<Self> {
        let edges = red_edges
            .iter()
            .map(|&(from, to)| (from, to, Color::A))
            .chain(blue_edges.iter().map(|&(from, to)| (from, to, Color::B)));
        Self::from_edges(n, edges.map(|(from, to, color)| Edge { from, to, color }))
    }

    /// Build from an arbitrary sequence of colored edges, preserving order
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = Edge>) -> Result<Self> {
        if n == 0 {
            return Err(AltPathError::EmptyGraph { n: 0 });
        }

        let mut adjacency = vec![Vec::new(); n];
        let mut edge_count = 0;
        for edge in edges {
            let from = check_vertex(signed(edge.from), n, VertexRole::EdgeSource(edge.color))?;
            let to = check_vertex(signed(edge.to), n, VertexRole::EdgeTarget(edge.color))?;
            adjacency[from].push(ColoredNeighbor {
                to,
                color: edge.color,
            });
            edge_count += 1;
        }

        tracing::trace!(vertices = n, edges = edge_count, "graph_built");
        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Outgoing edges of `vertex`; empty for out-of-range vertices
    pub fn outgoing(&self, vertex: usize) -> &[ColoredNeighbor] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every edge, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(from, list)| {
            list.iter().map(move |n| Edge {
                from,
                to: n.to,
                color: n.color,
            })
        })
    }

    /// Same graph with every edge's color flipped
    pub fn with_colors_swapped(&self) -> Self {
        let adjacency = self
            .adjacency
            .iter()
            .map(|list| {
                list.iter()
                    .map(|n| ColoredNeighbor {
                        to: n.to,
                        color: n.color.other(),
                    })
                    .collect()
            })
            .collect();
        Self {
            adjacency,
            edge_count: self.edge_count,
        }
    }

    /// Shortest alternating distances from `source`
    pub fn distances_from(&self, source: usize) -> Result<Distances> {
        Ok(self.search_from(source)?.distances)
    }

    /// Like [`Graph::distances_from`] but also returns search counters
    pub fn search_from(&self, source: usize) -> Result<SearchOutcome> {
        alternating_bfs(self, source)
    }
}
