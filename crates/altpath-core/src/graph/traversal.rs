use crate::graph::adjacency::Graph;
use crate::graph::types::ColoredNeighbor;

/// Trait for providing colored adjacency to the search engine
pub trait ColoredAdjacency {
    fn vertex_count(&self) -> usize;
    fn outgoing(&self, vertex: usize) -> &[ColoredNeighbor];
}

impl ColoredAdjacency for Graph {
    fn vertex_count(&self) -> usize {
        self.vertex_count()
    }

    fn outgoing(&self, vertex: usize) -> &[ColoredNeighbor] {
        self.outgoing(vertex)
    }
}
