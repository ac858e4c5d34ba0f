//! Two-colored graph and alternating-path search
//!
//! - `adjacency`: immutable graph built from one edge list per color
//! - `algos`: breadth-first search over (vertex, last color) states
//! - `traversal`: adjacency provider trait consumed by the search

pub mod adjacency;
pub mod algos;
pub mod traversal;
pub mod types;

pub use adjacency::Graph;
pub use algos::{alternating_bfs, SearchOutcome};
pub use traversal::ColoredAdjacency;
pub use types::{Color, ColoredNeighbor, Distances, Edge, SearchState, SearchStats};
