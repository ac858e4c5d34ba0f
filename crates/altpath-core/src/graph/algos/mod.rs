//! Graph algorithm implementations
//!
//! - `alternating`: breadth-first search over (vertex, last edge color) states

pub mod alternating;

pub use alternating::{alternating_bfs, SearchOutcome};
