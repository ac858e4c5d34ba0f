//! Altpath Core Library
//!
//! Shortest alternating-color path lengths in a two-colored directed graph.
//!
//! ```
//! let distances = altpath_core::shortest_alternating_paths(3, &[(0, 1)], &[(1, 2)]).unwrap();
//! assert_eq!(distances, vec![0, 1, 2]);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod input;
pub mod logging;

use error::Result;
use graph::Graph;

/// Shortest alternating distance from vertex 0 to every vertex, `-1` when unreachable.
///
/// Fails before searching if `n == 0` or any edge endpoint is outside `[0, n)`.
#[tracing::instrument(skip(red_edges, blue_edges), fields(red = red_edges.len(), blue = blue_edges.len()))]
pub fn shortest_alternating_paths(
    n: usize,
    red_edges: &[(usize, usize)],
    blue_edges: &[(usize, usize)],
) -> Result<Vec<i64>> {
    let graph = Graph::new(n, red_edges, blue_edges)?;
    Ok(graph.distances_from(0)?.to_signed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AltPathError;

    #[test]
    fn test_reference_scenarios() {
        assert_eq!(
            shortest_alternating_paths(3, &[(0, 1), (1, 2)], &[]).unwrap(),
            vec![0, 1, -1]
        );
        assert_eq!(
            shortest_alternating_paths(3, &[(0, 1)], &[(1, 2)]).unwrap(),
            vec![0, 1, 2]
        );
        assert_eq!(
            shortest_alternating_paths(3, &[(0, 1), (1, 2)], &[(2, 0)]).unwrap(),
            vec![0, 1, -1]
        );
        assert_eq!(shortest_alternating_paths(1, &[], &[]).unwrap(), vec![0]);
        assert_eq!(
            shortest_alternating_paths(3, &[(1, 0)], &[(2, 1)]).unwrap(),
            vec![0, -1, -1]
        );
    }

    #[test]
    fn test_validation_happens_before_search() {
        let err = shortest_alternating_paths(2, &[(0, 1)], &[(1, 2)]).unwrap_err();
        assert!(matches!(err, AltPathError::VertexOutOfRange { vertex: 2, .. }));

        let err = shortest_alternating_paths(0, &[], &[]).unwrap_err();
        assert!(matches!(err, AltPathError::EmptyGraph { .. }));
    }
}
