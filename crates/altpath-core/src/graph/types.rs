use serde::{Serialize, Serializer};
use std::fmt;

/// Edge color. `A` is conventionally rendered as red, `B` as blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    A,
    B,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::A, Color::B];

    /// Column in the `n × 2` visited matrix
    pub fn index(self) -> usize {
        match self {
            Color::A => 0,
            Color::B => 1,
        }
    }

    /// The only color allowed to follow this one on an alternating walk
    pub fn other(self) -> Color {
        match self {
            Color::A => Color::B,
            Color::B => Color::A,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::A => f.write_str("red"),
            Color::B => f.write_str("blue"),
        }
    }
}

/// A directed edge `from -> to` of a given color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub color: Color,
}

/// One outgoing adjacency entry: the neighbor and the color of the edge reaching it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoredNeighbor {
    pub to: usize,
    pub color: Color,
}

/// A frontier entry: the vertex, its BFS layer, and the color of the edge used to arrive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchState {
    pub vertex: usize,
    pub distance: usize,
    pub last_color: Color,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States popped from the frontier
    pub states_expanded: usize,
    /// Outgoing edges looked at
    pub edges_examined: usize,
    /// Edges skipped because they repeat the previous color
    pub same_color_rejected: usize,
}

/// Per-vertex shortest alternating distances from a source vertex.
///
/// `None` means no alternating walk reaches the vertex. Serializes as the
/// signed form where unreachable vertices are `-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances {
    source: usize,
    values: Vec<Option<usize>>,
}

impl Distances {
    pub(crate) fn new(source: usize, values: Vec<Option<usize>>) -> Self {
        Self { source, values }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Distance to `vertex`, or `None` when unreachable or out of range
    pub fn get(&self, vertex: usize) -> Option<usize> {
        self.values.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.get(vertex).is_some()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.values.iter().filter(|d| d.is_some()).count()
    }

    /// Largest finite distance
    pub fn max_distance(&self) -> Option<usize> {
        self.values.iter().flatten().copied().max()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.values.iter().copied().enumerate()
    }

    /// Public result form: unreachable vertices become `-1`
    pub fn to_signed(&self) -> Vec<i64> {
        self.values
            .iter()
            .map(|d| d.map_or(-1, |d| d as i64))
            .collect()
    }
}

impl Serialize for Distances {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_signed().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_other_alternates() {
        assert_eq!(Color::A.other(), Color::B);
        assert_eq!(Color::B.other(), Color::A);
        assert_eq!(Color::A.other().other(), Color::A);
    }

    #[test]
    fn test_color_index_distinct() {
        assert_eq!(Color::A.index(), 0);
        assert_eq!(Color::B.index(), 1);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::A.to_string(), "red");
        assert_eq!(Color::B.to_string(), "blue");
    }

    #[test]
    fn test_distances_accessors() {
        let d = Distances::new(0, vec![Some(0), Some(2), None, Some(1)]);
        assert_eq!(d.len(), 4);
        assert_eq!(d.source(), 0);
        assert_eq!(d.get(1), Some(2));
        assert_eq!(d.get(2), None);
        assert_eq!(d.get(99), None);
        assert!(!d.is_reachable(2));
        assert_eq!(d.reachable_count(), 3);
        assert_eq!(d.max_distance(), Some(2));
        assert_eq!(d.to_signed(), vec![0, 2, -1, 1]);
    }

    #[test]
    fn test_distances_serialize_signed() {
        let d = Distances::new(0, vec![Some(0), None]);
        assert_eq!(serde_json::to_string(&d).unwrap(), "[0,-1]");
    }
}
