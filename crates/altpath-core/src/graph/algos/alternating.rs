
use crate::error::{AltPathError, Result, VertexRole};
use crate::graph::traversal::ColoredAdjacency;
use crate::graph::types::{Color, Distances, SearchState, SearchStats};
use crate::trace_time;
use std::collections::VecDeque;
use std::time::Instant;

/// Marks a vertex no state has reached yet. Larger than any walk length.
const UNKNOWN: usize = usize::MAX;

/// Result of one alternating search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub distances: Distances,
    pub stats: SearchStats,
}

/// State tracked during one search. Created per query and dropped on return.
struct AlternatingState {
    /// `visited[v][c]`: state (v, c) has been enqueued. Never reset.
    visited: Vec<[bool; 2]>,
    dist: Vec<usize>,
    queue: VecDeque<SearchState>,
    stats: SearchStats,
}

impl AlternatingState {
    fn new(n: usize, source: usize) -> Self {
        let mut state = Self {
            visited: vec![[false; 2]; n],
            dist: vec![UNKNOWN; n],
            queue: VecDeque::with_capacity(2 * n),
            stats: SearchStats::default(),
        };

        state.dist[source] = 0;
        // Both source states start visited so an alternating cycle back to the
        // source is never re-expanded and its distance stays 0.
        for color in Color::ALL {
            state.visited[source][color.index()] = true;
            state.queue.push_back(SearchState {
                vertex: source,
                distance: 0,
                last_color: color,
            });
        }
        state
    }

    fn discover(&mut self, vertex: usize, distance: usize, color: Color) {
        let seen = &mut self.visited[vertex][color.index()];
        if *seen {
            return;
        }
        *seen = true;
        self.dist[vertex] = self.dist[vertex].min(distance);
        self.queue.push_back(SearchState {
            vertex,
            distance,
            last_color: color,
        });
    }

    fn into_outcome(self, source: usize) -> SearchOutcome {
        let values = self
            .dist
            .into_iter()
            .map(|d| (d != UNKNOWN).then_some(d))
            .collect();
        SearchOutcome {
            distances: Distances::new(source, values),
            stats: self.stats,
        }
    }
}

/// Shortest alternating-color distances from `source` to every vertex.
///
/// Runs FIFO breadth-first search over (vertex, color of the edge used to
/// arrive) pairs. An edge is only followed when its color differs from the
/// arrival color, so at most `2n` states are ever expanded. The source is
/// seeded with both colors, letting its first edge be either color.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn alternating_bfs<G>(graph: &G, source: usize) -> Result<SearchOutcome>
where
    G: ColoredAdjacency + ?Sized,
{
    let start = Instant::now();
    let n = graph.vertex_count();
    if n == 0 {
        return Err(AltPathError::EmptyGraph { n: 0 });
    }
    if source >= n {
        return Err(AltPathError::out_of_range(
            VertexRole::QuerySource,
            i64::try_from(source).unwrap_or(i64::MAX),
            n,
        ));
    }

    let mut state = AlternatingState::new(n, source);

    while let Some(current) = state.queue.pop_front() {
        state.stats.states_expanded += 1;
        for neighbor in graph.outgoing(current.vertex) {
            state.stats.edges_examined += 1;
            if neighbor.color == current.last_color {
                state.stats.same_color_rejected += 1;
                continue;
            }
            if neighbor.to >= n {
                return Err(AltPathError::out_of_range(
                    VertexRole::EdgeTarget(neighbor.color),
                    i64::try_from(neighbor.to).unwrap_or(i64::MAX),
                    n,
                ));
            }
            state.discover(neighbor.to, current.distance + 1, neighbor.color);
        }
    }

    let outcome = state.into_outcome(source);
    tracing::debug!(
        states_expanded = outcome.stats.states_expanded,
        edges_examined = outcome.stats.edges_examined,
        same_color_rejected = outcome.stats.same_color_rejected,
        reachable = outcome.distances.reachable_count(),
        "alternating_bfs_stats"
    );
    trace_time!(start, "alternating_bfs");
    Ok(outcome)
}
