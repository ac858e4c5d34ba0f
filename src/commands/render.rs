//! Distance output in human, JSON, and records formats

use altpath_core::config::ColorLabels;
use altpath_core::error::Result;
use altpath_core::graph::{Color, Distances, Graph, SearchOutcome, SearchStats};
use serde::Serialize;

/// Records format version, bumped when record fields change
const RECORDS_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct DistanceReport<'a> {
    pub n: usize,
    pub source: usize,
    pub edges: usize,
    pub reachable: usize,
    pub colors: &'a ColorLabels,
    pub distances: &'a Distances,
    pub stats: SearchStats,
}

impl<'a> DistanceReport<'a> {
    pub fn new(graph: &Graph, outcome: &'a SearchOutcome, colors: &'a ColorLabels) -> Self {
        Self {
            n: graph.vertex_count(),
            source: outcome.distances.source(),
            edges: graph.edge_count(),
            reachable: outcome.distances.reachable_count(),
            colors,
            distances: &outcome.distances,
            stats: outcome.stats,
        }
    }
}

pub fn render_json(report: &DistanceReport<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_human(report: &DistanceReport<'_>, quiet: bool) -> String {
    let mut out = String::new();
    if !quiet {
        out.push_str(&format!(
            "Alternating {}/{} distances from vertex {} ({} of {} reachable)\n",
            report.colors.label(Color::A),
            report.colors.label(Color::B),
            report.source,
            report.reachable,
            report.n
        ));
    }
    for (vertex, distance) in report.distances.iter() {
        let line = match distance {
            Some(d) => format!("{vertex}: {d}\n"),
            None => format!("{vertex}: unreachable\n"),
        };
        out.push_str(&line);
    }
    out
}

pub fn render_records(report: &DistanceReport<'_>) -> String {
    let header = format!(
        "H altpath={} n={} source={} edges={} reachable={} colors={},{}\n",
        RECORDS_VERSION,
        report.n,
        report.source,
        report.edges,
        report.reachable,
        report.colors.label(Color::A),
        report.colors.label(Color::B)
    );
    let rows: String = report
        .distances
        .to_signed()
        .into_iter()
        .enumerate()
        .map(|(vertex, distance)| format!("D v={vertex} dist={distance}\n"))
        .collect();
    header + &rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> (Graph, SearchOutcome) {
        let graph = Graph::new(3, &[(0, 1), (1, 2)], &[]).unwrap();
        let outcome = graph.search_from(0).unwrap();
        (graph, outcome)
    }

    #[test]
    fn test_render_human() {
        let (graph, outcome) = outcome();
        let labels = ColorLabels::default();
        let report = DistanceReport::new(&graph, &outcome, &labels);
        assert_eq!(
            render_human(&report, false),
            "Alternating red/blue distances from vertex 0 (2 of 3 reachable)\n0: 0\n1: 1\n2: unreachable\n"
        );
        assert_eq!(render_human(&report, true), "0: 0\n1: 1\n2: unreachable\n");
    }

    #[test]
    fn test_render_records() {
        let (graph, outcome) = outcome();
        let labels = ColorLabels {
            a: "left".into(),
            b: "right".into(),
        };
        let report = DistanceReport::new(&graph, &outcome, &labels);
        assert_eq!(
            render_records(&report),
            "H altpath=1 n=3 source=0 edges=2 reachable=2 colors=left,right\n\
             D v=0 dist=0\nD v=1 dist=1\nD v=2 dist=-1\n"
        );
    }

    #[test]
    fn test_render_json() {
        let (graph, outcome) = outcome();
        let labels = ColorLabels::default();
        let report = DistanceReport::new(&graph, &outcome, &labels);
        let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(value["n"], 3);
        assert_eq!(value["source"], 0);
        assert_eq!(value["distances"], serde_json::json!([0, 1, -1]));
        assert_eq!(value["colors"]["a"], "red");
        assert_eq!(value["stats"]["states_expanded"], 3);
    }
}
