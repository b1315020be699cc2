use std::collections::{HashMap, HashSet};

use super::UNREACHABLE;
use crate::graph::Graph;
use crate::maze::Point;

/// Computes the shortest corridor distance from `source` to every vertex of
/// the graph, weighting each edge by its corridor length.
///
/// Every vertex is in one of three classes: unvisited (still at the
/// [`UNREACHABLE`] sentinel), frontier (tentative distance known), or settled
/// (distance final). Each round settles the frontier vertex with the smallest
/// tentative distance, found by a linear scan with first-wins tie-breaking,
/// then relaxes the far endpoint of every incident edge. Corridors are
/// walkable in both directions regardless of the direction they were
/// recorded in.
///
/// Vertices the search never reaches keep the sentinel. The search is a pure
/// function of the graph and source.
pub fn shortest_paths(graph: &Graph, source: Point) -> HashMap<Point, u32> {
    let mut dist: HashMap<Point, u32> = graph
        .vertices()
        .iter()
        .map(|&v| (v, UNREACHABLE))
        .collect();

    if !dist.contains_key(&source) {
        tracing::warn!("source {} is not a graph vertex", source);
        return dist;
    }
    dist.insert(source, 0);

    let mut frontier = vec![source];
    let mut settled: HashSet<Point> = HashSet::new();

    while !frontier.is_empty() {
        let mut nearest = 0;
        for (i, v) in frontier.iter().enumerate() {
            if dist[v] < dist[&frontier[nearest]] {
                nearest = i;
            }
        }
        let current = frontier.remove(nearest);
        settled.insert(current);

        for edge in graph.edges_at(current) {
            let neighbor = if edge.start == current {
                edge.end
            } else {
                edge.start
            };
            if settled.contains(&neighbor) {
                continue;
            }
            if dist[&neighbor] == UNREACHABLE {
                frontier.push(neighbor);
            }
            let candidate = dist[&current] + edge.length;
            if candidate < dist[&neighbor] {
                dist.insert(neighbor, candidate);
            }
        }
    }

    dist
}
