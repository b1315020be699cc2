use super::{Edge, Graph};
use crate::maze::{Maze, Point};

/// Compacts the carved maze into a corridor graph rooted at `entry`.
///
/// The walk starts from the entry with a zero-length synthetic edge and
/// follows road cells. Cells with exactly one viable continuation extend the
/// current edge; junctions and dead ends become vertices, closing the
/// incoming edge and opening a fresh edge per outgoing branch; reaching an
/// already-known vertex closes a loop. The depth-first recursion is held on
/// an explicit stack of `(point, in-progress edge)` pairs.
pub fn build_graph(maze: &Maze, entry: Point) -> Graph {
    let mut graph = Graph::default();
    graph.add_vertex(entry);
    if !maze.is_road(entry) {
        tracing::warn!("entry {} is not a road cell, graph left empty", entry);
        return graph;
    }

    let mut stack = vec![(entry, Edge::root(entry))];
    while let Some((cpoint, cedge)) = stack.pop() {
        // Loop closure: the walk has reached a known vertex. The zero-length
        // root edge is exempt so the walk can leave the entry at all.
        if cedge.length > 0 && graph.has_vertex(cpoint) {
            graph.add_edge(cedge);
            continue;
        }

        let next_roads: Vec<Point> = maze
            .next_roads(cpoint)
            .into_iter()
            .filter(|&road| cedge.advances_to(road))
            .collect();

        if next_roads.len() == 1 {
            // Pass-through cell: the corridor continues without branching
            let next = next_roads[0];
            stack.push((next, cedge.extended(next)));
        } else {
            // Junction or dead end: close the incoming corridor here
            if cedge.length > 0 {
                graph.add_vertex(cpoint);
                graph.add_edge(cedge);
            }
            // Reversed so the first branch is explored first, matching the
            // depth-first recursion this stack replaces
            for next in next_roads.into_iter().rev() {
                stack.push((next, Edge::spur(cpoint, next)));
            }
        }
    }

    tracing::debug!(
        "graph built: {} vertices, {} edges",
        graph.vertices().len(),
        graph.edges().len()
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::carve_maze;
    use std::collections::HashSet;

    #[test]
    fn test_straight_corridor_collapses_to_one_edge() {
        let mut maze = Maze::new(3, 3);
        maze.draw_line(Point::new(0, 0), Point::new(4, 0));
        let graph = build_graph(&maze, maze.entry());

        assert_eq!(graph.vertices(), [Point::new(0, 0), Point::new(4, 0)]);
        assert_eq!(graph.edges().len(), 1);
        let edge = &graph.edges()[0];
        assert_eq!(edge.length, 4);
        assert_eq!(edge.path.len(), 5);
    }

    #[test]
    fn test_turning_corridor_stays_one_edge() {
        // An L-shaped corridor has no branch point, so no vertex at the bend
        let mut maze = Maze::new(3, 3);
        maze.draw_line(Point::new(0, 0), Point::new(4, 0));
        maze.draw_line(Point::new(4, 0), Point::new(4, 4));
        let graph = build_graph(&maze, maze.entry());

        assert_eq!(graph.vertices(), [Point::new(0, 0), Point::new(4, 4)]);
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].length, 8);
    }

    #[test]
    fn test_junction_splits_corridors() {
        let mut maze = Maze::new(3, 3);
        maze.draw_line(Point::new(0, 0), Point::new(4, 0));
        maze.draw_line(Point::new(2, 0), Point::new(2, 2));
        let graph = build_graph(&maze, maze.entry());

        let vertices: HashSet<Point> = graph.vertices().iter().copied().collect();
        let expected: HashSet<Point> = [
            Point::new(0, 0), // entry
            Point::new(2, 0), // junction
            Point::new(4, 0), // dead end
            Point::new(2, 2), // dead end
        ]
        .into_iter()
        .collect();
        assert_eq!(vertices, expected);

        assert_eq!(graph.edges().len(), 3);
        for edge in graph.edges() {
            assert_eq!(edge.length, 2);
        }
    }

    #[test]
    fn test_ring_corridor_recorded_once() {
        // A loop with no junctions: the walk closes it from both directions
        // but only one of the two walks may record the corridor
        let mut maze = Maze::new(3, 3);
        maze.draw_frame(Point::new(0, 0), Point::new(2, 2));
        let graph = build_graph(&maze, maze.entry());

        assert_eq!(graph.vertices(), [Point::new(0, 0)]);
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].length, 8);
        assert_eq!(graph.edges()[0].start, graph.edges()[0].end);
    }

    #[test]
    fn test_entry_off_road_leaves_graph_empty() {
        let mut maze = Maze::new(3, 3);
        maze.draw_line(Point::new(2, 0), Point::new(4, 0));
        let graph = build_graph(&maze, maze.entry());
        assert_eq!(graph.vertices(), [maze.entry()]);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_edge_paths_are_contiguous_unit_steps() {
        let mut maze = Maze::new(8, 6);
        carve_maze(&mut maze, Some(5));
        let graph = build_graph(&maze, maze.entry());

        assert!(!graph.edges().is_empty());
        for edge in graph.edges() {
            assert_eq!(edge.length as usize, edge.path.len() - 1);
            assert_eq!(edge.path[0], edge.start);
            assert_eq!(*edge.path.last().unwrap(), edge.end);
            for pair in edge.path.windows(2) {
                let dx = (pair[1].x - pair[0].x).abs();
                let dy = (pair[1].y - pair[0].y).abs();
                assert_eq!(dx + dy, 1, "non-unit step in {}", edge);
            }
        }
    }

    #[test]
    fn test_edge_paths_cover_every_road_cell() {
        let mut maze = Maze::new(8, 6);
        carve_maze(&mut maze, Some(13));
        let graph = build_graph(&maze, maze.entry());

        let mut covered: HashSet<Point> = graph.vertices().iter().copied().collect();
        for edge in graph.edges() {
            covered.extend(edge.path.iter().copied());
        }
        let roads: HashSet<Point> = maze.roads().into_iter().collect();
        assert_eq!(covered, roads);
    }

    #[test]
    fn test_vertices_terminate_their_edges() {
        let mut maze = Maze::new(6, 6);
        carve_maze(&mut maze, Some(17));
        let graph = build_graph(&maze, maze.entry());

        for edge in graph.edges() {
            assert!(graph.has_vertex(edge.start), "dangling start in {}", edge);
            assert!(graph.has_vertex(edge.end), "dangling end in {}", edge);
        }
    }

    #[test]
    fn test_same_seed_builds_same_graph() {
        let build = |seed| {
            let mut maze = Maze::new(7, 5);
            carve_maze(&mut maze, Some(seed));
            build_graph(&maze, maze.entry())
        };
        let a = build(42);
        let b = build(42);
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.edges(), b.edges());
    }
}
