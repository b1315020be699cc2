use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::{Maze, Point};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Wall candidates of `p` in a uniformly random order.
fn shuffled_candidates(maze: &Maze, p: Point, rng: &mut StdRng) -> Vec<Point> {
    let mut candidates = maze.road_candidates(p);
    candidates.shuffle(rng);
    candidates
}

/// Carves a connected, loop-free road pattern into an all-wall maze using
/// randomized depth-first carving.
///
/// Carving starts at a random even/even room cell and repeatedly extends into
/// a random wall neighbor that passes the open-block check, backtracking when
/// a cell has no carvable neighbor left. The recursion is held on an explicit
/// stack of shuffled, untried candidate lists, so native stack depth stays
/// constant no matter how large the maze is.
pub fn carve_maze(maze: &mut Maze, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    let start = Point::new(
        rng.random_range(0..(maze.grid_width() + 1) / 2) * 2,
        rng.random_range(0..(maze.grid_height() + 1) / 2) * 2,
    );
    tracing::info!("carving {}x{} maze from {}", maze.width(), maze.height(), start);
    maze.set_road(start);

    let mut stack = vec![shuffled_candidates(maze, start, &mut rng)];
    while let Some(pending) = stack.last_mut() {
        let Some(candidate) = pending.pop() else {
            // Every candidate of the top cell has been tried; backtrack
            stack.pop();
            continue;
        };
        if maze.can_plot(candidate) {
            maze.set_road(candidate);
            let next = shuffled_candidates(maze, candidate, &mut rng);
            stack.push(next);
        }
    }

    tracing::debug!("carved {} road cells", maze.roads().len());
}
