mod carver;
mod grid;
mod point;

pub use carver::carve_maze;
pub use point::Point;

use grid::Grid;

/// A maze on a doubled grid: rooms live at even/even coordinates, the doors
/// joining two adjacent rooms at odd/even or even/odd coordinates, and odd/odd
/// coordinates are permanent wall corners.
pub struct Maze {
    grid: Grid,
    width: u8,
    height: u8,
}

impl Maze {
    /// Creates an all-wall maze with the given dimensions in room units.
    /// The internal grid is sized `2*width+1` by `2*height+1` to leave space
    /// for the doors between rooms.
    pub fn new(width: u8, height: u8) -> Self {
        let grid_width = width as i32 * 2 + 1;
        let grid_height = height as i32 * 2 + 1;
        Maze {
            grid: Grid::new(grid_width, grid_height),
            width,
            height,
        }
    }

    /// Width of the maze in room units.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height of the maze in room units.
    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn grid_width(&self) -> i32 {
        self.grid.width()
    }

    pub fn grid_height(&self) -> i32 {
        self.grid.height()
    }

    /// The entry point of the maze, used as the root of the corridor graph.
    pub fn entry(&self) -> Point {
        Point::new(0, 0)
    }

    pub fn is_inside(&self, p: Point) -> bool {
        self.grid.is_inside(p)
    }

    pub fn is_road(&self, p: Point) -> bool {
        self.grid.is_road(p)
    }

    pub fn set_road(&mut self, p: Point) {
        self.grid.set_road(p);
    }

    pub fn set_wall(&mut self, p: Point) {
        self.grid.set_wall(p);
    }

    /// All road cells in row-major order.
    pub fn roads(&self) -> Vec<Point> {
        self.grid.roads()
    }

    /// In-bounds cardinal neighbors of `p` that are still wall, i.e. the
    /// cells carving could extend into next.
    pub fn road_candidates(&self, p: Point) -> Vec<Point> {
        p.orthogonal()
            .into_iter()
            .filter(|&n| self.is_inside(n) && !self.is_road(n))
            .collect()
    }

    /// Cardinal neighbors of `p` that already carry road.
    pub fn next_roads(&self, p: Point) -> Vec<Point> {
        p.orthogonal()
            .into_iter()
            .filter(|&n| self.is_road(n))
            .collect()
    }

    /// Whether carving `p` keeps the maze free of redundant connections.
    ///
    /// Odd/odd corners are never carvable. For any road neighbor `n` in the
    /// 8-neighborhood, if the reflection of `n` through `p` is also road,
    /// carving `p` would complete a fully open 2x2 block, which is exactly a
    /// redundant second connection between two rooms.
    pub fn can_plot(&self, p: Point) -> bool {
        if p.is_wall_corner() {
            return false;
        }
        for n in p.surrounding() {
            if self.is_road(n) && self.is_road(n.opposite(p)) {
                return false;
            }
        }
        true
    }

    /// Carves a straight run of road cells from `a` to `b`, inclusive.
    ///
    /// The run must be purely horizontal or purely vertical. Anything else
    /// cannot come from the carving pass and is reported and skipped.
    pub fn draw_line(&mut self, a: Point, b: Point) {
        if a.x != b.x && a.y != b.y {
            tracing::warn!("skipping line from {} to {}: not axis-aligned", a, b);
            return;
        }
        let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
        let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
        if x0 == x1 {
            for y in y0..=y1 {
                self.set_road(Point::new(x0, y));
            }
        } else {
            for x in x0..=x1 {
                self.set_road(Point::new(x, y0));
            }
        }
    }

    /// Carves the rectangular outline spanned by two corner points.
    pub fn draw_frame(&mut self, a: Point, b: Point) {
        self.draw_line(Point::new(a.x, a.y), Point::new(b.x, a.y));
        self.draw_line(Point::new(b.x, a.y), Point::new(b.x, b.y));
        self.draw_line(Point::new(b.x, b.y), Point::new(a.x, b.y));
        self.draw_line(Point::new(a.x, b.y), Point::new(a.x, a.y));
    }
}
