use std::collections::HashMap;
use std::io;

use crossterm::{
    cursor, execute,
    style::{Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::graph::Graph;
use crate::maze::{Maze, Point};
use crate::solvers::UNREACHABLE;

/// The width of each grid cell when rendered, in character columns.
pub const CELL_WIDTH: u16 = 2;

fn glyph(maze: &Maze, p: Point) -> StyledContent<&'static str> {
    let styled = if p == maze.entry() {
        "🟩".with(Color::Green)
    } else if maze.is_road(p) {
        "  ".with(Color::Reset)
    } else {
        "⬜".with(Color::White)
    };

    #[cfg(debug_assertions)]
    {
        use unicode_width::UnicodeWidthStr;
        assert_eq!(
            styled.content().width(),
            CELL_WIDTH as usize,
            "Each cell must occupy exactly two character columns."
        );
    }

    styled
}

/// Clears the terminal and draws the maze grid, one styled glyph pair per
/// cell, with the entry point marked.
pub fn draw_maze(maze: &Maze) -> io::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0),
    )?;
    for y in 0..maze.grid_height() {
        for x in 0..maze.grid_width() {
            print!("{}", glyph(maze, Point::new(x, y)));
        }
        println!();
    }
    Ok(())
}

/// Prints a one-line run summary, truncated to the terminal width.
pub fn print_summary(maze: &Maze, graph: &Graph, seed: Option<u64>) {
    let seed = match seed {
        Some(s) => s.to_string(),
        None => "random".to_string(),
    };
    let summary = format!(
        "maze {}x{} | {} vertices | {} edges | seed {}",
        maze.width(),
        maze.height(),
        graph.vertices().len(),
        graph.edges().len(),
        seed,
    );
    let columns = terminal::size().map(|(c, _)| c).unwrap_or(80);
    let (line, _) = summary.unicode_truncate(columns as usize);
    println!("{}", line.with(Color::Cyan));
}

/// Prints every corridor edge of the graph, one per line.
pub fn print_graph(graph: &Graph) {
    for edge in graph.edges() {
        println!("{}", edge);
    }
}

/// Prints the shortest corridor distance from the entry to every vertex.
pub fn print_distances(graph: &Graph, distances: &HashMap<Point, u32>) {
    for vertex in graph.vertices() {
        match distances.get(vertex) {
            Some(&d) if d != UNREACHABLE => println!("dist {} => {}", vertex, d),
            _ => println!("dist {} => unreachable", vertex),
        }
    }
}
