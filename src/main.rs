mod graph;
mod maze;
mod render;
mod solvers;

use clap::Parser;

use crate::graph::build_graph;
use crate::maze::{Maze, carve_maze};
use crate::solvers::shortest_paths;

/// Procedural maze generator with corridor-graph compaction and
/// shortest-path search for the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Width of the maze in rooms
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(1..))]
    width: u8,

    /// Height of the maze in rooms
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(1..))]
    height: u8,

    /// Carve deterministically from this seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the corridor graph below the maze
    #[arg(long)]
    graph: bool,

    /// Print shortest distances from the entry below the maze
    #[arg(long)]
    distances: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    // Logs go to a file so the rendered maze owns the terminal
    let _guard = init_tracing();

    let mut maze = Maze::new(args.width, args.height);
    carve_maze(&mut maze, args.seed);

    let graph = build_graph(&maze, maze.entry());
    let distances = shortest_paths(&graph, maze.entry());

    render::draw_maze(&maze)?;
    render::print_summary(&maze, &graph, args.seed);
    if args.graph {
        render::print_graph(&graph);
    }
    if args.distances {
        render::print_distances(&graph, &distances);
    }
    Ok(())
}

fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "mazegraph.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}
