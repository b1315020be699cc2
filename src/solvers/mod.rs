mod dijkstra;

pub use dijkstra::shortest_paths;

/// Distance reported for vertices the search never reaches.
pub const UNREACHABLE: u32 = u32::MAX;
