//! GraphTrace - step-by-step execution traces of classic graph algorithms
//!
//! Each engine takes an immutable [`Graph`] and returns a [`Trace`]: an ordered
//! list of visualization steps (highlights, labels, matrix snapshots, messages)
//! that a renderer replays to animate the algorithm. Engines never fail; missing
//! start nodes, empty graphs and negative cycles are reported inside the trace.

pub mod config;
pub mod core;
pub mod services;
pub mod utils;

pub use crate::core::{
    Edge, Graph, MatrixCell, Node, Palette, Step, Trace, TraceError, TraceResult, INFINITY_SYMBOL,
};
pub use crate::services::algorithm::{run, AlgorithmKind};

use crate::services::algorithm::{Dijkstra, FloydWarshall, Kruskal, Prim};

/// Single-source shortest paths (Dijkstra) from `start_node_id`
pub fn compute_shortest_paths(graph: &Graph, start_node_id: &str) -> Trace {
    Dijkstra::trace(graph, start_node_id)
}

/// All-pairs shortest paths (Floyd–Warshall)
pub fn compute_all_pairs_shortest_paths(graph: &Graph) -> Trace {
    FloydWarshall::trace(graph)
}

/// Minimum spanning forest by sorted edges (Kruskal)
pub fn compute_mst_by_sorted_edges(graph: &Graph) -> Trace {
    Kruskal::trace(graph)
}

/// Minimum spanning forest by frontier growth (Prim)
pub fn compute_mst_by_growing_frontier(graph: &Graph) -> Trace {
    Prim::trace(graph)
}
