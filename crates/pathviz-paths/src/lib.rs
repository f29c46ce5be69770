//! Step-wise pathfinding over a [`pathviz_core::Grid`].
//!
//! Four strategies share one entry point, [`run`]:
//!
//! - **A\*** with a Manhattan heuristic ([`Algorithm::AStar`])
//! - **Dijkstra**, the same search with a zero heuristic ([`Algorithm::Dijkstra`])
//! - **Breadth-first search** ([`Algorithm::Bfs`])
//! - **Depth-first search** ([`Algorithm::Dfs`]), which finds *a* path
//!
//! Searches paint their progress onto the grid as they go (`Open`, `Closed`,
//! then `Path`) and call back after every step so a caller can render the
//! intermediate states. A [`Cancel`](pathviz_core::Cancel) source is polled
//! at the same checkpoints.
//!
//! Each run allocates its own [`SearchScratch`], so g-scores, predecessors
//! and frontier membership never carry over from one run to the next.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod distance;
mod engine;
mod frontier;
mod reconstruct;
mod scratch;
mod traits;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use distance::manhattan;
pub use engine::{SearchOutcome, run, run_grid};
pub use reconstruct::build_path;
pub use scratch::{SearchScratch, UNREACHABLE};
pub use traits::Predecessors;
