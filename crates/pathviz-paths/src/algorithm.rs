use std::fmt;
use std::str::FromStr;

use pathviz_core::CellId;

use crate::distance;

/// The traversal strategies offered by [`run`](crate::run).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Best-first search guided by Manhattan distance.
    #[default]
    AStar,
    /// The A* machinery with a zero heuristic.
    Dijkstra,
    /// Breadth-first search over a FIFO queue.
    Bfs,
    /// Iterative depth-first search. Finds *a* path, not a shortest one.
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [Self::AStar, Self::Dijkstra, Self::Bfs, Self::Dfs];

    /// Estimated remaining cost from `from` to `to`.
    ///
    /// Only the priority-ordered strategies consult it; it is admissible for
    /// unit-cost 4-connected movement.
    #[inline]
    pub fn heuristic(self, from: CellId, to: CellId) -> u32 {
        match self {
            Self::AStar => distance::manhattan(from, to),
            Self::Dijkstra | Self::Bfs | Self::Dfs => distance::zero(from, to),
        }
    }

    /// Whether found paths are guaranteed to have the fewest steps.
    #[inline]
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "a*",
            Self::Dijkstra => "dijkstra",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a*" | "astar" | "a-star" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            "dfs" | "depth-first" => Ok(Self::Dfs),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
