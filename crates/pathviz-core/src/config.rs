//! Grid configuration.

use crate::error::GridError;
use crate::grid::Grid;

pub const DEFAULT_ROWS: i32 = 29;
pub const DEFAULT_COLS: i32 = 57;
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.15;

/// Parameters for building a session grid.
///
/// The defaults are odd on both axes so the grid is ready for maze
/// generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    /// Chance for each cell to become a wall when walls are scattered.
    pub wall_probability: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            wall_probability: DEFAULT_WALL_PROBABILITY,
        }
    }
}

impl GridConfig {
    /// Whether both dimensions are odd, as maze generation requires.
    pub fn is_maze_ready(&self) -> bool {
        self.rows % 2 == 1 && self.cols % 2 == 1
    }

    /// Create a blank grid with the configured dimensions.
    pub fn build(&self) -> Result<Grid, GridError> {
        Grid::new(self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_a_maze_ready_grid() {
        let cfg = GridConfig::default();
        assert!(cfg.is_maze_ready());
        let g = cfg.build().unwrap();
        assert_eq!((g.rows(), g.cols()), (29, 57));
    }

    #[test]
    fn invalid_dimensions_fail_to_build() {
        let cfg = GridConfig {
            rows: 0,
            ..GridConfig::default()
        };
        assert!(cfg.build().is_err());
        assert!(
            !GridConfig {
                cols: 8,
                ..GridConfig::default()
            }
            .is_maze_ready()
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: GridConfig = serde_json::from_str(r#"{"rows": 11}"#).unwrap();
        assert_eq!(cfg.rows, 11);
        assert_eq!(cfg.cols, 57);
        assert_eq!(cfg.wall_probability, 0.15);
    }
}
