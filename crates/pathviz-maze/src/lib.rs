//! Maze generation for pathviz grids.
//!
//! [`MazeGen`] carves a perfect maze by recursive division: walls go on even
//! rows and columns, doors and corridors on odd ones, so the grid must have
//! odd dimensions. Every wall cell written is reported through a step
//! callback, the same way searches report their progress.

mod division;

pub use division::{Generation, MazeGen};
