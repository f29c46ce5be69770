//! **pathviz-core**: the grid model shared by the pathviz crates.
//!
//! This crate provides cell identities and states, the fixed-size [`Grid`]
//! with its editing and bulk operations, grid configuration, and the
//! cooperative cancellation primitives polled by long-running algorithms.

pub mod cancel;
pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use cancel::{Cancel, CancelToken, NeverCancel};
pub use cell::{Cell, CellState};
pub use config::GridConfig;
pub use error::{GridError, LayoutError};
pub use geom::{Bounds, CellId};
pub use grid::Grid;
