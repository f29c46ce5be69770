//! Error types for grid construction, editing and text layouts.

use std::fmt;

use crate::geom::CellId;

/// Errors raised by grid operations. Every failing call leaves the grid
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside the grid.
    OutOfBounds(CellId),
    /// Dimensions not accepted by the requested operation: non-positive for
    /// grid creation, even for maze generation.
    InvalidGridDimensions { rows: i32, cols: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(id) => write!(f, "cell {id} is outside the grid"),
            Self::InvalidGridDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {rows}x{cols}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors that can occur when parsing a text layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no rows.
    Empty,
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character outside the layout alphabet was found.
    InvalidRune {
        ch: char,
        at: CellId,
        content: String,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: no rows"),
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, at, content } => {
                write!(
                    f,
                    "layout contains invalid rune \u{201c}{ch}\u{201d} at {at}:\n{content}"
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let e = GridError::OutOfBounds(CellId::new(3, -1));
        assert_eq!(e.to_string(), "cell (3, -1) is outside the grid");
        let e = GridError::InvalidGridDimensions { rows: 4, cols: 5 };
        assert_eq!(e.to_string(), "invalid grid dimensions 4x5");
    }
}
