//! The [`Cell`] type: a grid position and what it currently shows.

use crate::geom::CellId;

/// Display/semantic state of a cell.
///
/// Algorithms write `Open`, `Closed` and `Path` purely for observation; their
/// own bookkeeping never reads these back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Blank,
    Wall,
    Start,
    End,
    /// Discovered and waiting in a frontier.
    Open,
    /// Expanded.
    Closed,
    /// Part of a reconstructed path.
    Path,
}

impl CellState {
    /// Every state, in declaration order.
    pub const ALL: [CellState; 7] = [
        Self::Blank,
        Self::Wall,
        Self::Start,
        Self::End,
        Self::Open,
        Self::Closed,
        Self::Path,
    ];

    /// Whether this state is one of the two search endpoints.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Whether a search may step onto a cell in this state.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Whether this state is written by algorithms rather than by editing.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }

    /// Character used by text layouts.
    pub const fn glyph(self) -> char {
        match self {
            Self::Blank => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Open => 'o',
            Self::Closed => 'x',
            Self::Path => '*',
        }
    }

    /// Inverse of [`glyph`](CellState::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Blank),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            'o' => Some(Self::Open),
            'x' => Some(Self::Closed),
            '*' => Some(Self::Path),
            _ => None,
        }
    }
}

/// A grid position together with its state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub id: CellId,
    pub state: CellState,
}

impl Cell {
    #[inline]
    pub const fn new(id: CellId, state: CellState) -> Self {
        Self { id, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_distinct_and_invertible() {
        for state in CellState::ALL {
            assert_eq!(CellState::from_glyph(state.glyph()), Some(state));
        }
        assert_eq!(CellState::from_glyph('?'), None);
    }

    #[test]
    fn state_classes() {
        assert!(CellState::Start.is_endpoint());
        assert!(!CellState::Wall.is_endpoint());
        assert!(!CellState::Wall.is_passable());
        assert!(CellState::End.is_passable());
        assert!(CellState::Closed.is_search_mark());
        assert!(!CellState::Blank.is_search_mark());
    }
}
