//! Geometry primitives: [`CellId`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward and columns grow
//! to the right, matching how the grid is stored and printed.

use std::fmt;

// ---------------------------------------------------------------------------
// CellId
// ---------------------------------------------------------------------------

/// Identity of one grid position.
///
/// Ordered row-major, so sorting a set of ids yields reading order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId {
    pub row: i32,
    pub col: i32,
}

impl CellId {
    /// Create a new id.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return the id shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in expansion order: row above, column
    /// to the left, row below, column to the right.
    ///
    /// Search results depend on this order, so it must stay fixed.
    #[inline]
    pub const fn neighbors_4(self) -> [CellId; 4] {
        [
            self.shift(-1, 0),
            self.shift(0, -1),
            self.shift(1, 0),
            self.shift(0, 1),
        ]
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for CellId {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The `rows × cols` rectangle anchored at `(0, 0)`.
///
/// Converts between [`CellId`]s and flat row-major indices, which is how both
/// the grid and the per-run search scratch store their data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    #[inline]
    pub fn contains(self, id: CellId) -> bool {
        id.row >= 0 && id.row < self.rows && id.col >= 0 && id.col < self.cols
    }

    /// Whether `id` lies on the first/last row or first/last column.
    #[inline]
    pub fn is_border(self, id: CellId) -> bool {
        self.contains(id)
            && (id.row == 0 || id.col == 0 || id.row == self.rows - 1 || id.col == self.cols - 1)
    }

    /// Flat row-major index of `id`, or `None` when out of range.
    #[inline]
    pub fn index(self, id: CellId) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }
        Some(id.row as usize * self.cols as usize + id.col as usize)
    }

    /// Inverse of [`index`](Bounds::index). `idx` must be below [`len`](Bounds::len).
    #[inline]
    pub fn id(self, idx: usize) -> CellId {
        let cols = self.cols.max(1) as usize;
        CellId::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every id.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = CellId;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the ids in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = CellId;

    #[inline]
    fn next(&mut self) -> Option<CellId> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let id = self.bounds.id(self.next);
        self.next += 1;
        Some(id)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}
