//! The [`Grid`] type: a fixed-size table of cell states.
//!
//! The grid is the only state shared between the UI collaborator, the search
//! engine and the maze generator. It also tracks where the Start and End cells
//! are, so at most one of each exists at any time.

use std::fmt;

use rand::Rng;

use crate::cell::{Cell, CellState};
use crate::error::{GridError, LayoutError};
use crate::geom::{Bounds, CellId};

/// Offset of the default endpoints from the top-left (Start) and bottom-right
/// (End) corners.
const ENDPOINT_INSET: i32 = 10;

/// A `rows × cols` grid of [`CellState`]s with tracked endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    bounds: Bounds,
    start: Option<CellId>,
    end: Option<CellId>,
}

impl Grid {
    /// Create a grid of blank cells. Both dimensions must be positive.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidGridDimensions { rows, cols });
        }
        let bounds = Bounds::new(rows, cols);
        Ok(Self {
            cells: vec![CellState::Blank; bounds.len()],
            bounds,
            start: None,
            end: None,
        })
    }

    /// Parse a text layout, one line per row, using the glyphs of
    /// [`CellState::glyph`].
    ///
    /// A later `S` or `E` replaces an earlier one, as with
    /// [`set_state`](Grid::set_state).
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = s.lines().collect();
        let width = match lines.first() {
            Some(line) if !line.is_empty() => line.chars().count(),
            _ => return Err(LayoutError::Empty),
        };
        if lines.iter().any(|l| l.chars().count() != width) {
            return Err(LayoutError::InconsistentSize(s.to_string()));
        }

        let mut grid = Grid::new(lines.len() as i32, width as i32)
            .map_err(|_| LayoutError::Empty)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let at = CellId::new(row as i32, col as i32);
                let Some(state) = CellState::from_glyph(ch) else {
                    return Err(LayoutError::InvalidRune {
                        ch,
                        at,
                        content: s.to_string(),
                    });
                };
                let idx = row * width + col;
                grid.write(idx, at, state);
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: CellId) -> bool {
        self.bounds.contains(id)
    }

    /// State of the cell at `id`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, id: CellId) -> Option<CellState> {
        self.bounds.index(id).map(|i| self.cells[i])
    }

    /// The current Start cell, if any.
    #[inline]
    pub fn start(&self) -> Option<CellId> {
        self.start
    }

    /// The current End cell, if any.
    #[inline]
    pub fn end(&self) -> Option<CellId> {
        self.end
    }

    fn index(&self, id: CellId) -> Result<usize, GridError> {
        self.bounds.index(id).ok_or(GridError::OutOfBounds(id))
    }

    /// Raw write that keeps the endpoint bookkeeping consistent.
    fn write(&mut self, idx: usize, id: CellId, state: CellState) {
        let previous = self.cells[idx];
        if previous == CellState::Start && state != CellState::Start {
            self.start = None;
        }
        if previous == CellState::End && state != CellState::End {
            self.end = None;
        }
        match state {
            CellState::Start => {
                if let Some(old) = self.start.replace(id) {
                    if old != id {
                        if let Some(i) = self.bounds.index(old) {
                            self.cells[i] = CellState::Blank;
                        }
                    }
                }
            }
            CellState::End => {
                if let Some(old) = self.end.replace(id) {
                    if old != id {
                        if let Some(i) = self.bounds.index(old) {
                            self.cells[i] = CellState::Blank;
                        }
                    }
                }
            }
            _ => {}
        }
        self.cells[idx] = state;
    }

    // -----------------------------------------------------------------------
    // Single-cell editing
    // -----------------------------------------------------------------------

    /// Set the state of one cell.
    ///
    /// Writing `Start` (or `End`) moves the endpoint: the previous Start (or
    /// End) cell becomes Blank.
    pub fn set_state(&mut self, id: CellId, state: CellState) -> Result<(), GridError> {
        let idx = self.index(id)?;
        self.write(idx, id, state);
        Ok(())
    }

    /// Set `id` to `state` unless it is the Start or End cell.
    ///
    /// Returns whether the cell was written. Algorithms use this so their
    /// marks never hide the endpoints.
    pub fn paint(&mut self, id: CellId, state: CellState) -> Result<bool, GridError> {
        let idx = self.index(id)?;
        if self.cells[idx].is_endpoint() {
            return Ok(false);
        }
        self.write(idx, id, state);
        Ok(true)
    }

    pub fn set_wall(&mut self, id: CellId) -> Result<(), GridError> {
        self.set_state(id, CellState::Wall)
    }

    pub fn set_start(&mut self, id: CellId) -> Result<(), GridError> {
        self.set_state(id, CellState::Start)
    }

    pub fn set_end(&mut self, id: CellId) -> Result<(), GridError> {
        self.set_state(id, CellState::End)
    }

    /// Make one cell Blank.
    pub fn clear(&mut self, id: CellId) -> Result<(), GridError> {
        self.set_state(id, CellState::Blank)
    }

    /// In-bounds orthogonal neighbours of `id`, in the fixed expansion order
    /// of [`CellId::neighbors_4`].
    pub fn neighbors(&self, id: CellId) -> Result<Vec<CellId>, GridError> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(id, &mut buf)?;
        Ok(buf)
    }

    /// Append the neighbours of `id` into `buf`. The caller clears `buf`.
    pub fn neighbors_into(&self, id: CellId, buf: &mut Vec<CellId>) -> Result<(), GridError> {
        if !self.contains(id) {
            return Err(GridError::OutOfBounds(id));
        }
        buf.extend(id.neighbors_4().into_iter().filter(|n| self.contains(*n)));
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Bulk operations
    // -----------------------------------------------------------------------

    /// Make every cell Blank. Both endpoints are forgotten.
    pub fn reset_all(&mut self) {
        self.cells.fill(CellState::Blank);
        self.start = None;
        self.end = None;
    }

    /// Make every cell that is not Wall, Start or End Blank.
    ///
    /// This erases the marks of a previous search.
    pub fn clear_non_walls(&mut self) {
        for c in self.cells.iter_mut() {
            if !matches!(c, CellState::Wall | CellState::Start | CellState::End) {
                *c = CellState::Blank;
            }
        }
    }

    /// Make every Wall cell Blank.
    pub fn clear_walls(&mut self) {
        for c in self.cells.iter_mut() {
            if *c == CellState::Wall {
                *c = CellState::Blank;
            }
        }
    }

    /// Turn cells into walls independently with the given probability.
    ///
    /// One uniform draw in `[0, 1)` is taken per cell in row-major order, so
    /// the result depends only on the RNG state. Start and End cells are left
    /// alone. A probability of `0` (or below) never places a wall, `1` (or
    /// above) walls every other cell.
    ///
    /// Returns the number of cells that became walls.
    pub fn scatter_walls(&mut self, probability: f64, rng: &mut impl Rng) -> usize {
        let mut placed = 0;
        for c in self.cells.iter_mut() {
            let r: f64 = rng.random();
            if r < probability && !c.is_endpoint() {
                if *c != CellState::Wall {
                    placed += 1;
                }
                *c = CellState::Wall;
            }
        }
        log::debug!("scattered {placed} walls (p = {probability})");
        placed
    }

    /// Put Start and End back at their default positions.
    ///
    /// Start goes ten cells in from the top-left corner and End ten cells in
    /// from the bottom-right corner. Grids too small for that use the corners
    /// themselves. Fails on a single-cell grid, which cannot hold both.
    pub fn reset_endpoints(&mut self) -> Result<(CellId, CellId), GridError> {
        if self.len() < 2 {
            return Err(GridError::InvalidGridDimensions {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        if let Some(s) = self.start {
            self.clear(s)?;
        }
        if let Some(e) = self.end {
            self.clear(e)?;
        }

        let mut start = CellId::new(ENDPOINT_INSET, ENDPOINT_INSET);
        let mut end = CellId::new(self.rows() - ENDPOINT_INSET, self.cols() - ENDPOINT_INSET);
        if !self.contains(start) || !self.contains(end) || start == end {
            start = CellId::new(0, 0);
            end = CellId::new(self.rows() - 1, self.cols() - 1);
        }
        self.set_start(start)?;
        self.set_end(end)?;
        Ok((start, end))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Count how many cells are in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| **c == state).count()
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Cell) -> bool) -> usize {
        self.iter().filter(|c| f(*c)).count()
    }

    /// Row-major iterator over every [`Cell`].
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

impl fmt::Display for Grid {
    /// One line per row, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.bounds.cols as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for state in row {
                write!(f, "{}", state.glyph())?;
            }
        }
        Ok(())
    }
}

/// Iterator over the [`Cell`]s of a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: crate::geom::BoundsIter,
}

impl Iterator for GridIter<'_> {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        let id = self.inner.next()?;
        let state = self.grid.at(id)?;
        Some(Cell::new(id, state))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = Cell;
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn id(row: i32, col: i32) -> CellId {
        CellId::new(row, col)
    }

    #[test]
    fn new_rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 3),
            Err(GridError::InvalidGridDimensions { rows: 0, cols: 3 })
        );
        assert!(Grid::new(3, -1).is_err());
        let g = Grid::new(3, 4).unwrap();
        assert_eq!((g.rows(), g.cols(), g.len()), (3, 4, 12));
        assert_eq!(g.count(CellState::Blank), 12);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4).unwrap();
        g.set_state(id(2, 3), CellState::Wall).unwrap();
        assert_eq!(g.at(id(2, 3)), Some(CellState::Wall));
        assert_eq!(g.at(id(0, 0)), Some(CellState::Blank));
        assert_eq!(g.at(id(10, 10)), None);
    }

    #[test]
    fn out_of_bounds_writes_are_rejected() {
        let mut g = Grid::new(2, 2).unwrap();
        let before = g.clone();
        assert_eq!(
            g.set_state(id(2, 0), CellState::Wall),
            Err(GridError::OutOfBounds(id(2, 0)))
        );
        assert_eq!(g.set_start(id(-1, 0)), Err(GridError::OutOfBounds(id(-1, 0))));
        assert_eq!(g.paint(id(0, 5), CellState::Open), Err(GridError::OutOfBounds(id(0, 5))));
        assert_eq!(g, before);
    }

    #[test]
    fn neighbors_are_bounded_and_ordered() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(
            g.neighbors(id(1, 1)).unwrap(),
            vec![id(0, 1), id(1, 0), id(2, 1), id(1, 2)]
        );
        assert_eq!(g.neighbors(id(0, 0)).unwrap(), vec![id(1, 0), id(0, 1)]);
        assert_eq!(g.neighbors(id(2, 2)).unwrap(), vec![id(1, 2), id(2, 1)]);
        assert_eq!(g.neighbors(id(3, 0)), Err(GridError::OutOfBounds(id(3, 0))));
    }

    #[test]
    fn endpoints_are_unique() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_start(id(0, 0)).unwrap();
        g.set_start(id(1, 1)).unwrap();
        assert_eq!(g.start(), Some(id(1, 1)));
        assert_eq!(g.at(id(0, 0)), Some(CellState::Blank));
        assert_eq!(g.count(CellState::Start), 1);

        g.set_end(id(2, 2)).unwrap();
        // Overwriting an endpoint forgets it.
        g.set_wall(id(2, 2)).unwrap();
        assert_eq!(g.end(), None);
        // Start written over End replaces both roles correctly.
        g.set_end(id(0, 2)).unwrap();
        g.set_start(id(0, 2)).unwrap();
        assert_eq!(g.end(), None);
        assert_eq!(g.start(), Some(id(0, 2)));
        assert_eq!(g.at(id(1, 1)), Some(CellState::Blank));
    }

    #[test]
    fn paint_skips_endpoints() {
        let mut g = Grid::new(1, 3).unwrap();
        g.set_start(id(0, 0)).unwrap();
        g.set_end(id(0, 2)).unwrap();
        assert!(!g.paint(id(0, 0), CellState::Closed).unwrap());
        assert!(!g.paint(id(0, 2), CellState::Open).unwrap());
        assert!(g.paint(id(0, 1), CellState::Path).unwrap());
        assert_eq!(g.to_string(), "S*E");
    }

    #[test]
    fn bulk_clears() {
        let mut g = Grid::parse("S#o\nx*#\n.#E").unwrap();
        g.clear_non_walls();
        assert_eq!(g.to_string(), "S#.\n..#\n.#E");
        g.clear_walls();
        assert_eq!(g.to_string(), "S..\n...\n..E");
        g.reset_all();
        assert_eq!(g.count(CellState::Blank), 9);
        assert_eq!((g.start(), g.end()), (None, None));
    }

    #[test]
    fn scatter_is_deterministic_and_spares_endpoints() {
        let mut a = Grid::new(20, 30).unwrap();
        a.set_start(id(0, 0)).unwrap();
        a.set_end(id(19, 29)).unwrap();
        let mut b = a.clone();

        let placed = a.scatter_walls(0.5, &mut StdRng::seed_from_u64(7));
        b.scatter_walls(0.5, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(placed, a.count(CellState::Wall));
        assert!(placed > 0 && placed < 598);

        let mut full = Grid::new(4, 4).unwrap();
        full.set_start(id(1, 1)).unwrap();
        full.scatter_walls(1.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(full.count(CellState::Wall), 15);
        assert_eq!(full.start(), Some(id(1, 1)));

        let mut none = Grid::new(4, 4).unwrap();
        assert_eq!(none.scatter_walls(0.0, &mut StdRng::seed_from_u64(1)), 0);
    }

    #[test]
    fn scatter_then_clear_walls_restores_blank_cells() {
        for seed in 0..20 {
            for p in [0.0, 0.15, 0.5, 0.9, 1.0] {
                let mut g = Grid::new(9, 13).unwrap();
                g.set_start(id(2, 3)).unwrap();
                g.set_end(id(8, 0)).unwrap();
                let before = g.clone();
                g.scatter_walls(p, &mut StdRng::seed_from_u64(seed));
                g.clear_walls();
                assert_eq!(g, before, "seed {seed}, p {p}");
            }
        }
    }

    #[test]
    fn reset_endpoints_uses_defaults_when_they_fit() {
        let mut g = Grid::new(29, 57).unwrap();
        g.set_start(id(3, 3)).unwrap();
        let (s, e) = g.reset_endpoints().unwrap();
        assert_eq!((s, e), (id(10, 10), id(19, 47)));
        assert_eq!(g.at(id(3, 3)), Some(CellState::Blank));
        assert_eq!(g.count(CellState::Start), 1);
        assert_eq!(g.count(CellState::End), 1);
    }

    #[test]
    fn reset_endpoints_falls_back_to_corners() {
        let mut g = Grid::new(5, 5).unwrap();
        assert_eq!(g.reset_endpoints().unwrap(), (id(0, 0), id(4, 4)));
        // 20x20 would put both defaults on (10, 10).
        let mut g = Grid::new(20, 20).unwrap();
        assert_eq!(g.reset_endpoints().unwrap(), (id(0, 0), id(19, 19)));
        let mut tiny = Grid::new(1, 1).unwrap();
        assert!(tiny.reset_endpoints().is_err());
    }

    #[test]
    fn parse_and_display() {
        let layout = "S..#\n.##.\n...E";
        let g = Grid::parse(layout).unwrap();
        assert_eq!((g.rows(), g.cols()), (3, 4));
        assert_eq!(g.start(), Some(id(0, 0)));
        assert_eq!(g.end(), Some(id(2, 3)));
        assert_eq!(g.count(CellState::Wall), 3);
        assert_eq!(g.to_string(), layout);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Grid::parse(""), Err(LayoutError::Empty));
        assert!(matches!(
            Grid::parse("..\n..."),
            Err(LayoutError::InconsistentSize(_))
        ));
        assert!(matches!(
            Grid::parse("..\n.?"),
            Err(LayoutError::InvalidRune { ch: '?', at, .. }) if at == id(1, 1)
        ));
    }

    #[test]
    fn iter_yields_cells() {
        let g = Grid::parse("S.\n#E").unwrap();
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[2], Cell::new(id(1, 0), CellState::Wall));
        assert_eq!(g.count_fn(|c| c.state.is_endpoint()), 2);
    }
}
