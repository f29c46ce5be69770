use pathviz_core::{Cancel, CellId, CellState, Grid, GridError, NeverCancel};
use rand::Rng;

/// How a maze generation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generation {
    Complete,
    /// The cancellation source fired; the maze is partially drawn.
    Cancelled,
}

/// A rectangle of corridor cells still to be divided, inclusive on both ends.
#[derive(Clone, Copy, Debug)]
struct Chamber {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
    horizontal: bool,
}

/// Recursive-division maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a maze onto `grid`, calling `on_step` after every wall cell.
    ///
    /// See [`generate_until`](Self::generate_until).
    pub fn generate<F>(&mut self, grid: &mut Grid, on_step: F) -> Result<Generation, GridError>
    where
        F: FnMut(&Grid),
    {
        self.generate_until(grid, on_step, &NeverCancel)
    }

    /// Draw a maze onto `grid`, stopping early if `cancel` fires.
    ///
    /// The border becomes wall, then the interior is split by walls on even
    /// rows/columns, each with one door on an odd cell, alternating
    /// orientation. Start and End cells are never overwritten. Cells the
    /// maze does not touch keep their current state, so callers usually
    /// clear the grid first.
    ///
    /// `cancel` is polled before every write. Fails with
    /// [`GridError::InvalidGridDimensions`] when either dimension is even,
    /// before writing anything.
    pub fn generate_until<F, C>(
        &mut self,
        grid: &mut Grid,
        mut on_step: F,
        cancel: &C,
    ) -> Result<Generation, GridError>
    where
        F: FnMut(&Grid),
        C: Cancel + ?Sized,
    {
        let (rows, cols) = (grid.rows(), grid.cols());
        if rows % 2 == 0 || cols % 2 == 0 {
            return Err(GridError::InvalidGridDimensions { rows, cols });
        }

        let mut writes = 0usize;
        let bounds = grid.bounds();
        for id in bounds.iter().filter(|id| bounds.is_border(*id)) {
            if !put_wall(grid, id, &mut on_step, cancel, &mut writes)? {
                log::debug!("maze generation cancelled after {writes} walls");
                return Ok(Generation::Cancelled);
            }
        }

        let mut chambers = vec![Chamber {
            min_x: 1,
            max_x: cols - 2,
            min_y: 1,
            max_y: rows - 2,
            horizontal: self.rng.random_bool(0.5),
        }];
        while let Some(c) = chambers.pop() {
            let Some((line, door)) = self.split(&c) else {
                continue;
            };
            let (lo, hi) = if c.horizontal {
                (c.min_x, c.max_x)
            } else {
                (c.min_y, c.max_y)
            };
            for i in (lo..=hi).filter(|i| *i != door) {
                let id = if c.horizontal {
                    CellId::new(line, i)
                } else {
                    CellId::new(i, line)
                };
                if !put_wall(grid, id, &mut on_step, cancel, &mut writes)? {
                    log::debug!("maze generation cancelled after {writes} walls");
                    return Ok(Generation::Cancelled);
                }
            }

            // Second half pushed first so the first half is finished before
            // the second is started.
            let (first, second) = if c.horizontal {
                (
                    Chamber { max_y: line - 1, horizontal: false, ..c },
                    Chamber { min_y: line + 1, horizontal: false, ..c },
                )
            } else {
                (
                    Chamber { max_x: line - 1, horizontal: true, ..c },
                    Chamber { min_x: line + 1, horizontal: true, ..c },
                )
            };
            chambers.push(second);
            chambers.push(first);
        }

        log::debug!("generated {rows}x{cols} maze with {writes} walls");
        Ok(Generation::Complete)
    }

    /// Pick the wall line (an even row or column) and its door (an odd cell
    /// along the wall) for `c`, or `None` if `c` is too small to divide.
    fn split(&mut self, c: &Chamber) -> Option<(i32, i32)> {
        let (span, across) = if c.horizontal {
            ((c.min_x, c.max_x), (c.min_y, c.max_y))
        } else {
            ((c.min_y, c.max_y), (c.min_x, c.max_x))
        };
        if span.1 - span.0 < 2 {
            return None;
        }
        let lines: Vec<i32> = (across.0..=across.1).filter(|v| v % 2 == 0).collect();
        if lines.is_empty() {
            return None;
        }
        let line = lines[self.rng.random_range(0..lines.len())];
        let v = self.rng.random_range(span.0..=span.1);
        let door = (v / 2) * 2 + 1;
        Some((line, door))
    }
}

/// Wall one cell unless it is an endpoint. Returns `false` if `cancel` fired
/// first.
fn put_wall<F, C>(
    grid: &mut Grid,
    id: CellId,
    on_step: &mut F,
    cancel: &C,
    writes: &mut usize,
) -> Result<bool, GridError>
where
    F: FnMut(&Grid),
    C: Cancel + ?Sized,
{
    if cancel.is_cancelled() {
        return Ok(false);
    }
    if grid.paint(id, CellState::Wall)? {
        *writes += 1;
        on_step(&*grid);
    }
    Ok(true)
}
