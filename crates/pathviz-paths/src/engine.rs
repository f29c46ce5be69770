//! Search entry points and the state shared by every traversal.

use pathviz_core::{Cancel, CellId, CellState, Grid};

use crate::algorithm::Algorithm;
use crate::reconstruct::build_path;
use crate::scratch::SearchScratch;

/// Result of a search run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The goal was reached. The path runs from the goal back toward the
    /// start, including the goal and excluding the start.
    Found(Vec<CellId>),
    /// Every reachable cell was expanded without reaching the goal.
    NotFound,
    /// The cancellation source fired at a checkpoint.
    Cancelled,
    /// Start or end is missing, out of range, a wall, or both are the same
    /// cell.
    MissingEndpoints,
}

impl SearchOutcome {
    /// The found path, if any.
    pub fn path(&self) -> Option<&[CellId]> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Number of steps from start to goal, if a path was found.
    pub fn steps(&self) -> Option<usize> {
        self.path().map(<[CellId]>::len)
    }
}

/// How a traversal loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Found,
    Exhausted,
    Cancelled,
}

/// A single run in progress: the grid being marked, the endpoints, the
/// per-run scratch and the caller's checkpoint hooks.
pub(crate) struct Search<'a> {
    pub(crate) grid: &'a mut Grid,
    pub(crate) start: CellId,
    pub(crate) end: CellId,
    pub(crate) scratch: SearchScratch,
    pub(crate) expanded: usize,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<CellId>,
    on_step: &'a mut dyn FnMut(&Grid),
    cancel: &'a dyn Cancel,
}

impl<'a> Search<'a> {
    pub(crate) fn new(
        grid: &'a mut Grid,
        start: CellId,
        end: CellId,
        on_step: &'a mut dyn FnMut(&Grid),
        cancel: &'a dyn Cancel,
    ) -> Self {
        let scratch = SearchScratch::new(grid.bounds());
        Self {
            grid,
            start,
            end,
            scratch,
            expanded: 0,
            nbuf: Vec::with_capacity(4),
            on_step,
            cancel,
        }
    }

    #[inline]
    pub(crate) fn cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// End of one expansion: let the caller observe the grid.
    pub(crate) fn checkpoint(&mut self) {
        self.expanded += 1;
        log::trace!("step {}", self.expanded);
        (self.on_step)(&*self.grid);
    }

    /// Paint a search mark, leaving the endpoints visible.
    pub(crate) fn mark(&mut self, id: CellId, state: CellState) {
        if id == self.start || id == self.end {
            return;
        }
        // Ids reaching this point come from the grid's own neighbour lists.
        let _ = self.grid.paint(id, state);
    }

    /// Fill `nbuf` with the passable neighbours of `id`.
    pub(crate) fn load_neighbors(&mut self, id: CellId) {
        self.nbuf.clear();
        if self.grid.neighbors_into(id, &mut self.nbuf).is_err() {
            return;
        }
        let grid = &*self.grid;
        self.nbuf
            .retain(|n| grid.at(*n).is_some_and(CellState::is_passable));
    }
}

fn valid_endpoints(grid: &Grid, start: CellId, end: CellId) -> bool {
    let passable = |id| grid.at(id).is_some_and(CellState::is_passable);
    start != end && passable(start) && passable(end)
}

/// Run `algorithm` on `grid` from `start` to `end`.
///
/// `on_step` is called with the grid after every expanded node and after every
/// cell painted onto the final path. `cancel` is polled before each step; once
/// it fires the run returns [`SearchOutcome::Cancelled`] and leaves the grid as
/// it was at the last checkpoint.
///
/// Expanded cells are painted `Closed`, discovered cells `Open` and the final
/// path `Path`; `start`, `end` and the grid's own Start/End cells keep their
/// state. Call [`Grid::clear_non_walls`] first to erase marks left by an
/// earlier run.
pub fn run<F, C>(
    algorithm: Algorithm,
    grid: &mut Grid,
    start: CellId,
    end: CellId,
    mut on_step: F,
    cancel: &C,
) -> SearchOutcome
where
    F: FnMut(&Grid),
    C: Cancel,
{
    if !valid_endpoints(grid, start, end) {
        log::debug!("{algorithm}: rejected endpoints {start} -> {end}");
        return SearchOutcome::MissingEndpoints;
    }

    let mut search = Search::new(grid, start, end, &mut on_step, cancel);
    let flow = match algorithm {
        Algorithm::AStar | Algorithm::Dijkstra => search.best_first(algorithm),
        Algorithm::Bfs => search.bfs(),
        Algorithm::Dfs => search.dfs(),
    };
    let expanded = search.expanded;

    let outcome = match flow {
        Flow::Cancelled => SearchOutcome::Cancelled,
        Flow::Exhausted => SearchOutcome::NotFound,
        Flow::Found => {
            let Search {
                grid,
                scratch,
                on_step,
                cancel,
                ..
            } = search;
            match build_path(grid, start, end, &scratch, on_step, cancel) {
                Some(path) => SearchOutcome::Found(path),
                None => SearchOutcome::Cancelled,
            }
        }
    };

    log::debug!(
        "{algorithm}: {start} -> {end}, expanded {expanded}, {}",
        match &outcome {
            SearchOutcome::Found(p) => format!("found {} steps", p.len()),
            other => format!("{other:?}"),
        }
    );
    outcome
}

/// Like [`run`], using the Start and End cells tracked by the grid.
///
/// Returns [`SearchOutcome::MissingEndpoints`] when either is unset.
pub fn run_grid<F, C>(algorithm: Algorithm, grid: &mut Grid, on_step: F, cancel: &C) -> SearchOutcome
where
    F: FnMut(&Grid),
    C: Cancel,
{
    match (grid.start(), grid.end()) {
        (Some(start), Some(end)) => run(algorithm, grid, start, end, on_step, cancel),
        _ => SearchOutcome::MissingEndpoints,
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let outcome = SearchOutcome::Found(vec![CellId::new(1, 2), CellId::new(1, 1)]);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
