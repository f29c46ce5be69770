use pathviz_core::{Cancel, CellId, CellState, Grid};

use crate::traits::Predecessors;

/// Walk the predecessor map back from `end` and paint the path.
///
/// The returned path starts at `end` and stops before the first cell without
/// a predecessor (normally `start`), so it has one entry per step. Every
/// cell on it other than `start` and `end` is painted [`CellState::Path`],
/// and `on_step` is called after each one.
///
/// `cancel` is polled before each cell is painted; `None` means it fired and
/// the path was left partially drawn. A predecessor chain longer than the
/// grid (a cycle) is cut off there.
pub fn build_path<P, F, C>(
    grid: &mut Grid,
    start: CellId,
    end: CellId,
    preds: &P,
    mut on_step: F,
    cancel: &C,
) -> Option<Vec<CellId>>
where
    P: Predecessors + ?Sized,
    F: FnMut(&Grid),
    C: Cancel + ?Sized,
{
    let mut path = Vec::new();
    let mut current = end;
    while let Some(prev) = preds.predecessor(current) {
        if path.len() >= grid.len() {
            log::warn!("predecessor chain from {end} is longer than the grid, cutting it off");
            break;
        }
        path.push(current);
        if current != start && current != end {
            if cancel.is_cancelled() {
                return None;
            }
            // Out-of-range cells from a foreign map are left unpainted.
            let _ = grid.paint(current, CellState::Path);
            on_step(&*grid);
        }
        current = prev;
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pathviz_core::{CancelToken, NeverCancel};

    use super::*;

    fn id(row: i32, col: i32) -> CellId {
        CellId::new(row, col)
    }

    fn chain(cells: &[CellId]) -> HashMap<CellId, CellId> {
        cells.windows(2).map(|w| (w[1], w[0])).collect()
    }

    #[test]
    fn paints_between_the_endpoints() {
        let mut g = Grid::parse("S...E").unwrap();
        let preds = chain(&[id(0, 0), id(0, 1), id(0, 2), id(0, 3), id(0, 4)]);
        let mut steps = 0;
        let path = build_path(&mut g, id(0, 0), id(0, 4), &preds, |_| steps += 1, &NeverCancel);
        assert_eq!(path, Some(vec![id(0, 4), id(0, 3), id(0, 2), id(0, 1)]));
        assert_eq!(g.to_string(), "S***E");
        assert_eq!(steps, 3);
    }

    #[test]
    fn end_without_predecessor_gives_empty_path() {
        let mut g = Grid::parse("S.E").unwrap();
        let before = g.clone();
        let path = build_path(&mut g, id(0, 0), id(0, 2), &HashMap::new(), |_| {}, &NeverCancel);
        assert_eq!(path, Some(Vec::new()));
        assert_eq!(g, before);
    }

    #[test]
    fn cancel_stops_painting() {
        let mut g = Grid::parse("S...E").unwrap();
        let preds = chain(&[id(0, 0), id(0, 1), id(0, 2), id(0, 3), id(0, 4)]);
        let token = CancelToken::new();
        let path = build_path(&mut g, id(0, 0), id(0, 4), &preds, |_| token.cancel(), &token);
        assert_eq!(path, None);
        assert_eq!(g.to_string(), "S..*E");
    }

    #[test]
    fn cycles_are_cut_off() {
        let mut g = Grid::new(2, 2).unwrap();
        let mut preds = HashMap::new();
        preds.insert(id(1, 1), id(1, 0));
        preds.insert(id(1, 0), id(0, 0));
        preds.insert(id(0, 0), id(1, 0));
        let path = build_path(&mut g, id(0, 1), id(1, 1), &preds, |_| {}, &NeverCancel).unwrap();
        assert_eq!(path.len(), g.len());
    }
}
