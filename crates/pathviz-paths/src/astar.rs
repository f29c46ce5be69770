use pathviz_core::CellState;

use crate::algorithm::Algorithm;
use crate::engine::{Flow, Search};
use crate::frontier::Frontier;

impl Search<'_> {
    /// A*/Dijkstra: expand nodes in `(f, insertion order)` order.
    ///
    /// An improved node is pushed again rather than re-keyed in place; the
    /// older entry is skipped when it surfaces. Closed nodes are final.
    pub(crate) fn best_first(&mut self, algorithm: Algorithm) -> Flow {
        let (Some(start_idx), Some(goal_idx)) =
            (self.scratch.idx(self.start), self.scratch.idx(self.end))
        else {
            return Flow::Exhausted;
        };

        {
            let node = &mut self.scratch.nodes[start_idx];
            node.g = 0;
            node.f = algorithm.heuristic(self.start, self.end);
            node.in_frontier = true;
        }
        let mut open = Frontier::default();
        open.push(start_idx, self.scratch.nodes[start_idx].f, 0);
        let mut peak = 1;

        loop {
            if self.cancelled() {
                return Flow::Cancelled;
            }
            let Some(current) = open.pop() else {
                log::trace!("{algorithm}: frontier exhausted, peak size {peak}");
                return Flow::Exhausted;
            };

            let ci = current.idx;
            let node = &self.scratch.nodes[ci];
            // Skip stale entries.
            if node.closed || current.g != node.g {
                continue;
            }
            if ci == goal_idx {
                log::trace!("{algorithm}: goal popped, peak frontier size {peak}");
                return Flow::Found;
            }

            let current_g = node.g;
            let current_id = self.scratch.id(ci);
            self.scratch.nodes[ci].in_frontier = false;
            self.scratch.nodes[ci].closed = true;
            self.mark(current_id, CellState::Closed);

            self.load_neighbors(current_id);
            let nbuf = std::mem::take(&mut self.nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = self.scratch.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.scratch.nodes[ni];
                if n.closed || tentative_g >= n.g {
                    continue;
                }
                n.g = tentative_g;
                n.f = tentative_g + algorithm.heuristic(np, self.end);
                n.parent = Some(ci);
                n.in_frontier = true;

                open.push(ni, n.f, tentative_g);
                self.mark(np, CellState::Open);
            }
            self.nbuf = nbuf;
            peak = peak.max(open.len());

            self.checkpoint();
        }
    }
}

#[cfg(test)]
mod tests {
    use pathviz_core::{CellId, CellState, Grid, NeverCancel};

    use crate::algorithm::Algorithm;
    use crate::engine::{SearchOutcome, run_grid};

    fn id(row: i32, col: i32) -> CellId {
        CellId::new(row, col)
    }

    #[test]
    fn ties_follow_neighbour_order() {
        // Every shortest path ties on an open grid; insertion order settles
        // them, so the path leaves start downwards (its first neighbour).
        let mut g = Grid::parse("S..\n...\n..E").unwrap();
        let outcome = run_grid(Algorithm::AStar, &mut g, |_| {}, &NeverCancel);
        assert_eq!(
            outcome,
            SearchOutcome::Found(vec![id(2, 2), id(2, 1), id(2, 0), id(1, 0)])
        );
    }

    #[test]
    fn astar_heads_straight_for_the_goal_on_open_ground() {
        let mut g = Grid::parse(
            "\
.........
.........
....S...E
.........
.........",
        )
        .unwrap();
        let outcome = run_grid(Algorithm::AStar, &mut g, |_| {}, &NeverCancel);
        assert_eq!(outcome.steps(), Some(4));
        // Only the start's neighbours behind it are discovered, never expanded.
        assert_eq!(g.to_string().lines().nth(2), Some("...oS***E"));
        assert_eq!(g.count(CellState::Closed), 0);
        for row in 0..5 {
            for col in 0..3 {
                assert_eq!(g.at(id(row, col)), Some(CellState::Blank));
            }
        }
    }

    #[test]
    fn astar_matches_bfs_around_obstacles() {
        let layout = "\
S.......
.######.
.#....#.
.#.##.#.
...#E...";
        let mut g = Grid::parse(layout).unwrap();
        let astar = run_grid(Algorithm::AStar, &mut g, |_| {}, &NeverCancel);
        let mut g = Grid::parse(layout).unwrap();
        let bfs = run_grid(Algorithm::Bfs, &mut g, |_| {}, &NeverCancel);
        assert_eq!(astar.steps(), Some(14));
        assert_eq!(astar.steps(), bfs.steps());
    }
}
