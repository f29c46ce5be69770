use std::collections::VecDeque;

use pathviz_core::CellState;

use crate::engine::{Flow, Search};

impl Search<'_> {
    /// Breadth-first search in FIFO order.
    ///
    /// A cell is discovered once, when first queued. The goal is accepted as
    /// soon as it is discovered, without waiting for it to be dequeued.
    pub(crate) fn bfs(&mut self) -> Flow {
        let (Some(start_idx), Some(goal_idx)) =
            (self.scratch.idx(self.start), self.scratch.idx(self.end))
        else {
            return Flow::Exhausted;
        };

        // `in_frontier` doubles as the discovered flag: it is never cleared.
        self.scratch.nodes[start_idx].in_frontier = true;
        self.scratch.nodes[start_idx].g = 0;
        let mut queue = VecDeque::from([start_idx]);

        loop {
            if self.cancelled() {
                return Flow::Cancelled;
            }
            let Some(ci) = queue.pop_front() else {
                return Flow::Exhausted;
            };

            let current_id = self.scratch.id(ci);
            let current_g = self.scratch.nodes[ci].g;
            self.scratch.nodes[ci].closed = true;
            self.mark(current_id, CellState::Closed);

            self.load_neighbors(current_id);
            let nbuf = std::mem::take(&mut self.nbuf);
            let mut reached = false;
            for &np in nbuf.iter() {
                let Some(ni) = self.scratch.idx(np) else {
                    continue;
                };
                let n = &mut self.scratch.nodes[ni];
                if n.in_frontier || n.closed {
                    continue;
                }
                n.in_frontier = true;
                n.g = current_g + 1;
                n.parent = Some(ci);

                if ni == goal_idx {
                    reached = true;
                    break;
                }
                queue.push_back(ni);
                self.mark(np, CellState::Open);
            }
            self.nbuf = nbuf;

            self.checkpoint();
            if reached {
                return Flow::Found;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pathviz_core::{CellId, CellState, Grid, NeverCancel};

    use crate::algorithm::Algorithm;
    use crate::engine::{SearchOutcome, run_grid};

    #[test]
    fn goal_is_accepted_when_discovered() {
        let mut g = Grid::parse("S..\n...\n..E").unwrap();
        let mut steps = 0;
        let outcome = run_grid(Algorithm::Bfs, &mut g, |_| steps += 1, &NeverCancel);
        assert_eq!(outcome.steps(), Some(4));
        // Seven expansions, the last one discovering E, then three path cells.
        assert_eq!(steps, 7 + 3);
        // Queued but never dequeued.
        assert_eq!(g.at(CellId::new(1, 2)), Some(CellState::Open));
    }

    #[test]
    fn path_follows_first_discovery() {
        let mut g = Grid::parse("S.\n.E").unwrap();
        let outcome = run_grid(Algorithm::Bfs, &mut g, |_| {}, &NeverCancel);
        assert_eq!(
            outcome,
            SearchOutcome::Found(vec![CellId::new(1, 1), CellId::new(1, 0)])
        );
    }
}
