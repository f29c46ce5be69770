use pathviz_core::CellState;

use crate::engine::{Flow, Search};

impl Search<'_> {
    /// Depth-first search with an explicit LIFO stack.
    ///
    /// A cell may be pushed several times; its predecessor is the last closed
    /// cell that pushed it. Popped cells that are already closed are skipped.
    pub(crate) fn dfs(&mut self) -> Flow {
        let (Some(start_idx), Some(goal_idx)) =
            (self.scratch.idx(self.start), self.scratch.idx(self.end))
        else {
            return Flow::Exhausted;
        };

        let mut stack = vec![start_idx];

        loop {
            if self.cancelled() {
                return Flow::Cancelled;
            }
            let Some(ci) = stack.pop() else {
                return Flow::Exhausted;
            };
            if ci == goal_idx {
                return Flow::Found;
            }
            if self.scratch.nodes[ci].closed {
                continue;
            }

            let current_id = self.scratch.id(ci);
            self.scratch.nodes[ci].closed = true;
            self.scratch.nodes[ci].in_frontier = false;
            self.mark(current_id, CellState::Closed);

            self.load_neighbors(current_id);
            let nbuf = std::mem::take(&mut self.nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = self.scratch.idx(np) else {
                    continue;
                };
                let n = &mut self.scratch.nodes[ni];
                if n.closed || ni == start_idx {
                    continue;
                }
                n.parent = Some(ci);
                n.in_frontier = true;
                stack.push(ni);
                self.mark(np, CellState::Open);
            }
            self.nbuf = nbuf;

            self.checkpoint();
        }
    }
}
