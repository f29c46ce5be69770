use std::collections::HashMap;

use pathviz_core::{Bounds, CellId};

use crate::traits::Predecessors;

/// Sentinel g/f-score meaning "not reached yet".
pub const UNREACHABLE: u32 = u32::MAX;

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: u32,
    pub(crate) f: u32,
    pub(crate) parent: Option<usize>,
    pub(crate) in_frontier: bool,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: None,
            in_frontier: false,
            closed: false,
        }
    }
}

/// Bookkeeping for a single search run.
///
/// Holds g/f-scores, predecessors and frontier/closed membership for every
/// cell, indexed by the grid's row-major layout. A fresh scratch is created
/// for each run and dropped afterwards, so nothing leaks between runs.
#[derive(Clone, Debug)]
pub struct SearchScratch {
    bounds: Bounds,
    pub(crate) nodes: Vec<Node>,
}

impl SearchScratch {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            nodes: vec![Node::default(); bounds.len()],
        }
    }

    #[inline]
    pub(crate) fn idx(&self, id: CellId) -> Option<usize> {
        self.bounds.index(id)
    }

    #[inline]
    pub(crate) fn id(&self, idx: usize) -> CellId {
        self.bounds.id(idx)
    }

    fn node(&self, id: CellId) -> Option<&Node> {
        self.idx(id).map(|i| &self.nodes[i])
    }

    /// Cost of the cheapest known path to `id`, or [`UNREACHABLE`].
    pub fn g_score(&self, id: CellId) -> u32 {
        self.node(id).map_or(UNREACHABLE, |n| n.g)
    }

    /// Priority of `id` when it was last queued, or [`UNREACHABLE`].
    pub fn f_score(&self, id: CellId) -> u32 {
        self.node(id).map_or(UNREACHABLE, |n| n.f)
    }

    pub fn is_closed(&self, id: CellId) -> bool {
        self.node(id).is_some_and(|n| n.closed)
    }

    pub fn in_frontier(&self, id: CellId) -> bool {
        self.node(id).is_some_and(|n| n.in_frontier)
    }

    /// Number of cells expanded so far.
    pub fn closed_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.closed).count()
    }

    /// Record `from` as the predecessor of `to`. Out-of-range ids are ignored.
    pub fn set_predecessor(&mut self, to: CellId, from: CellId) {
        if let (Some(ti), Some(fi)) = (self.idx(to), self.idx(from)) {
            self.nodes[ti].parent = Some(fi);
        }
    }
}

impl Predecessors for SearchScratch {
    fn predecessor(&self, id: CellId) -> Option<CellId> {
        let parent = self.node(id)?.parent?;
        Some(self.id(parent))
    }
}

impl Predecessors for HashMap<CellId, CellId> {
    fn predecessor(&self, id: CellId) -> Option<CellId> {
        self.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unreached() {
        let s = SearchScratch::new(Bounds::new(2, 3));
        let c = CellId::new(1, 2);
        assert_eq!(s.g_score(c), UNREACHABLE);
        assert_eq!(s.f_score(c), UNREACHABLE);
        assert_eq!(s.predecessor(c), None);
        assert!(!s.is_closed(c));
        assert!(!s.in_frontier(c));
        assert_eq!(s.g_score(CellId::new(5, 5)), UNREACHABLE);
    }

    #[test]
    fn predecessors_map_back_to_ids() {
        let mut s = SearchScratch::new(Bounds::new(3, 3));
        s.set_predecessor(CellId::new(2, 2), CellId::new(1, 2));
        assert_eq!(s.predecessor(CellId::new(2, 2)), Some(CellId::new(1, 2)));
        s.set_predecessor(CellId::new(9, 9), CellId::new(1, 2));
        assert_eq!(s.predecessor(CellId::new(9, 9)), None);
    }
}
