use pathviz_core::CellId;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: CellId, b: CellId) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Heuristic that never estimates anything, turning A* into Dijkstra.
#[inline]
pub fn zero(_: CellId, _: CellId) -> u32 {
    0
}
