use pathviz_core::CellId;

/// A predecessor map produced by a search.
///
/// Following predecessors from the goal must end at a cell without one (the
/// start of the search).
pub trait Predecessors {
    /// The cell `id` was reached from, if any.
    fn predecessor(&self, id: CellId) -> Option<CellId>;
}
