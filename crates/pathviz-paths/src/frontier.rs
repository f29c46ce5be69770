use std::collections::BinaryHeap;

/// A queued node, ordered by `f` and then by insertion order.
///
/// `g` is the score at push time; an entry whose `g` no longer matches the
/// node's current score is stale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) f: u32,
    pub(crate) seq: u64,
    pub(crate) g: u32,
    pub(crate) idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with a monotonic tie-breaker counter.
///
/// Entries with equal `f` come out in the order they were pushed, which makes
/// exploration order reproducible.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    counter: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, idx: usize, f: u32, g: u32) {
        self.heap.push(Entry {
            f,
            seq: self.counter,
            g,
            idx,
        });
        self.counter += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_f_first() {
        let mut q = Frontier::default();
        q.push(0, 5, 0);
        q.push(1, 2, 0);
        q.push(2, 9, 0);
        assert_eq!(q.len(), 3);
        let order: Vec<_> = std::iter::from_fn(|| q.pop()).map(|e| e.idx).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut q = Frontier::default();
        for idx in [7, 3, 5, 1] {
            q.push(idx, 4, 0);
        }
        q.push(9, 3, 0);
        let order: Vec<_> = std::iter::from_fn(|| q.pop()).map(|e| e.idx).collect();
        assert_eq!(order, vec![9, 7, 3, 5, 1]);
    }
}
