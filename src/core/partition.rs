//! Balanced block partitioning of an index range.
//!
//! Splitting `n` indices over `p` owners gives every owner `n / p` indices,
//! and the first `n % p` owners one extra. The same rule cuts grid rows over
//! workers and grid columns into blocks.

use std::ops::Range;

/// A contiguous slice `[start, start + len)` of an index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    pub start: usize,
    pub len: usize,
}

impl Partition {
    /// Half-open index range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Inclusive upper bound, or `None` for an empty partition.
    pub fn last(&self) -> Option<usize> {
        (self.len > 0).then(|| self.start + self.len - 1)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Intersection with `[lo, hi)`; may be empty.
    pub fn clamp(&self, lo: usize, hi: usize) -> Range<usize> {
        let start = self.start.max(lo);
        let end = (self.start + self.len).min(hi);
        start..end.max(start)
    }
}

/// Partition owned by `id` when `n` indices are split over `p` owners.
///
/// Panics if `p == 0`.
pub fn partition(id: usize, p: usize, n: usize) -> Partition {
    assert!(p > 0, "cannot partition over zero owners");
    let base = n / p;
    let rem = n % p;
    Partition {
        start: id * base + id.min(rem),
        len: base + usize::from(id < rem),
    }
}

/// All `p` partitions of `n` indices, in owner order.
pub fn partitions(p: usize, n: usize) -> impl ExactSizeIterator<Item = Partition> {
    (0..p).map(move |id| partition(id, p, n))
}
