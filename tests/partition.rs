//! Property tests for the balanced block partitioner.
//!
//! Every split of `n` indices over `p` owners must be disjoint, cover
//! `[0, n)` exactly, keep sizes within one of each other, and hand the
//! remainder to the lowest owners.

use proptest::prelude::*;
use relaxa::core::partition::{partition, partitions};

proptest! {
    /// Partitions tile `[0, n)` in owner order with no gaps or overlaps.
    #[test]
    fn partitions_tile_the_range(n in 0usize..5_000, p in 1usize..200) {
        let mut next = 0;
        for part in partitions(p, n) {
            prop_assert_eq!(part.start, next);
            next += part.len;
        }
        prop_assert_eq!(next, n);
    }

    /// Sizes differ by at most one, larger shares first.
    #[test]
    fn sizes_are_balanced(n in 0usize..5_000, p in 1usize..200) {
        let sizes: Vec<usize> = partitions(p, n).map(|part| part.len).collect();
        let min = *sizes.iter().min().unwrap();
        let max = *sizes.iter().max().unwrap();
        prop_assert!(max - min <= 1);
        prop_assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
        prop_assert_eq!(sizes.iter().filter(|&&s| s == n / p + 1).count(), if n % p == 0 { 0 } else { n % p });
    }

    /// The closed-form bounds agree with the inclusive `last()` view.
    #[test]
    fn closed_form_bounds(n in 1usize..5_000, p in 1usize..200, id_seed in 0usize..10_000) {
        let id = id_seed % p;
        let part = partition(id, p, n);
        let size = n / p + usize::from(id < n % p);
        prop_assert_eq!(part.len, size);
        prop_assert_eq!(part.start, id * (n / p) + id.min(n % p));
        if size > 0 {
            prop_assert_eq!(part.last(), Some(part.start + size - 1));
        } else {
            prop_assert_eq!(part.last(), None);
        }
    }
}

/// The copier and wavefront default of twenty column blocks over a small width.
#[test]
fn twenty_blocks_over_narrow_grid() {
    let parts: Vec<_> = partitions(20, 7).collect();
    assert_eq!(parts.iter().filter(|p| !p.is_empty()).count(), 7);
    assert_eq!(parts[6].range(), 6..7);
    assert!(parts[7].is_empty());
}
