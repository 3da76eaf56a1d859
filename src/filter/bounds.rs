//! Boundary search over sorted pairs.
//!
//! Both searches return an insertion-style cut in `[0, len]`. They walk the
//! same midpoints as the classic recursive form over an inclusive
//! `[lo, hi]`, with `hi` kept exclusive here so the loop never underflows.

use super::pair::Pair;

/// Smallest `i` such that `pairs[i].value >= pivot`.
///
/// Equivalently, the number of elements strictly less than `pivot`.
pub fn lower_bound<T: Ord>(pairs: &[Pair<T>], pivot: &T) -> usize {
    let mut lo = 0;
    let mut hi = pairs.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pairs[mid].value >= *pivot {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    lo
}

/// Smallest `i` such that `pairs[i].value > pivot`.
///
/// Equivalently, the number of elements less than or equal to `pivot`.
pub fn upper_bound<T: Ord>(pairs: &[Pair<T>], pivot: &T) -> usize {
    let mut lo = 0;
    let mut hi = pairs.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pairs[mid].value > *pivot {
            hi = mid;
        } else {
            // Equal to pivot is not yet past the boundary
            lo = mid + 1;
        }
    }

    lo
}
