//! Index-preserving pairs and the sorted sequence built from them.

use std::ops::Range;

use super::bounds;
use super::{Comparison, Projection};

/// A value paired with its position in the caller's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<T> {
    /// The input value
    pub value: T,
    /// 0-based position of the value in the original input
    pub index: usize,
}

/// Input pairs sorted ascending by value.
///
/// Owned by a single filter call and dropped when it returns. Ties keep
/// whatever relative order the unstable sort leaves them in.
#[derive(Debug, Clone)]
pub struct SortedPairs<T> {
    pairs: Vec<Pair<T>>,
}

impl<T: Ord + Copy> SortedPairs<T> {
    /// Pairs every element with its index and sorts by value.
    ///
    /// The comparison runs on the full value; there is no key narrowing.
    pub fn build(input: &[T]) -> Self {
        let mut pairs: Vec<Pair<T>> = input
            .iter()
            .enumerate()
            .map(|(index, &value)| Pair { value, index })
            .collect();

        pairs.sort_unstable_by_key(|pair| pair.value);

        Self { pairs }
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the input was empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The sorted pairs
    pub fn as_slice(&self) -> &[Pair<T>] {
        &self.pairs
    }

    /// First position whose value is not less than `pivot`.
    pub fn lower_bound(&self, pivot: T) -> usize {
        bounds::lower_bound(&self.pairs, &pivot)
    }

    /// First position whose value is greater than `pivot`.
    pub fn upper_bound(&self, pivot: T) -> usize {
        bounds::upper_bound(&self.pairs, &pivot)
    }

    /// Half-open range of sorted positions that satisfy `comparison`
    /// against `pivot`.
    pub fn cut(&self, comparison: Comparison, pivot: T) -> Range<usize> {
        match comparison {
            Comparison::Lt => 0..self.lower_bound(pivot),
            Comparison::Lte => 0..self.upper_bound(pivot),
            Comparison::Gt => self.upper_bound(pivot)..self.len(),
            Comparison::Gte => self.lower_bound(pivot)..self.len(),
        }
    }

    /// Number of elements that satisfy `comparison`, without projecting.
    pub fn count(&self, comparison: Comparison, pivot: T) -> usize {
        self.cut(comparison, pivot).len()
    }

    /// Values in `range`, in sorted order.
    pub fn values(&self, range: Range<usize>) -> Vec<T> {
        self.pairs[range].iter().map(|pair| pair.value).collect()
    }

    /// Original indices in `range`, in sorted order.
    pub fn indices(&self, range: Range<usize>) -> Vec<usize> {
        self.pairs[range].iter().map(|pair| pair.index).collect()
    }

    /// Projects `range` according to `projection`.
    pub fn project(&self, range: Range<usize>, projection: Projection) -> FilterOutput<T> {
        match projection {
            Projection::Value => FilterOutput::Values(self.values(range)),
            Projection::Index => FilterOutput::Indices(self.indices(range)),
        }
    }
}

/// Result of a filter call: either the qualifying values or their
/// original positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutput<T> {
    /// Values, ascending
    Values(Vec<T>),
    /// Original 0-based indices, ordered by ascending value
    Indices(Vec<usize>),
}

impl<T> FilterOutput<T> {
    /// Number of elements in the output
    pub fn len(&self) -> usize {
        match self {
            FilterOutput::Values(values) => values.len(),
            FilterOutput::Indices(indices) => indices.len(),
        }
    }

    /// Returns true if nothing matched
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sorts_and_keeps_positions() {
        let sorted = SortedPairs::build(&[5, 3, 8, 3, 1]);

        let values: Vec<i64> = sorted.as_slice().iter().map(|p| p.value).collect();
        assert_eq!(values, vec![1, 3, 3, 5, 8]);

        for pair in sorted.as_slice() {
            assert_eq!([5, 3, 8, 3, 1][pair.index], pair.value);
        }
    }

    #[test]
    fn test_build_empty() {
        let sorted = SortedPairs::<i64>::build(&[]);
        assert!(sorted.is_empty());
        assert_eq!(sorted.lower_bound(0), 0);
        assert_eq!(sorted.upper_bound(0), 0);
    }

    #[test]
    fn test_full_width_ordering() {
        // Values that differ only above the low 32 bits
        let big = 1_i64 << 40;
        let sorted = SortedPairs::build(&[big, -big, 0, i64::MAX, i64::MIN]);

        let values: Vec<i64> = sorted.as_slice().iter().map(|p| p.value).collect();
        assert_eq!(values, vec![i64::MIN, -big, 0, big, i64::MAX]);
    }

    #[test]
    fn test_cut_ranges() {
        let sorted = SortedPairs::build(&[5, 3, 8, 3, 1]);

        assert_eq!(sorted.cut(Comparison::Lt, 3), 0..1);
        assert_eq!(sorted.cut(Comparison::Lte, 3), 0..3);
        assert_eq!(sorted.cut(Comparison::Gt, 3), 3..5);
        assert_eq!(sorted.cut(Comparison::Gte, 3), 1..5);
        assert_eq!(sorted.count(Comparison::Gte, 3), 4);
    }

    #[test]
    fn test_project() {
        let sorted = SortedPairs::build(&[10, 20]);

        assert_eq!(
            sorted.project(0..2, Projection::Value),
            FilterOutput::Values(vec![10, 20])
        );
        assert_eq!(
            sorted.project(1..2, Projection::Index),
            FilterOutput::Indices(vec![1])
        );
        assert_eq!(sorted.project(1..1, Projection::Index).len(), 0);
    }
}
