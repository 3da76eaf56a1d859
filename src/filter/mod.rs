//! Range filter engine
//!
//! Filters an integer sequence against a pivot using sort-then-binary-search:
//!
//! 1. Pair every value with its original position
//! 2. Sort pairs ascending by value
//! 3. Locate the lower and/or upper boundary of the pivot
//! 4. Slice the sorted pairs at the boundary
//! 5. Project the slice to values or original indices
//!
//! The engine is pure and stateless. Each call owns its pair buffer and
//! drops it on return, so calls may run concurrently without locking.
//!
//! Output order follows the ascending sort. For tied values the relative
//! order of original indices is unspecified.

mod bounds;
mod pair;

use std::fmt;

pub use bounds::{lower_bound, upper_bound};
pub use pair::{FilterOutput, Pair, SortedPairs};

/// Comparison applied between each element and the pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// element < pivot
    Lt,
    /// element <= pivot
    Lte,
    /// element > pivot
    Gt,
    /// element >= pivot
    Gte,
}

impl Comparison {
    /// All comparisons
    pub const ALL: [Comparison; 4] = [
        Comparison::Lt,
        Comparison::Lte,
        Comparison::Gt,
        Comparison::Gte,
    ];

    /// Returns the operator symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Lt => "<",
            Comparison::Lte => "<=",
            Comparison::Gt => ">",
            Comparison::Gte => ">=",
        }
    }

    /// Returns whether `value` passes this comparison against `pivot`
    pub fn admits<T: Ord>(&self, value: &T, pivot: &T) -> bool {
        match self {
            Comparison::Lt => value < pivot,
            Comparison::Lte => value <= pivot,
            Comparison::Gt => value > pivot,
            Comparison::Gte => value >= pivot,
        }
    }

    /// The comparison selecting exactly the elements this one rejects
    pub fn complement(&self) -> Comparison {
        match self {
            Comparison::Lt => Comparison::Gte,
            Comparison::Lte => Comparison::Gt,
            Comparison::Gt => Comparison::Lte,
            Comparison::Gte => Comparison::Lt,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// What a filter call returns for each qualifying element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    /// The element's value
    Value,
    /// The element's 0-based position in the input
    Index,
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Value => write!(f, "value"),
            Projection::Index => write!(f, "index"),
        }
    }
}

/// Filters `input` against `pivot`.
///
/// Total over all inputs: an empty input yields an empty output, and a
/// pivot outside the input's range yields an empty or full output.
/// `input` is never mutated.
pub fn filter<T: Ord + Copy>(
    input: &[T],
    pivot: T,
    comparison: Comparison,
    projection: Projection,
) -> FilterOutput<T> {
    let sorted = SortedPairs::build(input);
    let range = sorted.cut(comparison, pivot);
    sorted.project(range, projection)
}

/// Values matching `comparison`, ascending
pub fn select_values<T: Ord + Copy>(input: &[T], pivot: T, comparison: Comparison) -> Vec<T> {
    let sorted = SortedPairs::build(input);
    let range = sorted.cut(comparison, pivot);
    sorted.values(range)
}

/// Original indices of values matching `comparison`, ordered by value
pub fn select_indices<T: Ord + Copy>(
    input: &[T],
    pivot: T,
    comparison: Comparison,
) -> Vec<usize> {
    let sorted = SortedPairs::build(input);
    let range = sorted.cut(comparison, pivot);
    sorted.indices(range)
}

/// Values strictly less than `pivot`
pub fn filter_lt<T: Ord + Copy>(input: &[T], pivot: T) -> Vec<T> {
    select_values(input, pivot, Comparison::Lt)
}

/// Values less than or equal to `pivot`
pub fn filter_lte<T: Ord + Copy>(input: &[T], pivot: T) -> Vec<T> {
    select_values(input, pivot, Comparison::Lte)
}

/// Values strictly greater than `pivot`
pub fn filter_gt<T: Ord + Copy>(input: &[T], pivot: T) -> Vec<T> {
    select_values(input, pivot, Comparison::Gt)
}

/// Values greater than or equal to `pivot`
pub fn filter_gte<T: Ord + Copy>(input: &[T], pivot: T) -> Vec<T> {
    select_values(input, pivot, Comparison::Gte)
}

/// Positions of values strictly less than `pivot`
pub fn filter_lt_index<T: Ord + Copy>(input: &[T], pivot: T) -> Vec<usize> {
    select_indices(input, pivot, Comparison::Lt)
}

/// Positions of values less than or equal to `pivot`
pub fn filter_lte_index<T: Ord + Copy>(input: &[T], pivot: T) -> Vec<usize> {
    select_indices(input, pivot, Comparison::Lte)
}

/// Positions of values strictly greater than `pivot`
pub fn filter_gt_index<T: Ord + Copy>(input: &[T], pivot: T) -> Vec<usize> {
    select_indices(input, pivot, Comparison::Gt)
}

/// Positions of values greater than or equal to `pivot`
pub fn filter_gte_index<T: Ord + Copy>(input: &[T], pivot: T) -> Vec<usize> {
    select_indices(input, pivot, Comparison::Gte)
}
