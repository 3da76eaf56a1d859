//! fastfilter - threshold filtering of integer arrays
//!
//! Filters a sequence against a pivot with one of four comparisons and
//! returns either the matching values or their original positions, ordered
//! by ascending value. Internally the input is paired with its indices,
//! sorted once, and cut at binary-searched boundaries.
//!
//! ```
//! let x = [5_i64, 3, 8, 3, 1];
//! assert_eq!(fastfilter::filter_gte(&x, 3), vec![3, 3, 5, 8]);
//! assert_eq!(fastfilter::filter_lt_index(&x, 3), vec![4]);
//! ```
//!
//! The `host` module wraps the engine in a JSON boundary, and `cli`
//! serves it over stdin/stdout.

pub mod cli;
pub mod filter;
pub mod host;
pub mod observability;

pub use filter::{
    filter, filter_gt, filter_gt_index, filter_gte, filter_gte_index, filter_lt,
    filter_lt_index, filter_lte, filter_lte_index, select_indices, select_values, Comparison,
    FilterOutput, Projection,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
