//! Registry of the named filter operations exposed to hosts.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::codec::{decode_array_bounded, decode_integer, encode_output};
use super::errors::{HostError, HostResult};
use crate::filter::{filter, Comparison, Projection};

/// One registered entry point: a (comparison, projection) pair under a
/// stable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FilterLt,
    FilterLte,
    FilterGt,
    FilterGte,
    FilterLtIndex,
    FilterLteIndex,
    FilterGtIndex,
    FilterGteIndex,
}

impl Operation {
    /// Every registered operation, in registration order
    pub const ALL: [Operation; 8] = [
        Operation::FilterLt,
        Operation::FilterGt,
        Operation::FilterLte,
        Operation::FilterGte,
        Operation::FilterLtIndex,
        Operation::FilterGtIndex,
        Operation::FilterLteIndex,
        Operation::FilterGteIndex,
    ];

    /// Registered name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::FilterLt => "filter_lt",
            Operation::FilterLte => "filter_lte",
            Operation::FilterGt => "filter_gt",
            Operation::FilterGte => "filter_gte",
            Operation::FilterLtIndex => "filter_lt_index",
            Operation::FilterLteIndex => "filter_lte_index",
            Operation::FilterGtIndex => "filter_gt_index",
            Operation::FilterGteIndex => "filter_gte_index",
        }
    }

    pub fn comparison(&self) -> Comparison {
        match self {
            Operation::FilterLt | Operation::FilterLtIndex => Comparison::Lt,
            Operation::FilterLte | Operation::FilterLteIndex => Comparison::Lte,
            Operation::FilterGt | Operation::FilterGtIndex => Comparison::Gt,
            Operation::FilterGte | Operation::FilterGteIndex => Comparison::Gte,
        }
    }

    pub fn projection(&self) -> Projection {
        match self {
            Operation::FilterLt
            | Operation::FilterLte
            | Operation::FilterGt
            | Operation::FilterGte => Projection::Value,
            _ => Projection::Index,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| HostError::UnknownOperation(s.to_string()))
    }
}

/// Decodes host values, runs the operation, and encodes the result.
///
/// Decoding completes before the engine runs; a bad element means no
/// filtering happens at all.
pub fn invoke(op: Operation, input: &Value, pivot: &Value) -> HostResult<Value> {
    invoke_bounded(op, input, pivot, usize::MAX)
}

/// Same as [`invoke`], rejecting inputs longer than `max_input_len`.
pub fn invoke_bounded(
    op: Operation,
    input: &Value,
    pivot: &Value,
    max_input_len: usize,
) -> HostResult<Value> {
    let values = decode_array_bounded(input, max_input_len)?;
    let pivot = decode_integer(pivot)?;

    let output = filter(&values, pivot, op.comparison(), op.projection());
    Ok(encode_output(&output))
}
