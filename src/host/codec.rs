//! JSON encoding and decoding at the host boundary.
//!
//! Host arrays are JSON arrays; host integers are JSON numbers written
//! without a fraction or exponent. Decoding stops at the first bad
//! element, before any filtering happens.

use serde_json::{Number, Value};

use super::errors::{HostError, HostResult, Location};
use crate::filter::FilterOutput;

/// Decodes a JSON array of integers.
pub fn decode_array(value: &Value) -> HostResult<Vec<i64>> {
    let items = as_array(value)?;
    decode_items(items)
}

/// Decodes a JSON array of integers, rejecting arrays longer than `max_len`
/// before looking at any element.
pub fn decode_array_bounded(value: &Value, max_len: usize) -> HostResult<Vec<i64>> {
    let items = as_array(value)?;
    if items.len() > max_len {
        return Err(HostError::InputTooLarge {
            len: items.len(),
            max: max_len,
        });
    }
    decode_items(items)
}

/// Decodes a single JSON integer (the pivot).
pub fn decode_integer(value: &Value) -> HostResult<i64> {
    decode_at(value, Location::Pivot)
}

/// Encodes values as a JSON array, preserving order.
pub fn encode_values(values: &[i64]) -> Value {
    Value::Array(values.iter().map(|&v| Value::from(v)).collect())
}

/// Encodes original indices as a JSON array, preserving order.
pub fn encode_indices(indices: &[usize]) -> Value {
    Value::Array(indices.iter().map(|&i| Value::from(i)).collect())
}

/// Encodes either projection of a filter result.
pub fn encode_output(output: &FilterOutput<i64>) -> Value {
    match output {
        FilterOutput::Values(values) => encode_values(values),
        FilterOutput::Indices(indices) => encode_indices(indices),
    }
}

fn as_array(value: &Value) -> HostResult<&Vec<Value>> {
    value.as_array().ok_or_else(|| HostError::InvalidInput {
        location: Location::Input,
        found: kind_name(value),
    })
}

fn decode_items(items: &[Value]) -> HostResult<Vec<i64>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| decode_at(item, Location::Element(i)))
        .collect()
}

fn decode_at(value: &Value, location: Location) -> HostResult<i64> {
    match value {
        Value::Number(n) => decode_number(n, location),
        other => Err(HostError::InvalidInput {
            location,
            found: kind_name(other),
        }),
    }
}

fn decode_number(n: &Number, location: Location) -> HostResult<i64> {
    if let Some(v) = n.as_i64() {
        return Ok(v);
    }

    let literal = n.to_string();
    if n.is_u64() || !is_float_literal(&literal) {
        return Err(HostError::Overflow { location, literal });
    }

    Err(HostError::InvalidInput {
        location,
        found: "floating-point number",
    })
}

fn is_float_literal(literal: &str) -> bool {
    literal.contains(|c: char| matches!(c, '.' | 'e' | 'E'))
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
