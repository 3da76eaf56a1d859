//! Request parsing for the line-oriented JSON protocol.
//!
//! ```json
//! {"id": 7, "op": "filter_gte_index", "input": [5, 3, 8], "pivot": 3}
//! ```
//!
//! `id` is optional and echoed back verbatim.

use serde_json::{Map, Value};

use super::errors::{HostError, HostResult};
use super::registry::{invoke_bounded, Operation};

/// A decoded filter request
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Caller-supplied correlation id
    pub id: Option<Value>,
    /// Operation to run
    pub op: Operation,
    /// Host array to filter (decoded on execute)
    pub input: Value,
    /// Pivot (decoded on execute)
    pub pivot: Value,
}

impl Request {
    /// Parses a request object.
    ///
    /// Element and pivot validation is left to [`Request::execute`] so the
    /// codec reports exact positions.
    pub fn from_value(value: Value) -> HostResult<Self> {
        let mut object = match value {
            Value::Object(map) => map,
            _ => {
                return Err(HostError::MalformedRequest(
                    "request must be a JSON object".to_string(),
                ))
            }
        };

        let id = object.remove("id");
        let op = match take_field(&mut object, "op")? {
            Value::String(name) => name.parse::<Operation>()?,
            _ => {
                return Err(HostError::MalformedRequest(
                    "field 'op' must be a string".to_string(),
                ))
            }
        };
        let input = take_field(&mut object, "input")?;
        let pivot = take_field(&mut object, "pivot")?;

        Ok(Self {
            id,
            op,
            input,
            pivot,
        })
    }

    /// Parses one line of request JSON.
    pub fn parse_line(line: &str) -> HostResult<Self> {
        let value: Value = serde_json::from_str(line)
            .map_err(|e| HostError::MalformedRequest(format!("invalid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Runs the request, rejecting inputs longer than `max_input_len`.
    pub fn execute(&self, max_input_len: usize) -> HostResult<Value> {
        invoke_bounded(self.op, &self.input, &self.pivot, max_input_len)
    }

    /// Number of elements in the input, if it is an array
    pub fn input_len(&self) -> Option<usize> {
        self.input.as_array().map(Vec::len)
    }
}

/// Extracts the `id` of a request that may have failed to parse.
pub fn request_id(line: &str) -> Option<Value> {
    serde_json::from_str::<Value>(line)
        .ok()
        .and_then(|value| value.get("id").cloned())
}

fn take_field(object: &mut Map<String, Value>, field: &str) -> HostResult<Value> {
    object
        .remove(field)
        .ok_or_else(|| HostError::MalformedRequest(format!("missing field '{}'", field)))
}
