//! JSON line I/O for the CLI
//!
//! - Input: one JSON request object per line
//! - Output: one JSON response object per line
//! - UTF-8 only

use std::io::{BufRead, Write};

use serde_json::{json, Map, Value};

use super::errors::{CliError, CliResult};

/// Read a single request line
pub fn read_request<R: BufRead>(reader: &mut R) -> CliResult<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(line)
}

/// Iterate request lines, skipping blank ones
pub fn read_requests<R: BufRead>(reader: R) -> impl Iterator<Item = CliResult<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(Ok(line)),
        Err(e) => Some(Err(CliError::from(e))),
    })
}

/// Build a success response
pub fn ok_response(id: Option<Value>, data: Value) -> Value {
    let mut response = Map::new();
    response.insert("status".to_string(), json!("ok"));
    if let Some(id) = id {
        response.insert("id".to_string(), id);
    }
    response.insert("data".to_string(), data);
    Value::Object(response)
}

/// Build an error response
pub fn error_response(id: Option<Value>, code: &str, message: &str) -> Value {
    let mut response = Map::new();
    response.insert("status".to_string(), json!("error"));
    if let Some(id) = id {
        response.insert("id".to_string(), id);
    }
    response.insert("code".to_string(), json!(code));
    response.insert("message".to_string(), json!(message));
    Value::Object(response)
}

/// Write one JSON value followed by a newline
pub fn write_line<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
