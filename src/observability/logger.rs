//! Structured JSON logger
//!
//! - One log line = one event, JSON encoded
//! - `event` first, then `severity`, then fields sorted by key
//! - Synchronous, no buffering
//! - Lines below the logger's minimum severity are dropped

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Parses a config level name, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "info" => Ok(Severity::Info),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Destination for log lines
#[derive(Clone)]
pub enum Sink {
    /// Process stderr
    Stderr,
    /// A shared writer, e.g. a buffer captured by a caller
    Shared(Arc<Mutex<dyn Write + Send>>),
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stderr => write!(f, "Stderr"),
            Sink::Shared(_) => write!(f, "Shared"),
        }
    }
}

/// A structured logger writing JSON lines to stderr by default.
///
/// stdout is reserved for filter responses.
#[derive(Debug, Clone)]
pub struct Logger {
    min_severity: Severity,
    sink: Sink,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Severity::Info)
    }
}

impl Logger {
    /// Create a stderr logger that drops lines below `min_severity`
    pub fn new(min_severity: Severity) -> Self {
        Self {
            min_severity,
            sink: Sink::Stderr,
        }
    }

    /// Create a logger writing to a shared writer instead of stderr
    pub fn with_writer(min_severity: Severity, writer: Arc<Mutex<dyn Write + Send>>) -> Self {
        Self {
            min_severity,
            sink: Sink::Shared(writer),
        }
    }

    /// Returns whether a line at `severity` would be written
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }

    /// Log an event with the given severity and fields
    pub fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        match &self.sink {
            Sink::Stderr => self.log_to_writer(severity, event, fields, &mut io::stderr()),
            Sink::Shared(writer) => {
                let mut guard = writer.lock().unwrap_or_else(PoisonError::into_inner);
                self.log_to_writer(severity, event, fields, &mut *guard);
            }
        }
    }

    /// Log to an arbitrary writer, honoring the minimum severity
    pub fn log_to_writer<W: Write + ?Sized>(
        &self,
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        if !self.enabled(severity) {
            return;
        }

        let line = render(severity, event, fields);

        // Log failures never interrupt filtering
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    pub fn trace(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Trace, event, fields);
    }

    pub fn info(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Info, event, fields);
    }

    pub fn warn(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Warn, event, fields);
    }
}

/// Renders one log line, including the trailing newline.
///
/// Fields are output in deterministic order (alphabetical by key).
pub fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(128);

    output.push_str("{\"event\":\"");
    escape_json_string(&mut output, event);
    output.push_str("\",\"severity\":\"");
    output.push_str(severity.as_str());
    output.push('"');

    let mut sorted_fields: Vec<_> = fields.iter().collect();
    sorted_fields.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted_fields {
        output.push_str(",\"");
        escape_json_string(&mut output, key);
        output.push_str("\":\"");
        escape_json_string(&mut output, value);
        output.push('"');
    }

    output.push_str("}\n");
    output
}

fn escape_json_string(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}

/// Logger writing into an in-memory buffer, plus the buffer
#[cfg(test)]
pub(crate) fn capture_logger(min_severity: Severity) -> (Logger, Arc<Mutex<Vec<u8>>>) {
    let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
    let logger = Logger::with_writer(min_severity, buffer.clone());
    (logger, buffer)
}

/// Parses every captured line as JSON
#[cfg(test)]
pub(crate) fn captured_lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
    let bytes = buffer.lock().unwrap().clone();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}
