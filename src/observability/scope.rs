//! ObservationScope for automatic begin/complete logging
//!
//! - Logs `{name}_BEGIN` on creation (TRACE)
//! - Logs `{name}_COMPLETE` with elapsed microseconds on `complete`
//! - Logs `{name}_FAILED` on `fail`
//! - Logs `{name}_INCOMPLETE` on drop if neither was called

use std::cell::Cell;
use std::time::Instant;

use super::logger::{Logger, Severity};

/// A scope that logs start and completion of one unit of work.
///
/// ```ignore
/// let scope = ObservationScope::with_fields(&logger, "FILTER", &[("op", "filter_lt")]);
/// // ... run the filter ...
/// scope.complete_with_fields(&[("matched", "3")]);
/// ```
pub struct ObservationScope<'a> {
    logger: &'a Logger,
    name: &'a str,
    completed: Cell<bool>,
    fields: Vec<(&'a str, String)>,
    started: Instant,
}

impl<'a> ObservationScope<'a> {
    /// Create a new observation scope
    pub fn new(logger: &'a Logger, name: &'a str) -> Self {
        Self::with_fields(logger, name, &[])
    }

    /// Create a new observation scope carrying fields on every line
    pub fn with_fields(logger: &'a Logger, name: &'a str, fields: &[(&'a str, &str)]) -> Self {
        logger.trace(&format!("{}_BEGIN", name), fields);

        Self {
            logger,
            name,
            completed: Cell::new(false),
            fields: fields.iter().map(|(k, v)| (*k, v.to_string())).collect(),
            started: Instant::now(),
        }
    }

    /// Mark the scope as successfully completed
    pub fn complete(self) {
        self.complete_with_fields(&[]);
    }

    /// Mark the scope as completed with additional fields
    pub fn complete_with_fields(self, extra_fields: &[(&str, &str)]) {
        self.completed.set(true);
        let elapsed = self.elapsed_us();

        let mut all_fields: Vec<(&str, &str)> =
            self.fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
        all_fields.extend(extra_fields.iter().copied());
        all_fields.push(("elapsed_us", elapsed.as_str()));

        self.logger
            .info(&format!("{}_COMPLETE", self.name), &all_fields);
    }

    /// Mark the scope as failed with a reason and error code
    pub fn fail(self, code: &str, reason: &str) {
        self.completed.set(true);

        let mut all_fields: Vec<(&str, &str)> =
            self.fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
        all_fields.push(("code", code));
        all_fields.push(("reason", reason));

        self.logger
            .log(Severity::Warn, &format!("{}_FAILED", self.name), &all_fields);
    }

    /// Check if the scope has been completed
    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }

    fn elapsed_us(&self) -> String {
        self.started.elapsed().as_micros().to_string()
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if !self.completed.get() {
            self.logger.warn(
                &format!("{}_INCOMPLETE", self.name),
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}
