//! Observability for fastfilter sessions
//!
//! - Structured JSON logging to stderr
//! - Per-request observation scopes
//! - Session counters
//!
//! Observability never changes filter results. Nothing here is global:
//! the session owns its logger and registry.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use fastfilter::observability::{log_event, Event, Logger, MetricsRegistry, Severity};
//!
//! let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
//! let logger = Logger::with_writer(Severity::Info, buffer.clone());
//! log_event(&logger, Event::SessionBegin, &[]);
//!
//! let line = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
//! assert_eq!(line, "{\"event\":\"SESSION_BEGIN\",\"severity\":\"INFO\"}\n");
//!
//! let metrics = MetricsRegistry::new();
//! metrics.record_served(5, 2);
//! assert_eq!(metrics.snapshot().elements_returned, 2);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{render, Logger, Severity, Sink};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::ObservationScope;

/// Log a lifecycle event with fields
pub fn log_event(logger: &Logger, event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    logger.log(severity, event.as_str(), fields);
}
