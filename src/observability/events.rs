//! Session lifecycle events
//!
//! Events are explicit and typed; per-request events come from
//! `ObservationScope` instead.

use std::fmt;

/// Observable session events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Request loop begins
    SessionBegin,
    /// Input exhausted, request loop ends
    SessionEnd,
    /// Counter snapshot at session end
    SessionMetrics,
    /// Request could not be parsed or decoded
    RequestRejected,
    /// stdin or stdout failed, session aborts
    SessionAborted,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SessionBegin => "SESSION_BEGIN",
            Event::SessionEnd => "SESSION_END",
            Event::SessionMetrics => "SESSION_METRICS",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::SessionAborted => "SESSION_ABORTED",
        }
    }

    /// Returns whether this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::SessionAborted)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
