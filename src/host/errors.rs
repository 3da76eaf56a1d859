//! Host boundary error types
//!
//! Error codes:
//! - FILTER_INVALID_INPUT
//! - FILTER_OVERFLOW
//! - FILTER_UNKNOWN_OPERATION
//! - FILTER_INPUT_TOO_LARGE
//! - FILTER_MALFORMED_REQUEST

use std::fmt;

use thiserror::Error;

/// Result type for host boundary operations
pub type HostResult<T> = Result<T, HostError>;

/// Where in a request a bad value was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The input array itself
    Input,
    /// An element of the input array
    Element(usize),
    /// The pivot
    Pivot,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Input => write!(f, "input"),
            Location::Element(i) => write!(f, "input[{}]", i),
            Location::Pivot => write!(f, "pivot"),
        }
    }
}

/// Errors raised while decoding host values or dispatching operations.
///
/// The engine itself never fails; everything here is caught before it runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// Value is not an integer (float, string, null, ...) or the input is
    /// not an array
    #[error("{location}: expected an integer, found {found}")]
    InvalidInput {
        location: Location,
        found: &'static str,
    },

    /// Integer does not fit the engine's 64-bit integer type
    #[error("{location}: {literal} does not fit in a 64-bit signed integer")]
    Overflow { location: Location, literal: String },

    /// Operation name not in the registry
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Input longer than the configured limit
    #[error("Input has {len} elements, limit is {max}")]
    InputTooLarge { len: usize, max: usize },

    /// Request is not an object or lacks a required field
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl HostError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            HostError::InvalidInput { .. } => "FILTER_INVALID_INPUT",
            HostError::Overflow { .. } => "FILTER_OVERFLOW",
            HostError::UnknownOperation(_) => "FILTER_UNKNOWN_OPERATION",
            HostError::InputTooLarge { .. } => "FILTER_INPUT_TOO_LARGE",
            HostError::MalformedRequest(_) => "FILTER_MALFORMED_REQUEST",
        }
    }

    /// Returns where the offending value sits, if the error is about one
    pub fn location(&self) -> Option<Location> {
        match self {
            HostError::InvalidInput { location, .. } | HostError::Overflow { location, .. } => {
                Some(*location)
            }
            _ => None,
        }
    }
}
