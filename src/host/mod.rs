//! Host boundary
//!
//! Stands between callers and the filter engine:
//! - Decodes JSON arrays and pivots into `i64` (fail fast, no partial work)
//! - Encodes engine output back into JSON arrays
//! - Registers the eight named entry points
//!
//! Integers outside `i64` are rejected with FILTER_OVERFLOW, never
//! truncated. Floats and non-numbers are rejected with FILTER_INVALID_INPUT.

mod codec;
mod errors;
mod registry;
mod request;

pub use codec::{
    decode_array, decode_array_bounded, decode_integer, encode_indices, encode_output,
    encode_values,
};
pub use errors::{HostError, HostResult, Location};
pub use registry::{invoke, invoke_bounded, Operation};
pub use request::{request_id, Request};
