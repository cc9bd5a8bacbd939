//! JSON codec for the persisted state.
//!
//! The wire shape is fixed:
//!
//! ```json
//! {
//!   "todos": [{ "title": "...", "completed": false, "editing": false, "identifier": 1 }],
//!   "todo": { "title": "", "completed": false, "editing": false, "identifier": 2 },
//!   "filter": "All",
//!   "nextIdentifier": 3
//! }
//! ```
//!
//! Decoding is strict: a missing or mistyped key, or a `filter` tag other
//! than the three known ones, fails the whole decode. Unknown extra keys
//! are ignored. There is no partial or defaulted reconstruction.

use serde_json::Value;
use thiserror::Error;

use crate::todo::TodoState;

/// A payload from storage that is not a well-formed state.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("persisted state is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("persisted state has an unexpected shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Encode a state to its JSON value.
pub fn encode(state: &TodoState) -> Value {
    serde_json::to_value(state).expect("state serialization is infallible")
}

/// Decode a JSON value into a state.
///
/// # Errors
/// [`DecodeError::Shape`] when the value does not match the wire shape.
pub fn decode(value: Value) -> Result<TodoState, DecodeError> {
    serde_json::from_value(value).map_err(DecodeError::Shape)
}

/// Encode a state to the bytes written to the state file.
pub fn encode_bytes(state: &TodoState) -> Vec<u8> {
    serde_json::to_vec_pretty(&encode(state)).expect("state serialization is infallible")
}

/// Decode raw file bytes into a state.
///
/// # Errors
/// [`DecodeError::Syntax`] for malformed JSON, [`DecodeError::Shape`] for
/// well-formed JSON of the wrong shape.
pub fn decode_bytes(bytes: &[u8]) -> Result<TodoState, DecodeError> {
    let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::Syntax)?;
    decode(value)
}
