//! Error types for leadboard-core
//!
//! The dashboard itself has no recoverable-failure domain: selection
//! widgets fall back to defaults instead of erroring. The only strict
//! boundary is CLI flag parsing, which surfaces `UnknownTag`.

use thiserror::Error;

/// Core error type for leadboard operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown {kind} tag: '{tag}'")]
    UnknownTag { kind: &'static str, tag: String },
}

impl CoreError {
    pub fn unknown_tag(kind: &'static str, tag: &str) -> Self {
        CoreError::UnknownTag {
            kind,
            tag: tag.to_string(),
        }
    }
}
