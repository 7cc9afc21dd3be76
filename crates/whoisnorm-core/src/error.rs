//! Error types for the normalization engine
//!
//! Absence of a field is never an error — every lookup either finds a value
//! or reports absence, and a record with all fields absent is still a valid
//! record. The only failure category is undecodable input text, which occurs
//! before the engine ever sees a tree.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input text was not a valid JSON document
    #[error("invalid document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for normalizer operations
pub type Result<T> = std::result::Result<T, Error>;
