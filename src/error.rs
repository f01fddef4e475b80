//! Error types for the Sagitta library.
//!
//! All fallible operations in Sagitta return [`Result`], with errors
//! represented by the [`SagittaError`] enum. The correction core itself has
//! no fatal paths (it degrades to "return the input unchanged"), so these
//! errors surface mainly from corpus loading and embedder implementations.
//!
//! # Examples
//!
//! ```
//! use sagitta::error::{Result, SagittaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SagittaError::embedding("provider not reachable"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sagitta operations.
#[derive(Error, Debug)]
pub enum SagittaError {
    /// I/O errors (corpus files, dictionary files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Embedding provider errors (model unavailable, dimension mismatch, etc.)
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SagittaError.
pub type Result<T> = std::result::Result<T, SagittaError>;

impl SagittaError {
    /// Create a new embedding error.
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        SagittaError::Embedding(msg.into())
    }
}
