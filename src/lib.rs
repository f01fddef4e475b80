//! # Sagitta
//!
//! Catalog-driven spell correction and prefix autocomplete for search
//! queries.
//!
//! Sagitta builds a domain vocabulary from a product catalog and uses it to
//! correct misspelled or abbreviated query tokens, combining several
//! approximate-matching strategies deterministically:
//!
//! - Static typo and abbreviation lookup tables
//! - Frequency-weighted edit-distance search over the vocabulary
//! - Phonetic normalization matching
//! - Optional semantic similarity via a pluggable embedding provider
//!
//! Autocomplete is served independently by a prefix trie over known phrases.
//!
//! ## Quick start
//!
//! ```
//! use sagitta::document::ProductRecord;
//! use sagitta::engine::CorrectionEngine;
//!
//! # async fn example() {
//! let corpus = vec![ProductRecord {
//!     title: "Samsung Galaxy S21".to_string(),
//!     brand: "Samsung".to_string(),
//!     category: "Mobiles".to_string(),
//!     description: String::new(),
//! }];
//!
//! let engine = CorrectionEngine::build(&corpus);
//! let result = engine.correct_query("samsnug galaxy").await;
//! assert!(result.corrections_made);
//! # }
//! ```

pub mod analysis;
pub mod autocomplete;
pub mod document;
pub mod embedding;
pub mod engine;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
