//! Text analysis module for Sagitta.
//!
//! This module provides the tokenization used across the library. The same
//! tokenizer is applied to catalog fields at index-build time and to user
//! queries at correction time, so both sides agree on what a "word" is.

pub mod tokenizer;

pub use tokenizer::QueryTokenizer;
