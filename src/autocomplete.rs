//! Prefix autocomplete over known phrases.
//!
//! Independent from the spell-correction pipeline: a trie over product
//! titles answers "complete this prefix" requests with a bounded number of
//! full phrases.

pub mod trie;

pub use trie::PrefixTrie;
