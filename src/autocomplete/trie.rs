//! Character trie for bounded prefix completion.
//!
//! Phrases are indexed by their lowercased, trimmed form; the terminal node
//! stores the original-cased phrase. Children are kept in a `BTreeMap`, so
//! sibling traversal is sorted by character and `search_prefix` returns a
//! reproducible set when more matches exist than the result cap.

use std::collections::BTreeMap;

/// A single trie node, owned exclusively by its parent.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_terminal: bool,
    /// Original-cased, trimmed phrase; set only at terminal nodes.
    phrase: Option<String>,
}

/// Prefix trie over known phrases.
#[derive(Debug, Clone, Default)]
pub struct PrefixTrie {
    root: TrieNode,
    phrase_count: usize,
}

impl PrefixTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        PrefixTrie::default()
    }

    /// Build a trie from an iterator of phrases.
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = PrefixTrie::new();
        for phrase in phrases {
            trie.insert(phrase.as_ref());
        }
        trie
    }

    /// Insert a phrase, indexed by its lowercased trimmed form.
    ///
    /// Re-inserting the same normalized phrase overwrites the stored
    /// original casing (last writer wins).
    pub fn insert(&mut self, phrase: &str) {
        let trimmed = phrase.trim();
        if trimmed.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for ch in trimmed.to_lowercase().chars() {
            node = node.children.entry(ch).or_default();
        }

        if !node.is_terminal {
            self.phrase_count += 1;
        }
        node.is_terminal = true;
        node.phrase = Some(trimmed.to_string());
    }

    /// Collect up to `max_results` phrases starting with `prefix`.
    ///
    /// The prefix is matched on the exact lowercased character path; no
    /// fuzzy matching. Results come from a pre-order depth-first traversal
    /// with siblings visited in character order.
    pub fn search_prefix(&self, prefix: &str, max_results: usize) -> Vec<String> {
        let mut node = &self.root;
        for ch in prefix.trim().to_lowercase().chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut results = Vec::new();
        Self::collect(node, max_results, &mut results);
        results
    }

    fn collect(node: &TrieNode, max_results: usize, results: &mut Vec<String>) {
        if results.len() >= max_results {
            return;
        }
        if node.is_terminal
            && let Some(phrase) = &node.phrase
        {
            results.push(phrase.clone());
            if results.len() >= max_results {
                return;
            }
        }
        for child in node.children.values() {
            Self::collect(child, max_results, results);
            if results.len() >= max_results {
                break;
            }
        }
    }

    /// Number of distinct normalized phrases stored.
    pub fn len(&self) -> usize {
        self.phrase_count
    }

    /// True when no phrases are stored.
    pub fn is_empty(&self) -> bool {
        self.phrase_count == 0
    }
}
