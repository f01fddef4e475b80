//! Domain vocabulary built from the product catalog.
//!
//! The vocabulary is the set of words the corrector considers correctly
//! spelled, together with weighted occurrence frequencies and per-origin
//! term sets (brand, product, category) used to prioritize semantic
//! candidates. It is built once from the corpus, never mutated afterwards;
//! a corpus refresh builds a fresh index and swaps it in at the engine
//! level.

use ahash::{AHashMap, AHashSet};
use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::QueryTokenizer;
use crate::document::ProductRecord;

/// Frequency weight added per occurrence, by field of origin.
const TITLE_WEIGHT: u64 = 3;
const BRAND_WEIGHT: u64 = 5;
const CATEGORY_WEIGHT: u64 = 2;
const DESCRIPTION_WEIGHT: u64 = 1;

/// Minimum token length for inclusion, by field of origin.
const TITLE_MIN_LEN: usize = 3;
const BRAND_MIN_LEN: usize = 2;
const CATEGORY_MIN_LEN: usize = 3;
const DESCRIPTION_MIN_LEN: usize = 4;

/// Only the first 100 description tokens contribute to the vocabulary.
const DESCRIPTION_TOKEN_CAP: usize = 100;

/// The semantic generator compares against at most this many priority terms.
const PRIORITY_TERM_CAP: usize = 1000;

/// Vocabulary and frequency statistics derived from the product corpus.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    /// All known words (lowercase, length > 1).
    vocabulary: AHashSet<String>,
    /// Weighted occurrence count per word; keys are a subset of `vocabulary`.
    frequency: AHashMap<String, u64>,
    /// Words that came from brand fields.
    brand_terms: AHashSet<String>,
    /// Words that came from titles.
    product_terms: AHashSet<String>,
    /// Words that came from category labels.
    category_terms: AHashSet<String>,
    /// Distinct words in first-encounter order; the n-gram tables and the
    /// priority-term list are derived from this ordering.
    encounter_order: Vec<String>,
    /// Brand and product terms in encounter order, capped for the semantic
    /// generator.
    priority_terms: Vec<String>,
    /// Bigrams over the distinct-word list. Built for parity with the data
    /// model; not consulted by the correction algorithm.
    bigrams: AHashMap<(String, String), u64>,
    /// Trigrams over the distinct-word list. Same status as `bigrams`.
    trigrams: AHashMap<(String, String, String), u64>,
}

impl VocabularyIndex {
    /// Create an empty index. Correction against it degrades to
    /// static-map-only behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the vocabulary from a corpus of product records.
    ///
    /// Never errors: an empty corpus simply yields an empty index.
    pub fn build(corpus: &[ProductRecord]) -> Self {
        let tokenizer = QueryTokenizer::new();
        let mut index = VocabularyIndex::new();

        for record in corpus {
            for word in tokenizer.tokenize(&record.title) {
                if word.len() >= TITLE_MIN_LEN {
                    index.product_terms.insert(word.clone());
                    index.add_word(word, TITLE_WEIGHT);
                }
            }

            for word in tokenizer.tokenize(&record.brand) {
                if word.len() >= BRAND_MIN_LEN {
                    index.brand_terms.insert(word.clone());
                    index.add_word(word, BRAND_WEIGHT);
                }
            }

            for word in tokenizer.tokenize(&record.category) {
                if word.len() >= CATEGORY_MIN_LEN {
                    index.category_terms.insert(word.clone());
                    index.add_word(word, CATEGORY_WEIGHT);
                }
            }

            for word in tokenizer
                .tokenize(&record.description)
                .into_iter()
                .take(DESCRIPTION_TOKEN_CAP)
            {
                if word.len() >= DESCRIPTION_MIN_LEN {
                    index.add_word(word, DESCRIPTION_WEIGHT);
                }
            }
        }

        index.build_ngrams();
        index.build_priority_terms();

        let stats = index.stats();
        info!(
            "built vocabulary: {} words ({} brand, {} product, {} category) from {} records",
            stats.words,
            stats.brand_terms,
            stats.product_terms,
            stats.category_terms,
            corpus.len()
        );

        index
    }

    /// Register one occurrence of `word` with the given weight. Frequencies
    /// accumulate across fields; a word first seen here is appended to the
    /// encounter-order list.
    fn add_word(&mut self, word: String, weight: u64) {
        self.vocabulary.insert(word.clone());
        match self.frequency.get_mut(&word) {
            Some(count) => *count += weight,
            None => {
                self.encounter_order.push(word.clone());
                self.frequency.insert(word, weight);
            }
        }
    }

    /// Build bigram/trigram tables over the distinct-word encounter list.
    ///
    /// Adjacency here is adjacency in vocabulary enumeration, not in any
    /// actual phrase; the tables are kept read-only for the data model and
    /// never drive correction.
    fn build_ngrams(&mut self) {
        for pair in self.encounter_order.windows(2) {
            *self
                .bigrams
                .entry((pair[0].clone(), pair[1].clone()))
                .or_insert(0) += 1;
        }
        for triple in self.encounter_order.windows(3) {
            *self
                .trigrams
                .entry((triple[0].clone(), triple[1].clone(), triple[2].clone()))
                .or_insert(0) += 1;
        }
    }

    /// Materialize the semantic priority subset: brand and product terms in
    /// first-encounter order, capped at [`PRIORITY_TERM_CAP`].
    fn build_priority_terms(&mut self) {
        self.priority_terms = self
            .encounter_order
            .iter()
            .filter(|word| self.brand_terms.contains(*word) || self.product_terms.contains(*word))
            .take(PRIORITY_TERM_CAP)
            .cloned()
            .collect();
    }

    /// Check whether a word belongs to the vocabulary. Expects lowercase
    /// input (the tokenizer lowercases everything that reaches this point).
    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Weighted occurrence count of a word, 0 for unknown words.
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequency.get(word).copied().unwrap_or(0)
    }

    /// All words with their frequencies.
    pub fn frequencies(&self) -> &AHashMap<String, u64> {
        &self.frequency
    }

    /// Brand and product terms in encounter order, capped for the semantic
    /// generator.
    pub fn priority_terms(&self) -> &[String] {
        &self.priority_terms
    }

    /// Check whether a word originated from a brand field.
    pub fn is_brand_term(&self, word: &str) -> bool {
        self.brand_terms.contains(word)
    }

    /// Check whether a word originated from a title.
    pub fn is_product_term(&self, word: &str) -> bool {
        self.product_terms.contains(word)
    }

    /// Check whether a word originated from a category label.
    pub fn is_category_term(&self, word: &str) -> bool {
        self.category_terms.contains(word)
    }

    /// Bigram count for a pair of words.
    pub fn bigram_count(&self, first: &str, second: &str) -> u64 {
        self.bigrams
            .get(&(first.to_string(), second.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Trigram count for a triple of words.
    pub fn trigram_count(&self, first: &str, second: &str, third: &str) -> u64 {
        self.trigrams
            .get(&(first.to_string(), second.to_string(), third.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// True when no corpus data reached the index.
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Summary counters for logging and monitoring.
    pub fn stats(&self) -> VocabularyStats {
        VocabularyStats {
            words: self.vocabulary.len(),
            brand_terms: self.brand_terms.len(),
            product_terms: self.product_terms.len(),
            category_terms: self.category_terms.len(),
            total_frequency: self.frequency.values().sum(),
        }
    }
}

/// Vocabulary size counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyStats {
    /// Distinct words in the vocabulary.
    pub words: usize,
    /// Words that came from brand fields.
    pub brand_terms: usize,
    /// Words that came from titles.
    pub product_terms: usize,
    /// Words that came from category labels.
    pub category_terms: usize,
    /// Sum of all weighted occurrence counts.
    pub total_frequency: u64,
}
