//! Semantic candidate generation via an embedding provider.
//!
//! An optional third strategy: embed `context + word` and compare against a
//! capped priority subset of the vocabulary (brand and product terms) by
//! cosine similarity. The provider is external and may be slow or down, so
//! every call is bounded by a caller-supplied timeout and failure is a
//! first-class outcome, not an error: the corrector treats
//! [`SemanticLookup::Unavailable`] as "no semantic candidates" and keeps
//! going.

use std::sync::Arc;
use std::time::Duration;

use log::warn;

use crate::embedding::text_embedder::TextEmbedder;
use crate::embedding::vector::Vector;
use crate::error::Result;
use crate::spelling::candidates::{CandidateSource, CorrectionCandidate};
use crate::spelling::vocabulary::VocabularyIndex;

/// Minimum cosine similarity for a priority term to become a candidate.
const SIMILARITY_THRESHOLD: f32 = 0.7;

/// Semantic score multiplier (between phonetic and edit distance).
const SEMANTIC_WEIGHT: f64 = 0.9;

/// At most this many semantic candidates are returned per lookup.
const MAX_SEMANTIC_CANDIDATES: usize = 10;

/// Outcome of a semantic lookup.
///
/// Distinguishes "the provider answered and found nothing" from "the
/// provider errored or timed out", so callers can log the latter without
/// conflating the two.
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticLookup {
    /// The provider answered; the list may be empty.
    Candidates(Vec<CorrectionCandidate>),
    /// The provider errored or exceeded the timeout.
    Unavailable,
}

impl SemanticLookup {
    /// Candidates if available, empty otherwise.
    pub fn into_candidates(self) -> Vec<CorrectionCandidate> {
        match self {
            SemanticLookup::Candidates(candidates) => candidates,
            SemanticLookup::Unavailable => Vec::new(),
        }
    }
}

/// A priority term with its precomputed embedding.
#[derive(Debug, Clone)]
struct EmbeddedTerm {
    word: String,
    frequency: u64,
    embedding: Vector,
}

/// Embedding-similarity candidate generator.
///
/// Priority-term embeddings are computed once at construction (a single
/// batch call); each lookup then costs one `embed` of the query text plus an
/// in-memory similarity pass.
pub struct SemanticGenerator {
    embedder: Arc<dyn TextEmbedder>,
    timeout: Duration,
    terms: Vec<EmbeddedTerm>,
}

impl SemanticGenerator {
    /// Build the generator by batch-embedding the vocabulary's priority
    /// terms.
    ///
    /// Errors from the provider propagate; the engine builder catches them
    /// and runs without a semantic generator.
    pub async fn build(
        embedder: Arc<dyn TextEmbedder>,
        vocabulary: &VocabularyIndex,
        timeout: Duration,
    ) -> Result<Self> {
        let words = vocabulary.priority_terms();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let embeddings = embedder.embed_batch(&refs).await?;

        // Providers occasionally emit NaN rows; drop them rather than let
        // them poison every similarity comparison.
        let terms: Vec<EmbeddedTerm> = words
            .iter()
            .zip(embeddings)
            .filter(|(word, embedding)| {
                if embedding.is_valid() {
                    true
                } else {
                    warn!("dropping non-finite embedding for priority term {word:?}");
                    false
                }
            })
            .map(|(word, embedding)| EmbeddedTerm {
                word: word.clone(),
                frequency: vocabulary.frequency(word),
                embedding,
            })
            .collect();

        Ok(SemanticGenerator {
            embedder,
            timeout,
            terms,
        })
    }

    /// Generate candidates for `word` biased by its context window.
    ///
    /// Candidates are priority terms with cosine similarity above the
    /// threshold, ordered by descending similarity, scored
    /// `frequency * 0.9`, capped at ten.
    pub async fn generate(&self, word: &str, context: &str) -> SemanticLookup {
        if self.terms.is_empty() {
            return SemanticLookup::Candidates(Vec::new());
        }

        let query_text = format!("{context} {word}");
        let query_text = query_text.trim();

        let query_embedding =
            match tokio::time::timeout(self.timeout, self.embedder.embed(query_text)).await {
                Ok(Ok(embedding)) => embedding,
                Ok(Err(e)) => {
                    warn!("semantic provider failed for {query_text:?}: {e}");
                    return SemanticLookup::Unavailable;
                }
                Err(_) => {
                    warn!(
                        "semantic provider timed out after {:?} for {query_text:?}",
                        self.timeout
                    );
                    return SemanticLookup::Unavailable;
                }
            };

        if !query_embedding.is_valid() {
            warn!("semantic provider returned a non-finite embedding for {query_text:?}");
            return SemanticLookup::Unavailable;
        }

        let mut scored: Vec<(f32, &EmbeddedTerm)> = self
            .terms
            .iter()
            .map(|term| (query_embedding.cosine_similarity(&term.embedding), term))
            .filter(|(similarity, _)| *similarity > SIMILARITY_THRESHOLD)
            .collect();

        // Stable sort: equal similarities keep priority order.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(MAX_SEMANTIC_CANDIDATES);

        let candidates = scored
            .into_iter()
            .map(|(_, term)| {
                CorrectionCandidate::new(
                    term.word.clone(),
                    term.frequency as f64 * SEMANTIC_WEIGHT,
                    CandidateSource::Semantic,
                )
            })
            .collect();

        SemanticLookup::Candidates(candidates)
    }

    /// Number of priority terms this generator compares against.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}
