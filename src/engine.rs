//! Correction engine: lifecycle and shared access.
//!
//! The engine owns one immutable snapshot (vocabulary, corrector, trie)
//! behind a `parking_lot::RwLock<Arc<_>>`. Readers clone the `Arc` and run
//! entirely against that snapshot, so a concurrent rebuild never tears an
//! in-flight query: `rebuild` constructs the replacement off to the side and
//! swaps the reference under the write lock.

use std::sync::Arc;
use std::time::Duration;

use log::warn;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::autocomplete::PrefixTrie;
use crate::document::ProductRecord;
use crate::embedding::text_embedder::TextEmbedder;
use crate::spelling::corrector::{QueryCorrectionResult, QueryCorrector};
use crate::spelling::semantic::SemanticGenerator;
use crate::spelling::vocabulary::{VocabularyIndex, VocabularyStats};

/// One immutable build of all query-serving structures.
struct EngineSnapshot {
    corrector: QueryCorrector,
    trie: PrefixTrie,
}

impl EngineSnapshot {
    fn build(corpus: &[ProductRecord], semantic: Option<SemanticGenerator>) -> Self {
        let vocabulary = VocabularyIndex::build(corpus);
        let trie = PrefixTrie::from_phrases(corpus.iter().map(|record| record.title.as_str()));

        EngineSnapshot {
            corrector: QueryCorrector::new(vocabulary, semantic),
            trie,
        }
    }
}

/// Engine-level counters for logging and monitoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Vocabulary counters.
    pub vocabulary: VocabularyStats,
    /// Distinct phrases in the autocomplete trie.
    pub phrases: usize,
    /// Whether semantic candidates are enabled.
    pub semantic_enabled: bool,
}

/// Shared, rebuildable correction and autocomplete engine.
///
/// Constructed explicitly during application initialization and passed by
/// reference (or `Arc`) to request handlers; all read paths are lock-light
/// and safe for concurrent use.
pub struct CorrectionEngine {
    snapshot: RwLock<Arc<EngineSnapshot>>,
}

impl CorrectionEngine {
    /// Build an engine from the corpus without a semantic provider.
    pub fn build(corpus: &[ProductRecord]) -> Self {
        CorrectionEngine {
            snapshot: RwLock::new(Arc::new(EngineSnapshot::build(corpus, None))),
        }
    }

    /// Build an engine with semantic candidates backed by `embedder`.
    ///
    /// Per-query semantic lookups are bounded by `timeout`. If the provider
    /// fails while embedding the priority terms, the engine is built without
    /// semantic support instead of failing.
    pub async fn build_with_embedder(
        corpus: &[ProductRecord],
        embedder: Arc<dyn TextEmbedder>,
        timeout: Duration,
    ) -> Self {
        let vocabulary = VocabularyIndex::build(corpus);
        let semantic = match SemanticGenerator::build(embedder, &vocabulary, timeout).await {
            Ok(generator) => Some(generator),
            Err(e) => {
                warn!("semantic provider unavailable at startup, continuing without it: {e}");
                None
            }
        };

        let trie = PrefixTrie::from_phrases(corpus.iter().map(|record| record.title.as_str()));
        let snapshot = EngineSnapshot {
            corrector: QueryCorrector::new(vocabulary, semantic),
            trie,
        };

        CorrectionEngine {
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Rebuild all structures from a new corpus and atomically swap them in.
    ///
    /// Readers holding the previous snapshot continue against it until they
    /// complete. A semantic generator is not carried over; use
    /// [`CorrectionEngine::rebuild_with_embedder`] to re-enable it.
    pub fn rebuild(&self, corpus: &[ProductRecord]) {
        let next = Arc::new(EngineSnapshot::build(corpus, None));
        *self.snapshot.write() = next;
    }

    /// Rebuild with semantic candidates, then swap.
    pub async fn rebuild_with_embedder(
        &self,
        corpus: &[ProductRecord],
        embedder: Arc<dyn TextEmbedder>,
        timeout: Duration,
    ) {
        let vocabulary = VocabularyIndex::build(corpus);
        let semantic = match SemanticGenerator::build(embedder, &vocabulary, timeout).await {
            Ok(generator) => Some(generator),
            Err(e) => {
                warn!("semantic provider unavailable during rebuild, continuing without it: {e}");
                None
            }
        };

        let trie = PrefixTrie::from_phrases(corpus.iter().map(|record| record.title.as_str()));
        let next = Arc::new(EngineSnapshot {
            corrector: QueryCorrector::new(vocabulary, semantic),
            trie,
        });
        *self.snapshot.write() = next;
    }

    /// Current snapshot for a read path.
    fn current(&self) -> Arc<EngineSnapshot> {
        self.snapshot.read().clone()
    }

    /// Correct a full query. Primary API.
    pub async fn correct_query(&self, query: &str) -> QueryCorrectionResult {
        self.current().corrector.correct_query(query).await
    }

    /// Legacy-shaped API: the corrected string only if at least one
    /// correction fired.
    pub async fn corrected_or_none(&self, query: &str) -> Option<String> {
        let result = self.correct_query(query).await;
        result.corrections_made.then_some(result.corrected)
    }

    /// Autocomplete: up to `limit` known phrases starting with `prefix`.
    pub fn search_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.current().trie.search_prefix(prefix, limit)
    }

    /// Engine counters.
    pub fn stats(&self) -> EngineStats {
        let snapshot = self.current();
        EngineStats {
            vocabulary: snapshot.corrector.vocabulary().stats(),
            phrases: snapshot.trie.len(),
            semantic_enabled: snapshot.corrector.semantic_enabled(),
        }
    }
}
