//! Query corrector: merges candidate strategies and rewrites full queries.
//!
//! Correction precedence per word: vocabulary membership (already correct),
//! static typo table, abbreviation table (gated on the expansion being in
//! the vocabulary), then scored candidate generation. Candidates from every
//! generator are merged in generation order and stably sorted by score, so
//! equal-scored candidates resolve deterministically to the earlier
//! generator (edit distance before phonetic before semantic).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::QueryTokenizer;
use crate::spelling::candidates::{CorrectionCandidate, EditDistanceGenerator, PhoneticGenerator};
use crate::spelling::semantic::{SemanticGenerator, SemanticLookup};
use crate::spelling::static_maps;
use crate::spelling::vocabulary::VocabularyIndex;

/// Only the ten best edit-distance candidates join the merged list; phonetic
/// and semantic generators already bound their own output.
const EDIT_CANDIDATE_CAP: usize = 10;

/// Minimum combined score for a correction to be accepted.
const MIN_CONFIDENCE_SCORE: f64 = 1.0;

/// A single applied word correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCorrectionResult {
    /// The token as it appeared in the query.
    pub original: String,
    /// The replacement word.
    pub corrected: String,
    /// Token position within the query.
    pub position: usize,
}

/// Result of correcting a full query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryCorrectionResult {
    /// The query as received (trimmed).
    pub original: String,
    /// The corrected query, or the literal original when nothing changed.
    pub corrected: String,
    /// Whether any token was rewritten.
    pub corrections_made: bool,
    /// Applied corrections in token order.
    pub word_corrections: Vec<WordCorrectionResult>,
    /// Fraction of tokens that were corrected, in [0, 1].
    pub confidence: f64,
}

impl QueryCorrectionResult {
    fn unchanged(original: String) -> Self {
        QueryCorrectionResult {
            corrected: original.clone(),
            original,
            corrections_made: false,
            word_corrections: Vec::new(),
            confidence: 0.0,
        }
    }
}

/// Corrects queries token-by-token against a vocabulary snapshot.
///
/// Pure over its immutable state; safe to share behind an `Arc` across
/// request tasks.
pub struct QueryCorrector {
    vocabulary: VocabularyIndex,
    tokenizer: QueryTokenizer,
    edit_generator: EditDistanceGenerator,
    phonetic_generator: PhoneticGenerator,
    semantic_generator: Option<SemanticGenerator>,
}

impl QueryCorrector {
    /// Create a corrector over the given vocabulary. The semantic generator
    /// is optional; without it the other strategies still run.
    pub fn new(vocabulary: VocabularyIndex, semantic_generator: Option<SemanticGenerator>) -> Self {
        let phonetic_generator = PhoneticGenerator::new(&vocabulary);
        QueryCorrector {
            vocabulary,
            tokenizer: QueryTokenizer::new(),
            edit_generator: EditDistanceGenerator::new(),
            phonetic_generator,
            semantic_generator,
        }
    }

    /// The vocabulary this corrector runs against.
    pub fn vocabulary(&self) -> &VocabularyIndex {
        &self.vocabulary
    }

    /// Whether semantic candidates are enabled.
    pub fn semantic_enabled(&self) -> bool {
        self.semantic_generator.is_some()
    }

    /// Correct a single word given its context window.
    ///
    /// Returns the accepted correction (which equals the lowercased input
    /// when the word is already correct), or `None` when no candidate clears
    /// the confidence threshold.
    pub async fn correct_word(&self, word: &str, context: &str) -> Option<String> {
        let word_lower = word.to_lowercase();

        // Already correct: short-circuit, no candidate generation.
        if self.vocabulary.contains(&word_lower) {
            return Some(word_lower);
        }

        if let Some(canonical) = static_maps::lookup_typo(&word_lower) {
            return Some(canonical.to_string());
        }

        if let Some(expansion) = static_maps::lookup_abbreviation(&word_lower)
            && self.vocabulary.contains(expansion)
        {
            return Some(expansion.to_string());
        }

        let mut all_candidates: Vec<CorrectionCandidate> = Vec::new();

        let mut edit_candidates = self.edit_generator.generate(&word_lower, &self.vocabulary);
        edit_candidates.truncate(EDIT_CANDIDATE_CAP);
        all_candidates.extend(edit_candidates);

        all_candidates.extend(self.phonetic_generator.generate(&word_lower));

        if let Some(semantic) = &self.semantic_generator {
            match semantic.generate(&word_lower, context).await {
                SemanticLookup::Candidates(candidates) => all_candidates.extend(candidates),
                // Already logged at the generator boundary; degrade to none.
                SemanticLookup::Unavailable => {}
            }
        }

        if all_candidates.is_empty() {
            return None;
        }

        // Stable sort keeps generation order among equal scores.
        all_candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let best = &all_candidates[0];
        debug!(
            "best candidate for {word_lower:?}: {:?} (score {:.3}, {:?})",
            best.word, best.score, best.source
        );

        if best.score > MIN_CONFIDENCE_SCORE {
            Some(best.word.clone())
        } else {
            None
        }
    }

    /// Correct a full query token-by-token.
    ///
    /// Context for each token is a one-token lookback/lookahead window. When
    /// no corrections fire, the literal original (not the rejoined lowercase
    /// form) is returned to preserve its casing and punctuation.
    pub async fn correct_query(&self, query: &str) -> QueryCorrectionResult {
        let original = query.trim().to_string();
        let words = self.tokenizer.tokenize(&original);

        if words.is_empty() {
            return QueryCorrectionResult::unchanged(original);
        }

        let mut corrected_words = Vec::with_capacity(words.len());
        let mut word_corrections = Vec::new();

        for (i, word) in words.iter().enumerate() {
            let mut context_words: Vec<&str> = Vec::with_capacity(2);
            if i > 0 {
                context_words.push(&words[i - 1]);
            }
            if i + 1 < words.len() {
                context_words.push(&words[i + 1]);
            }
            let context = context_words.join(" ");

            match self.correct_word(word, &context).await {
                Some(corrected) if !corrected.eq_ignore_ascii_case(word) => {
                    word_corrections.push(WordCorrectionResult {
                        original: word.clone(),
                        corrected: corrected.clone(),
                        position: i,
                    });
                    corrected_words.push(corrected);
                }
                _ => corrected_words.push(word.clone()),
            }
        }

        let corrections_made = !word_corrections.is_empty();
        let confidence = word_corrections.len() as f64 / words.len() as f64;
        let corrected = if corrections_made {
            corrected_words.join(" ")
        } else {
            original.clone()
        };

        QueryCorrectionResult {
            original,
            corrected,
            corrections_made,
            word_corrections,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ProductRecord;

    fn corrector_from(records: &[(&str, &str, &str, &str)]) -> QueryCorrector {
        let corpus: Vec<ProductRecord> = records
            .iter()
            .map(|(t, b, c, d)| {
                ProductRecord::new(t.to_string(), b.to_string(), c.to_string(), d.to_string())
            })
            .collect();
        QueryCorrector::new(VocabularyIndex::build(&corpus), None)
    }

    fn catalog_corrector() -> QueryCorrector {
        corrector_from(&[
            ("Apple iPhone 13", "Apple", "Mobiles", ""),
            ("Samsung Galaxy S21", "Samsung", "Mobiles", ""),
            ("Sony Bluetooth Headphones", "Sony", "Audio", "wireless headphones"),
            ("Dell Laptop", "Dell", "Computers", ""),
        ])
    }

    #[tokio::test]
    async fn test_already_correct_word_short_circuits() {
        let corrector = catalog_corrector();
        assert_eq!(
            corrector.correct_word("iphone", "").await,
            Some("iphone".to_string())
        );
        assert_eq!(
            corrector.correct_word("IPHONE", "apple").await,
            Some("iphone".to_string())
        );
    }

    #[tokio::test]
    async fn test_typo_map_precedence() {
        let corrector = catalog_corrector();
        // "ipone" is in the typo map; the map answers before any generator,
        // even though "iphone" is also within edit distance 1.
        assert_eq!(
            corrector.correct_word("ipone", "").await,
            Some("iphone".to_string())
        );
    }

    #[tokio::test]
    async fn test_abbreviation_requires_vocabulary_membership() {
        // "wifi" expands to "wireless", which is in this vocabulary via the
        // description; "tv" expands to "television", which is not.
        let corrector = catalog_corrector();
        assert_eq!(
            corrector.correct_word("wifi", "").await,
            Some("wireless".to_string())
        );
        assert_eq!(corrector.correct_word("tv", "").await, None);
    }

    #[tokio::test]
    async fn test_edit_distance_fallback() {
        let corrector = catalog_corrector();
        // "galaxu" is not in any static map; edit distance finds "galaxy".
        assert_eq!(
            corrector.correct_word("galaxu", "").await,
            Some("galaxy".to_string())
        );
    }

    #[tokio::test]
    async fn test_equal_scores_resolve_to_earlier_generator() {
        // "dagraf" at distance 2 with frequency 12 scores 12 / 3 = 4.0 from
        // the edit-distance generator; "phogroph" keys to "fogrof", one edit
        // from the input's key "dogrof", and scores 5 * 0.8 = 4.0 from the
        // phonetic generator. Generation order breaks the tie in favor of
        // edit distance.
        let corrector = corrector_from(&[
            ("dagraf", "phogroph", "", ""),
            ("dagraf", "", "", ""),
            ("dagraf", "", "", ""),
            ("dagraf", "", "", ""),
        ]);

        let edit = corrector
            .edit_generator
            .generate("dogrof", &corrector.vocabulary);
        let phonetic = corrector.phonetic_generator.generate("dogrof");
        assert_eq!(edit[0].word, "dagraf");
        assert_eq!(phonetic[0].word, "phogroph");
        assert!((edit[0].score - phonetic[0].score).abs() < 1e-9);

        assert_eq!(
            corrector.correct_word("dogrof", "").await,
            Some("dagraf".to_string())
        );
    }

    #[tokio::test]
    async fn test_below_threshold_returns_none() {
        let corrector = catalog_corrector();
        assert_eq!(corrector.correct_word("qqqqqqqqq", "").await, None);
    }

    #[tokio::test]
    async fn test_correct_query_full_example() {
        let corrector = catalog_corrector();
        let result = corrector.correct_query("blutooth hedphones").await;

        assert!(result.corrections_made);
        assert_eq!(result.corrected, "bluetooth headphones");
        assert_eq!(result.word_corrections.len(), 2);
        assert_eq!(result.word_corrections[0].original, "blutooth");
        assert_eq!(result.word_corrections[0].corrected, "bluetooth");
        assert_eq!(result.word_corrections[0].position, 0);
        assert_eq!(result.word_corrections[1].position, 1);
        assert!((result.confidence - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_correct_query_preserves_original_when_unchanged() {
        let corrector = catalog_corrector();
        let result = corrector.correct_query("Apple iPhone").await;

        assert!(!result.corrections_made);
        // Literal original, not the lowercased rejoined form.
        assert_eq!(result.corrected, "Apple iPhone");
        assert_eq!(result.confidence, 0.0);
    }

    #[tokio::test]
    async fn test_correct_query_empty_input() {
        let corrector = catalog_corrector();
        let result = corrector.correct_query("   ").await;

        assert!(!result.corrections_made);
        assert_eq!(result.original, "");
        assert_eq!(result.corrected, "");
        assert_eq!(result.confidence, 0.0);
    }

    #[tokio::test]
    async fn test_confidence_partial_correction() {
        let corrector = catalog_corrector();
        let result = corrector.correct_query("samsung galaxu").await;

        assert!(result.corrections_made);
        assert_eq!(result.corrected, "samsung galaxy");
        assert_eq!(result.word_corrections.len(), 1);
        assert!((result.confidence - 0.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_empty_vocabulary_degrades_to_static_maps() {
        let corrector = QueryCorrector::new(VocabularyIndex::new(), None);

        // Typo map still answers.
        assert_eq!(
            corrector.correct_word("blutooth", "").await,
            Some("bluetooth".to_string())
        );
        // Abbreviations are gated on vocabulary membership, so they do not.
        assert_eq!(corrector.correct_word("wifi", "").await, None);
        // Nothing else can.
        assert_eq!(corrector.correct_word("galaxu", "").await, None);
    }

    #[tokio::test]
    async fn test_idempotence() {
        let corrector = catalog_corrector();
        let once = corrector.correct_query("blutooth hedphones").await;
        let twice = corrector.correct_query(&once.corrected).await;

        assert_eq!(twice.corrected, once.corrected);
        assert!(!twice.corrections_made);
    }
}
