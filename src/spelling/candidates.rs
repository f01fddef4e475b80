//! Candidate generation for misspelled words.
//!
//! Two of the three generation strategies live here: edit-distance search
//! over the whole vocabulary and phonetic-normalization matching. The third
//! (semantic similarity) has its own module since it involves an external
//! provider. Each generator is a pure function of the word and the
//! vocabulary snapshot; the corrector merges their outputs.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::spelling::levenshtein::levenshtein_distance_threshold;
use crate::spelling::vocabulary::VocabularyIndex;

/// Strategy that produced a correction candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateSource {
    /// Static typo table hit.
    Typo,
    /// Static abbreviation table hit.
    Abbreviation,
    /// Levenshtein search over the vocabulary.
    EditDistance,
    /// Phonetic-normalization match.
    Phonetic,
    /// Embedding-similarity match.
    Semantic,
}

/// A vocabulary word proposed as the correction for a misspelled token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionCandidate {
    /// The proposed word.
    pub word: String,
    /// Confidence score; higher is better. Scores are frequency-derived and
    /// unbounded above.
    pub score: f64,
    /// Strategy that produced this candidate.
    pub source: CandidateSource,
}

impl CorrectionCandidate {
    /// Create a new candidate.
    pub fn new(word: String, score: f64, source: CandidateSource) -> Self {
        CorrectionCandidate {
            word,
            score,
            source,
        }
    }
}

/// Maximum edit distance for the vocabulary scan.
const MAX_EDIT_DISTANCE: usize = 2;

/// Phonetic score multiplier (lower weight than edit distance).
const PHONETIC_WEIGHT: f64 = 0.8;

/// Edit-distance candidate generator.
///
/// Scans the entire vocabulary: O(|vocabulary| * avg word length). This is
/// acceptable only because the vocabulary is corpus-bounded (tens of
/// thousands of entries); the scan runs on the rayon pool and each
/// comparison bails early once the distance bound is exceeded.
#[derive(Debug, Clone)]
pub struct EditDistanceGenerator {
    max_distance: usize,
}

impl Default for EditDistanceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl EditDistanceGenerator {
    /// Create a generator with the default distance bound.
    pub fn new() -> Self {
        EditDistanceGenerator {
            max_distance: MAX_EDIT_DISTANCE,
        }
    }

    /// Generate candidates for `word`, sorted by descending score.
    ///
    /// Score is `frequency / (distance + 1)`. Equal scores are ordered by
    /// word so the result is reproducible regardless of hash-map iteration
    /// order.
    pub fn generate(&self, word: &str, vocabulary: &VocabularyIndex) -> Vec<CorrectionCandidate> {
        let mut candidates: Vec<CorrectionCandidate> = vocabulary
            .frequencies()
            .par_iter()
            .filter_map(|(vocab_word, frequency)| {
                levenshtein_distance_threshold(word, vocab_word, self.max_distance).map(
                    |distance| {
                        let score = *frequency as f64 / (distance + 1) as f64;
                        CorrectionCandidate::new(
                            vocab_word.clone(),
                            score,
                            CandidateSource::EditDistance,
                        )
                    },
                )
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });
        candidates
    }
}

/// Ordered character substitution rules. Each rule's output feeds the next,
/// so the order is load-bearing.
const PHONETIC_RULES: [(&str, &str); 8] = [
    ("ph", "f"),
    ("ck", "k"),
    ("c", "k"),
    ("z", "s"),
    ("i", "y"),
    ("ei", "ai"),
    ("ou", "ow"),
    ("tion", "shun"),
];

/// Apply the phonetic substitution rules cumulatively.
pub fn phonetic_key(word: &str) -> String {
    let mut transformed = word.to_string();
    for (from, to) in PHONETIC_RULES {
        transformed = transformed.replace(from, to);
    }
    transformed
}

/// Phonetic candidate generator.
///
/// A vocabulary word is a candidate when its phonetic key is within edit
/// distance 1 of the input's phonetic key. Keys for the whole vocabulary are
/// computed once at construction; the per-query cost is one key computation
/// plus the comparison pass.
#[derive(Debug, Clone, Default)]
pub struct PhoneticGenerator {
    /// (word, phonetic key, frequency), sorted by word for deterministic
    /// output order.
    keyed_vocabulary: Vec<(String, String, u64)>,
}

impl PhoneticGenerator {
    /// Precompute phonetic keys for the vocabulary.
    pub fn new(vocabulary: &VocabularyIndex) -> Self {
        let mut keyed_vocabulary: Vec<(String, String, u64)> = vocabulary
            .frequencies()
            .iter()
            .map(|(word, frequency)| (word.clone(), phonetic_key(word), *frequency))
            .collect();
        keyed_vocabulary.sort_by(|a, b| a.0.cmp(&b.0));

        PhoneticGenerator { keyed_vocabulary }
    }

    /// Generate candidates for `word`. Score is `frequency * 0.8`.
    pub fn generate(&self, word: &str) -> Vec<CorrectionCandidate> {
        let key = phonetic_key(word);

        self.keyed_vocabulary
            .iter()
            .filter(|(_, vocab_key, _)| {
                levenshtein_distance_threshold(&key, vocab_key, 1).is_some()
            })
            .map(|(vocab_word, _, frequency)| {
                CorrectionCandidate::new(
                    vocab_word.clone(),
                    *frequency as f64 * PHONETIC_WEIGHT,
                    CandidateSource::Phonetic,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ProductRecord;

    fn vocab_from_titles(titles: &[&str]) -> VocabularyIndex {
        let corpus: Vec<ProductRecord> = titles
            .iter()
            .map(|t| ProductRecord::new(t.to_string(), String::new(), String::new(), String::new()))
            .collect();
        VocabularyIndex::build(&corpus)
    }

    #[test]
    fn test_edit_distance_candidates() {
        let vocab = vocab_from_titles(&["bluetooth speaker", "wireless mouse"]);
        let generator = EditDistanceGenerator::new();

        let candidates = generator.generate("blutooth", &vocab);
        assert!(!candidates.is_empty());
        assert_eq!(candidates[0].word, "bluetooth");
        assert_eq!(candidates[0].source, CandidateSource::EditDistance);
        // distance 1, title frequency 3 -> 3 / 2
        assert!((candidates[0].score - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_edit_distance_respects_bound() {
        let vocab = vocab_from_titles(&["bluetooth speaker"]);
        let generator = EditDistanceGenerator::new();

        // "xyzzy" is nowhere near either vocabulary word.
        assert!(generator.generate("xyzzy", &vocab).is_empty());
    }

    #[test]
    fn test_edit_distance_scoring_prefers_frequency() {
        // "galaxy" appears in two titles so it outscores anything else
        // within the distance bound.
        let vocab = vocab_from_titles(&["galaxy phone", "galaxy tablet", "galore pack"]);
        let generator = EditDistanceGenerator::new();

        let candidates = generator.generate("galaxi", &vocab);
        assert_eq!(candidates[0].word, "galaxy");
    }

    #[test]
    fn test_deterministic_ordering_on_equal_scores() {
        let vocab = vocab_from_titles(&["cast mast"]);
        let generator = EditDistanceGenerator::new();

        // "aast" is distance 1 from both words; equal frequency, equal score.
        let candidates = generator.generate("aast", &vocab);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].word, "cast"); // word order breaks the tie
        assert_eq!(candidates[1].word, "mast");
    }

    #[test]
    fn test_phonetic_key_rules_apply_in_order() {
        // ph -> f, then c -> k (after ck -> k), i -> y.
        assert_eq!(phonetic_key("phone"), "fone");
        assert_eq!(phonetic_key("back"), "bak");
        assert_eq!(phonetic_key("civic"), "kyvyk");
        assert_eq!(phonetic_key("zip"), "syp");
    }

    #[test]
    fn test_phonetic_candidates() {
        let vocab = vocab_from_titles(&["phone case"]);
        let generator = PhoneticGenerator::new(&vocab);

        // "fone" and "phone" share the phonetic key "fone".
        let candidates = generator.generate("fone");
        assert!(candidates.iter().any(|c| c.word == "phone"));
        let phone = candidates.iter().find(|c| c.word == "phone").unwrap();
        assert_eq!(phone.source, CandidateSource::Phonetic);
        assert!((phone.score - 3.0 * 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_phonetic_no_match() {
        let vocab = vocab_from_titles(&["refrigerator unit"]);
        let generator = PhoneticGenerator::new(&vocab);
        assert!(generator.generate("tv").is_empty());
    }
}
