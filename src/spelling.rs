//! Spell correction system for catalog-driven search queries.
//!
//! This module corrects typos and expands abbreviations in user queries
//! against a vocabulary built from the product catalog. Correction combines
//! static lookup tables, edit-distance search, phonetic normalization, and
//! optional semantic similarity, merged deterministically by the corrector.

pub mod candidates;
pub mod corrector;
pub mod levenshtein;
pub mod semantic;
pub mod static_maps;
pub mod vocabulary;

pub use candidates::{CandidateSource, CorrectionCandidate};
pub use corrector::{QueryCorrectionResult, QueryCorrector, WordCorrectionResult};
pub use semantic::{SemanticGenerator, SemanticLookup};
pub use vocabulary::VocabularyIndex;
