//! Dense vector type used at the embedding boundary.

use serde::{Deserialize, Serialize};

/// A dense embedding vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// The vector dimensions as floating point values.
    pub data: Vec<f32>,
}

impl Vector {
    /// Create a new vector with the given dimensions.
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Get the dimensionality of this vector.
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Calculate the L2 norm (magnitude) of this vector.
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Check if this vector contains any NaN or infinite values.
    pub fn is_valid(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }

    /// Cosine similarity between two vectors.
    ///
    /// Returns 0.0 for mismatched dimensions or zero-magnitude inputs
    /// rather than erroring; the semantic generator treats those as
    /// "no similarity".
    pub fn cosine_similarity(&self, other: &Vector) -> f32 {
        if self.data.len() != other.data.len() || self.data.is_empty() {
            return 0.0;
        }

        let dot: f32 = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum();
        let norms = self.norm() * other.norm();

        if norms > 0.0 { dot / norms } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm() {
        let v = Vector::new(vec![3.0, 4.0]);
        assert!((v.norm() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity() {
        let a = Vector::new(vec![1.0, 0.0]);
        let b = Vector::new(vec![1.0, 0.0]);
        let c = Vector::new(vec![0.0, 1.0]);
        let d = Vector::new(vec![-1.0, 0.0]);

        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-6);
        assert!(a.cosine_similarity(&c).abs() < 1e-6);
        assert!((a.cosine_similarity(&d) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_degenerate_inputs() {
        let a = Vector::new(vec![1.0, 2.0]);
        let mismatched = Vector::new(vec![1.0, 2.0, 3.0]);
        let zero = Vector::new(vec![0.0, 0.0]);

        assert_eq!(a.cosine_similarity(&mismatched), 0.0);
        assert_eq!(a.cosine_similarity(&zero), 0.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(Vector::new(vec![1.0, 2.0]).is_valid());
        assert!(!Vector::new(vec![1.0, f32::NAN]).is_valid());
        assert!(!Vector::new(vec![f32::INFINITY]).is_valid());
    }
}
