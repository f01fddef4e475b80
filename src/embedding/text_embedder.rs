//! Text embedding trait for Sagitta's semantic correction pipeline.

use async_trait::async_trait;

use crate::embedding::vector::Vector;
use crate::error::Result;

/// Trait for converting text to vector embeddings.
///
/// This trait provides a common interface for various embedding methods
/// (local neural models, API-based services, etc.) to plug into the
/// semantic candidate generator. Implementations must be `Send + Sync`;
/// the generator shares them across request tasks behind an `Arc`.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Generate an embedding vector for the given text.
    async fn embed(&self, text: &str) -> Result<Vector>;

    /// Generate embeddings for multiple texts in batch.
    ///
    /// The default implementation calls `embed` sequentially.
    /// Override this method for better performance with batch processing.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vector>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// Get the dimension of vectors produced by this embedder.
    fn dimension(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic toy embedder: counts character classes.
    struct CharCountEmbedder;

    #[async_trait]
    impl TextEmbedder for CharCountEmbedder {
        async fn embed(&self, text: &str) -> Result<Vector> {
            let vowels = text.chars().filter(|c| "aeiou".contains(*c)).count() as f32;
            let consonants = text.chars().filter(|c| c.is_alphabetic()).count() as f32 - vowels;
            Ok(Vector::new(vec![vowels, consonants, text.len() as f32]))
        }

        fn dimension(&self) -> usize {
            3
        }
    }

    #[tokio::test]
    async fn test_embed_batch_default_impl() {
        let embedder = CharCountEmbedder;
        let vectors = embedder.embed_batch(&["hello", "world"]).await.unwrap();

        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].dimension(), 3);

        let single = embedder.embed("hello").await.unwrap();
        assert_eq!(vectors[0], single);
    }
}
