//! Text embedding support for semantic candidate generation.
//!
//! Sagitta does not ship an embedding implementation. The semantic
//! candidate generator is an optional collaborator: implement
//! [`text_embedder::TextEmbedder`] with your preferred model or API and hand
//! it to the engine builder. Its absence disables semantic candidates only;
//! every other correction strategy remains fully functional.
//!
//! # Custom implementation
//!
//! ```
//! use async_trait::async_trait;
//! use sagitta::embedding::text_embedder::TextEmbedder;
//! use sagitta::embedding::vector::Vector;
//! use sagitta::error::Result;
//!
//! struct MyEmbedder {
//!     dimension: usize,
//! }
//!
//! #[async_trait]
//! impl TextEmbedder for MyEmbedder {
//!     async fn embed(&self, text: &str) -> Result<Vector> {
//!         // Your custom implementation
//!         Ok(Vector::new(vec![0.0; self.dimension]))
//!     }
//!
//!     fn dimension(&self) -> usize {
//!         self.dimension
//!     }
//! }
//! ```

pub mod text_embedder;
pub mod vector;

pub use text_embedder::TextEmbedder;
pub use vector::Vector;
