use async_trait::async_trait;

use crate::domain::StoreError;

/// Turns text into vectors for stores that need client-side embeddings.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, StoreError>;

    fn dimensions(&self) -> usize;

    fn model_name(&self) -> &str;
}
