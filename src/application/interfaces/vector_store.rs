use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Collection, StoreError};

/// Ranked documents returned by a similarity query, one list per query text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub documents: Vec<Vec<String>>,
}

impl QueryResult {
    pub fn new(documents: Vec<Vec<String>>) -> Self {
        Self { documents }
    }

    /// Ranked texts for the first query, or nothing.
    pub fn into_first(self) -> Vec<String> {
        self.documents.into_iter().next().unwrap_or_default()
    }
}

/// Client of an external vector database holding named collections.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Opens `name`, creating it when missing. Never fails because it exists.
    async fn get_or_create_collection(
        &self,
        name: &str,
    ) -> Result<Arc<dyn CollectionHandle>, StoreError>;

    /// Creates a new collection. Fails with [`StoreError::UniqueConstraint`]
    /// when the name is already taken.
    async fn create_collection(
        &self,
        collection: &Collection,
    ) -> Result<Arc<dyn CollectionHandle>, StoreError>;
}

/// Document operations scoped to one collection.
#[async_trait]
pub trait CollectionHandle: Send + Sync {
    fn name(&self) -> &str;

    async fn add(&self, ids: &[&str], documents: &[&str]) -> Result<(), StoreError>;

    async fn update(&self, ids: &[&str], documents: &[&str]) -> Result<(), StoreError>;

    async fn delete(&self, ids: &[&str]) -> Result<(), StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;

    async fn query(
        &self,
        query_texts: &[&str],
        n_results: usize,
    ) -> Result<QueryResult, StoreError>;
}
