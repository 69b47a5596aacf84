use std::sync::Arc;

use async_trait::async_trait;
use chromadb::client::{ChromaAuthMethod, ChromaClient, ChromaClientOptions};
use chromadb::collection::{CollectionEntries, QueryOptions};
use chromadb::ChromaCollection;
use tracing::debug;

use crate::application::{CollectionHandle, EmbeddingService, QueryResult, VectorStore};
use crate::domain::{Collection, StoreError};

/// Vector store backed by a Chroma server.
///
/// Chroma's HTTP API does not embed documents itself, so vectors are computed
/// client-side with the configured [`EmbeddingService`].
pub struct ChromaVectorStore {
    client: ChromaClient,
    embedding: Arc<dyn EmbeddingService>,
}

impl ChromaVectorStore {
    pub async fn new(url: &str, embedding: Arc<dyn EmbeddingService>) -> Result<Self, StoreError> {
        let client = ChromaClient::new(ChromaClientOptions {
            url: Some(url.to_string()),
            database: "default_database".to_string(),
            auth: ChromaAuthMethod::None,
        })
        .await
        .map_err(|e| StoreError::backend(format!("Failed to connect to ChromaDB: {}", e)))?;

        debug!("Connected to ChromaDB at {}", url);

        Ok(Self { client, embedding })
    }

    fn handle(&self, name: &str, collection: ChromaCollection) -> Arc<dyn CollectionHandle> {
        Arc::new(ChromaCollectionHandle {
            name: name.to_string(),
            collection,
            embedding: self.embedding.clone(),
        })
    }
}

/// Chroma reports duplicate collection names only through the error text.
fn classify_create_error(err: impl std::fmt::Display) -> StoreError {
    let message = err.to_string();
    if message.contains("already exists") || message.contains("UniqueConstraintError") {
        StoreError::unique_constraint(message)
    } else {
        StoreError::backend(message)
    }
}

#[async_trait]
impl VectorStore for ChromaVectorStore {
    async fn get_or_create_collection(
        &self,
        name: &str,
    ) -> Result<Arc<dyn CollectionHandle>, StoreError> {
        let collection = self
            .client
            .get_or_create_collection(name, None)
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;

        debug!("Using ChromaDB collection: {}", name);
        Ok(self.handle(name, collection))
    }

    async fn create_collection(
        &self,
        collection: &Collection,
    ) -> Result<Arc<dyn CollectionHandle>, StoreError> {
        let created = self
            .client
            .create_collection(collection.name(), Some(collection.metadata()), false)
            .await
            .map_err(classify_create_error)?;

        debug!("Created ChromaDB collection: {}", collection.name());
        Ok(self.handle(collection.name(), created))
    }
}

pub struct ChromaCollectionHandle {
    name: String,
    collection: ChromaCollection,
    embedding: Arc<dyn EmbeddingService>,
}

#[async_trait]
impl CollectionHandle for ChromaCollectionHandle {
    fn name(&self) -> &str {
        &self.name
    }

    async fn add(&self, ids: &[&str], documents: &[&str]) -> Result<(), StoreError> {
        let vectors = self.embedding.embed(documents).await?;
        let entries = CollectionEntries {
            ids: ids.to_vec(),
            embeddings: Some(vectors),
            metadatas: None,
            documents: Some(documents.to_vec()),
        };

        self.collection
            .add(entries, None)
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;

        debug!("Added {} documents to ChromaDB", ids.len());
        Ok(())
    }

    async fn update(&self, ids: &[&str], documents: &[&str]) -> Result<(), StoreError> {
        let vectors = self.embedding.embed(documents).await?;
        let entries = CollectionEntries {
            ids: ids.to_vec(),
            embeddings: Some(vectors),
            metadatas: None,
            documents: Some(documents.to_vec()),
        };

        self.collection
            .update(entries, None)
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, ids: &[&str]) -> Result<(), StoreError> {
        self.collection
            .delete(Some(ids.to_vec()), None, None)
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let count = self
            .collection
            .count()
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;
        Ok(count)
    }

    async fn query(
        &self,
        query_texts: &[&str],
        n_results: usize,
    ) -> Result<QueryResult, StoreError> {
        // Chroma rejects n_results = 0.
        if n_results == 0 {
            return Ok(QueryResult::new(vec![Vec::new(); query_texts.len()]));
        }

        let query_embeddings = self.embedding.embed(query_texts).await?;
        let query_options = QueryOptions {
            query_texts: None,
            query_embeddings: Some(query_embeddings),
            where_metadata: None,
            where_document: None,
            n_results: Some(n_results),
            include: Some(vec!["documents"]),
        };

        let result = self
            .collection
            .query(query_options, None)
            .await
            .map_err(|e| StoreError::backend(e.to_string()))?;

        Ok(QueryResult::new(result.documents.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_is_unique_constraint() {
        let err = classify_create_error("UniqueConstraintError('Collection notes already exists')");
        assert!(err.is_unique_constraint());
        assert!(err.to_string().contains("notes"));
    }

    #[test]
    fn test_other_failures_are_backend_errors() {
        let err = classify_create_error("error sending request for url (http://localhost:8000)");
        assert_eq!(
            err,
            StoreError::backend("error sending request for url (http://localhost:8000)")
        );
    }
}
