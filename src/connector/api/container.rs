use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::application::{EmbeddingService, VectorDbConnector, VectorStore};
use crate::{ChromaVectorStore, HashingEmbedding, InMemoryVectorStore};

pub struct ContainerConfig {
    /// Collection the connector binds at startup (get-or-create).
    pub collection_name: String,
    /// Chroma server URL. Documents stay in process memory when unset.
    pub chroma_url: Option<String>,
    pub embedding_dimensions: usize,
}

/// Wires the store, the embedding service and the single connector shared by
/// every request.
pub struct Container {
    connector: Arc<VectorDbConnector>,
    config: ContainerConfig,
}

impl Container {
    pub async fn new(config: ContainerConfig) -> Result<Self> {
        let embedding: Arc<dyn EmbeddingService> =
            Arc::new(HashingEmbedding::with_dimensions(config.embedding_dimensions));

        let store: Arc<dyn VectorStore> = match config.chroma_url.as_deref() {
            Some(chroma_url) => match ChromaVectorStore::new(chroma_url, embedding.clone()).await {
                Ok(chroma) => {
                    info!("Using ChromaDB vector store at {}", chroma_url);
                    Arc::new(chroma)
                }
                Err(e) => {
                    warn!(
                        "Failed to connect to ChromaDB ({}): {}. Falling back to in-memory storage.",
                        chroma_url, e
                    );
                    Arc::new(InMemoryVectorStore::new(embedding))
                }
            },
            None => {
                debug!("Using in-memory vector store");
                Arc::new(InMemoryVectorStore::new(embedding))
            }
        };

        let connector = Arc::new(VectorDbConnector::new(store, &config.collection_name).await?);

        Ok(Self { connector, config })
    }

    pub fn connector(&self) -> Arc<VectorDbConnector> {
        self.connector.clone()
    }

    pub fn collection_name(&self) -> &str {
        &self.config.collection_name
    }

    pub fn chroma_url(&self) -> Option<&str> {
        self.config.chroma_url.as_deref()
    }
}
