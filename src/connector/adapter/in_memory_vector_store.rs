use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::application::{CollectionHandle, EmbeddingService, QueryResult, VectorStore};
use crate::domain::{Collection, StoreError};

/// Process-local vector store. Follows Chroma's semantics for duplicate and
/// missing ids so the API behaves the same against either backend.
pub struct InMemoryVectorStore {
    collections: Mutex<HashMap<String, Arc<InMemoryCollection>>>,
    embedding: Arc<dyn EmbeddingService>,
}

impl InMemoryVectorStore {
    pub fn new(embedding: Arc<dyn EmbeddingService>) -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            embedding,
        }
    }

    fn new_collection(&self, name: &str) -> Arc<InMemoryCollection> {
        Arc::new(InMemoryCollection {
            name: name.to_string(),
            entries: Mutex::new(Vec::new()),
            embedding: self.embedding.clone(),
        })
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn get_or_create_collection(
        &self,
        name: &str,
    ) -> Result<Arc<dyn CollectionHandle>, StoreError> {
        let mut collections = self.collections.lock().await;
        let collection = collections
            .entry(name.to_string())
            .or_insert_with(|| self.new_collection(name))
            .clone();
        Ok(collection)
    }

    async fn create_collection(
        &self,
        collection: &Collection,
    ) -> Result<Arc<dyn CollectionHandle>, StoreError> {
        let mut collections = self.collections.lock().await;
        if collections.contains_key(collection.name()) {
            return Err(StoreError::unique_constraint(format!(
                "Collection {} already exists",
                collection.name()
            )));
        }

        let created = self.new_collection(collection.name());
        collections.insert(collection.name().to_string(), created.clone());
        debug!("Created in-memory collection: {}", collection.name());
        Ok(created)
    }
}

struct Entry {
    id: String,
    text: String,
    vector: Vec<f32>,
}

/// Entries are kept in insertion order so equal scores rank oldest first.
pub struct InMemoryCollection {
    name: String,
    entries: Mutex<Vec<Entry>>,
    embedding: Arc<dyn EmbeddingService>,
}

fn check_lengths(ids: &[&str], documents: &[&str]) -> Result<(), StoreError> {
    if ids.len() != documents.len() {
        return Err(StoreError::backend(format!(
            "Number of ids ({}) does not match number of documents ({})",
            ids.len(),
            documents.len()
        )));
    }
    Ok(())
}

#[async_trait]
impl CollectionHandle for InMemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn add(&self, ids: &[&str], documents: &[&str]) -> Result<(), StoreError> {
        check_lengths(ids, documents)?;
        let vectors = self.embedding.embed(documents).await?;

        let mut entries = self.entries.lock().await;
        for ((id, text), vector) in ids.iter().zip(documents.iter()).zip(vectors) {
            if entries.iter().any(|e| e.id == *id) {
                warn!("Add of existing document ID: {}", id);
                continue;
            }
            entries.push(Entry {
                id: id.to_string(),
                text: text.to_string(),
                vector,
            });
        }
        Ok(())
    }

    async fn update(&self, ids: &[&str], documents: &[&str]) -> Result<(), StoreError> {
        check_lengths(ids, documents)?;
        let vectors = self.embedding.embed(documents).await?;

        let mut entries = self.entries.lock().await;
        for ((id, text), vector) in ids.iter().zip(documents.iter()).zip(vectors) {
            match entries.iter_mut().find(|e| e.id == *id) {
                Some(entry) => {
                    entry.text = text.to_string();
                    entry.vector = vector;
                }
                None => warn!("Update of nonexisting document ID: {}", id),
            }
        }
        Ok(())
    }

    async fn delete(&self, ids: &[&str]) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        entries.retain(|e| !ids.contains(&e.id.as_str()));
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let entries = self.entries.lock().await;
        Ok(entries.len())
    }

    async fn query(
        &self,
        query_texts: &[&str],
        n_results: usize,
    ) -> Result<QueryResult, StoreError> {
        let query_vectors = self.embedding.embed(query_texts).await?;
        let entries = self.entries.lock().await;

        let documents = query_vectors
            .iter()
            .map(|query| {
                let mut scored: Vec<(&Entry, f32)> = entries
                    .iter()
                    .map(|entry| (entry, cosine_similarity(query, &entry.vector)))
                    .collect();
                scored.sort_by(|a, b| {
                    b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
                });
                scored
                    .into_iter()
                    .take(n_results)
                    .map(|(entry, _)| entry.text.clone())
                    .collect::<Vec<String>>()
            })
            .collect();

        Ok(QueryResult::new(documents))
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}
