use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::{CollectionHandle, VectorStore};
use crate::domain::{Collection, Document, DomainError, StoreError};

/// Number of documents returned by a retrieval when the caller does not ask
/// for a specific count.
pub const DEFAULT_RESULT_COUNT: usize = 5;

/// CRUD operations on text documents in one collection of a vector store.
///
/// Built once at startup and shared across requests. Holds no state besides
/// the store handles; consistency under concurrent writers is the store's job.
pub struct VectorDbConnector {
    store: Arc<dyn VectorStore>,
    collection: Arc<dyn CollectionHandle>,
}

impl VectorDbConnector {
    /// Opens (or creates) `collection_name` and binds it for every later call.
    pub async fn new(
        store: Arc<dyn VectorStore>,
        collection_name: &str,
    ) -> Result<Self, DomainError> {
        let collection = store
            .get_or_create_collection(collection_name)
            .await
            .map_err(|e| operation_error("Error while opening collection", e))?;

        info!("Bound to collection: {}", collection.name());

        Ok(Self { store, collection })
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// Creates a new, separate collection. The bound collection is unchanged.
    pub async fn create_collection(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<Collection, DomainError> {
        let collection = Collection::new(name, description);

        match self.store.create_collection(&collection).await {
            Ok(_) => {
                info!("Created collection: {}", name);
                Ok(collection)
            }
            Err(StoreError::UniqueConstraint(_)) => Err(DomainError::connector_operation(
                format!("Collection with name '{}' already exists.", name),
            )),
            Err(e) => Err(operation_error("Error while creating collection", e)),
        }
    }

    /// Stores `text` under a newly generated id and returns that id.
    pub async fn insert_document(&self, text: &str) -> Result<String, DomainError> {
        if text.is_empty() {
            return Err(DomainError::invalid_input("Text to insert cannot be empty."));
        }

        let document = Document::new(text);
        self.collection
            .add(&[document.id()], &[document.text()])
            .await
            .map_err(|e| operation_error("Error while inserting document", e))?;

        debug!("Inserted document: {}", document.id());
        Ok(document.into_id())
    }

    /// Overwrites the text of `doc_id` in place.
    pub async fn update_document(&self, doc_id: &str, text: &str) -> Result<(), DomainError> {
        if doc_id.is_empty() {
            return Err(DomainError::invalid_input(
                "Document ID cannot be empty for update.",
            ));
        }

        if text.is_empty() {
            return Err(DomainError::invalid_input("Text cannot be empty for update."));
        }

        self.collection
            .update(&[doc_id], &[text])
            .await
            .map_err(|e| operation_error("Error while updating document", e))?;

        debug!("Updated document: {}", doc_id);
        Ok(())
    }

    /// Removes `doc_id`. Missing ids are whatever the store makes of them.
    pub async fn delete_document(&self, doc_id: &str) -> Result<(), DomainError> {
        if doc_id.is_empty() {
            return Err(DomainError::invalid_input(
                "Document ID cannot be empty for deletion.",
            ));
        }

        self.collection
            .delete(&[doc_id])
            .await
            .map_err(|e| operation_error("Error while deleting document", e))?;

        debug!("Deleted document: {}", doc_id);
        Ok(())
    }

    /// Returns the texts of the top `n` documents most relevant to
    /// `query_text`, most relevant first.
    ///
    /// `n` is clamped to the collection's current size. The count and the
    /// query are separate round-trips, so concurrent writers can make the
    /// clamp stale; the store caps its own results in that case.
    pub async fn retrieve_documents(
        &self,
        query_text: &str,
        n: usize,
    ) -> Result<Vec<String>, DomainError> {
        if query_text.is_empty() {
            return Err(DomainError::invalid_input("Query text cannot be empty."));
        }

        let total_docs = self
            .collection
            .count()
            .await
            .map_err(|e| operation_error("Error while retrieving documents", e))?;
        let n_results = n.min(total_docs);

        let result = self
            .collection
            .query(&[query_text], n_results)
            .await
            .map_err(|e| operation_error("Error while retrieving documents", e))?;

        let documents = result.into_first();
        debug!(
            "Retrieved {} documents (requested {}, collection holds {})",
            documents.len(),
            n,
            total_docs
        );
        Ok(documents)
    }
}

fn operation_error(context: &str, err: StoreError) -> DomainError {
    warn!("{}: {}", context, err);
    DomainError::connector_operation(format!("{}: {}", context, err))
}
