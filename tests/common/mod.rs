#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use vector_crud::{Collection, CollectionHandle, QueryResult, StoreError, VectorStore};

/// A store call as seen by the recording mock.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    GetOrCreateCollection(String),
    CreateCollection(Collection),
    Add { ids: Vec<String>, documents: Vec<String> },
    Update { ids: Vec<String>, documents: Vec<String> },
    Delete { ids: Vec<String> },
    Count,
    Query { query_texts: Vec<String>, n_results: usize },
}

/// Canned behaviour for the mock. `None` failure fields mean success.
#[derive(Debug, Default)]
pub struct Behaviour {
    pub create_error: Option<StoreError>,
    pub add_error: Option<StoreError>,
    pub update_error: Option<StoreError>,
    pub delete_error: Option<StoreError>,
    pub count_error: Option<StoreError>,
    pub query_error: Option<StoreError>,
    pub count: usize,
    pub query_result: QueryResult,
}

/// Mock vector store that records every call and replays canned results.
#[derive(Clone, Default)]
pub struct RecordingStore {
    calls: Arc<Mutex<Vec<StoreCall>>>,
    behaviour: Arc<Mutex<Behaviour>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(&self, f: impl FnOnce(&mut Behaviour)) {
        f(&mut self.behaviour.lock().unwrap());
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls made after the connector bound its collection.
    pub fn calls_after_init(&self) -> Vec<StoreCall> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, StoreCall::GetOrCreateCollection(_)))
            .collect()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn handle(&self, name: &str) -> Arc<dyn CollectionHandle> {
        Arc::new(RecordingCollection {
            name: name.to_string(),
            store: self.clone(),
        })
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[async_trait]
impl VectorStore for RecordingStore {
    async fn get_or_create_collection(
        &self,
        name: &str,
    ) -> Result<Arc<dyn CollectionHandle>, StoreError> {
        self.record(StoreCall::GetOrCreateCollection(name.to_string()));
        Ok(self.handle(name))
    }

    async fn create_collection(
        &self,
        collection: &Collection,
    ) -> Result<Arc<dyn CollectionHandle>, StoreError> {
        self.record(StoreCall::CreateCollection(collection.clone()));
        if let Some(err) = self.behaviour.lock().unwrap().create_error.clone() {
            return Err(err);
        }
        Ok(self.handle(collection.name()))
    }
}

pub struct RecordingCollection {
    name: String,
    store: RecordingStore,
}

impl RecordingCollection {
    fn fail_with(&self, pick: impl FnOnce(&Behaviour) -> Option<StoreError>) -> Result<(), StoreError> {
        match pick(&self.store.behaviour.lock().unwrap()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CollectionHandle for RecordingCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn add(&self, ids: &[&str], documents: &[&str]) -> Result<(), StoreError> {
        self.store.record(StoreCall::Add {
            ids: owned(ids),
            documents: owned(documents),
        });
        self.fail_with(|b| b.add_error.clone())
    }

    async fn update(&self, ids: &[&str], documents: &[&str]) -> Result<(), StoreError> {
        self.store.record(StoreCall::Update {
            ids: owned(ids),
            documents: owned(documents),
        });
        self.fail_with(|b| b.update_error.clone())
    }

    async fn delete(&self, ids: &[&str]) -> Result<(), StoreError> {
        self.store.record(StoreCall::Delete { ids: owned(ids) });
        self.fail_with(|b| b.delete_error.clone())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        self.store.record(StoreCall::Count);
        self.fail_with(|b| b.count_error.clone())?;
        Ok(self.store.behaviour.lock().unwrap().count)
    }

    async fn query(
        &self,
        query_texts: &[&str],
        n_results: usize,
    ) -> Result<QueryResult, StoreError> {
        self.store.record(StoreCall::Query {
            query_texts: owned(query_texts),
            n_results,
        });
        self.fail_with(|b| b.query_error.clone())?;
        Ok(self.store.behaviour.lock().unwrap().query_result.clone())
    }
}
