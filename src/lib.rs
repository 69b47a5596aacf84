pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    CollectionHandle, EmbeddingService, QueryResult, VectorDbConnector, VectorStore,
    DEFAULT_RESULT_COUNT,
};

pub use connector::api::{router, ApiError, Container, ContainerConfig};
pub use connector::{
    ChromaCollectionHandle, ChromaVectorStore, HashingEmbedding, InMemoryCollection,
    InMemoryVectorStore,
};

pub use domain::{Collection, Document, DomainError, StoreError};

pub use cli::Commands;
