mod embedding_service;
mod vector_store;

pub use embedding_service::*;
pub use vector_store::*;
