//! # Connector Layer
//!
//! External integrations implementing the application ports:
//! - Vector stores (Chroma server, in-memory)
//! - Embeddings for stores that need client-side vectors
//! - The HTTP API in front of the connector service

pub mod adapter;
pub mod api;

pub use adapter::*;
