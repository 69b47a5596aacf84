mod chroma_vector_store;
mod hashing_embedding;
mod in_memory_vector_store;

pub use chroma_vector_store::*;
pub use hashing_embedding::*;
pub use in_memory_vector_store::*;
