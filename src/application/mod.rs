//! # Application Layer
//!
//! Store ports and the connector service that validates requests before
//! delegating them to the bound collection.

pub mod interfaces;
pub mod vector_db_connector;

pub use interfaces::*;
pub use vector_db_connector::*;
