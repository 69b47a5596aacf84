//! # Domain Layer
//!
//! Documents, collections and the error kinds shared by every layer.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
