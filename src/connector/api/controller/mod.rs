pub mod collection_controller;
pub mod document_controller;

pub use collection_controller::*;
pub use document_controller::*;
