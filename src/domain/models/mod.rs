mod collection;
mod document;

pub use collection::*;
pub use document::*;
