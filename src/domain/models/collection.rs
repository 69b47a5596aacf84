use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named set of documents in the vector store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    name: String,
    description: Option<String>,
    created: String,
}

impl Collection {
    /// Describes a collection created now.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            created: Local::now().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    /// Metadata attached to the collection in the store.
    ///
    /// `description` is left out when absent; Chroma rejects null metadata values.
    pub fn metadata(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(description) = &self.description {
            map.insert(
                "description".to_string(),
                Value::String(description.clone()),
            );
        }
        map.insert("created".to_string(), Value::String(self.created.clone()));
        map
    }
}
