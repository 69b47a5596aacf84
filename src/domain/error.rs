use thiserror::Error;

/// Errors surfaced by the connector.
///
/// Both variants render as the bare message: callers see exactly the text
/// built at the point of failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller-supplied input violated a precondition. Raised before any
    /// store call.
    #[error("{0}")]
    InvalidInput(String),

    /// The vector store rejected or failed an otherwise valid request.
    #[error("{0}")]
    ConnectorOperation(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn connector_operation(msg: impl Into<String>) -> Self {
        Self::ConnectorOperation(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_connector_operation(&self) -> bool {
        matches!(self, Self::ConnectorOperation(_))
    }
}

/// Failures reported by a vector store adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A collection with the requested name already exists.
    #[error("{0}")]
    UniqueConstraint(String),

    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn unique_constraint(msg: impl Into<String>) -> Self {
        Self::UniqueConstraint(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn is_unique_constraint(&self) -> bool {
        matches!(self, Self::UniqueConstraint(_))
    }
}
