use thiserror::Error;

/// Failures that turn an invocation into a 500 response.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The cluster backend rejected or failed the operation
    #[error("{0}")]
    Backend(String),

    /// The response body could not be serialized
    #[error("Failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),
}
