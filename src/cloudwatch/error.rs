use thiserror::Error;

/// Errors raised while building the backend client.
#[derive(Error, Debug)]
pub enum SetupError {
    /// No region in the flags, the environment, the profile or the instance metadata
    #[error("No AWS region could be resolved; pass --region or set AWS_REGION")]
    MissingRegion,
}

/// Errors raised while querying a single metric.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The statistics request itself failed
    #[error("Backend request failed: {0}")]
    Backend(String),

    /// A request field was rejected before sending
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
