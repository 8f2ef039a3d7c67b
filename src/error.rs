//! Error types for the describe pipeline

/// Errors raised while looking up a CronJobSource
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("cronjobsources.sources.eventing.knative.dev \"{name}\" not found in namespace \"{namespace}\"")]
    NotFound { name: String, namespace: String },

    #[error(transparent)]
    Api(#[from] kube::Error),
}

/// Errors that end a describe invocation
#[derive(Debug, thiserror::Error)]
pub enum DescribeError {
    /// Wrong number of positional arguments
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The output sink rejected a write
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for describe operations
pub type DescribeResult<T> = Result<T, DescribeError>;
