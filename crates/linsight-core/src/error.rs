use thiserror::Error;

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    /// The supplied profile identifier does not look like a `LinkedIn` profile URL.
    #[error("invalid LinkedIn profile URL \"{url}\": must start with {expected_prefix}")]
    InvalidInput {
        url: String,
        expected_prefix: &'static str,
    },
}
