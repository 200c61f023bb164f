use thiserror::Error;

/// Errors returned by the `OpenRouter` completion client.
#[derive(Debug, Error)]
pub enum OpenRouterError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Anything other than `200 OK`. `message` is the provider's error text
    /// when the body carried one.
    #[error("unexpected HTTP status {status} from completion API: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("JSON deserialization error for chat completion: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// A 200 response with no usable `choices`.
    #[error("completion response contained no choices: {0}")]
    NoChoices(String),

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
