//! Chat-completion client for `OpenRouter`.

pub mod client;
pub mod error;
pub mod types;

pub use client::OpenRouterClient;
pub use error::OpenRouterError;
