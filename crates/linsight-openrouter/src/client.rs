//! HTTP client for `OpenRouter`'s OpenAI-compatible chat-completion endpoint.

use std::time::Duration;

use linsight_core::config::{
    DEFAULT_APP_NAME, DEFAULT_COMPLETION_MAX_TOKENS, DEFAULT_COMPLETION_MODEL, DEFAULT_SITE_URL,
};
use linsight_core::{AnalysisResult, AppConfig};
use reqwest::{header, Client, StatusCode, Url};

use crate::error::OpenRouterError;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ErrorResponse};

/// Upper bound on how much of a non-JSON error body is echoed back.
const ERROR_BODY_LIMIT: usize = 200;

/// Client for the chat-completion endpoint.
///
/// Every request uses temperature 0 and sends the prompt as a single user
/// message. `site_url` and `app_name` go out as the `Referer` and `X-Title`
/// attribution headers.
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    site_url: String,
    app_name: String,
}

impl OpenRouterClient {
    /// Creates a client from the completion settings in `config`.
    ///
    /// # Errors
    ///
    /// See [`OpenRouterClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, OpenRouterError> {
        Ok(Self::with_base_url(
            &config.completion_api_key,
            config.completion_timeout_secs,
            &config.openrouter_base_url,
        )?
        .with_model(&config.completion_model, config.completion_max_tokens)
        .with_attribution(&config.site_url, &config.app_name))
    }

    /// Creates a client with a custom base URL and the default model, token
    /// ceiling, and attribution.
    ///
    /// # Errors
    ///
    /// Returns [`OpenRouterError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`OpenRouterError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, OpenRouterError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));
        Url::parse(&endpoint).map_err(|e| OpenRouterError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
            model: DEFAULT_COMPLETION_MODEL.to_owned(),
            max_tokens: DEFAULT_COMPLETION_MAX_TOKENS,
            site_url: DEFAULT_SITE_URL.to_owned(),
            app_name: DEFAULT_APP_NAME.to_owned(),
        })
    }

    #[must_use]
    pub fn with_model(mut self, model: &str, max_tokens: u32) -> Self {
        model.clone_into(&mut self.model);
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub fn with_attribution(mut self, site_url: &str, app_name: &str) -> Self {
        site_url.clone_into(&mut self.site_url);
        app_name.clone_into(&mut self.app_name);
        self
    }

    /// Sends `prompt` as a single user message and returns every generated
    /// choice, in order.
    ///
    /// # Errors
    ///
    /// - [`OpenRouterError::UnexpectedStatus`] on any status other than 200.
    /// - [`OpenRouterError::Http`] on network failure or timeout.
    /// - [`OpenRouterError::Deserialize`] if the body is not valid JSON.
    /// - [`OpenRouterError::NoChoices`] if the body has no usable choices.
    pub async fn complete(&self, prompt: &str) -> Result<AnalysisResult, OpenRouterError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: 0.0,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(
            model = %self.model,
            max_tokens = self.max_tokens,
            prompt_chars = prompt.len(),
            "requesting chat completion"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(header::REFERER, &self.site_url)
            .header("X-Title", &self.app_name)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(OpenRouterError::UnexpectedStatus {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(OpenRouterError::Deserialize)?;
        into_analysis(parsed)
    }
}

fn into_analysis(response: ChatCompletionResponse) -> Result<AnalysisResult, OpenRouterError> {
    let Some(choices) = response.choices else {
        let reason = response
            .error
            .and_then(|e| e.message)
            .unwrap_or_else(|| "missing \"choices\" field".to_owned());
        return Err(OpenRouterError::NoChoices(reason));
    };

    let segments: Vec<String> = choices
        .into_iter()
        .filter_map(|c| c.message.and_then(|m| m.content))
        .collect();

    if segments.is_empty() {
        return Err(OpenRouterError::NoChoices(
            "no choice carried message content".to_owned(),
        ));
    }

    Ok(AnalysisResult { segments })
}

/// Pulls `error.message` out of an error body, falling back to a truncated
/// copy of the raw text.
fn error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(message) = parsed.error.message {
            return message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_owned();
    }
    trimmed.chars().take(ERROR_BODY_LIMIT).collect()
}
