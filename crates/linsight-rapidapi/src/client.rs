//! HTTP client for the Fresh `LinkedIn` Profile Data API.
//!
//! Two endpoints, each called at most once per run: the profile record and a
//! single page of recent posts. Every non-200 answer is an error; there is no
//! retry.

use std::time::Duration;

use linsight_core::{AppConfig, PostRecord, ProfileRecord};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::RapidApiError;
use crate::types::{PostsResponse, ProfileResponse};

/// Value of the `X-RapidAPI-Host` header. Fixed even when the base URL is
/// overridden.
pub const RAPIDAPI_HOST: &str = "fresh-linkedin-profile-data.p.rapidapi.com";

/// Everything except the RFC 3986 unreserved characters is escaped, so `/`
/// and `:` in the profile URL become `%2F` and `%3A` and spaces become `%20`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Client for the profile-data API.
///
/// Use [`RapidApiClient::from_config`] for production or
/// [`RapidApiClient::with_base_url`] to point at a mock server in tests.
pub struct RapidApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl RapidApiClient {
    /// Creates a client from the key, timeout, and base URL in `config`.
    ///
    /// # Errors
    ///
    /// See [`RapidApiClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, RapidApiError> {
        Self::with_base_url(
            &config.profile_api_key,
            config.request_timeout_secs,
            &config.rapidapi_base_url,
        )
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RapidApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RapidApiError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, RapidApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("linsight/0.1 (profile-analysis)")
            .build()?;

        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| RapidApiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: trimmed.to_owned(),
        })
    }

    /// Fetches the profile record for `linkedin_url`.
    ///
    /// # Errors
    ///
    /// - [`RapidApiError::UnexpectedStatus`] on any status other than 200.
    /// - [`RapidApiError::Http`] on network failure or timeout.
    /// - [`RapidApiError::Deserialize`] if the body is not a profile object.
    pub async fn get_profile(&self, linkedin_url: &str) -> Result<ProfileRecord, RapidApiError> {
        let url = self.profile_url(linkedin_url);
        let response: ProfileResponse = self.request_json(&url, "get-linkedin-profile").await?;
        Ok(response.into_record())
    }

    /// Fetches up to `max_posts` recent posts for `linkedin_url`, in API order.
    ///
    /// Posts with no `text` field are dropped. Empty or blank text is kept so
    /// numbering follows API order. The result may be empty.
    ///
    /// # Errors
    ///
    /// - [`RapidApiError::UnexpectedStatus`] on any status other than 200.
    /// - [`RapidApiError::Http`] on network failure or timeout.
    /// - [`RapidApiError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn get_posts(
        &self,
        linkedin_url: &str,
        max_posts: u32,
    ) -> Result<Vec<PostRecord>, RapidApiError> {
        let url = self.posts_url(linkedin_url, max_posts);
        let response: PostsResponse = self.request_json(&url, "get-profile-posts").await?;

        let mut posts: Vec<PostRecord> = response
            .data
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, post)| {
                if post.text.is_some() {
                    Some(post)
                } else {
                    tracing::warn!(index, "get_posts: skipping post without text");
                    None
                }
            })
            .collect();

        posts.truncate(usize::try_from(max_posts).unwrap_or(usize::MAX));
        Ok(posts)
    }

    fn profile_url(&self, linkedin_url: &str) -> String {
        format!(
            "{}/get-linkedin-profile?linkedin_url={}&include_skills=false",
            self.base_url,
            encode_query_value(linkedin_url)
        )
    }

    fn posts_url(&self, linkedin_url: &str, max_posts: u32) -> String {
        format!(
            "{}/get-profile-posts?linkedin_url={}&type=posts&max={max_posts}",
            self.base_url,
            encode_query_value(linkedin_url)
        )
    }

    /// Sends an authenticated GET, requires `200 OK`, and parses the body.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, RapidApiError> {
        tracing::debug!(endpoint = context, "requesting profile-data API");
        let response = self
            .client
            .get(url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RapidApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RapidApiError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
