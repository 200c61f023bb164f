//! Domain records handed between pipeline stages.
//!
//! Records are created once by the fetchers and never mutated afterwards.
//! Missing profile fields render as fixed placeholder text rather than blanks.

use serde::{Deserialize, Serialize};

pub const NO_FIRST_NAME: &str = "No first name available";
pub const NO_LAST_NAME: &str = "No last name available";
pub const NO_SUMMARY: &str = "No summary available";
pub const NO_JOB_TITLE: &str = "No current role specified";
pub const NO_COMPANY: &str = "No company information available";

/// Profile details returned by the profile-data API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    /// Free-text "About" section.
    #[serde(default)]
    pub about: Option<String>,
}

impl ProfileRecord {
    /// `"<first> <last>"`, with placeholders for either missing half.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            or_placeholder(self.first_name.as_deref(), NO_FIRST_NAME),
            or_placeholder(self.last_name.as_deref(), NO_LAST_NAME)
        )
    }

    #[must_use]
    pub fn display_summary(&self) -> &str {
        or_placeholder(self.about.as_deref(), NO_SUMMARY)
    }

    /// `"<job title> at <company>"`, with placeholders for either missing half.
    #[must_use]
    pub fn display_role(&self) -> String {
        format!(
            "{} at {}",
            or_placeholder(self.job_title.as_deref(), NO_JOB_TITLE),
            or_placeholder(self.company.as_deref(), NO_COMPANY)
        )
    }
}

fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value.unwrap_or(placeholder)
}

/// A single post from the posts API.
///
/// Only `text` is interpreted; engagement counters and anything else the API
/// sends are kept verbatim in `metadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl PostRecord {
    /// Convenience constructor for a post with only a body.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            metadata: serde_json::Map::new(),
        }
    }
}

/// Generated analysis text, one segment per completion choice, in API order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub segments: Vec<String>,
}
