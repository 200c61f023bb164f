//! Fetch-then-summarize pipeline.
//!
//! Stages run strictly in order: validate, fetch profile, fetch posts, build
//! prompt, complete, present. The first fatal error ends the run; nothing is
//! retried. Report sections are written as soon as their inputs exist, so a
//! completion failure still leaves the user details and posts on screen.

use std::fmt;
use std::io::{self, Write};

use linsight_core::{build_analysis_prompt, validate_profile_url, CoreError};
use linsight_openrouter::{OpenRouterClient, OpenRouterError};
use linsight_rapidapi::{RapidApiClient, RapidApiError};
use thiserror::Error;

use crate::present;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Validate,
    FetchProfile,
    FetchPosts,
    BuildPrompt,
    Complete,
    Present,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validate => "input validation",
            Stage::FetchProfile => "profile fetch",
            Stage::FetchPosts => "posts fetch",
            Stage::BuildPrompt => "prompt build",
            Stage::Complete => "completion",
            Stage::Present => "presentation",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub(crate) enum PipelineError {
    #[error("input validation failed: {0}")]
    InvalidInput(#[from] CoreError),

    #[error("{stage} failed: {source}")]
    FetchFailed {
        stage: Stage,
        #[source]
        source: RapidApiError,
    },

    #[error("{stage} failed: unreadable response: {source}")]
    ParseFailed {
        stage: Stage,
        #[source]
        source: RapidApiError,
    },

    #[error("completion failed: {0}")]
    CompletionFailed(#[from] OpenRouterError),

    #[error("presentation failed: {0}")]
    Output(#[from] io::Error),
}

impl PipelineError {
    fn from_data_api(stage: Stage, source: RapidApiError) -> Self {
        match source {
            RapidApiError::Deserialize { .. } => Self::ParseFailed { stage, source },
            other => Self::FetchFailed {
                stage,
                source: other,
            },
        }
    }

    pub(crate) fn stage(&self) -> Stage {
        match self {
            Self::InvalidInput(_) => Stage::Validate,
            Self::FetchFailed { stage, .. } | Self::ParseFailed { stage, .. } => *stage,
            Self::CompletionFailed(_) => Stage::Complete,
            Self::Output(_) => Stage::Present,
        }
    }

    /// `2` for bad input, `1` for everything else.
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Analyzed { segments: usize },
    NoPosts,
}

pub(crate) struct Pipeline<'a> {
    data: &'a RapidApiClient,
    completion: &'a OpenRouterClient,
    max_posts: u32,
}

impl<'a> Pipeline<'a> {
    pub(crate) fn new(
        data: &'a RapidApiClient,
        completion: &'a OpenRouterClient,
        max_posts: u32,
    ) -> Self {
        Self {
            data,
            completion,
            max_posts,
        }
    }

    /// Runs every stage for `profile_url`, writing report sections to `out`.
    ///
    /// # Errors
    ///
    /// Returns the [`PipelineError`] of the first stage that failed. On a
    /// completion failure the "failed to generate" line has already been
    /// written to `out`.
    pub(crate) async fn run<W: Write>(
        &self,
        profile_url: &str,
        out: &mut W,
    ) -> Result<Outcome, PipelineError> {
        validate_profile_url(profile_url)?;
        tracing::info!(stage = %Stage::Validate, "profile URL accepted");

        let profile = self
            .data
            .get_profile(profile_url)
            .await
            .map_err(|e| PipelineError::from_data_api(Stage::FetchProfile, e))?;
        tracing::info!(stage = %Stage::FetchProfile, "profile fetched");

        let posts = self
            .data
            .get_posts(profile_url, self.max_posts)
            .await
            .map_err(|e| PipelineError::from_data_api(Stage::FetchPosts, e))?;
        tracing::info!(stage = %Stage::FetchPosts, count = posts.len(), "posts fetched");

        present::user_details(out, &profile, profile_url)?;
        present::posts(out, &posts)?;

        if posts.is_empty() {
            tracing::info!("no posts, skipping analysis");
            present::no_posts(out)?;
            return Ok(Outcome::NoPosts);
        }

        let prompt = build_analysis_prompt(&profile, &posts, profile_url);
        tracing::info!(stage = %Stage::BuildPrompt, chars = prompt.len(), "prompt built");

        let analysis = match self.completion.complete(&prompt).await {
            Ok(analysis) => analysis,
            Err(e) => {
                present::analysis_failed(out)?;
                return Err(e.into());
            }
        };
        tracing::info!(
            stage = %Stage::Complete,
            segments = analysis.segments.len(),
            "completion received"
        );

        present::analysis(out, &analysis)?;
        Ok(Outcome::Analyzed {
            segments: analysis.segments.len(),
        })
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
