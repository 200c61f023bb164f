//! Plain-text report sections written to stdout.

use std::io::{self, Write};

use linsight_core::{AnalysisResult, PostRecord, ProfileRecord};

use crate::pipeline::PipelineError;

pub(crate) const NO_POSTS_MESSAGE: &str = "Analysis skipped: no posts found.";
pub(crate) const ANALYSIS_FAILED_MESSAGE: &str = "Failed to generate analysis results.";

pub(crate) fn user_details<W: Write>(
    out: &mut W,
    profile: &ProfileRecord,
    profile_url: &str,
) -> io::Result<()> {
    writeln!(out, "\nUser Details Extracted:")?;
    writeln!(out, "- Name: {}", profile.display_name())?;
    writeln!(out, "- Summary: {}", profile.display_summary())?;
    writeln!(out, "- Current Role: {}", profile.display_role())?;
    writeln!(out, "- LinkedIn URL: {profile_url}")
}

pub(crate) fn posts<W: Write>(out: &mut W, posts: &[PostRecord]) -> io::Result<()> {
    writeln!(out, "\nExtracted Posts:")?;
    for (i, post) in posts.iter().enumerate() {
        writeln!(
            out,
            "Post {}: {}",
            i + 1,
            post.text.as_deref().unwrap_or_default()
        )?;
    }
    Ok(())
}

pub(crate) fn no_posts<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{NO_POSTS_MESSAGE}")
}

pub(crate) fn analysis<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    writeln!(out, "\nAnalysis Results:\n")?;
    for segment in &result.segments {
        writeln!(out, "{segment}")?;
    }
    Ok(())
}

pub(crate) fn analysis_failed<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{ANALYSIS_FAILED_MESSAGE}")
}

pub(crate) fn failure<W: Write>(out: &mut W, err: &PipelineError) -> io::Result<()> {
    writeln!(out, "error: {err}")
}
