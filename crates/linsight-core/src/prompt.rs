//! Analysis prompt template.

use crate::profile::{PostRecord, ProfileRecord};

const ANALYSIS_INSTRUCTIONS: &str = "\
Detailed Analysis Request:
1. Analyze the technical content of the user's posts. Highlight any innovative ideas or significant contributions to the field of AI.
2. Extract key phrases or important sentences that showcase the user's expertise and thought leadership.
3. Assess the engagement levels of the posts (likes, comments, shares) to gauge influence and reach within the professional network.
4. Identify any trends in the topics discussed over time and how they align with current industry trends.
5. Evaluate the user's network growth and interactions to understand their community impact and collaborative efforts.

Professional Interests:
- List specific areas of AI and technology the user is interested in, based on post content and interactions.

Skills & Expertise:
- Detail technical skills, tools, and methodologies mentioned or implied in the user's posts.

Professional Goals:
- Infer potential career aspirations and professional development goals from the user's content and interactions.

Recommendations for Growth:
- Offer tailored advice for enhancing visibility, increasing engagement, and expanding technical expertise based on the user's current LinkedIn activity.

Please structure your response with clear headings and bullet points for each section.
";

/// Renders the analysis prompt for one profile and its posts.
///
/// Posts are appended as `Post N: <text>` lines, numbered from 1 in the order
/// given. Callers skip this step entirely when `posts` is empty.
#[must_use]
pub fn build_analysis_prompt(
    profile: &ProfileRecord,
    posts: &[PostRecord],
    profile_url: &str,
) -> String {
    let mut prompt = format!(
        "LinkedIn Profile Analysis\n\n\
         User Summary:\n\
         - Name: {}\n\
         - Profile Summary: {}\n\
         - Current Role: {}\n\
         - Profile URL: {profile_url}\n\n",
        profile.display_name(),
        profile.display_summary(),
        profile.display_role(),
    );
    prompt.push_str(ANALYSIS_INSTRUCTIONS);

    for (i, post) in posts.iter().enumerate() {
        prompt.push_str(&format!(
            "\nPost {}: {}",
            i + 1,
            post.text.as_deref().unwrap_or_default()
        ));
    }

    prompt
}
