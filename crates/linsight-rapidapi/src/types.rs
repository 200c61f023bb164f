//! Response envelopes for the profile-data API.

use linsight_core::{PostRecord, ProfileRecord};
use serde::Deserialize;

/// `get-linkedin-profile` body.
///
/// The provider has shipped both a bare record and one wrapped in
/// `{"data": {...}}`; the wrapped shape is tried first.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Wrapped { data: ProfileRecord },
    Bare(ProfileRecord),
}

impl ProfileResponse {
    #[must_use]
    pub fn into_record(self) -> ProfileRecord {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// `get-profile-posts` body. A missing or null `data` means no posts.
#[derive(Debug, Deserialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub data: Option<Vec<PostRecord>>,
}
