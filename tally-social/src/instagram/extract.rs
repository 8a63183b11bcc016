//! Tagged lookup of the follower count inside an Instagram provider response.

use thiserror::Error;

use super::types::ProfileHoverResponse;

/// A 2xx response whose body lacks the expected path.
///
/// The Display string is exactly what goes into the normalized error field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Could not extract follower count from Instagram API")]
    MissingFollowerCount,
}

/// Locate `user_data.follower_count`.
pub fn follower_count(resp: &ProfileHoverResponse) -> Result<u64, ExtractError> {
    resp.user_data
        .as_ref()
        .and_then(|u| u.follower_count)
        .ok_or(ExtractError::MissingFollowerCount)
}
