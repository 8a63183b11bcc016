//! Tagged lookup of the follower count inside an X provider response.
//!
//! Two failure variants because the lookup crosses two provider-owned
//! envelopes: the GraphQL user wrapper and the legacy profile blob.

use thiserror::Error;

use super::types::{UserByScreenNameResponse, UserResult};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// `data.user.result` absent: the response carries no user at all.
    #[error("Could not extract user data from X API")]
    MissingUser,
    /// User present but `legacy.followers_count` absent.
    #[error("Could not extract follower count from X API")]
    MissingFollowerCount,
}

/// Locate `data.user.result.legacy.followers_count`.
pub fn follower_count(resp: &UserByScreenNameResponse) -> Result<u64, ExtractError> {
    let result: &UserResult = resp
        .data
        .as_ref()
        .and_then(|d| d.user.as_ref())
        .and_then(|u| u.result.as_ref())
        .ok_or(ExtractError::MissingUser)?;

    result
        .legacy
        .as_ref()
        .and_then(|l| l.followers_count)
        .ok_or(ExtractError::MissingFollowerCount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_deeply_nested_count() {
        let resp: UserByScreenNameResponse = serde_json::from_value(json!({
            "data": { "user": { "result": {
                "rest_id": "11348282",
                "legacy": { "followers_count": 1_000_000, "screen_name": "nasa" }
            }}}
        }))
        .unwrap();
        assert_eq!(follower_count(&resp), Ok(1_000_000));
    }

    #[test]
    fn missing_user_wrapper_reports_user_error() {
        let resp: UserByScreenNameResponse =
            serde_json::from_value(json!({"data": {}})).unwrap();
        assert_eq!(follower_count(&resp), Err(ExtractError::MissingUser));
        assert_eq!(
            ExtractError::MissingUser.to_string(),
            "Could not extract user data from X API"
        );
    }

    #[test]
    fn user_without_legacy_reports_count_error() {
        let resp: UserByScreenNameResponse = serde_json::from_value(json!({
            "data": { "user": { "result": { "rest_id": "11348282" } } }
        }))
        .unwrap();
        assert_eq!(
            follower_count(&resp),
            Err(ExtractError::MissingFollowerCount)
        );
    }

    #[test]
    fn legacy_without_count_reports_count_error() {
        let resp: UserByScreenNameResponse = serde_json::from_value(json!({
            "data": { "user": { "result": { "legacy": { "screen_name": "nasa" } } } }
        }))
        .unwrap();
        assert_eq!(
            follower_count(&resp).unwrap_err().to_string(),
            "Could not extract follower count from X API"
        );
    }
}
