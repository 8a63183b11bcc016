//! Tagged lookup of the follower count inside a LinkedIn provider response.

use thiserror::Error;

use super::types::ProfileDetailsResponse;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Could not extract follower count from LinkedIn API")]
    MissingFollowerCount,
}

/// Locate `data.followerCount`.
pub fn follower_count(resp: &ProfileDetailsResponse) -> Result<u64, ExtractError> {
    resp.data
        .as_ref()
        .and_then(|d| d.follower_count)
        .ok_or(ExtractError::MissingFollowerCount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_camel_cased_count() {
        let resp: ProfileDetailsResponse = serde_json::from_value(json!({
            "data": { "followerCount": 5120, "headline": "We build rockets" }
        }))
        .unwrap();
        assert_eq!(follower_count(&resp), Ok(5120));
    }

    #[test]
    fn empty_data_block_is_a_shape_error() {
        // 2xx with `{"data": {}}`, the partial-response case.
        let resp: ProfileDetailsResponse =
            serde_json::from_value(json!({"data": {}})).unwrap();
        assert_eq!(
            follower_count(&resp).unwrap_err().to_string(),
            "Could not extract follower count from LinkedIn API"
        );
    }

    #[test]
    fn missing_data_block_is_a_shape_error() {
        let resp: ProfileDetailsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(follower_count(&resp).is_err());
    }
}
