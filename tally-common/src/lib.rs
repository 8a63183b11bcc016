//! Common types shared across Tally crates.
//!
//! This crate defines the wire model for follower aggregation (the request,
//! the per-platform outcome, and the combined response) plus the
//! [`observability`] helpers used by the server binary and integration tests.
//! It is intentionally lightweight so every crate can depend on it without
//! pulling in heavy transitive costs.
//!
//! # Overview
//!
//! - [`Platform`]: the supported social networks and their display names
//! - [`FollowerRequest`]: optional username per platform
//! - [`FollowerResult`]: normalized success-or-error outcome for one platform
//! - [`FollowerResponse`]: platform → outcome map, omitting unrequested keys
//! - [`observability`]: centralised tracing/logging initialisation
//!
//! # Examples
//!
//! ```rust
//! use tally_common::{FollowerResult, Platform};
//!
//! let ok = FollowerResult::Counted {
//!     platform: Platform::Instagram,
//!     username: "nasa".into(),
//!     followers: 97_000_000,
//! };
//! assert!(ok.is_counted());
//! assert_eq!(Platform::Twitter.display_name(), "X (Twitter)");
//! ```
use serde::{Deserialize, Serialize};

pub mod observability;

/// A social network we can resolve follower counts for.
///
/// Serialized form is the user-facing display name, which is also what the
/// upstream response body carries in its `platform` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    LinkedIn,
    #[serde(rename = "X (Twitter)")]
    Twitter,
}

impl Platform {
    /// Human-readable name used in response bodies and error strings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "X (Twitter)",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Inbound request: one optional username per supported platform.
///
/// A platform counts as requested only when its field is present *and*
/// non-empty; an empty string behaves the same as an absent field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowerRequest {
    #[serde(default)]
    pub instagram_username: Option<String>,
    #[serde(default)]
    pub linkedin_username: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
}

impl FollowerRequest {
    /// True when no platform was requested at all.
    pub fn is_empty(&self) -> bool {
        requested(&self.instagram_username).is_none()
            && requested(&self.linkedin_username).is_none()
            && requested(&self.twitter_username).is_none()
    }
}

/// Normalize an optional username field: `None` and `""` both mean
/// "not requested".
pub fn requested(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|u| !u.is_empty())
}

/// The normalized outcome for a single platform.
///
/// Exactly one shape is populated per platform per response: either the
/// resolved count or a data-level error string. Provider failures never
/// surface as transport faults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FollowerResult {
    Counted {
        platform: Platform,
        username: String,
        followers: u64,
    },
    Failed {
        error: String,
    },
}

impl FollowerResult {
    pub fn is_counted(&self) -> bool {
        matches!(self, FollowerResult::Counted { .. })
    }

    /// Error text, if this outcome is a failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            FollowerResult::Failed { error } => Some(error),
            FollowerResult::Counted { .. } => None,
        }
    }
}

/// Combined response: a key is present iff the platform was requested.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowerResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<FollowerResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<FollowerResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<FollowerResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counted_serializes_flat() {
        let r = FollowerResult::Counted {
            platform: Platform::Twitter,
            username: "x".into(),
            followers: 42,
        };
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({"platform": "X (Twitter)", "username": "x", "followers": 42})
        );
    }

    #[test]
    fn failed_serializes_error_only() {
        let r = FollowerResult::Failed {
            error: "LinkedIn API Error: timed out".into(),
        };
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({"error": "LinkedIn API Error: timed out"})
        );
    }

    #[test]
    fn response_omits_unrequested_platforms() {
        let resp = FollowerResponse {
            instagram: Some(FollowerResult::Counted {
                platform: Platform::Instagram,
                username: "nasa".into(),
                followers: 97_000_000,
            }),
            ..Default::default()
        };
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v.as_object().unwrap().len(), 1);
        assert!(v.get("instagram").is_some());
    }

    #[test]
    fn empty_string_counts_as_absent() {
        let req = FollowerRequest {
            instagram_username: Some(String::new()),
            ..Default::default()
        };
        assert!(req.is_empty());
        assert!(requested(&req.instagram_username).is_none());
    }

    #[test]
    fn request_tolerates_missing_fields() {
        let req: FollowerRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.is_empty());

        let req: FollowerRequest =
            serde_json::from_value(json!({"twitter_username": "x"})).unwrap();
        assert!(!req.is_empty());
        assert_eq!(requested(&req.twitter_username), Some("x"));
    }
}
