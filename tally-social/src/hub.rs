//! Fan-out of a single follower request across the platform adapters.

use std::time::Instant;

use tally_common::{requested, FollowerRequest, FollowerResponse};

use crate::instagram::InstagramApi;
use crate::linkedin::LinkedinApi;
use crate::twitter::TwitterApi;

/// Owns one client per platform, built once at startup from the shared
/// RapidAPI key, and merges their independent outcomes per request.
///
/// Each adapter outcome is captured on its own: a provider failure lands as
/// data under that platform's key and never aborts, skips, or alters the
/// other platforms in the same request.
#[derive(Clone)]
pub struct SocialHub {
    instagram: InstagramApi,
    linkedin: LinkedinApi,
    twitter: TwitterApi,
}

impl SocialHub {
    pub fn new(rapidapi_key: &str) -> Self {
        Self {
            instagram: InstagramApi::new(rapidapi_key.to_string()),
            linkedin: LinkedinApi::new(rapidapi_key.to_string()),
            twitter: TwitterApi::new(rapidapi_key.to_string()),
        }
    }

    /// Assemble a hub from prebuilt clients (tests point these at stubs).
    pub fn from_clients(
        instagram: InstagramApi,
        linkedin: LinkedinApi,
        twitter: TwitterApi,
    ) -> Self {
        Self {
            instagram,
            linkedin,
            twitter,
        }
    }

    /// Resolve every requested platform concurrently and join before
    /// assembling the response, so the body is always complete.
    ///
    /// A platform key is present in the response iff its username was present
    /// and non-empty in the request.
    pub async fn resolve(&self, req: &FollowerRequest) -> FollowerResponse {
        let started = Instant::now();

        let instagram = async {
            match requested(&req.instagram_username) {
                Some(u) => Some(self.instagram.follower_count(u).await),
                None => None,
            }
        };
        let linkedin = async {
            match requested(&req.linkedin_username) {
                Some(u) => Some(self.linkedin.follower_count(u).await),
                None => None,
            }
        };
        let twitter = async {
            match requested(&req.twitter_username) {
                Some(u) => Some(self.twitter.follower_count(u).await),
                None => None,
            }
        };

        let (instagram, linkedin, twitter) = tokio::join!(instagram, linkedin, twitter);

        tracing::info!(
            target: "social.hub",
            instagram = instagram.is_some(),
            linkedin = linkedin.is_some(),
            twitter = twitter.is_some(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "hub.resolve.done"
        );

        FollowerResponse {
            instagram,
            linkedin,
            twitter,
        }
    }
}
