//! Minimal wrapper around the Instagram scraper API with Tally defaults.
//!
//! One outbound call per invocation, 15s hard timeout, no retries, no
//! caching. Every failure mode is folded into a data-level
//! [`FollowerResult::Failed`]; callers never see an `Err`.

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tally_common::{FollowerResult, Platform};
use tally_http::{Auth, HttpClient, HttpError, RequestOpts};

use super::extract;
use super::types::ProfileHoverResponse;

const DEFAULT_BASE: &str = "https://instagram-scraper-stable-api.p.rapidapi.com";
/// RapidAPI routes on this header, so it stays fixed even when the base URL
/// is overridden for tests.
const RAPIDAPI_HOST: &str = "instagram-scraper-stable-api.p.rapidapi.com";

#[derive(Clone)]
pub struct InstagramApi {
    http: HttpClient,
    key: String,
}

impl InstagramApi {
    pub fn new(api_key: String) -> Self {
        let http = HttpClient::new(DEFAULT_BASE).expect("instagram base url");
        Self { http, key: api_key }
    }

    /// Point the client at a different base URL (stub servers in tests).
    pub fn with_base_url(api_key: String, base: &str) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::new(base)?,
            key: api_key,
        })
    }

    /// Resolve the follower count for `username`.
    pub async fn follower_count(&self, username: &str) -> FollowerResult {
        let started = Instant::now();
        tracing::debug!(
            target: "social.instagram",
            username = %username,
            "instagram.follower_count.start"
        );

        let key = match HeaderValue::from_str(&self.key) {
            Ok(v) => v,
            Err(e) => return api_error(&e.to_string()),
        };
        let mut headers = HeaderMap::new();
        headers.insert("x-rapidapi-host", HeaderValue::from_static(RAPIDAPI_HOST));

        let resp: Result<ProfileHoverResponse, HttpError> = self
            .http
            .get_json(
                "ig_get_fb_profile_hover.php",
                RequestOpts {
                    auth: Some(Auth::Header {
                        name: HeaderName::from_static("x-rapidapi-key"),
                        value: key,
                    }),
                    headers: Some(headers),
                    query: Some(vec![("username_or_url", username.into())]),
                    ..Default::default()
                },
            )
            .await;

        let body = match resp {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    target: "social.instagram",
                    username = %username,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "instagram.follower_count.error"
                );
                return api_error(&e.to_string());
            }
        };

        match extract::follower_count(&body) {
            Ok(followers) => {
                tracing::info!(
                    target: "social.instagram",
                    username = %username,
                    followers,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "instagram.follower_count.success"
                );
                FollowerResult::Counted {
                    platform: Platform::Instagram,
                    username: username.to_string(),
                    followers,
                }
            }
            Err(e) => {
                tracing::warn!(
                    target: "social.instagram",
                    username = %username,
                    error = %e,
                    "instagram.follower_count.shape_error"
                );
                FollowerResult::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}

fn api_error(details: &str) -> FollowerResult {
    FollowerResult::Failed {
        error: format!("{} API Error: {details}", Platform::Instagram),
    }
}
