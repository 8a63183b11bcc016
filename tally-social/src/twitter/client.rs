//! Minimal wrapper around the twitter135 API with Tally defaults.

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tally_common::{FollowerResult, Platform};
use tally_http::{Auth, HttpClient, HttpError, RequestOpts};

use super::extract;
use super::types::UserByScreenNameResponse;

const DEFAULT_BASE: &str = "https://twitter135.p.rapidapi.com";
const RAPIDAPI_HOST: &str = "twitter135.p.rapidapi.com";

#[derive(Clone)]
pub struct TwitterApi {
    http: HttpClient,
    key: String,
}

impl TwitterApi {
    pub fn new(api_key: String) -> Self {
        let http = HttpClient::new(DEFAULT_BASE).expect("twitter base url");
        Self { http, key: api_key }
    }

    /// Point the client at a different base URL (stub servers in tests).
    pub fn with_base_url(api_key: String, base: &str) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::new(base)?,
            key: api_key,
        })
    }

    /// Resolve the follower count for `username` (a screen name, no `@`).
    pub async fn follower_count(&self, username: &str) -> FollowerResult {
        let started = Instant::now();

        let key = match HeaderValue::from_str(&self.key) {
            Ok(v) => v,
            Err(e) => return api_error(&e.to_string()),
        };
        let mut headers = HeaderMap::new();
        headers.insert("x-rapidapi-host", HeaderValue::from_static(RAPIDAPI_HOST));

        let resp: Result<UserByScreenNameResponse, HttpError> = self
            .http
            .get_json(
                "v2/UserByScreenName/",
                RequestOpts {
                    auth: Some(Auth::Header {
                        name: HeaderName::from_static("x-rapidapi-key"),
                        value: key,
                    }),
                    headers: Some(headers),
                    query: Some(vec![("username", username.into())]),
                    ..Default::default()
                },
            )
            .await;

        let body = match resp {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    target: "social.twitter",
                    username = %username,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "twitter.follower_count.error"
                );
                return api_error(&e.to_string());
            }
        };

        match extract::follower_count(&body) {
            Ok(followers) => {
                tracing::info!(
                    target: "social.twitter",
                    username = %username,
                    followers,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "twitter.follower_count.success"
                );
                FollowerResult::Counted {
                    platform: Platform::Twitter,
                    username: username.to_string(),
                    followers,
                }
            }
            Err(e) => {
                tracing::warn!(
                    target: "social.twitter",
                    username = %username,
                    error = %e,
                    "twitter.follower_count.shape_error"
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
        error: format!("{} API Error: {details}", Platform::Twitter),
    }
}
