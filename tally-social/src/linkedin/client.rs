//! Minimal wrapper around the LinkedIn scraper API with Tally defaults.

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tally_common::{FollowerResult, Platform};
use tally_http::{Auth, HttpClient, HttpError, RequestOpts};

use super::extract;
use super::types::ProfileDetailsResponse;

const DEFAULT_BASE: &str = "https://linkedinscraper.p.rapidapi.com";
const RAPIDAPI_HOST: &str = "linkedinscraper.p.rapidapi.com";

#[derive(Clone)]
pub struct LinkedinApi {
    http: HttpClient,
    key: String,
}

impl LinkedinApi {
    pub fn new(api_key: String) -> Self {
        let http = HttpClient::new(DEFAULT_BASE).expect("linkedin base url");
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
    ///
    /// All failures come back as data; transport and non-2xx problems are
    /// prefixed `LinkedIn API Error:`, shape problems keep the extraction
    /// message verbatim.
    pub async fn follower_count(&self, username: &str) -> FollowerResult {
        let started = Instant::now();

        let key = match HeaderValue::from_str(&self.key) {
            Ok(v) => v,
            Err(e) => return api_error(&e.to_string()),
        };
        let mut headers = HeaderMap::new();
        headers.insert("x-rapidapi-host", HeaderValue::from_static(RAPIDAPI_HOST));

        let resp: Result<ProfileDetailsResponse, HttpError> = self
            .http
            .get_json(
                "profile-details",
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
                    target: "social.linkedin",
                    username = %username,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "linkedin.follower_count.error"
                );
                return api_error(&e.to_string());
            }
        };

        match extract::follower_count(&body) {
            Ok(followers) => {
                tracing::info!(
                    target: "social.linkedin",
                    username = %username,
                    followers,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "linkedin.follower_count.success"
                );
                FollowerResult::Counted {
                    platform: Platform::LinkedIn,
                    username: username.to_string(),
                    followers,
                }
            }
            Err(e) => {
                tracing::warn!(
                    target: "social.linkedin",
                    username = %username,
                    error = %e,
                    "linkedin.follower_count.shape_error"
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
        error: format!("{} API Error: {details}", Platform::LinkedIn),
    }
}
