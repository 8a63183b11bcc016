//! Minimal HTTP client for the provider adapters.
//!
//! - Request options: headers, `Auth`, query params, per-request timeout
//! - Redacts sensitive query params and never logs secret header values
//! - Structured `tracing` events for request start, response, and errors
//!
//! Every call is a single attempt: the upstream providers get one shot and a
//! hard timeout, and any failure is reported to the caller as data. There is
//! deliberately no retry or backoff layer here.
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), tally_http::HttpError> {
//! let client = tally_http::HttpClient::new("https://api.example.com")?;
//! let got: serde_json::Value = client
//!     .get_json("v1/items", tally_http::RequestOpts::default())
//!     .await?;
//! # Ok(()) }
//! ```

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::time::Duration;
use thiserror::Error;

// ==============================
// Errors
// ==============================

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("request build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}, body_snippet: {1}")]
    Decode(String, String),
    #[error("provider returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

// ==============================
// Auth & Request Options
// ==============================

/// Authentication strategies supported by the client.
///
/// The RapidAPI gateway authenticates with a custom header pair, so the
/// header variant is the one the adapters actually reach for.
#[derive(Clone, Debug, Default)]
pub enum Auth {
    /// Custom header (e.g. `x-rapidapi-key`).
    Header {
        name: reqwest::header::HeaderName,
        value: reqwest::header::HeaderValue,
    },
    #[default]
    None,
}

/// Per-request tuning knobs.
///
/// ```
/// use tally_http::RequestOpts;
/// use std::time::Duration;
///
/// let opts = RequestOpts {
///     timeout: Some(Duration::from_secs(5)),
///     ..Default::default()
/// };
/// assert_eq!(opts.timeout.unwrap().as_secs(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOpts<'a> {
    pub timeout: Option<Duration>,
    pub auth: Option<Auth>,
    pub headers: Option<HeaderMap>,
    pub query: Option<Vec<(&'a str, Cow<'a, str>)>>, // e.g. [("username", "nasa".into())]
}

// ==============================
// Client
// ==============================

#[derive(Clone)]
pub struct HttpClient {
    base: Url,
    inner: Client,
    pub default_timeout: Duration,
}

impl HttpClient {
    /// Construct a client anchored to a base URL.
    ///
    /// ```no_run
    /// use tally_http::{HttpClient, HttpError};
    /// use std::time::Duration;
    ///
    /// let client = HttpClient::new("https://api.example.com")?;
    /// assert_eq!(client.default_timeout, Duration::from_secs(15));
    /// # Ok::<(), HttpError>(())
    /// ```
    pub fn new(base: &str) -> Result<Self, HttpError> {
        let base = Url::parse(base).map_err(|e| HttpError::Url(e.to_string()))?;
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self {
            base,
            inner,
            default_timeout: Duration::from_secs(15),
        })
    }

    /// Override the default timeout returned by [`HttpClient::new`].
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.default_timeout = dur;
        self
    }

    /// GET JSON with per-request options (headers/query/auth/timeout).
    pub async fn get_json<T>(&self, path: &str, opts: RequestOpts<'_>) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        self.request_json(Method::GET, path, opts).await
    }

    async fn request_json<T>(
        &self,
        method: Method,
        path: &str,
        opts: RequestOpts<'_>,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let url = self
            .base
            .join(path)
            .map_err(|e| HttpError::Url(e.to_string()))?;

        let mut rb = self.inner.request(method.clone(), url.clone());

        // timeout
        let timeout = opts.timeout.unwrap_or(self.default_timeout);
        rb = rb.timeout(timeout);

        // query
        if let Some(q) = &opts.query {
            let pairs: Vec<(&str, &str)> = q.iter().map(|(k, v)| (*k, v.as_ref())).collect();
            rb = rb.query(&pairs);
        }

        // headers
        if let Some(hdrs) = &opts.headers {
            rb = rb.headers(hdrs.clone());
        }

        // auth
        let auth_kind = match &opts.auth {
            Some(Auth::Header { .. }) => "header",
            Some(Auth::None) | None => "none",
        };
        if let Some(Auth::Header { name, value }) = &opts.auth {
            rb = rb.header(name, value);
        }

        tracing::debug!(
            method = %method,
            host_path = %format!("{}{}", url.domain().unwrap_or("-"), url.path()),
            query = ?redact_query(opts.query.as_deref()),
            timeout_ms = timeout.as_millis() as u64,
            auth_kind,
            "http.request.start"
        );

        let t0 = std::time::Instant::now();
        let resp = rb.send().await.map_err(|err| {
            let message = err.to_string();
            tracing::warn!(message = %message, "http.network_error.send");
            HttpError::Network(message)
        })?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|err| {
            let message = err.to_string();
            tracing::warn!(message = %message, "http.network_error.body");
            HttpError::Network(message)
        })?;
        let dur_ms = t0.elapsed().as_millis() as u64;

        let snippet = snip_body(&bytes);
        tracing::debug!(
            %status,
            duration_ms = dur_ms,
            body_len = bytes.len(),
            "http.response"
        );
        tracing::trace!(body_snippet = %snippet, "http.response.body_snippet");

        if status.is_success() {
            return serde_json::from_slice::<T>(&bytes).map_err(|e| {
                tracing::warn!(
                    serde_err = %e,
                    body_snippet = %snippet,
                    "http.response.decode_error"
                );
                HttpError::Decode(e.to_string(), snippet)
            });
        }

        let message = extract_error_message(&bytes);
        tracing::warn!(%status, message = %message, "http.error");
        Err(HttpError::Api { status, message })
    }
}

// ==============================
// Helpers
// ==============================

/// Pull a human-readable message out of a JSON error body, falling back to a
/// truncated raw snippet. RapidAPI gateways answer with one of
/// `{"message": ...}`, `{"detail": ...}` or `{"error": ...}`.
fn extract_error_message(body: &[u8]) -> String {
    #[derive(Deserialize)]
    struct Msg {
        #[serde(default)]
        message: String,
        #[serde(default)]
        detail: String,
        #[serde(default)]
        error: String,
    }

    if let Ok(m) = serde_json::from_slice::<Msg>(body) {
        if !m.message.is_empty() {
            return m.message;
        }
        if !m.detail.is_empty() {
            return m.detail;
        }
        if !m.error.is_empty() {
            return m.error;
        }
    }
    snip_body(body)
}

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).to_string();
    if snip.len() > 500 {
        snip.truncate(500);
        snip.push_str("...");
    }
    snip
}

/// Redact secret-looking query params for logging.
fn redact_query(query: Option<&[(&str, Cow<'_, str>)]>) -> Vec<(String, String)> {
    query
        .map(|q| {
            q.iter()
                .map(|(k, v)| {
                    let is_secret = matches!(
                        k.to_ascii_lowercase().as_str(),
                        "access_token" | "auth" | "key" | "api_key" | "token" | "secret"
                    );
                    (
                        (*k).to_string(),
                        if is_secret {
                            "<redacted>".to_string()
                        } else {
                            v.as_ref().to_string()
                        },
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_message_field() {
        let body = br#"{"message": "You are not subscribed to this API."}"#;
        assert_eq!(
            extract_error_message(body),
            "You are not subscribed to this API."
        );
    }

    #[test]
    fn error_message_falls_back_to_snippet() {
        let body = b"upstream exploded";
        assert_eq!(extract_error_message(body), "upstream exploded");
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = vec![b'a'; 2000];
        let snip = snip_body(&body);
        assert!(snip.len() <= 503);
        assert!(snip.ends_with("..."));
    }

    #[test]
    fn secret_params_are_redacted() {
        let q = vec![
            ("username", Cow::Borrowed("nasa")),
            ("api_key", Cow::Borrowed("sekrit")),
        ];
        let red = redact_query(Some(&q));
        assert_eq!(red[0], ("username".into(), "nasa".into()));
        assert_eq!(red[1], ("api_key".into(), "<redacted>".into()));
    }
}
