//! Route registration — aggregation endpoint + system endpoints.

use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tally_common::{FollowerRequest, FollowerResponse};
use tally_social::SocialHub;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Application shared state.
#[derive(Clone)]
pub struct AppState {
    pub hub: Arc<SocialHub>,
}

/// Build the complete router with all routes and the CORS layer.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> anyhow::Result<Router> {
    let origins = allowed_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin: {o}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Credentials are allowed, so methods and headers must mirror the
    // request instead of using the `*` wildcard.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Ok(Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/followers", post(followers))
        .layer(cors)
        .with_state(state))
}

async fn index() -> Json<Value> {
    Json(json!({"message": "Social Media Follower Counter API"}))
}

/// Liveness probe; deliberately free of dependency checks.
async fn health() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

/// Resolve follower counts for the requested platforms.
///
/// Always 200 on successful dispatch; per-platform failures ride inside the
/// body. Malformed payloads are rejected by the `Json` extractor with a 4xx
/// before any adapter runs.
async fn followers(
    State(state): State<AppState>,
    Json(req): Json<FollowerRequest>,
) -> Json<FollowerResponse> {
    Json(state.hub.resolve(&req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    /// Router backed by a real hub. Only requests that dispatch zero
    /// platforms go through it, so nothing ever leaves the process.
    fn test_router() -> Router {
        let state = AppState {
            hub: Arc::new(SocialHub::new("test-key")),
        };
        build_router(
            state,
            &[
                "http://localhost:3000".to_string(),
                "https://followers-me.vercel.app".to_string(),
            ],
        )
        .expect("router")
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn index_identifies_the_service() {
        let resp = test_router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"message": "Social Media Follower Counter API"})
        );
    }

    #[tokio::test]
    async fn health_is_always_healthy() {
        let resp = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn empty_request_returns_empty_object() {
        let resp = test_router()
            .oneshot(
                Request::post("/followers")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({}));
    }

    #[tokio::test]
    async fn wrong_field_type_is_rejected_before_dispatch() {
        let resp = test_router()
            .oneshot(
                Request::post("/followers")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"instagram_username": 42}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn malformed_json_is_a_client_error() {
        let resp = test_router()
            .oneshot(
                Request::post("/followers")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
    }

    #[tokio::test]
    async fn preflight_allows_the_configured_origin_with_credentials() {
        let resp = test_router()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/followers")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = resp.headers();
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:3000")
        );
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }

    #[tokio::test]
    async fn unconfigured_origin_is_not_echoed_back() {
        let resp = test_router()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/followers")
                    .header(header::ORIGIN, "https://evil.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let resp = test_router()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
