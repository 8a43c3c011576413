//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, home, info, ready, AppState};
use crate::metrics::track_http;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        // Probe endpoints
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/info", get(info))
        .route_layer(middleware::from_fn(track_http))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn content_type(response: &Response) -> &str {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn home_endpoint_returns_html() {
        let app = create_router(AppState::new("1.2.3"));

        let response = send_get(app, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "text/html; charset=utf-8");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("1.2.3"));
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = create_router(AppState::new("1.2.3"));

        let response = send_get(app, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "application/json");
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], "1.2.3");
        assert_eq!(body["uptime"], "0s");
    }

    #[tokio::test]
    async fn ready_endpoint_returns_exact_body() {
        let app = create_router(AppState::new("1.2.3"));

        let response = send_get(app, "/ready").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "application/json");
        assert_eq!(json_body(response).await, serde_json::json!({"status": "ready"}));
    }

    #[tokio::test]
    async fn info_endpoint_returns_metadata() {
        let app = create_router(AppState::new("1.2.3"));

        let response = send_get(app, "/info").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["app"], "ci-cd-demo");
        assert_eq!(body["event"], "Cloud Native Rabat");
        assert_eq!(body["version"], "1.2.3");
    }

    #[tokio::test]
    async fn unknown_path_returns_404() {
        let app = create_router(AppState::new("1.2.3"));

        let response = send_get(app, "/healthz").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_to_probe_is_rejected() {
        let app = create_router(AppState::new("1.2.3"));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn repeated_info_calls_are_identical() {
        let app = create_router(AppState::new("1.2.3"));

        let first = json_body(send_get(app.clone(), "/info").await).await;
        let second = json_body(send_get(app, "/info").await).await;

        assert_eq!(first, second);
    }
}
