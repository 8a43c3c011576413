//! HTTP API handlers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use askama::Template;
use axum::{extract::State, response::Html, Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::utils::format_uptime;

/// Application name reported by `/info`.
pub const APP_NAME: &str = "ci-cd-demo";
/// Description reported by `/info`.
pub const APP_DESCRIPTION: &str = "End-to-end CI/CD demo for Cloud Native Rabat";
/// Event the demo is presented at.
pub const EVENT_NAME: &str = "Cloud Native Rabat";

/// Process identity shared with handlers.
///
/// Built once at startup and never mutated; cloning only bumps a refcount.
#[derive(Debug, Clone)]
pub struct AppState {
    version: Arc<str>,
    started_at: Instant,
}

impl AppState {
    /// Create app state with the process start time set to now.
    pub fn new(version: impl Into<Arc<str>>) -> Self {
        Self::with_start(version, Instant::now())
    }

    /// Create app state with an explicit start time.
    pub fn with_start(version: impl Into<Arc<str>>, started_at: Instant) -> Self {
        Self {
            version: version.into(),
            started_at,
        }
    }

    /// Version string reported by every endpoint.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Time elapsed since the process started.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
    /// Running version.
    pub version: String,
    /// Time since start, e.g. "3h2m1s".
    pub uptime: String,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Status: "ready".
    pub status: &'static str,
}

/// Application info response.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app: &'static str,
    pub version: String,
    pub description: &'static str,
    pub event: &'static str,
}

/// Landing page.
#[derive(Template)]
#[template(path = "home.html")]
struct HomePage<'a> {
    version: &'a str,
    event: &'a str,
}

/// Home handler - renders the landing page with the running version.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = HomePage {
        version: state.version(),
        event: EVENT_NAME,
    };
    Ok(Html(page.render()?))
}

/// Health check handler - always returns 200.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: state.version().to_string(),
        uptime: format_uptime(state.uptime()),
    })
}

/// Readiness check handler - always returns 200.
///
/// The service has no dependencies, so it is ready as soon as it serves.
pub async fn ready() -> Json<ReadyResponse> {
    Json(ReadyResponse { status: "ready" })
}

/// Info handler - static application metadata plus the running version.
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        app: APP_NAME,
        version: state.version().to_string(),
        description: APP_DESCRIPTION,
        event: EVENT_NAME,
    })
}
