//! HTTP API module for the landing page, probes, and info endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
