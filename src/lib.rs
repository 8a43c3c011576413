//! Status and info HTTP server used as a CI/CD pipeline demo target.
//!
//! Four endpoints, all backed by read-only process state (version and start
//! time):
//!
//! ```text
//! GET /        landing page (HTML)
//! GET /health  {"status":"ok","version":"1.2.3","uptime":"3h2m1s"}
//! GET /ready   {"status":"ready"}
//! GET /info    {"app":"ci-cd-demo","version":"1.2.3",...}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers and router
//! - [`server`]: Listener binding and graceful serving
//! - [`metrics`]: Request metrics
//! - [`utils`]: Uptime formatting and signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
