//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Deserializer};

use crate::error::AppError;

/// Version reported when none is injected at build or deploy time.
pub const DEFAULT_VERSION: &str = "dev";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP listen port. Empty means the default.
    #[serde(default = "default_port", deserialize_with = "port_or_default")]
    pub port: u16,

    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    // === Build Identity ===
    /// Version string reported by every endpoint.
    #[serde(default = "default_version", deserialize_with = "version_or_default")]
    pub app_version: String,

    // === Logging ===
    /// Log filter directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit JSON log lines.
    #[serde(default)]
    pub log_json: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Build-time `APP_VERSION` if the binary was compiled with one.
fn default_version() -> String {
    option_env!("APP_VERSION")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(DEFAULT_VERSION)
        .to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn port_or_default<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default_port());
    }
    raw.parse()
        .map_err(|_| serde::de::Error::custom(format!("invalid port {raw:?}")))
}

fn version_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        Ok(default_version())
    } else {
        Ok(raw.to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            app_version: default_version(),
            rust_log: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(format!("HOST must be an IP address, got {:?}", self.host));
        }

        if self.app_version.trim().is_empty() {
            return Err("APP_VERSION must not be blank".to_string());
        }

        Ok(())
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| AppError::InvalidConfig(format!("invalid HOST {:?}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
