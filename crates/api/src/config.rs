use std::path::PathBuf;

use vidhub_core::upload::DEFAULT_UPLOAD_LINK_TTL_HOURS;
use vidhub_core::video::DEFAULT_CLICK_WINDOW_SECS;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Timeout for the upload routes, which stream large bodies (default: `3600`).
    pub upload_timeout_secs: u64,
    /// Window during which repeat views from one IP are not counted (default: `1800`).
    pub click_window_secs: i64,
    /// Lifetime of upload-tracking entries in hours (default: `48`).
    pub upload_link_ttl_hours: i64,
    /// Directory uploaded files are written to and served from (default: `storage`).
    pub storage_dir: PathBuf,
    /// Prefix of the links handed back for uploaded files (default: `/static`).
    pub public_base_url: String,
    /// Access-token verification settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `UPLOAD_TIMEOUT_SECS`   | `3600`                     |
    /// | `CLICK_WINDOW_SECS`     | `1800`                     |
    /// | `UPLOAD_LINK_TTL_HOURS` | `48`                       |
    /// | `STORAGE_DIR`           | `storage`                  |
    /// | `PUBLIC_BASE_URL`       | `/static`                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_timeout_secs: u64 = std::env::var("UPLOAD_TIMEOUT_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("UPLOAD_TIMEOUT_SECS must be a valid u64");

        let click_window_secs: i64 = std::env::var("CLICK_WINDOW_SECS")
            .unwrap_or_else(|_| DEFAULT_CLICK_WINDOW_SECS.to_string())
            .parse()
            .expect("CLICK_WINDOW_SECS must be a valid i64");
        assert!(click_window_secs >= 0, "CLICK_WINDOW_SECS must not be negative");

        let upload_link_ttl_hours: i64 = std::env::var("UPLOAD_LINK_TTL_HOURS")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_LINK_TTL_HOURS.to_string())
            .parse()
            .expect("UPLOAD_LINK_TTL_HOURS must be a valid i64");

        let storage_dir =
            PathBuf::from(std::env::var("STORAGE_DIR").unwrap_or_else(|_| "storage".into()));

        let public_base_url =
            std::env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "/static".into());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_timeout_secs,
            click_window_secs,
            upload_link_ttl_hours,
            storage_dir,
            public_base_url,
            jwt,
        }
    }
}
