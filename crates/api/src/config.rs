use std::str::FromStr;

use filmdb_core::store::DEFAULT_CAPACITY;

/// How rejected requests are reported on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorStatusMode {
    /// Duplicate and malformed submissions answer `404 Not Found`, like a
    /// missing film. Existing clients of the film service depend on this.
    #[default]
    Legacy,
    /// Duplicates answer `409 Conflict`, malformed bodies `400 Bad Request`.
    Strict,
}

impl FromStr for ErrorStatusMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown error status mode '{other}'")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4711`).
    pub port: u16,
    /// Scheme and authority prefixed to film addresses, e.g.
    /// `http://films.example:4711`. When unset, addresses are derived from
    /// the request's `Host` header.
    pub public_base_url: Option<String>,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum number of live films (default: `1000`).
    pub store_capacity: usize,
    /// Status codes used for rejected submissions (default: legacy).
    pub error_status_mode: ErrorStatusMode,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `4711`                     |
    /// | `PUBLIC_BASE_URL`      | unset                      |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `FILM_STORE_CAPACITY`  | `1000`                     |
    /// | `ERROR_STATUS_MODE`    | `legacy`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4711".into())
            .parse()
            .expect("PORT must be a valid u16");

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

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

        let store_capacity: usize = std::env::var("FILM_STORE_CAPACITY")
            .unwrap_or_else(|_| DEFAULT_CAPACITY.to_string())
            .parse()
            .expect("FILM_STORE_CAPACITY must be a valid usize");

        let error_status_mode: ErrorStatusMode = std::env::var("ERROR_STATUS_MODE")
            .unwrap_or_else(|_| "legacy".into())
            .parse()
            .unwrap_or_else(|e| panic!("ERROR_STATUS_MODE: {e}"));

        Self {
            host,
            port,
            public_base_url,
            cors_origins,
            request_timeout_secs,
            store_capacity,
            error_status_mode,
        }
    }
}
