use axum::http::{HeaderValue, Method, header};
use core_config::ConfigError;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Environment variable holding comma-separated allowed origins.
pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

/// Which browser origins may call the API.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CorsPolicy {
    /// Any origin, method and header, with credentials.
    #[default]
    AllowAll,
    /// Only the listed origins.
    Origins(Vec<HeaderValue>),
}

impl CorsPolicy {
    /// Parse a comma-separated origin list. Empty input or `*` allows all.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "*" {
            return Ok(Self::AllowAll);
        }

        let origins = trimmed
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<HeaderValue>().map_err(|e| ConfigError::ParseError {
                    key: CORS_ALLOWED_ORIGIN.to_string(),
                    details: format!("{s}: {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::Origins(origins))
    }

    /// Reads `CORS_ALLOWED_ORIGIN`; unset means [`CorsPolicy::AllowAll`].
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CORS_ALLOWED_ORIGIN) {
            Ok(raw) => Self::parse(&raw),
            Err(_) => Ok(Self::AllowAll),
        }
    }

    pub fn layer(&self) -> CorsLayer {
        match self {
            Self::AllowAll => {
                info!("CORS configured to allow any origin");
                create_permissive_cors_layer()
            }
            Self::Origins(origins) => {
                info!(count = origins.len(), "CORS configured with allowed origins");
                create_cors_layer(origins.clone())
            }
        }
    }
}

/// CORS layer restricted to `allowed_origins`.
///
/// - Methods: GET, POST, OPTIONS
/// - Headers: Content-Type, Authorization, Accept
/// - Credentials allowed
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Mirrors the request origin, methods and headers, with credentials.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
