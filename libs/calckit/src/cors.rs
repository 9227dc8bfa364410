use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

/// Browser cross-origin policy for the public endpoints.
///
/// The default allows credentialed `GET, POST, OPTIONS` calls from the single
/// site that hosts the calculator page.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["http://xaiproject.net".to_owned()],
            allowed_methods: vec!["GET".to_owned(), "POST".to_owned(), "OPTIONS".to_owned()],
            allowed_headers: vec!["*".to_owned()],
            allow_credentials: true,
            max_age_seconds: 0,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CorsConfigError {
    #[error(
        "allowed_origins=['*'] cannot be combined with allow_credentials=true; \
         list explicit origins when credentials are allowed"
    )]
    WildcardWithCredentials,

    #[error("invalid {kind} in CORS config: '{value}'")]
    Invalid { kind: &'static str, value: String },
}

/// Build a CORS layer from config.
///
/// Returns `Ok(None)` when CORS is disabled.
///
/// # Errors
/// Returns [`CorsConfigError`] for a wildcard origin combined with credentials, or for
/// an origin, method or header that does not parse.
pub fn build_cors_layer(cfg: &CorsConfig) -> Result<Option<CorsLayer>, CorsConfigError> {
    if !cfg.enabled {
        return Ok(None);
    }

    let has_wildcard_origin = cfg.allowed_origins.iter().any(|o| o == "*");
    if has_wildcard_origin && cfg.allow_credentials {
        return Err(CorsConfigError::WildcardWithCredentials);
    }

    let mut layer = CorsLayer::new();

    if has_wildcard_origin {
        warn!("CORS is configured with allowed_origins=['*']; any site may call the API");
        layer = layer.allow_origin(Any);
    } else {
        let origins = parse_all::<HeaderValue>(&cfg.allowed_origins, "origin")?;
        if !origins.is_empty() {
            layer = layer.allow_origin(origins);
        }
    }

    // Credentialed requests may not use a literal `*`; mirror the request instead.
    if cfg.allowed_methods.iter().any(|m| m == "*") {
        layer = if cfg.allow_credentials {
            layer.allow_methods(tower_http::cors::AllowMethods::mirror_request())
        } else {
            layer.allow_methods(Any)
        };
    } else {
        let methods = parse_all::<Method>(&cfg.allowed_methods, "method")?;
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }
    }

    if cfg.allowed_headers.iter().any(|h| h == "*") {
        layer = if cfg.allow_credentials {
            layer.allow_headers(tower_http::cors::AllowHeaders::mirror_request())
        } else {
            layer.allow_headers(Any)
        };
    } else {
        let headers = parse_all::<HeaderName>(&cfg.allowed_headers, "header")?;
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }
    }

    if cfg.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cfg.max_age_seconds));
    }

    Ok(Some(layer))
}

fn parse_all<T: std::str::FromStr>(
    values: &[String],
    kind: &'static str,
) -> Result<Vec<T>, CorsConfigError> {
    values
        .iter()
        .map(|v| {
            v.parse::<T>().map_err(|_| CorsConfigError::Invalid {
                kind,
                value: v.clone(),
            })
        })
        .collect()
}
