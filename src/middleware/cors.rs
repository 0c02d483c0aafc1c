//! Middleware de CORS
//!
//! En desarrollo (o sin orígenes configurados) se permite cualquier
//! origen; en el resto de entornos solo los orígenes de CORS_ORIGINS.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::config::environment::EnvironmentConfig;

pub fn cors_middleware(config: &EnvironmentConfig) -> CorsLayer {
    if config.is_development() || config.cors_origins.is_empty() {
        return CorsLayer::very_permissive();
    }

    let mut cors = CorsLayer::new();

    for origin in &config.cors_origins {
        if let Ok(header_value) = HeaderValue::from_str(origin) {
            cors = cors.allow_origin(header_value);
        }
    }

    cors.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([
        HeaderName::from_static("content-type"),
        HeaderName::from_static("accept"),
        HeaderName::from_static("origin"),
        HeaderName::from_static("x-requested-with"),
    ])
    .max_age(std::time::Duration::from_secs(3600))
}
