//! Middleware de CORS

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// Sin orígenes configurados: permisivo en desarrollo, cerrado en producción
pub fn cors_layer(origins: &[String], development: bool) -> CorsLayer {
    if origins.is_empty() {
        return if development {
            CorsLayer::very_permissive()
        } else {
            CorsLayer::new()
        };
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
        ])
        .expose_headers([HeaderName::from_static("content-disposition")])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600))
}
