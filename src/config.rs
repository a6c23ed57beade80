// src/config.rs
use std::net::SocketAddr;

use axum::http::{HeaderName, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

/// Which web origins may call this service from a browser.
///
/// An empty list in any field means "allow all" — only the `development`
/// profile does that. In production, narrow `origins` to the frontend URL.
pub struct CorsConfig {
    pub origins: Vec<String>,
    pub methods: Vec<Method>,
    pub headers: Vec<HeaderName>,
}

impl CorsConfig {
    /// Allow-all profile so the localhost frontend can talk to this backend.
    pub fn development() -> Self {
        Self {
            origins: Vec::new(),
            methods: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn into_layer(self) -> CorsLayer {
        let origin = if self.origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(
                self.origins
                    .iter()
                    .filter_map(|o| o.parse().ok()),
            )
        };
        let methods = if self.methods.is_empty() {
            AllowMethods::any()
        } else {
            AllowMethods::list(self.methods)
        };
        let headers = if self.headers.is_empty() {
            AllowHeaders::any()
        } else {
            AllowHeaders::list(self.headers)
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(headers)
    }
}
