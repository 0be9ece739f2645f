use std::sync::Arc;

use axum::{middleware, routing::get, Router};

pub mod config;
pub mod environment;
pub mod errors;
pub mod http;
pub mod logging;
pub mod shutdown;

use environment::EnvironmentSource;

#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<dyn EnvironmentSource>,
}

impl AppState {
    pub fn new(environment: Arc<dyn EnvironmentSource>) -> Self {
        Self { environment }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::greeting))
        .route("/health", get(http::handlers::health))
        .route("/info", get(http::handlers::info))
        .method_not_allowed_fallback(http::handlers::method_not_allowed)
        .fallback(http::handlers::not_found)
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
