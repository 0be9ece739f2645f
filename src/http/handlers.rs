//! Axum HTTP handlers for the web server
//!
//! Every payload is built fresh per request; field order is the serialized key order.

use axum::{
    extract::State,
    http::{Method, Uri},
    Json,
};
use chrono::Local;
use serde::Serialize;

use crate::{
    environment::EnvironmentSource,
    errors::AppError,
    AppState,
};

pub const GREETING: &str = "Hello World from Akulaku SRE Test!";
pub const AUTHOR: &str = "Arif Hidayatullah";
pub const POSITION: &str = "Senior Site Reliability Engineer";
pub const APP_NAME: &str = "Axum Hello World";
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Toolchain version captured by the build script.
pub const RUST_VERSION: &str = env!("HELLO_WORLD_RUSTC_VERSION");

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub author: &'static str,
    pub position: &'static str,
    pub timestamp: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app: &'static str,
    pub environment: String,
    pub java_version: &'static str,
}

pub async fn greeting() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: GREETING,
        author: AUTHOR,
        position: POSITION,
        timestamp: local_timestamp(),
        status: "healthy",
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        app: APP_NAME,
        environment: deployment_environment(state.environment.as_ref()),
        java_version: RUST_VERSION,
    })
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}

pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method.as_str())
}

/// Local wall-clock time as an ISO-8601 date-time without offset.
pub fn local_timestamp() -> String {
    Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string()
}

/// `APP_ENV` verbatim when set and non-empty.
fn deployment_environment(source: &dyn EnvironmentSource) -> String {
    source
        .var("APP_ENV")
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}
