//! Demo routes, one per error kind
//!
//! The handlers stand in for real application code and fail on every call.

#![allow(clippy::unused_async)]

use anyhow::Context;
use axum::extract::Request;
use axum::response::Response;
use axum::{Router, routing};
use bulwark_core::{ApiError, InfrastructureError, SharedSink};
use http::StatusCode;
use serde::Serialize;
use serde_json::json;

use crate::adapter::fallible;
use crate::json::json_response;

/// Paths mounted by [`demo_router`]
pub const DEMO_PATHS: [&str; 5] = ["/hello", "/validationerror", "/dberror", "/cacheerror", "/internalerror"];

/// Build the demo router
pub fn demo_router() -> Router<SharedSink> {
    Router::new()
        .route("/hello", routing::get(fallible(hello)))
        .route("/validationerror", routing::get(fallible(validation_error)))
        .route("/dberror", routing::get(fallible(db_error)))
        .route("/cacheerror", routing::get(fallible(cache_error)))
        .route("/internalerror", routing::get(fallible(internal_error)))
}

#[derive(Serialize)]
struct Greeting {
    message: &'static str,
}

/// Handle `GET /hello`
async fn hello(_: Request) -> Result<Response, ApiError> {
    let greeting = Greeting {
        message: "Hello, World!",
    };

    json_response(StatusCode::OK, &greeting).map_err(ApiError::unclassified)
}

/// Handle `GET /validationerror`
async fn validation_error(_: Request) -> Result<Response, ApiError> {
    Err(ApiError::business(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({
            "username": "username is required",
            "email": "email is invalid",
        }),
    ))
}

/// Handle `GET /dberror`
async fn db_error(_: Request) -> Result<Response, ApiError> {
    Err(InfrastructureError::new("Database", "failed to connect to database").into())
}

/// Handle `GET /cacheerror`
async fn cache_error(_: Request) -> Result<Response, ApiError> {
    Err(InfrastructureError::new("Cache", "failed to connect to Redis").into())
}

/// Handle `GET /internalerror`
async fn internal_error(_: Request) -> Result<Response, ApiError> {
    let shard: u16 = "shard-seven".parse().context("failed to parse report shard")?;

    json_response(StatusCode::OK, &json!({ "shard": shard })).map_err(ApiError::unclassified)
}
