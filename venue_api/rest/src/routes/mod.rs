use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiResponse;

pub mod contact;
pub mod debug;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error. Please try again later.",
        Some(err.to_string()),
    )
}

pub async fn not_found() -> Response {
    failure(StatusCode::NOT_FOUND, "Endpoint not found", None)
}

async fn method_not_allowed() -> Response {
    failure(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None)
}

fn failure(code: StatusCode, message: impl Into<String>, error: Option<String>) -> Response {
    let response = ApiResponse {
        success: false,
        message: message.into(),
        message_id: None,
        error,
    };
    (code, Json(response)).into_response()
}
