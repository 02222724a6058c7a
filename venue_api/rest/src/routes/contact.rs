use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use tracing::debug;
use venue_core_contact_contracts::{ContactFeatureService, ContactSubmitError};

use super::{failure, internal_server_error, method_not_allowed};
use crate::models::{contact::ApiInquiryForm, ApiResponse};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(
            "/api/contact",
            routing::post(submit_inquiry).fallback(method_not_allowed),
        )
        .with_state(service)
}

async fn submit_inquiry(
    service: State<Arc<impl ContactFeatureService>>,
    body: Bytes,
) -> Response {
    let form = match ApiInquiryForm::from_json(&body) {
        Ok(form) => form,
        Err(err) => {
            debug!("malformed inquiry payload: {err}");
            return failure(
                StatusCode::BAD_REQUEST,
                "Invalid request payload",
                Some(err.to_string()),
            );
        }
    };

    match service.submit_inquiry(form.into()).await {
        Ok(message_id) => Json(ApiResponse {
            success: true,
            message: "Your inquiry has been sent successfully! We will contact you soon.".into(),
            message_id: Some(message_id),
            error: None,
        })
        .into_response(),
        Err(ContactSubmitError::Validation(err)) => {
            failure(StatusCode::BAD_REQUEST, err.to_string(), None)
        }
        Err(ContactSubmitError::Configuration(missing)) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Email service configuration error",
            Some(missing.to_string()),
        ),
        Err(
            err @ (ContactSubmitError::TransportUnavailable(_)
            | ContactSubmitError::DeliveryFailed(_)),
        ) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to send email. Please try again or contact us directly.",
            Some(err.to_string()),
        ),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}
