//! Diagnostic echo of the incoming request, for checking a deployment.
//!
//! Runs the inquiry validator on the body but never sends anything.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{OriginalUri, State},
    http::{HeaderMap, Method},
    routing, Json, Router,
};
use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::Value;
use venue_core_contact_contracts::ContactFeatureService;
use venue_core_health_contracts::HealthFeatureService;
use venue_models::inquiry::{InquiryForm, InquiryRequest};
use venue_utils::venue_version;

use crate::models::contact::ApiInquiryForm;

pub fn router<Contact, Health>(contact: Arc<Contact>, health: Arc<Health>) -> Router<()>
where
    Contact: ContactFeatureService,
    Health: HealthFeatureService,
{
    Router::new()
        .route("/api/test", routing::any(echo::<Contact, Health>))
        .with_state(DebugState { contact, health })
}

struct DebugState<Contact, Health> {
    contact: Arc<Contact>,
    health: Arc<Health>,
}

impl<Contact, Health> Clone for DebugState<Contact, Health> {
    fn clone(&self) -> Self {
        Self {
            contact: Arc::clone(&self.contact),
            health: Arc::clone(&self.health),
        }
    }
}

#[derive(Serialize)]
struct EchoResponse {
    success: bool,
    message: &'static str,
    version: &'static str,
    method: String,
    url: String,
    headers: BTreeMap<String, String>,
    body: Value,
    env: BTreeMap<&'static str, &'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<ValidationOutcome>,
    timestamp: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct ValidationOutcome {
    valid: bool,
    message: String,
}

async fn echo<Contact, Health>(
    State(state): State<DebugState<Contact, Health>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Json<EchoResponse>
where
    Contact: ContactFeatureService,
    Health: HealthFeatureService,
{
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let env = state
        .contact
        .delivery_settings()
        .entries()
        .into_iter()
        .map(|(name, set)| (name, if set { "Set (hidden)" } else { "Not set" }))
        .collect();

    let validation = (!body.is_empty()).then(|| validate(&body));

    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
    };

    Json(EchoResponse {
        success: true,
        message: "API is working!",
        version: venue_version(),
        method: method.to_string(),
        url: uri.to_string(),
        headers,
        body,
        env,
        validation,
        timestamp: state
            .health
            .get_status()
            .timestamp
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

fn validate(body: &[u8]) -> ValidationOutcome {
    let Ok(form) = ApiInquiryForm::from_json(body) else {
        return ValidationOutcome {
            valid: false,
            message: "Invalid request payload".into(),
        };
    };

    match InquiryRequest::try_from(InquiryForm::from(form)) {
        Ok(_) => ValidationOutcome {
            valid: true,
            message: "Inquiry is valid".into(),
        },
        Err(err) => ValidationOutcome {
            valid: false,
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;
    use venue_core_contact_contracts::{DeliverySettingsStatus, MockContactFeatureService};
    use venue_core_health_contracts::{HealthStatus, MockHealthFeatureService};

    use super::*;

    fn sut() -> Router<()> {
        let contact = MockContactFeatureService::new().with_delivery_settings(
            DeliverySettingsStatus {
                smtp_username: true,
                smtp_password: true,
                contact_from: false,
                contact_to: true,
            },
        );
        let health = MockHealthFeatureService::new().with_get_status(HealthStatus {
            timestamp: Utc.with_ymd_and_hms(2025, 12, 1, 18, 30, 0).unwrap(),
        });

        router(Arc::new(contact), Arc::new(health))
    }

    async fn send(request: Request<Body>) -> Value {
        let response = sut().oneshot(request).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn get() {
        // Act
        let response = send(
            Request::get("/api/test?probe=1")
                .header("X-Probe", "yes")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        // Assert
        assert_eq!(
            response,
            json!({
                "success": true,
                "message": "API is working!",
                "version": venue_version(),
                "method": "GET",
                "url": "/api/test?probe=1",
                "headers": {"x-probe": "yes"},
                "body": null,
                "env": {
                    "smtp.username": "Set (hidden)",
                    "smtp.password": "Set (hidden)",
                    "contact.from": "Not set",
                    "contact.to": "Set (hidden)",
                },
                "timestamp": "2025-12-01T18:30:00.000Z",
            })
        );
    }

    #[tokio::test]
    async fn post_valid_inquiry() {
        // Arrange
        let body = json!({
            "fullName": "Jane Doe",
            "phone": "+91 9911620620",
            "eventType": "Wedding",
            "eventDate": "2025-12-01",
            "guestCount": "150",
        });

        // Act
        let response = send(
            Request::post("/api/test")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await;

        // Assert
        assert_eq!(response["method"], "POST");
        assert_eq!(response["body"], body);
        assert_eq!(
            response["validation"],
            json!({"valid": true, "message": "Inquiry is valid"})
        );
    }

    #[tokio::test]
    async fn post_invalid_inquiry() {
        // Act
        let response = send(
            Request::post("/api/test")
                .body(Body::from(r#"{"fullName": "Jane Doe"}"#))
                .unwrap(),
        )
        .await;

        // Assert
        assert_eq!(
            response["validation"],
            json!({
                "valid": false,
                "message": "Missing required fields: fullName, phone, eventType, eventDate, guestCount",
            })
        );
    }

    #[tokio::test]
    async fn post_array() {
        // Act
        let response = send(
            Request::post("/api/test")
                .body(Body::from(
                    r#"["Jane Doe", "+91 9911620620", "Wedding", "2025-12-01", "150"]"#,
                ))
                .unwrap(),
        )
        .await;

        // Assert
        assert_eq!(
            response["validation"],
            json!({"valid": false, "message": "Invalid request payload"})
        );
    }

    #[tokio::test]
    async fn post_text() {
        // Act
        let response = send(
            Request::put("/api/test")
                .body(Body::from("hello"))
                .unwrap(),
        )
        .await;

        // Assert
        assert_eq!(response["method"], "PUT");
        assert_eq!(response["body"], "hello");
        assert_eq!(
            response["validation"],
            json!({"valid": false, "message": "Invalid request payload"})
        );
    }
}
