use serde::Serialize;
use venue_models::message::MessageId;

pub mod contact;

/// Envelope of every response of the contact endpoint and of all errors.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<MessageId>,
    /// Technical detail about a failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
