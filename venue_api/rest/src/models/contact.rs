use serde::Deserialize;
use serde_json::{Map, Value};
use venue_models::inquiry::InquiryForm;

/// Inquiry as submitted by the website's contact form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInquiryForm {
    /// Full name of the client
    #[serde(default)]
    pub full_name: Option<String>,
    /// Phone number of the client
    #[serde(default)]
    pub phone: Option<String>,
    /// Kind of event, e.g. "Wedding"
    #[serde(default)]
    pub event_type: Option<String>,
    /// Requested date of the event, free form
    #[serde(default)]
    pub event_date: Option<String>,
    /// Number of expected guests
    #[serde(default)]
    pub guest_count: Option<ApiGuestCount>,
    /// Optional free text
    #[serde(default)]
    pub additional_details: Option<String>,
}

impl ApiInquiryForm {
    /// Parse a request body, which must be a JSON object. Arrays are rejected
    /// even though serde would map them onto the fields by position.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        let object = serde_json::from_slice::<Map<String, Value>>(body)?;
        serde_json::from_value(Value::Object(object))
    }
}

/// Forms send the guest count as a string, API clients as a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiGuestCount {
    Number(serde_json::Number),
    Text(String),
}

impl From<ApiInquiryForm> for InquiryForm {
    fn from(value: ApiInquiryForm) -> Self {
        Self {
            full_name: value.full_name,
            phone: value.phone,
            event_type: value.event_type,
            event_date: value.event_date,
            guest_count: value.guest_count.and_then(|count| match count {
                // a numeric zero counts as not filled in, like an empty string
                ApiGuestCount::Number(number) if number.as_f64() == Some(0.0) => None,
                ApiGuestCount::Number(number) => Some(number.to_string()),
                ApiGuestCount::Text(text) => Some(text),
            }),
            additional_details: value.additional_details,
        }
    }
}
