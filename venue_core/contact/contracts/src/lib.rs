use std::future::Future;

use thiserror::Error;
use venue_models::{
    inquiry::{InquiryForm, InquiryValidationError},
    message::MessageId,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate an inquiry and email it to the venue staff.
    fn submit_inquiry(
        &self,
        form: InquiryForm,
    ) -> impl Future<Output = Result<MessageId, ContactSubmitError>> + Send;

    /// Report which of the settings required for delivery are configured.
    fn delivery_settings(&self) -> DeliverySettingsStatus;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Validation(#[from] InquiryValidationError),
    #[error("Email service configuration error")]
    Configuration(MissingSettings),
    #[error("Email transport unavailable: {0}")]
    TransportUnavailable(anyhow::Error),
    #[error("Email delivery failed: {0}")]
    DeliveryFailed(anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Presence of each setting that is required to deliver inquiries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliverySettingsStatus {
    pub smtp_username: bool,
    pub smtp_password: bool,
    pub contact_from: bool,
    pub contact_to: bool,
}

impl DeliverySettingsStatus {
    /// Setting names (as used in the config file) and whether they are set.
    pub fn entries(&self) -> [(&'static str, bool); 4] {
        [
            ("smtp.username", self.smtp_username),
            ("smtp.password", self.smtp_password),
            ("contact.from", self.contact_from),
            ("contact.to", self.contact_to),
        ]
    }

    pub fn missing(&self) -> MissingSettings {
        MissingSettings(
            self.entries()
                .into_iter()
                .filter(|&(_, set)| !set)
                .map(|(name, _)| name)
                .collect(),
        )
    }

    pub fn is_complete(&self) -> bool {
        self.missing().0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingSettings(pub Vec<&'static str>);

impl std::fmt::Display for MissingSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing settings: {}", self.0.join(", "))
    }
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit_inquiry(
        mut self,
        form: InquiryForm,
        result: Result<MessageId, ContactSubmitError>,
    ) -> Self {
        self.expect_submit_inquiry()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_delivery_settings(mut self, status: DeliverySettingsStatus) -> Self {
        self.expect_delivery_settings().return_const(status);
        self
    }
}
