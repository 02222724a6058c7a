use tracing::{debug, error, info};
use venue_core_contact_contracts::{
    ContactFeatureService, ContactSubmitError, DeliverySettingsStatus,
};
use venue_email_contracts::EmailService;
use venue_models::{
    email_address::EmailAddress,
    inquiry::{InquiryForm, InquiryRequest},
    message::MessageId,
};

pub mod format;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Email> {
    email: Email,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone, Default)]
pub struct ContactFeatureConfig {
    /// Address the inquiry emails are sent from
    pub sender: Option<EmailAddress>,
    /// Address of the venue staff receiving the inquiries
    pub recipient: Option<EmailAddress>,
    pub smtp_username: bool,
    pub smtp_password: bool,
}

impl ContactFeatureConfig {
    pub fn delivery_settings(&self) -> DeliverySettingsStatus {
        DeliverySettingsStatus {
            smtp_username: self.smtp_username,
            smtp_password: self.smtp_password,
            contact_from: self.sender.is_some(),
            contact_to: self.recipient.is_some(),
        }
    }
}

impl<Email> ContactFeatureServiceImpl<Email> {
    pub fn new(email: Email, config: ContactFeatureConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactFeatureService for ContactFeatureServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn submit_inquiry(&self, form: InquiryForm) -> Result<MessageId, ContactSubmitError> {
        let inquiry = InquiryRequest::try_from(form)
            .inspect_err(|err| debug!("rejected inquiry: {err}"))?;

        info!(
            event_type = %inquiry.event_type,
            guest_count = %inquiry.guest_count,
            "received inquiry"
        );

        let status = self.delivery_settings();
        let (Some(sender), Some(recipient), true) = (
            &self.config.sender,
            &self.config.recipient,
            status.is_complete(),
        ) else {
            let missing = status.missing();
            error!("cannot deliver inquiry, {missing}");
            return Err(ContactSubmitError::Configuration(missing));
        };

        let email = format::format_inquiry(&inquiry, sender, recipient);

        self.email.ping().await.map_err(|err| {
            error!("smtp relay unavailable: {err:#}");
            ContactSubmitError::TransportUnavailable(err)
        })?;

        let message_id = self.email.send(email).await.map_err(|err| {
            error!("failed to deliver inquiry: {err:#}");
            ContactSubmitError::DeliveryFailed(err)
        })?;

        info!(%message_id, "inquiry delivered");

        Ok(message_id)
    }

    fn delivery_settings(&self) -> DeliverySettingsStatus {
        self.config.delivery_settings()
    }
}
