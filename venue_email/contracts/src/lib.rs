use std::future::Future;

use venue_models::{email_address::EmailAddress, message::MessageId};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Submit a single email to the relay. Returns the id assigned to the
    /// message once the relay has accepted it.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<MessageId>> + Send;

    /// Check that the relay is reachable and accepts the configured
    /// credentials.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub sender: EmailAddress,
    pub recipient: EmailAddress,
    pub subject: String,
    pub body: EmailBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBody {
    Text(String),
    /// `multipart/alternative` with a plain text and an html part
    Alternative { text: String, html: String },
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: Result<MessageId, String>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| {
                Box::pin(std::future::ready(result.map_err(anyhow::Error::msg)))
            });
        self
    }

    pub fn with_ping(mut self, result: Result<(), String>) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(result.map_err(anyhow::Error::msg)))
        });
        self
    }
}
