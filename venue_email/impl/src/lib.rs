use anyhow::{anyhow, bail};
use lettre::{
    message::{header, Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;
use uuid::Uuid;
use venue_email_contracts::{Email, EmailBody, EmailService};
use venue_models::message::MessageId;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub security: SmtpSecurity,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// Plain connection upgraded with `STARTTLS`
    StartTls,
    /// Implicit TLS
    Tls,
    /// No encryption at all, for local test relays only
    None,
}

impl std::fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("security", &self.security)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

impl EmailServiceImpl {
    /// Create the transport. No connection is established until the first
    /// [`ping`](EmailService::ping) or [`send`](EmailService::send).
    pub fn new(settings: SmtpSettings) -> anyhow::Result<Self> {
        let mut builder = match settings.security {
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            }
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?,
            SmtpSecurity::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
            }
        }
        .port(settings.port);

        if let (Some(username), Some(password)) = (settings.username, settings.password) {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }

    #[cfg(feature = "dummy")]
    pub fn dummy() -> Self {
        Self::new(SmtpSettings {
            host: "localhost".into(),
            port: 2525,
            security: SmtpSecurity::None,
            username: None,
            password: None,
        })
        .unwrap()
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<MessageId> {
        let message_id = generate_message_id(&email);
        let message = build_message(email, &message_id)?;

        let response = self.transport.send(message).await?;
        if !response.is_positive() {
            bail!(
                "relay rejected message ({}): {}",
                response.code(),
                response.message().collect::<Vec<_>>().join(" ")
            );
        }

        debug!(%message_id, code = %response.code(), "relay accepted message");
        Ok(message_id)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn generate_message_id(email: &Email) -> MessageId {
    MessageId(format!("<{}@{}>", Uuid::new_v4(), email.sender.domain()))
}

fn build_message(email: Email, message_id: &MessageId) -> anyhow::Result<Message> {
    let builder = Message::builder()
        .from(Mailbox::new(None, email.sender.0))
        .to(Mailbox::new(None, email.recipient.0))
        .subject(email.subject)
        .message_id(Some(message_id.0.clone()));

    let message = match email.body {
        EmailBody::Text(text) => builder.header(header::ContentType::TEXT_PLAIN).body(text)?,
        EmailBody::Alternative { text, html } => {
            builder.multipart(MultiPart::alternative_plain_html(text, html))?
        }
    };

    Ok(message)
}
