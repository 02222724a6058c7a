use anyhow::Context;
use clap::Subcommand;
use tracing::info;
use venue_config::Config;
use venue_email_contracts::{Email, EmailBody, EmailService};
use venue_models::email_address::EmailAddress;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddress },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddress) -> anyhow::Result<()> {
    let sender = config
        .contact
        .from
        .clone()
        .context("contact.from is not configured")?;

    let email_service = email::connect(&config.smtp)?;
    email_service
        .ping()
        .await
        .context("Failed to connect to SMTP server")?;

    let message_id = email_service
        .send(Email {
            sender,
            recipient,
            subject: "Email Deliverability Test".into(),
            body: EmailBody::Text("Email deliverability seems to be working!".into()),
        })
        .await
        .context("Failed to send email")?;

    info!(%message_id, "test email sent");

    Ok(())
}
