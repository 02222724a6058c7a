use anyhow::Context;
use venue_config::{SmtpConfig, SmtpTls};
use venue_email_impl::{EmailServiceImpl, SmtpSecurity, SmtpSettings};

/// Set up the SMTP transport. The relay is not contacted here.
pub fn connect(config: &SmtpConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(SmtpSettings {
        host: config.host.clone(),
        port: config.port,
        security: match config.tls {
            SmtpTls::Starttls => SmtpSecurity::StartTls,
            SmtpTls::Tls => SmtpSecurity::Tls,
            SmtpTls::None => SmtpSecurity::None,
        },
        username: config.username.clone(),
        password: config.password.clone(),
    })
    .with_context(|| format!("Failed to set up SMTP transport for {}", config.host))
}
