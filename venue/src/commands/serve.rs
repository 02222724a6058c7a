use tracing::{info, warn};
use venue_config::Config;
use venue_email_contracts::EmailService;

use crate::{
    email,
    environment::{ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Setting up smtp transport");
    let email = email::connect(&config.smtp)?;

    let provider = Provider::new(ConfigProvider::new(&config), email.clone());

    let delivery_settings = provider.delivery_settings();
    if delivery_settings.is_complete() {
        info!("Connecting to smtp server");
        if let Err(err) = email.ping().await {
            warn!("smtp server is not reachable, inquiries cannot be delivered: {err:#}");
        }
    } else {
        warn!(
            "inquiries cannot be delivered, {}",
            delivery_settings.missing()
        );
    }

    let server = provider.rest_server();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
