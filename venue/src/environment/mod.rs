use venue_config::Config;
use venue_core_contact_contracts::DeliverySettingsStatus;
use venue_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use venue_core_health_impl::HealthFeatureServiceImpl;
use types::{Email, RestServer, Time};

pub mod types;

/// Wires the services together, given the external connections
pub struct Provider {
    config: ConfigProvider,
    email: Email,
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self { config, email }
    }

    pub fn delivery_settings(&self) -> DeliverySettingsStatus {
        self.config.delivery_settings()
    }

    pub fn rest_server(self) -> RestServer {
        let health = HealthFeatureServiceImpl::new(Time::default());
        let contact =
            ContactFeatureServiceImpl::new(self.email, self.config.contact_feature_config);

        RestServer::new(health, contact)
    }
}

/// Service configs derived from the loaded configuration
pub struct ConfigProvider {
    contact_feature_config: ContactFeatureConfig,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        let contact_feature_config = ContactFeatureConfig {
            sender: config.contact.from.clone(),
            recipient: config.contact.to.clone(),
            smtp_username: config.smtp.username.is_some(),
            smtp_password: config.smtp.password.is_some(),
        };

        Self {
            contact_feature_config,
        }
    }

    pub fn delivery_settings(&self) -> DeliverySettingsStatus {
        self.contact_feature_config.delivery_settings()
    }
}
