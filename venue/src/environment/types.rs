use venue_core_contact_impl::ContactFeatureServiceImpl;
use venue_core_health_impl::HealthFeatureServiceImpl;
use venue_email_impl::EmailServiceImpl;
use venue_shared_impl::time::TimeServiceImpl;

// API
pub type RestServer = venue_api_rest::RestServer<HealthFeature, ContactFeature>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Email>;
pub type HealthFeature = HealthFeatureServiceImpl<Time>;

// Email
pub type Email = EmailServiceImpl;

// Shared
pub type Time = TimeServiceImpl;
