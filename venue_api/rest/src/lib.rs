use std::{net::IpAddr, sync::Arc};

use axum::Router;
use tokio::net::TcpListener;
use venue_core_contact_contracts::ContactFeatureService;
use venue_core_health_contracts::HealthFeatureService;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub fn new(health: Health, contact: Contact) -> Self {
        Self { health, contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    /// Build the router shared by all transport bindings.
    pub fn router(self) -> Router<()> {
        let health = Arc::new(self.health);
        let contact = Arc::new(self.contact);

        let router = Router::new()
            .merge(routes::health::router(Arc::clone(&health)))
            .merge(routes::contact::router(Arc::clone(&contact)))
            .merge(routes::debug::router(contact, health))
            .fallback(routes::not_found);

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::cors::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
