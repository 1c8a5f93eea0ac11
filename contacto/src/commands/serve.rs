use std::sync::Arc;

use contacto_api_rest::RestServer;
use contacto_config::Config;
use contacto_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use contacto_core_health_impl::HealthServiceImpl;
use contacto_email_contracts::EmailService;
use tracing::info;

use crate::email;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to smtp server");
    let email = email::connect(&config.email).await?;
    email.ping().await?;

    let contact = ContactServiceImpl::new(
        email.clone(),
        ContactServiceConfig {
            recipient: Arc::new(config.contact.recipient),
        },
    );
    let health = HealthServiceImpl::new(email);

    let server = RestServer::new(health, contact);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
