use contacto_core_health_contracts::{HealthService, HealthStatus};
use contacto_email_contracts::EmailService;
use tracing::error;

#[derive(Debug, Clone)]
pub struct HealthServiceImpl<Email> {
    email: Email,
}

impl<Email> HealthServiceImpl<Email> {
    pub fn new(email: Email) -> Self {
        Self { email }
    }
}

impl<Email> HealthService for HealthServiceImpl<Email>
where
    Email: EmailService,
{
    async fn get_status(&self) -> HealthStatus {
        let email = self
            .email
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping smtp server: {err:#}"))
            .is_ok();

        HealthStatus { email }
    }
}

#[cfg(test)]
mod tests {
    use contacto_email_contracts::MockEmailService;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let email = MockEmailService::new().with_ping(Ok(()));
        let sut = HealthServiceImpl::new(email);

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(status, HealthStatus { email: true });
    }

    #[tokio::test]
    async fn smtp_unreachable() {
        // Arrange
        let email = MockEmailService::new().with_ping(Err(anyhow::anyhow!("connection refused")));
        let sut = HealthServiceImpl::new(email);

        // Act
        let status = sut.get_status().await;

        // Assert
        assert_eq!(status, HealthStatus { email: false });
    }
}
