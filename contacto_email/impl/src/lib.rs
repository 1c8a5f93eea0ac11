use anyhow::anyhow;
use contacto_email_contracts::{Email, EmailService};
use contacto_models::email_address::EmailAddress;
use lettre::{
    message::header, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddress,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    pub async fn new(url: &str, from: EmailAddress) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.0.clone().into())
            .to(email.recipient.0)
            .subject(email.subject)
            .header(header::ContentType::TEXT_PLAIN);

        if let Some(reply_to) = email.reply_to {
            builder = builder.reply_to(reply_to.0);
        }

        builder.body(email.body).map_err(Into::into)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn service() -> EmailServiceImpl {
        EmailServiceImpl::new("smtp://localhost:25", "noreply@example.com".parse().unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn message_headers() {
        let sut = service().await;

        let message = sut
            .build_message(Email {
                recipient: "contacto@example.com".parse().unwrap(),
                subject: "Contacto web: Ana".into(),
                body: "Nombre: Ana\n\nEmail: ana@example.com\n\nMensaje: Hola".into(),
                reply_to: Some("Ana <ana@example.com>".parse().unwrap()),
            })
            .unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("From: noreply@example.com"));
        assert!(formatted.contains("To: contacto@example.com"));
        assert!(formatted.contains("Reply-To: Ana <ana@example.com>"));
        assert!(formatted.contains("Subject: Contacto web: Ana"));
    }

    #[tokio::test]
    async fn message_without_reply_to() {
        let sut = service().await;

        let message = sut
            .build_message(Email {
                recipient: "contacto@example.com".parse().unwrap(),
                subject: "Email Deliverability Test".into(),
                body: "Email deliverability seems to be working!".into(),
                reply_to: None,
            })
            .unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(!formatted.contains("Reply-To:"));
    }
}
