use std::sync::Arc;

use contacto_core_contact_contracts::{ContactService, HandleSubmissionError};
use contacto_email_contracts::{Email, EmailService};
use contacto_models::{contact::Submission, email_address::EmailAddress};
use tracing::{error, warn};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Email,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub recipient: Arc<EmailAddress>,
}

impl<Email> ContactServiceImpl<Email> {
    pub fn new(email: Email, config: ContactServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn handle_submission(
        &self,
        submission: Submission,
    ) -> Result<(), HandleSubmissionError> {
        let name = submission.name.trim();
        let email = submission.email.trim();
        let message = submission.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(HandleSubmissionError::Validation);
        }
        // The name is embedded in the subject line; control characters could
        // otherwise be read back by the transport as additional headers.
        if name.chars().any(char::is_control) {
            return Err(HandleSubmissionError::Validation);
        }
        let reply_to = email
            .parse::<EmailAddress>()
            .map_err(|_| HandleSubmissionError::Validation)?;

        let notification = Email {
            recipient: (*self.config.recipient).clone().into(),
            subject: format!("Contacto web: {name}"),
            body: format!(
                "Se ha recibido un nuevo mensaje desde el formulario de contacto de la web.\n\
                 \n\
                 Detalles del contacto:\n\
                 \n\
                 Nombre: {name}\n\
                 \n\
                 Email: {email}\n\
                 \n\
                 Mensaje: {message}"
            ),
            reply_to: Some(reply_to.with_name(name.to_owned())),
        };

        // Delivery is fire-and-forget: the form never reports transport
        // problems to the submitter.
        match self.email.send(notification).await {
            Ok(true) => {}
            Ok(false) => warn!("Mail server rejected the contact notification"),
            Err(err) => error!("Failed to send contact notification: {err:#}"),
        }

        Ok(())
    }
}
