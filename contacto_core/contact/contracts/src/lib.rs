use std::future::Future;

use contacto_models::contact::Submission;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Validate a submission and, if it is valid, dispatch the notification
    /// email to the configured recipient.
    fn handle_submission(
        &self,
        submission: Submission,
    ) -> impl Future<Output = Result<(), HandleSubmissionError>> + Send;
}

#[derive(Debug, Error)]
pub enum HandleSubmissionError {
    /// A field is missing or empty, or the email address is malformed. The
    /// form does not distinguish which check failed, and the error text is
    /// part of its public contract.
    #[error("No arguments Provided!")]
    Validation,
}
