use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Form, Json, Router,
};
use contacto_core_contact_contracts::{ContactService, HandleSubmissionError};

use crate::models::contact::ApiContactForm;

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(send_submission))
        .with_state(service)
}

async fn send_submission(
    service: State<Arc<impl ContactService>>,
    Form(form): Form<ApiContactForm>,
) -> Response {
    match service.handle_submission(form.into()).await {
        Ok(()) => Json(true).into_response(),
        // The exact error text is part of the form's public contract.
        Err(err @ HandleSubmissionError::Validation) => {
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
    }
}
