use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use contacto_core_health_contracts::{HealthService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    email: bool,
}

async fn health(service: State<Arc<impl HealthService>>) -> Response {
    let HealthStatus { email } = service.get_status().await;

    let status = if email {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(HealthResponse { http: true, email })).into_response()
}

#[cfg(test)]
mod tests {
    use contacto_core_health_contracts::MockHealthService;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn healthy() {
        // Arrange
        let mut service = MockHealthService::new();
        service
            .expect_get_status()
            .once()
            .return_once(|| Box::pin(std::future::ready(HealthStatus { email: true })));

        // Act
        let response = health(State(Arc::new(service))).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unhealthy() {
        // Arrange
        let mut service = MockHealthService::new();
        service
            .expect_get_status()
            .once()
            .return_once(|| Box::pin(std::future::ready(HealthStatus { email: false })));

        // Act
        let response = health(State(Arc::new(service))).await;

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
