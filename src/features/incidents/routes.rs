use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::incidents::handlers;
use crate::features::incidents::services::IncidentService;

/// Create routes for the incidents feature
///
/// Note: the whole surface is public (no authentication).
pub fn routes(service: Arc<IncidentService>) -> Router {
    Router::new()
        .route(
            "/incidents",
            get(handlers::list_incidents).post(handlers::create_incident),
        )
        .route(
            "/incidents/{id}",
            get(handlers::get_incident).delete(handlers::delete_incident),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::lazy_test_pool;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use fake::faker::lorem::en::{Paragraph, Sentence};
    use fake::Fake;
    use serde_json::{json, Value};

    /// Router backed by a pool that never connects. Every request
    /// below must be rejected before storage is reached, so a passing
    /// test also proves no query was executed.
    fn test_server() -> TestServer {
        let service = Arc::new(IncidentService::new(lazy_test_pool()));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn create_with_missing_fields_is_rejected() {
        let server = test_server();

        let response = server
            .post("/incidents")
            .json(&json!({ "title": "Server down" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "Missing required fields: title, description, and severity are required"
        );
    }

    #[tokio::test]
    async fn create_with_empty_title_is_rejected() {
        let server = test_server();
        let description: String = Paragraph(1..3).fake();

        let response = server
            .post("/incidents")
            .json(&json!({ "title": "", "description": description, "severity": "Low" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "Missing required fields: title, description, and severity are required"
        );
    }

    #[tokio::test]
    async fn create_with_unknown_severity_is_rejected() {
        let server = test_server();
        let title: String = Sentence(3..6).fake();
        let description: String = Paragraph(1..3).fake();

        let response = server
            .post("/incidents")
            .json(&json!({ "title": title, "description": description, "severity": "Critical" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "Invalid severity level. Must be one of: Low, Medium, High"
        );
    }

    #[tokio::test]
    async fn get_with_non_numeric_id_is_rejected() {
        let server = test_server();

        let response = server.get("/incidents/abc").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid ID format");
    }

    #[tokio::test]
    async fn delete_with_non_numeric_id_is_rejected() {
        let server = test_server();

        let response = server.delete("/incidents/not-a-number").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid ID format");
    }
}
