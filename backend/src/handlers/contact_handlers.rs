use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::handlers::contact_dtos::{ContactResponse, MethodNotAllowedResponse};

/// Largest contact body the route buffers. Anything bigger is answered with
/// the JSON failure reply like any other unreadable body.
pub const CONTACT_BODY_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("contact submission body could not be read: {0}")]
    Body(#[from] BytesRejection),
    #[error("contact submission is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        error!("Contact form error: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ContactResponse::failed())).into_response()
    }
}

/// Accepts any well-formed JSON body and records it in the log. Nothing is
/// stored or forwarded.
pub async fn submit_contact(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ContactResponse>, ContactError> {
    let body = body?;
    let submission: Value = serde_json::from_slice(&body)?;

    let name = submission.get("name").and_then(Value::as_str).unwrap_or_default();
    let email = submission.get("email").and_then(Value::as_str).unwrap_or_default();
    info!(
        timestamp = %Utc::now().to_rfc3339(),
        contact_name = name,
        contact_email = email,
        submission = %submission,
        "Contact form submission"
    );

    Ok(Json(ContactResponse::received()))
}

pub async fn contact_method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MethodNotAllowedResponse {
            message: "Method not allowed",
        }),
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::build_router;
    use crate::config::server_config::ServerConfig;
    use crate::handlers::contact_dtos::{CONTACT_FAILURE_MESSAGE, CONTACT_SUCCESS_MESSAGE};

    use super::CONTACT_BODY_LIMIT;

    fn test_router() -> Router {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        build_router(&config)
    }

    async fn send(method: Method, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn accepts_minimal_submission() {
        let (status, body) = send(Method::POST, r#"{"name":"A","email":"a@b.com"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "message": CONTACT_SUCCESS_MESSAGE }));
    }

    #[tokio::test]
    async fn accepts_full_wizard_payload() {
        let payload = json!({
            "name": "Jordan",
            "company": "Acme Realty",
            "email": "jordan@acme.test",
            "phone": "",
            "services": ["Aerial Marketing & Real Estate", "Other"],
            "location": "Austin, TX",
            "timeline": "1-2 weeks",
            "message": "Listing shoot",
        });
        let (status, body) = send(Method::POST, &payload.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
    }

    #[tokio::test]
    async fn accepts_json_that_is_not_a_submission_shape() {
        let (status, body) = send(Method::POST, "[1, 2, 3]").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
    }

    #[tokio::test]
    async fn malformed_body_is_a_server_failure() {
        let (status, body) = send(Method::POST, "{\"name\": ").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "success": false, "message": CONTACT_FAILURE_MESSAGE }));
    }

    #[tokio::test]
    async fn empty_body_is_a_server_failure() {
        let (status, body) = send(Method::POST, "").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], json!(false));
    }

    fn submission_with_message_of(len: usize) -> String {
        json!({ "name": "A", "email": "a@b.com", "message": "x".repeat(len) }).to_string()
    }

    #[tokio::test]
    async fn accepts_submission_above_axum_default_limit() {
        let payload = submission_with_message_of(3 * 1024 * 1024);
        let (status, body) = send(Method::POST, &payload).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "message": CONTACT_SUCCESS_MESSAGE }));
    }

    #[tokio::test]
    async fn oversized_body_is_a_json_server_failure() {
        let payload = submission_with_message_of(CONTACT_BODY_LIMIT + 1);
        let (status, body) = send(Method::POST, &payload).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "success": false, "message": CONTACT_FAILURE_MESSAGE }));
    }

    #[tokio::test]
    async fn get_is_method_not_allowed() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/contact")
            .body(Body::empty())
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "message": "Method not allowed" }));
    }

    #[tokio::test]
    async fn health_check_responds() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }
}
