//! Error handling module unit tests

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tripplanner::utils::error::*;

fn backend(status: u16) -> AppError {
    AppError::Plan(PlanError::Backend {
        status,
        details: json!({ "error": { "code": status, "message": "upstream says no" } }),
    })
}

#[test]
fn test_app_error_status_codes() {
    let test_cases = vec![
        (AppError::Plan(PlanError::Validation("missing required field: origin".to_string())), StatusCode::BAD_REQUEST),
        (AppError::InvalidBody("EOF while parsing".to_string()), StatusCode::BAD_REQUEST),
        (AppError::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE),
        (backend(400), StatusCode::BAD_GATEWAY),
        (backend(401), StatusCode::UNAUTHORIZED),
        (backend(403), StatusCode::UNAUTHORIZED),
        (backend(429), StatusCode::TOO_MANY_REQUESTS),
        (backend(500), StatusCode::BAD_GATEWAY),
        (AppError::Plan(PlanError::MalformedResponse("missing candidates".to_string())), StatusCode::BAD_GATEWAY),
    ];
    
    for (error, expected_status) in test_cases {
        assert_eq!(error.status_code(), expected_status, "{}", error);
    }
}

#[test]
fn test_app_error_types() {
    let test_cases = vec![
        (AppError::Plan(PlanError::Validation("x".to_string())), "invalid_request_error"),
        (AppError::PayloadTooLarge, "invalid_request_error"),
        (backend(403), "authentication_error"),
        (backend(429), "rate_limit_error"),
        (backend(500), "api_error"),
        (AppError::Plan(PlanError::MalformedResponse("x".to_string())), "api_error"),
        (AppError::Plan(PlanError::Backend { status: 503, details: json!("Service Unavailable") }), "api_error"),
    ];
    
    for (error, expected_type) in test_cases {
        assert_eq!(error.error_type(), expected_type);
    }
}

#[test]
fn test_plan_error_messages() {
    let error = PlanError::Validation("missing required field: endDate".to_string());
    assert_eq!(error.to_string(), "Request validation failed: missing required field: endDate");
    
    // Plan errors surface through AppError unchanged
    let app_error = AppError::from(error);
    assert_eq!(app_error.to_string(), "Request validation failed: missing required field: endDate");
    
    let error = PlanError::Backend { status: 404, details: json!("Not Found") };
    assert_eq!(error.to_string(), "Generation backend error 404: \"Not Found\"");
    assert_eq!(error.status(), Some(404));
    assert!(!error.is_validation());
    assert!(!error.is_timeout());
}

#[test]
fn test_authentication_errors_hide_details_in_logs() {
    assert!(!backend(401).should_log_details());
    assert!(!backend(403).should_log_details());
    assert!(backend(500).should_log_details());
    assert!(AppError::Plan(PlanError::Validation("x".to_string())).should_log_details());
}

#[tokio::test]
async fn test_into_response_body() {
    let response = backend(429).into_response();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    
    assert_eq!(value["type"], "error");
    assert_eq!(value["error"]["type"], "rate_limit_error");
    assert_eq!(value["error"]["details"]["error"]["message"], "upstream says no");
}

#[test]
fn test_error_response_omits_details_when_absent() {
    let body = AppError::InvalidBody("bad".to_string()).to_error_response();
    let value = serde_json::to_value(&body).unwrap();
    
    assert!(value["error"].get("details").is_none());
    assert_eq!(value["error"]["message"], "Invalid request body: bad");
}
