//! Error handling module
//! 
//! Defines the plan error taxonomy and the service-level error that maps it onto HTTP

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single plan generation call
///
/// Every kind propagates to the caller unchanged; none is retried.
#[derive(Error, Debug)]
pub enum PlanError {
    /// A required trip field or the credential is empty
    #[error("Request validation failed: {0}")]
    Validation(String),

    /// Non-success HTTP status from the generation backend
    #[error("Generation backend error {status}: {details}")]
    Backend {
        status: u16,
        /// Parsed error body when it was JSON, otherwise the status text
        details: serde_json::Value,
    },

    /// Success status but no `candidates[0].content.parts[0].text`
    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    /// DNS, connect, TLS, timeout or abort
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl PlanError {
    pub fn is_validation(&self) -> bool {
        matches!(self, PlanError::Validation(_))
    }

    /// Backend status code, if this is a backend error
    pub fn status(&self) -> Option<u16> {
        match self {
            PlanError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PlanError::Transport(e) if e.is_timeout())
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Plan generation failed
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Request body could not be read as a trip request
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    
    /// Payload too large
    #[error("Payload too large")]
    PayloadTooLarge,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub response_type: String,
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    /// Backend error payload (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Plan(plan_error) => match plan_error {
                PlanError::Validation(_) => StatusCode::BAD_REQUEST,
                PlanError::Backend { status: 401 | 403, .. } => StatusCode::UNAUTHORIZED,
                PlanError::Backend { status: 429, .. } => StatusCode::TOO_MANY_REQUESTS,
                PlanError::Transport(_) if plan_error.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
                PlanError::Backend { .. }
                | PlanError::MalformedResponse(_)
                | PlanError::Transport(_) => StatusCode::BAD_GATEWAY,
            },
        }
    }
    
    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self.status_code() {
            StatusCode::BAD_REQUEST | StatusCode::PAYLOAD_TOO_LARGE => "invalid_request_error",
            StatusCode::UNAUTHORIZED => "authentication_error",
            StatusCode::TOO_MANY_REQUESTS => "rate_limit_error",
            StatusCode::GATEWAY_TIMEOUT => "timeout_error",
            _ => "api_error",
        }
    }
    
    /// Whether detailed error information should be logged
    pub fn should_log_details(&self) -> bool {
        self.status_code() != StatusCode::UNAUTHORIZED
    }
    
    /// Convert to the JSON error body
    pub fn to_error_response(&self) -> ErrorResponse {
        let details = match self {
            AppError::Plan(PlanError::Backend { details, .. }) => Some(details.clone()),
            _ => None,
        };

        ErrorResponse {
            response_type: "error".to_string(),
            error: ErrorBody {
                error_type: self.error_type().to_string(),
                message: self.to_string(),
                details,
            },
        }
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        
        if self.should_log_details() {
            tracing::error!("Application error: {} - Status code: {}", self, status);
        } else {
            tracing::warn!("Client error: {} - Status code: {}", self.error_type(), status);
        }
        
        (status, Json(self.to_error_response())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Result of a plan generation call
pub type PlanResult<T> = Result<T, PlanError>;
