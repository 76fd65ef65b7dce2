//! Plan generation handler
//! 
//! POST /v1/plans

use crate::handlers::AppState;
use crate::models::{PlanResponse, TripRequest};
use crate::services::client::API_KEY_HEADER;
use crate::utils::error::{AppError, AppResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;
use tracing::debug;

/// Generate a travel plan
/// 
/// The credential is taken from the body, then the `x-goog-api-key` header,
/// then `Authorization: Bearer`, and finally the server-side key if one is configured.
pub async fn create_plan(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> AppResult<Json<PlanResponse>> {
    let Json(mut trip) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::InvalidBody(rejection.body_text())
        }
    })?;
    
    if trip.credential.trim().is_empty() {
        if let Some(credential) = extract_credential(&headers)
            .or_else(|| state.settings.gemini.api_key.clone())
        {
            trip = trip.with_credential(credential);
        }
    }
    
    debug!("Received plan request: {} -> {}", trip.origin, trip.destination);
    
    let plan = state.planner.generate_plan(&trip).await?;
    
    Ok(Json(PlanResponse::new(plan, state.planner.model())))
}

/// Credential supplied in request headers
fn extract_credential(headers: &HeaderMap) -> Option<String> {
    let from_api_key_header = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());
    
    let from_bearer = || {
        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };
    
    from_api_key_header.or_else(from_bearer).map(str::to_string)
}
