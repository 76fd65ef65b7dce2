//! HTTP handlers module
//! 
//! Contains all HTTP endpoint handling logic

pub mod health;
pub mod plans;

use crate::config::Settings;
use crate::middleware::request_logging_middleware;
use crate::services::PlanService;
use anyhow::Result;
use axum::{extract::DefaultBodyLimit, http::HeaderValue, routing::get, routing::post, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub planner: PlanService,
}

/// Create application router backed by the Gemini client
pub async fn create_router(settings: Settings) -> Result<Router> {
    let planner = PlanService::from_settings(&settings)?;
    Ok(create_router_with_planner(settings, planner))
}

/// Create application router around an existing plan service
pub fn create_router_with_planner(settings: Settings, planner: PlanService) -> Router {
    health::mark_started();
    
    let max_request_size = settings.request.max_request_size;
    let cors = cors_layer(&settings);
    
    let app_state = Arc::new(AppState { settings, planner });
    
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_logging_middleware))
        .layer(DefaultBodyLimit::max(max_request_size));
    
    let router = Router::new()
        .route("/v1/plans", post(plans::create_plan))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route("/health/ready", get(health::readiness_check))
        .with_state(app_state)
        .layer(middleware_stack);
    
    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// CORS layer from security settings, `None` when disabled
fn cors_layer(settings: &Settings) -> Option<CorsLayer> {
    if !settings.security.cors_enabled {
        return None;
    }
    
    let origins = &settings.security.allowed_origins;
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return Some(layer.allow_origin(Any));
    }
    
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    
    Some(layer.allow_origin(parsed))
}
