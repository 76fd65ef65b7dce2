//! Health check handlers
//! 
//! Provides application health status check endpoints

use crate::handlers::AppState;
use axum::{extract::State, response::Json};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

/// Service name reported by health endpoints
pub const SERVICE_NAME: &str = "tripplanner";

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Version information
    pub version: String,
    /// Timestamp
    pub timestamp: String,
    /// Details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

/// Check result
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthDetails {
    /// Generation model in use
    pub model: String,
    /// Where credentials come from: "per_request" or "server_configured"
    pub credential_source: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Memory usage (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<MemoryUsage>,
}

/// Memory usage information
#[derive(Debug, Serialize, Deserialize)]
pub struct MemoryUsage {
    /// Used memory in bytes
    pub used_bytes: u64,
    /// Total memory in bytes
    pub total_bytes: u64,
    /// Usage percentage
    pub usage_percent: f64,
}

/// Start the uptime clock
pub fn mark_started() {
    Lazy::force(&START_TIME);
}

fn build_response(status: &str, state: &AppState) -> HealthResponse {
    let credential_source = if state.settings.gemini.api_key.is_some() {
        "server_configured"
    } else {
        "per_request"
    };
    
    HealthResponse {
        status: status.to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        details: Some(HealthDetails {
            model: state.planner.model().to_string(),
            credential_source: credential_source.to_string(),
            uptime_seconds: get_uptime_seconds(),
            memory_usage: get_memory_usage(),
        }),
    }
}

/// Basic health check
/// 
/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing health check");
    Json(build_response("healthy", &state))
}

/// Readiness check
/// 
/// GET /health/ready
/// Configuration is validated at startup, so a running service is ready.
/// The generation backend is not probed: probing would need a credential.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing readiness check");
    Json(build_response("ready", &state))
}

/// Liveness check
/// 
/// GET /health/live
pub async fn liveness_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing liveness check");
    Json(build_response("alive", &state))
}

/// Get service uptime in seconds
fn get_uptime_seconds() -> u64 {
    START_TIME.elapsed().as_secs()
}

/// Resident and virtual memory of this process, read from `/proc` on Linux
fn get_memory_usage() -> Option<MemoryUsage> {
    #[cfg(target_os = "linux")]
    {
        let status = std::fs::read_to_string("/proc/self/status").ok()?;
        let field_bytes = |name: &str| {
            status
                .lines()
                .find(|line| line.starts_with(name))
                .and_then(|line| line.split_whitespace().nth(1))
                .and_then(|kb| kb.parse::<u64>().ok())
                .map(|kb| kb * 1024)
        };
        
        let used_bytes = field_bytes("VmRSS:")?;
        let total_bytes = field_bytes("VmSize:")?;
        let usage_percent = if total_bytes > 0 {
            used_bytes as f64 / total_bytes as f64 * 100.0
        } else {
            0.0
        };
        
        Some(MemoryUsage {
            used_bytes,
            total_bytes,
            usage_percent,
        })
    }
    
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}
