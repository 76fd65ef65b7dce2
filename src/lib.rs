//! Trip Planner Library
//! 
//! Turns trip parameters into a Gemini-generated travel itinerary

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::{AppConfig, Settings};
pub use handlers::{create_router, create_router_with_planner, AppState};
pub use models::{PlanResponse, TripRequest};
pub use services::{GeminiClient, GenerationBackend, PlanService};
pub use utils::error::{AppError, AppResult, PlanError, PlanResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
