//! Plan request service
//!
//! Validates a trip, renders the itinerary prompt and submits it through a
//! generation backend. Each call is independent: no retries, no caching, no
//! shared mutable state.

use crate::config::Settings;
use crate::models::{GeminiRequest, TripRequest};
use crate::services::client::{GeminiClient, GenerationBackend};
use crate::services::prompt::render_prompt;
use crate::utils::error::{PlanError, PlanResult};
use crate::utils::logging::create_trip_log_summary;
use anyhow::Result;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Plan request service
#[derive(Clone)]
pub struct PlanService {
    backend: Arc<dyn GenerationBackend>,
}

impl fmt::Debug for PlanService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanService")
            .field("backend", &self.backend.name())
            .field("model", &self.backend.model())
            .finish()
    }
}

impl PlanService {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }
    
    /// Service backed by the Gemini HTTP client
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = GeminiClient::new(settings)?;
        Ok(Self::new(Arc::new(client)))
    }
    
    /// Model name reported by the backend
    pub fn model(&self) -> &str {
        self.backend.model()
    }
    
    /// Build the generation request for a trip
    pub fn build_request(trip: &TripRequest) -> GeminiRequest {
        GeminiRequest::single_turn(render_prompt(trip))
    }
    
    /// Generate an itinerary for `trip`
    ///
    /// Resolves to the generated text exactly as the backend returned it.
    /// Validation failures return before any network call.
    pub async fn generate_plan(&self, trip: &TripRequest) -> PlanResult<String> {
        if let Some(field) = trip.missing_field() {
            warn!("Trip request rejected: missing {}", field);
            return Err(PlanError::Validation(format!("missing required field: {}", field)));
        }
        
        if let Ok(summary) = serde_json::to_string_pretty(&create_trip_log_summary(trip)) {
            debug!("🧳 Trip Request:\n{}", summary);
        }
        
        let request = Self::build_request(trip);
        let started = Instant::now();
        let result = self.backend.generate_content(&request, &trip.credential).await;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        
        match &result {
            Ok(text) => info!(
                "Plan generated for {} -> {}: {} chars in {:.2}ms",
                trip.origin, trip.destination, text.len(), elapsed_ms
            ),
            Err(e) => warn!(
                "Plan generation failed for {} -> {} after {:.2}ms: {}",
                trip.origin, trip.destination, elapsed_ms, e
            ),
        }
        
        result
    }
}
