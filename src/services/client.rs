//! Generation backend client
//! 
//! Encapsulates HTTP communication with the Gemini `generateContent` endpoint

use crate::config::{CredentialPlacement, Settings};
use crate::models::gemini::{GeminiErrorResponse, GeminiRequest, GeminiResponse};
use crate::utils::error::{PlanError, PlanResult};
use crate::utils::logging::{create_request_log_summary, create_response_log_summary, truncate_content};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, error, warn};

/// Header carrying the credential when it is not placed in the query string
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Query parameter carrying the credential
pub const API_KEY_PARAM: &str = "key";

/// Backend that turns a generation request into text
///
/// Implementations perform exactly one outbound attempt per call.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Get the backend name
    fn name(&self) -> &str;

    /// Model the backend generates with
    fn model(&self) -> &str;

    /// Submit the request and return `candidates[0].content.parts[0].text`
    async fn generate_content(&self, request: &GeminiRequest, credential: &str) -> PlanResult<String>;
}

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    placement: CredentialPlacement,
}

impl GeminiClient {
    /// Create a new client instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.gemini.timeout))
            .user_agent(concat!("tripplanner/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        
        Ok(Self {
            client,
            endpoint: settings.generate_content_url(),
            model: settings.gemini.model.clone(),
            placement: settings.gemini.credential_placement,
        })
    }
    
    /// Endpoint URL without credential
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
    
    /// Handle HTTP response
    async fn handle_response(&self, response: Response) -> PlanResult<String> {
        let status = response.status();
        
        if !status.is_success() {
            // An unreadable error body is treated like a non-JSON one.
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read Gemini error body for {}: {}", status, e.without_url());
                    String::new()
                }
            };
            return Err(backend_error(status, &body));
        }
        
        let body = response.text().await.map_err(|e| PlanError::Transport(e.without_url()))?;
        
        let parsed: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Gemini response: {} - body: {}", e, truncate_content(&body, 500));
            PlanError::MalformedResponse(format!("response body is not a generateContent result: {}", e))
        })?;
        
        if let Ok(summary) = serde_json::to_string_pretty(&create_response_log_summary(&parsed)) {
            debug!("📥 Gemini Response:\n{}", summary);
        }
        
        match parsed.first_text() {
            Ok(text) => Ok(text.to_string()),
            Err(step) => {
                error!("Invalid response format from Gemini API: {}", step);
                Err(PlanError::MalformedResponse(step.to_string()))
            }
        }
    }
}

/// Classify a non-success response
///
/// The parsed body is kept when it is JSON; otherwise the status text stands in for it.
fn backend_error(status: StatusCode, body: &str) -> PlanError {
    let details = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            match serde_json::from_value::<GeminiErrorResponse>(value.clone()) {
                Ok(parsed) => error!("Gemini API error {}: {}", status, parsed.error.message),
                Err(_) => error!("Gemini API request failed: {} - {}", status, truncate_content(body, 500)),
            }
            value
        }
        Err(_) => {
            error!("Gemini API request failed: {} - {}", status, truncate_content(body, 500));
            serde_json::Value::String(status.canonical_reason().unwrap_or("Unknown Status").to_string())
        }
    };
    
    PlanError::Backend {
        status: status.as_u16(),
        details,
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }
    
    fn model(&self) -> &str {
        &self.model
    }
    
    async fn generate_content(&self, request: &GeminiRequest, credential: &str) -> PlanResult<String> {
        debug!("Sending Gemini generateContent request to {}", self.endpoint);
        
        if let Ok(summary) = serde_json::to_string_pretty(&create_request_log_summary(request)) {
            debug!("📤 Gemini Request:\n{}", summary);
        }
        
        let builder = self.client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request);
        
        let builder = match self.placement {
            CredentialPlacement::Query => builder.query(&[(API_KEY_PARAM, credential)]),
            CredentialPlacement::Header => builder.header(API_KEY_HEADER, credential),
        };
        
        // The URL may carry the key, so it is stripped from transport errors.
        let response = builder
            .send()
            .await
            .map_err(|e| PlanError::Transport(e.without_url()))?;
        
        self.handle_response(response).await
    }
}
