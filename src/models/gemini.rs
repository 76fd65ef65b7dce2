//! Gemini API data models
//!
//! Request and response structures for the `generateContent` endpoint

use serde::{Deserialize, Serialize};

/// Sampling temperature sent with every plan request
pub const TEMPERATURE: f64 = 0.7;
/// Top-K sampling cutoff
pub const TOP_K: u32 = 40;
/// Nucleus sampling cutoff
pub const TOP_P: f64 = 0.95;
/// Upper bound on generated tokens
pub const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Gemini `generateContent` request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiRequest {
    /// Conversation turns; plan requests carry exactly one
    pub contents: Vec<GeminiContent>,
    /// Sampling parameters
    #[serde(rename = "generationConfig")]
    pub generation_config: GeminiGenerationConfig,
}

impl GeminiRequest {
    /// Build a single-turn request whose only part is `prompt`
    pub fn single_turn(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: Some(prompt.into()),
                }],
            }],
            generation_config: GeminiGenerationConfig::default(),
        }
    }

    /// Text of the first part of the first turn
    pub fn prompt(&self) -> Option<&str> {
        self.contents
            .first()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Generation parameters
///
/// `Default` yields the fixed plan configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiGenerationConfig {
    pub temperature: f64,
    #[serde(rename = "topK")]
    pub top_k: u32,
    #[serde(rename = "topP")]
    pub top_p: f64,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

impl Default for GeminiGenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

/// Gemini `generateContent` success body
///
/// Every level is optional so that a partial body still parses and the
/// missing step can be reported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiResponse {
    pub candidates: Option<Vec<GeminiCandidate>>,
    #[serde(rename = "usageMetadata")]
    pub usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiUsageMetadata {
    #[serde(rename = "promptTokenCount")]
    pub prompt_token_count: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    pub candidates_token_count: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    pub total_token_count: Option<u32>,
}

impl GeminiResponse {
    /// `candidates[0].content.parts[0].text`, or the first step that is missing
    pub fn first_text(&self) -> Result<&str, &'static str> {
        let candidate = self
            .candidates
            .as_ref()
            .ok_or("missing candidates")?
            .first()
            .ok_or("empty candidates")?;
        let content = candidate.content.as_ref().ok_or("missing content")?;
        let part = content.parts.first().ok_or("missing parts")?;
        part.text.as_deref().ok_or("missing text")
    }
}

/// Gemini error body, e.g. `{"error": {"code": 403, "message": "...", "status": "PERMISSION_DENIED"}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiError {
    pub code: Option<u16>,
    pub message: String,
    pub status: Option<String>,
}
