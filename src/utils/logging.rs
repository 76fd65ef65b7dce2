//! Logging utilities
//!
//! Builds truncated summaries of plan traffic for debug logs

use crate::models::{GeminiRequest, GeminiResponse, TripRequest};

/// Set to true to include the full prompt and generated text in debug logs
/// Default is false to reduce log verbosity
pub const VERBOSE_REQUEST_LOGGING: bool = false;

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut cut = max_len;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}... ({} chars truncated)", &s[..cut], s.len() - cut)
}

/// Summary of an incoming trip request; the credential is reduced to a presence flag
pub fn create_trip_log_summary(request: &TripRequest) -> serde_json::Value {
    serde_json::json!({
        "origin": request.origin,
        "destination": request.destination,
        "startDate": request.start_date,
        "endDate": request.end_date,
        "budget": truncate_content(&request.budget, 50),
        "travelerCount": request.traveler_count,
        "interests": truncate_content(&request.interests, 100),
        "credential": if request.credential.is_empty() { "[absent]" } else { "[present]" },
    })
}

/// Summary of the outbound Gemini request
pub fn create_request_log_summary(request: &GeminiRequest) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        return serde_json::to_value(request).unwrap_or(serde_json::json!({"error": "serialize failed"}));
    }

    let prompt = request.prompt().unwrap_or_default();
    serde_json::json!({
        "contents": request.contents.len(),
        "prompt": truncate_content(prompt, 120),
        "generationConfig": request.generation_config,
    })
}

/// Summary of a Gemini success body
pub fn create_response_log_summary(response: &GeminiResponse) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        return serde_json::to_value(response).unwrap_or(serde_json::json!({"error": "serialize failed"}));
    }

    let candidates = response.candidates.as_ref().map(|c| c.len());
    let finish_reason = response
        .candidates
        .as_ref()
        .and_then(|c| c.first())
        .and_then(|c| c.finish_reason.clone());
    let text = response
        .first_text()
        .map(|t| truncate_content(t, 200))
        .unwrap_or_default();

    serde_json::json!({
        "candidates": candidates,
        "finishReason": finish_reason,
        "text": text,
        "usage": response.usage_metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_content() {
        assert_eq!(truncate_content("short", 10), "short");
        assert_eq!(truncate_content("abcdefghij", 4), "abcd... (6 chars truncated)");
        // Never split a multi-byte character
        let truncated = truncate_content("ééé", 3);
        assert!(truncated.starts_with('é'));
    }

    #[test]
    fn test_trip_summary_hides_credential() {
        let request = TripRequest {
            origin: "Oslo".to_string(),
            credential: "secret-key-123".to_string(),
            ..Default::default()
        };
        let summary = create_trip_log_summary(&request).to_string();
        assert!(!summary.contains("secret-key-123"));
        assert!(summary.contains("[present]"));
    }
}
