//! Data model unit tests

use serde_json::json;
use tripplanner::models::gemini::{GeminiResponse, MAX_OUTPUT_TOKENS, TEMPERATURE, TOP_K, TOP_P};
use tripplanner::models::{GeminiGenerationConfig, GeminiRequest, PlanResponse, TripRequest};

#[test]
fn test_trip_request_deserialization() {
    let trip: TripRequest = serde_json::from_value(json!({
        "origin": "Toronto",
        "destination": "Lima",
        "startDate": "2025-05-01",
        "endDate": "2025-05-14",
        "budget": "CAD 5000",
        "travelerCount": 4,
        "interests": "Machu Picchu",
        "credential": "key-123"
    }))
    .unwrap();
    
    assert_eq!(trip.origin, "Toronto");
    assert_eq!(trip.traveler_count, 4);
    assert_eq!(trip.credential, "key-123");
    assert_eq!(trip.missing_field(), None);
}

#[test]
fn test_trip_request_accepts_form_field_names() {
    let trip: TripRequest = serde_json::from_value(json!({
        "source": "Toronto",
        "destination": "Lima",
        "startDate": "2025-05-01",
        "endDate": "2025-05-14",
        "travelers": 3
    }))
    .unwrap();
    
    assert_eq!(trip.origin, "Toronto");
    assert_eq!(trip.traveler_count, 3);
    assert_eq!(trip.budget, "");
    assert_eq!(trip.interests, "");
    assert_eq!(trip.missing_field(), Some("credential"));
}

#[test]
fn test_trip_request_defaults_traveler_count() {
    let trip: TripRequest = serde_json::from_value(json!({
        "origin": "A", "destination": "B", "startDate": "x", "endDate": "y"
    }))
    .unwrap();
    
    assert_eq!(trip.traveler_count, 1);
}

#[test]
fn test_trip_request_requires_dates() {
    let mut trip = TripRequest {
        origin: "A".to_string(),
        destination: "B".to_string(),
        start_date: "2025-01-01".to_string(),
        end_date: String::new(),
        credential: "k".to_string(),
        ..Default::default()
    };
    assert_eq!(trip.missing_field(), Some("endDate"));
    
    trip.start_date = String::new();
    assert_eq!(trip.missing_field(), Some("startDate"));
    
    trip.credential = " ".to_string();
    assert_eq!(trip.missing_field(), Some("credential"));
}

#[test]
fn test_trip_request_omitted_fields_reach_validation() {
    let trip: TripRequest = serde_json::from_value(json!({
        "origin": "Toronto",
        "startDate": "2025-05-01",
        "endDate": "2025-05-14",
        "credential": "key-123"
    }))
    .unwrap();
    
    assert_eq!(trip.destination, "");
    assert_eq!(trip.missing_field(), Some("destination"));
}

#[test]
fn test_generation_config_constants() {
    assert_eq!(TEMPERATURE, 0.7);
    assert_eq!(TOP_K, 40);
    assert_eq!(TOP_P, 0.95);
    assert_eq!(MAX_OUTPUT_TOKENS, 8192);
    
    let config = GeminiGenerationConfig::default();
    assert_eq!(config.temperature, TEMPERATURE);
    assert_eq!(config.max_output_tokens, MAX_OUTPUT_TOKENS);
}

#[test]
fn test_single_turn_request() {
    let request = GeminiRequest::single_turn("hello");
    assert_eq!(request.prompt(), Some("hello"));
    
    let value = serde_json::to_value(&request).unwrap();
    assert!(value["contents"][0].get("role").is_none());
    assert_eq!(value["generationConfig"]["topK"], 40);
}

#[test]
fn test_response_extraction_ignores_extra_fields() {
    let response: GeminiResponse = serde_json::from_value(json!({
        "candidates": [
            {
                "content": { "role": "model", "parts": [{ "text": "first" }, { "text": "second" }] },
                "finishReason": "STOP",
                "safetyRatings": []
            },
            { "content": { "parts": [{ "text": "other candidate" }] } }
        ],
        "modelVersion": "gemini-1.5-flash-002"
    }))
    .unwrap();
    
    assert_eq!(response.first_text(), Ok("first"));
}

#[test]
fn test_response_extraction_failures() {
    let empty: GeminiResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
    assert_eq!(empty.first_text(), Err("empty candidates"));
    
    let no_parts: GeminiResponse =
        serde_json::from_value(json!({ "candidates": [{ "content": { "role": "model" } }] })).unwrap();
    assert_eq!(no_parts.first_text(), Err("missing parts"));
}

#[test]
fn test_plan_response_shape() {
    let response = PlanResponse::new("Day 1".to_string(), "gemini-1.5-flash");
    let value = serde_json::to_value(&response).unwrap();
    
    assert_eq!(value["plan"], "Day 1");
    assert_eq!(value["model"], "gemini-1.5-flash");
    assert!(value["id"].as_str().unwrap().starts_with("plan_"));
    assert!(value["createdAt"].is_string());
}
