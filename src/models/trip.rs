//! Trip planning data models
//!
//! Defines the caller-supplied trip parameters and the plan returned over HTTP

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trip parameters collected from the user
///
/// Immutable for the duration of a call. Only origin, destination, both dates
/// and the credential are required; everything else is passed through verbatim.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    /// Departure location (free text)
    #[serde(default, alias = "source")]
    pub origin: String,
    /// Destination location (free text)
    #[serde(default)]
    pub destination: String,
    /// First day of travel, e.g. `2025-06-01`
    #[serde(default)]
    pub start_date: String,
    /// Last day of travel, e.g. `2025-06-07`
    #[serde(default)]
    pub end_date: String,
    /// Budget, unit and currency left to the user
    #[serde(default)]
    pub budget: String,
    /// Number of travelers (expected 1-20, not enforced)
    #[serde(default = "default_traveler_count", alias = "travelers")]
    pub traveler_count: u32,
    /// Free-text interests, may be empty
    #[serde(default)]
    pub interests: String,
    /// Gemini API key for this call
    #[serde(default, skip_serializing)]
    pub credential: String,
}

fn default_traveler_count() -> u32 {
    1
}

// Hand-written so the credential never reaches a log line.
impl fmt::Debug for TripRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripRequest")
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("start_date", &self.start_date)
            .field("end_date", &self.end_date)
            .field("budget", &self.budget)
            .field("traveler_count", &self.traveler_count)
            .field("interests", &self.interests)
            .field("credential", &"[redacted]")
            .finish()
    }
}

impl TripRequest {
    /// Name of the first required field that is empty, if any
    ///
    /// The credential is checked first and is the only field trimmed; the
    /// trip fields only need to be non-empty.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.credential.trim().is_empty() {
            return Some("credential");
        }

        let required = [
            ("origin", &self.origin),
            ("destination", &self.destination),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
        ];

        required
            .into_iter()
            .find(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
    }

    /// Return a copy carrying the given credential
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = credential.into();
        self
    }
}

/// Generated plan returned by `POST /v1/plans`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// Response identifier
    pub id: String,
    /// Itinerary text exactly as generated
    pub plan: String,
    /// Model that produced the text
    pub model: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl PlanResponse {
    pub fn new(plan: String, model: impl Into<String>) -> Self {
        Self {
            id: format!("plan_{}", uuid::Uuid::new_v4().simple()),
            plan,
            model: model.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> TripRequest {
        TripRequest {
            origin: "Lisbon".to_string(),
            destination: "Kyoto".to_string(),
            start_date: "2025-04-01".to_string(),
            end_date: "2025-04-10".to_string(),
            budget: "3000 EUR".to_string(),
            traveler_count: 2,
            interests: "temples, food".to_string(),
            credential: "test-credential".to_string(),
        }
    }

    #[test]
    fn test_missing_field_order() {
        assert_eq!(complete_request().missing_field(), None);

        let mut request = complete_request();
        request.destination.clear();
        request.end_date.clear();
        assert_eq!(request.missing_field(), Some("destination"));

        request.credential.clear();
        assert_eq!(request.missing_field(), Some("credential"));

        let request = complete_request().with_credential("   ");
        assert_eq!(request.missing_field(), Some("credential"));
    }

    #[test]
    fn test_whitespace_trip_fields_are_present() {
        let mut request = complete_request();
        request.origin = "   ".to_string();
        request.start_date = "\t".to_string();
        assert_eq!(request.missing_field(), None);
    }

    #[test]
    fn test_debug_redacts_credential() {
        let rendered = format!("{:?}", complete_request());
        assert!(!rendered.contains("test-credential"));
        assert!(rendered.contains("[redacted]"));
    }

    #[test]
    fn test_credential_not_serialized() {
        let json = serde_json::to_value(complete_request()).unwrap();
        assert!(json.get("credential").is_none());
        assert_eq!(json["travelerCount"], 2);
    }
}
