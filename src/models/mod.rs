//! Data models module
//!
//! Defines the trip input, the HTTP response shape, and the Gemini wire structures

pub mod gemini;
pub mod trip;

pub use gemini::{
    GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse,
};
pub use trip::{PlanResponse, TripRequest};
