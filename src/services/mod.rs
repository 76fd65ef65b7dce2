//! Services module
//!
//! Contains the plan request service, the prompt builder and the generation backend client

pub mod client;
pub mod planner;
pub mod prompt;

pub use client::{GeminiClient, GenerationBackend};
pub use planner::PlanService;
pub use prompt::render_prompt;
