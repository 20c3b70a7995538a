//! Outbound integrations.

pub mod gemini;

pub use gemini::{GeminiClient, GeminiClientError, RecipeSource};
