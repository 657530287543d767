pub mod client;
pub mod error;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, Generator};
pub use error::GenerateError;
