pub mod types;
pub mod request;
pub mod response;

pub use request::{GenerateContentPath, GenerateContentRequest, GenerateContentRequestBody};
pub use response::{Candidate, GenerateContentResponse, PromptFeedback, UsageMetadata};
pub use types::*;
