pub mod auth;
pub mod core;
pub mod error;
pub mod extract;
pub mod handler;
pub mod options;
pub mod prompt;
pub mod request;

pub use crate::auth::ApiKey;
pub use crate::core::{Core, CoreState};
pub use crate::error::ApiError;
pub use crate::extract::extract_json;
pub use crate::options::{GenerationOptions, Length, Level, Style};
