use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Caller-supplied upstream credential. Forwarded per call, never stored.
pub struct ApiKey(pub String);

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| ApiKey(value.to_string()))
            .ok_or(ApiError::MissingApiKey)
    }
}
