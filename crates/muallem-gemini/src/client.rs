use std::sync::OnceLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue};
use tracing::{info, warn};
use uuid::Uuid;

use muallem_protocol::gemini::generate_content::{
    GenerateContentPath, GenerateContentRequest, GenerateContentRequestBody,
    GenerateContentResponse,
};

use crate::error::GenerateError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(300);

/// Seam between request handlers and the hosted generation service. The
/// credential travels per call; implementations hold no caller state.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        api_key: &str,
        body: GenerateContentRequestBody,
    ) -> Result<String, GenerateError>;
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL)
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(
        &self,
        api_key: &str,
        body: GenerateContentRequestBody,
    ) -> Result<String, GenerateError> {
        let request = GenerateContentRequest {
            path: GenerateContentPath {
                model: self.model.clone(),
            },
            body,
        };
        let path = format!("/v1beta/models/{}:generateContent", request.path.model);
        let url = build_url(&self.base_url, &path);
        let client = shared_client()?;
        let req_headers = build_headers(api_key)?;

        let trace_id = Uuid::new_v4();
        let started_at = Instant::now();
        info!(
            event = "upstream_request",
            trace_id = %trace_id,
            op = "gemini.generate",
            method = "POST",
            path = %path,
            model = %request.path.model
        );
        let response = client
            .post(url)
            .headers(req_headers)
            .json(&request.body)
            .send()
            .await
            .map_err(|err| {
                warn!(
                    event = "upstream_response",
                    trace_id = %trace_id,
                    op = "gemini.generate",
                    status = "error",
                    elapsed_ms = started_at.elapsed().as_millis(),
                    error = %err
                );
                GenerateError::from(err)
            })?;

        let status = response.status();
        info!(
            event = "upstream_response",
            trace_id = %trace_id,
            op = "gemini.generate",
            status = %status.as_u16(),
            elapsed_ms = started_at.elapsed().as_millis()
        );
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerateError::Upstream { status, message });
        }

        let decoded: GenerateContentResponse = response.json().await?;
        decoded.text().ok_or(GenerateError::EmptyResponse)
    }
}

static CLIENT: OnceLock<wreq::Client> = OnceLock::new();

fn shared_client() -> Result<wreq::Client, GenerateError> {
    if let Some(client) = CLIENT.get() {
        return Ok(client.clone());
    }
    let client = wreq::Client::builder()
        .timeout(UPSTREAM_TIMEOUT)
        .build()?;
    Ok(CLIENT.get_or_init(|| client).clone())
}

fn build_headers(api_key: &str) -> Result<HeaderMap, GenerateError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-goog-api-key",
        HeaderValue::from_str(api_key).map_err(|_| GenerateError::InvalidApiKey)?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn build_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_without_doubled_slashes() {
        assert_eq!(
            build_url("http://localhost:9000/", "/v1beta/models/m:generateContent"),
            "http://localhost:9000/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn rejects_api_keys_that_cannot_travel_as_headers() {
        assert!(matches!(
            build_headers("مفتاح").unwrap_err(),
            GenerateError::InvalidApiKey
        ));
    }
}
