use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use muallem_protocol::gemini::generate_content::{Content, GenerateContentRequestBody, Part};

use crate::auth::ApiKey;
use crate::core::CoreState;
use crate::error::ApiError;
use crate::prompt;
use crate::request::{ApiJson, ProcessRequest};

const FILE_REQUIRED: &str = "محتوى الملف مطلوب";
const IMAGE_REQUIRED: &str = "محتوى الصورة مطلوب";
const AUDIO_REQUIRED: &str = "محتوى الصوت مطلوب";
const PDF_FAILED: &str = "خطأ في معالجة الملف";
const IMAGE_FAILED: &str = "خطأ في معالجة الصورة";
const AUDIO_FAILED: &str = "خطأ في معالجة الصوت";

const DEFAULT_IMAGE_MIME: &str = "image/jpeg";
const DEFAULT_AUDIO_MIME: &str = "audio/mpeg";

pub async fn pdf(
    State(state): State<Arc<CoreState>>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<ProcessRequest>,
) -> Result<Json<Value>, ApiError> {
    transcribe(
        &state,
        &api_key,
        request.content,
        "application/pdf".to_string(),
        prompt::PDF_EXTRACT,
        FILE_REQUIRED,
        PDF_FAILED,
    )
    .await
}

pub async fn image(
    State(state): State<Arc<CoreState>>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<ProcessRequest>,
) -> Result<Json<Value>, ApiError> {
    let mime_type = request
        .mime_type
        .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());
    transcribe(
        &state,
        &api_key,
        request.content,
        mime_type,
        prompt::IMAGE_EXTRACT,
        IMAGE_REQUIRED,
        IMAGE_FAILED,
    )
    .await
}

pub async fn audio(
    State(state): State<Arc<CoreState>>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<ProcessRequest>,
) -> Result<Json<Value>, ApiError> {
    let mime_type = request
        .mime_type
        .unwrap_or_else(|| DEFAULT_AUDIO_MIME.to_string());
    transcribe(
        &state,
        &api_key,
        request.content,
        mime_type,
        prompt::AUDIO_TRANSCRIBE,
        AUDIO_REQUIRED,
        AUDIO_FAILED,
    )
    .await
}

async fn transcribe(
    state: &CoreState,
    api_key: &str,
    content: String,
    mime_type: String,
    instruction: &str,
    required: &'static str,
    fallback: &'static str,
) -> Result<Json<Value>, ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::MissingInput(required));
    }

    let body = GenerateContentRequestBody {
        contents: vec![Content::user(vec![
            Part::inline_data(mime_type, content),
            Part::text(instruction),
        ])],
        ..Default::default()
    };
    let text = state
        .generator
        .generate(api_key, body)
        .await
        .map_err(|err| ApiError::upstream(err, fallback))?;

    Ok(Json(json!({
        "success": true,
        "text": text,
    })))
}
