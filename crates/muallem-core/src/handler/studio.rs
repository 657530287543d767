use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use muallem_protocol::gemini::generate_content::{Content, GenerateContentRequestBody, Part};

use crate::auth::ApiKey;
use crate::core::CoreState;
use crate::error::ApiError;
use crate::extract::extract_json;
use crate::prompt;
use crate::request::{ApiJson, StudioRequest};

const CONTENT_REQUIRED: &str = "المحتوى مطلوب";
const AUDIO_FAILED: &str = "خطأ في إنشاء الملخص الصوتي";
const FLASHCARDS_FAILED: &str = "خطأ في إنشاء البطاقات التعليمية";
const QUIZ_FAILED: &str = "خطأ في إنشاء الاختبار";
const MINDMAP_FAILED: &str = "خطأ في إنشاء الخريطة الذهنية";
const REPORT_FAILED: &str = "خطأ في إنشاء التقرير";
const SLIDES_FAILED: &str = "خطأ في إنشاء العرض التقديمي";
const INFOGRAPHIC_FAILED: &str = "خطأ في إنشاء الإنفوجرافيك";
const VIDEO_FAILED: &str = "خطأ في إنشاء محتوى الفيديو";

/// Spoken Arabic runs near 150 words a minute; scripts shorter than that
/// still report a one-minute floor.
const WORDS_PER_MINUTE: f64 = 150.0;

pub async fn audio(
    State(state): State<Arc<CoreState>>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<StudioRequest>,
) -> Result<Json<Value>, ApiError> {
    require_content(&request.content)?;
    let script = generate(
        &state,
        &api_key,
        prompt::audio_script(&request.content, &request.options),
        AUDIO_FAILED,
    )
    .await?;
    let minutes = estimate_minutes(&script);
    Ok(Json(json!({
        "success": true,
        "type": "audio",
        "data": {
            "script": script,
            "duration": format!("~{minutes} دقيقة"),
            "note": "النص جاهز للتحويل إلى صوت باستخدام خدمة TTS",
        }
    })))
}

pub async fn flashcards(
    State(state): State<Arc<CoreState>>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<StudioRequest>,
) -> Result<Json<Value>, ApiError> {
    require_content(&request.content)?;
    let reply = generate(
        &state,
        &api_key,
        prompt::flashcards(&request.content, &request.options),
        FLASHCARDS_FAILED,
    )
    .await?;
    let mut map = extract_json(&reply);
    let data = map.remove("flashcards").unwrap_or_else(|| json!([]));
    Ok(Json(json!({
        "success": true,
        "type": "flashcards",
        "data": data,
    })))
}

pub async fn quiz(
    State(state): State<Arc<CoreState>>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<StudioRequest>,
) -> Result<Json<Value>, ApiError> {
    require_content(&request.content)?;
    let reply = generate(
        &state,
        &api_key,
        prompt::quiz(&request.content, &request.options),
        QUIZ_FAILED,
    )
    .await?;
    let mut map = extract_json(&reply);
    let data = map
        .remove("quiz")
        .unwrap_or_else(|| json!({"title": "", "questions": []}));
    Ok(Json(json!({
        "success": true,
        "type": "quiz",
        "data": data,
    })))
}

pub async fn mindmap(
    State(state): State<Arc<CoreState>>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<StudioRequest>,
) -> Result<Json<Value>, ApiError> {
    require_content(&request.content)?;
    let reply = generate(
        &state,
        &api_key,
        prompt::mindmap(&request.content),
        MINDMAP_FAILED,
    )
    .await?;
    let mut map = extract_json(&reply);
    let data = map
        .remove("mindmap")
        .unwrap_or_else(|| json!({"title": "", "branches": []}));
    Ok(Json(json!({
        "success": true,
        "type": "mindmap",
        "data": data,
    })))
}

pub async fn report(
    State(state): State<Arc<CoreState>>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<StudioRequest>,
) -> Result<Json<Value>, ApiError> {
    require_content(&request.content)?;
    let markdown = generate(
        &state,
        &api_key,
        prompt::report(&request.content, &request.options),
        REPORT_FAILED,
    )
    .await?;
    Ok(Json(json!({
        "success": true,
        "type": "report",
        "data": { "markdown": markdown },
    })))
}

pub async fn slides(
    State(state): State<Arc<CoreState>>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<StudioRequest>,
) -> Result<Json<Value>, ApiError> {
    require_content(&request.content)?;
    let reply = generate(
        &state,
        &api_key,
        prompt::slides(&request.content, &request.options),
        SLIDES_FAILED,
    )
    .await?;
    let mut map = extract_json(&reply);
    let data = map
        .remove("presentation")
        .unwrap_or_else(|| json!({"title": "", "slides": []}));
    Ok(Json(json!({
        "success": true,
        "type": "slides",
        "data": data,
    })))
}

pub async fn infographic(
    State(state): State<Arc<CoreState>>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<StudioRequest>,
) -> Result<Json<Value>, ApiError> {
    require_content(&request.content)?;
    let reply = generate(
        &state,
        &api_key,
        prompt::infographic(&request.content),
        INFOGRAPHIC_FAILED,
    )
    .await?;
    let mut map = extract_json(&reply);
    let data = map.remove("infographic").unwrap_or_else(|| {
        json!({"title": "", "points": [], "stats": [], "conclusion": ""})
    });
    Ok(Json(json!({
        "success": true,
        "type": "infographic",
        "data": data,
    })))
}

pub async fn video(
    State(state): State<Arc<CoreState>>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<StudioRequest>,
) -> Result<Json<Value>, ApiError> {
    require_content(&request.content)?;
    let script = generate(
        &state,
        &api_key,
        prompt::video_script(&request.content, request.options.style),
        VIDEO_FAILED,
    )
    .await?;
    Ok(Json(json!({
        "success": true,
        "type": "video",
        "data": {
            "script": script,
            "note": "المحتوى جاهز للتحويل إلى فيديو",
        }
    })))
}

fn require_content(content: &str) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::MissingInput(CONTENT_REQUIRED));
    }
    Ok(())
}

async fn generate(
    state: &CoreState,
    api_key: &str,
    prompt: String,
    fallback: &'static str,
) -> Result<String, ApiError> {
    let body = GenerateContentRequestBody {
        contents: vec![Content::user(vec![Part::text(prompt)])],
        ..Default::default()
    };
    state
        .generator
        .generate(api_key, body)
        .await
        .map_err(|err| ApiError::upstream(err, fallback))
}

pub(crate) fn estimate_minutes(script: &str) -> u64 {
    let words = script.split_whitespace().count();
    ((words as f64 / WORDS_PER_MINUTE).round() as u64).max(1)
}

#[cfg(test)]
mod tests {
    use super::estimate_minutes;

    #[test]
    fn three_hundred_words_read_in_two_minutes() {
        let script = vec!["كلمة"; 300].join(" ");
        assert_eq!(estimate_minutes(&script), 2);
    }

    #[test]
    fn short_scripts_floor_at_one_minute() {
        assert_eq!(estimate_minutes("كلمة"), 1);
        let script = vec!["كلمة"; 149].join(" ");
        assert_eq!(estimate_minutes(&script), 1);
    }

    #[test]
    fn empty_script_still_reports_a_minute() {
        assert_eq!(estimate_minutes(""), 1);
    }
}
