use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use muallem_protocol::gemini::generate_content::{Content, GenerateContentRequestBody, Part};

use crate::auth::ApiKey;
use crate::core::CoreState;
use crate::error::ApiError;
use crate::handler::timestamp;
use crate::prompt;
use crate::request::{ApiJson, ChatRequest};

const MESSAGE_REQUIRED: &str = "الرسالة مطلوبة";
const CHAT_FAILED: &str = "خطأ في المحادثة";
const CHAT_SUGGESTION: &str = "تأكد من صحة مفتاح API وحاول مرة أخرى";

/// Replayed turns are capped to keep prompts bounded; older history is
/// dropped silently.
pub const HISTORY_LIMIT: usize = 10;

pub async fn chat(
    State(state): State<Arc<CoreState>>,
    ApiKey(api_key): ApiKey,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::MissingInput(MESSAGE_REQUIRED));
    }

    let skip = request.history.len().saturating_sub(HISTORY_LIMIT);
    let mut contents = Vec::with_capacity(request.history.len() - skip + 1);
    for turn in &request.history[skip..] {
        contents.push(Content {
            role: Some(turn.role.as_content_role()),
            parts: vec![Part::text(turn.content.clone())],
        });
    }
    contents.push(Content::user(vec![Part::text(prompt::chat(
        &request.context,
        &request.message,
    ))]));

    let body = GenerateContentRequestBody {
        contents,
        ..Default::default()
    };
    let reply = state
        .generator
        .generate(&api_key, body)
        .await
        .map_err(|err| ApiError::upstream(err, CHAT_FAILED).with_suggestion(CHAT_SUGGESTION))?;

    Ok(Json(json!({
        "success": true,
        "response": reply,
        "timestamp": timestamp(),
    })))
}
