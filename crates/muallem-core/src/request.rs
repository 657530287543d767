use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use muallem_protocol::gemini::generate_content::ContentRole;

use crate::error::ApiError;
use crate::options::GenerationOptions;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub message: String,
    pub context: String,
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

/// Conversation role as the frontend records it. Anything that is not the
/// user speaking is replayed upstream as a model turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TurnRole {
    User,
    #[default]
    Assistant,
}

impl<'de> Deserialize<'de> for TurnRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "user" => TurnRole::User,
            _ => TurnRole::Assistant,
        })
    }
}

impl TurnRole {
    pub fn as_content_role(self) -> ContentRole {
        match self {
            TurnRole::User => ContentRole::User,
            TurnRole::Assistant => ContentRole::Model,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudioRequest {
    pub content: String,
    pub options: GenerationOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessRequest {
    pub content: String,
    pub mime_type: Option<String>,
}

/// `axum::Json` with rejections folded into the `{"error": ...}` envelope.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::InvalidBody(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_turn_roles_map_to_upstream_roles() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{"role": "assistant", "content": "أهلاً"}"#).unwrap();
        assert_eq!(turn.role.as_content_role(), ContentRole::Model);

        let turn: ChatTurn = serde_json::from_str(r#"{"role": "user", "content": "سؤال"}"#).unwrap();
        assert_eq!(turn.role.as_content_role(), ContentRole::User);
    }

    #[test]
    fn unknown_turn_role_replays_as_model() {
        let turn: ChatTurn = serde_json::from_str(r#"{"role": "system", "content": "x"}"#).unwrap();
        assert_eq!(turn.role.as_content_role(), ContentRole::Model);
    }

    #[test]
    fn process_request_reads_camel_case_mime_type() {
        let parsed: ProcessRequest =
            serde_json::from_str(r#"{"content": "aGk=", "mimeType": "image/png"}"#).unwrap();
        assert_eq!(parsed.mime_type.as_deref(), Some("image/png"));
    }
}
