use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::warn;

use muallem_gemini::GenerateError;

/// Caller-facing failures. Every variant renders as `{"error": <message>}`
/// with a localized message; upstream failures may add a `suggestion` field.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("مفتاح API مطلوب")]
    MissingApiKey,

    #[error("{0}")]
    MissingInput(&'static str),

    #[error("{0}")]
    InvalidBody(String),

    #[error("{message}")]
    Upstream {
        message: String,
        suggestion: Option<&'static str>,
    },

    #[error("المسار غير موجود")]
    NotFound,
}

impl ApiError {
    /// Map a generation failure to a 500, surfacing the upstream error text
    /// when there is one and falling back to the endpoint's generic message.
    pub fn upstream(err: GenerateError, fallback: &'static str) -> Self {
        warn!(event = "generation_failed", error = %err);
        let message = match err.upstream_message() {
            Some(message) => message.to_string(),
            None => err.to_string(),
        };
        let message = if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        };
        ApiError::Upstream {
            message,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, hint: &'static str) -> Self {
        if let ApiError::Upstream { suggestion, .. } = &mut self {
            *suggestion = Some(hint);
        }
        self
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingApiKey | ApiError::MissingInput(_) | ApiError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = json!({ "error": self.to_string() });
        if let ApiError::Upstream {
            suggestion: Some(suggestion),
            ..
        } = &self
        {
            body["suggestion"] = json!(suggestion);
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_text_is_surfaced() {
        let err = ApiError::upstream(
            GenerateError::Upstream {
                status: StatusCode::FORBIDDEN,
                message: "quota exceeded".to_string(),
            },
            "خطأ في المحادثة",
        );
        match err {
            ApiError::Upstream { message, .. } => assert_eq!(message, "quota exceeded"),
            other => panic!("expected upstream variant, got {other:?}"),
        }
    }

    #[test]
    fn blank_upstream_body_still_reports_the_failure() {
        let err = ApiError::upstream(
            GenerateError::Upstream {
                status: StatusCode::BAD_GATEWAY,
                message: "  ".to_string(),
            },
            "خطأ في إنشاء الاختبار",
        );
        match err {
            ApiError::Upstream { message, .. } => assert!(message.contains("502")),
            other => panic!("expected upstream variant, got {other:?}"),
        }
    }

    #[test]
    fn suggestion_attaches_only_to_upstream_errors() {
        let err = ApiError::upstream(GenerateError::EmptyResponse, "خطأ في المحادثة")
            .with_suggestion("تأكد من صحة مفتاح API وحاول مرة أخرى");
        match err {
            ApiError::Upstream { suggestion, .. } => assert!(suggestion.is_some()),
            other => panic!("expected upstream variant, got {other:?}"),
        }
    }
}
