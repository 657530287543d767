use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use muallem_gemini::Generator;

use crate::handler;

pub struct CoreState {
    pub generator: Arc<dyn Generator>,
}

pub struct Core {
    state: Arc<CoreState>,
}

impl Core {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self {
            state: Arc::new(CoreState { generator }),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(handler::meta::home))
            .route("/api/health", get(handler::meta::health))
            .route("/api/chat", post(handler::chat::chat))
            .route("/api/studio/audio", post(handler::studio::audio))
            .route("/api/studio/flashcards", post(handler::studio::flashcards))
            .route("/api/studio/quiz", post(handler::studio::quiz))
            .route("/api/studio/mindmap", post(handler::studio::mindmap))
            .route("/api/studio/report", post(handler::studio::report))
            .route("/api/studio/slides", post(handler::studio::slides))
            .route("/api/studio/infographic", post(handler::studio::infographic))
            .route("/api/studio/video", post(handler::studio::video))
            .route("/api/process/pdf", post(handler::process::pdf))
            .route("/api/process/image", post(handler::process::image))
            .route("/api/process/audio", post(handler::process::audio))
            .fallback(handler::meta::not_found)
            .with_state(self.state.clone())
    }

    pub fn state(&self) -> Arc<CoreState> {
        self.state.clone()
    }
}
