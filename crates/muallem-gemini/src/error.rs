use http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("upstream request failed: {0}")]
    Network(#[from] wreq::Error),

    #[error("upstream returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("upstream returned no candidate text")]
    EmptyResponse,

    #[error("api key is not a valid header value")]
    InvalidApiKey,
}

impl GenerateError {
    /// Upstream error text as reported by the generation service, when there
    /// is one worth surfacing to the caller.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            GenerateError::Upstream { message, .. } if !message.trim().is_empty() => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}
