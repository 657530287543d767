use clap::Parser;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "muallem", version, about = "Arabic study-aid generation gateway")]
pub struct Cli {
    /// Address to bind.
    #[arg(long, env = "MUALLEM_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "MUALLEM_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Base URL of the generative language service.
    #[arg(long, env = "MUALLEM_BASE_URL", default_value = muallem_gemini::DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Model used for every generation call.
    #[arg(long, env = "MUALLEM_MODEL", default_value = muallem_gemini::DEFAULT_MODEL)]
    pub model: String,

    /// Inbound request timeout in seconds.
    #[arg(long, env = "MUALLEM_TIMEOUT_SECS", default_value_t = 300)]
    pub timeout_secs: u64,

    /// Request body cap in megabytes; base64 uploads are the common case.
    #[arg(long, env = "MUALLEM_BODY_LIMIT_MB", default_value_t = 50)]
    pub body_limit_mb: usize,
}
