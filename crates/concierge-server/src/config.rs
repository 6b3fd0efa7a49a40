//! Server Configuration
//!
//! All runtime settings in one struct, read from the environment once at
//! startup and passed by reference. Nothing else reads env vars.

use anyhow::{Context, Result};

/// Runtime configuration for the concierge server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the webhook listener binds to.
    pub port: u16,
    /// Static token checked during the subscription handshake.
    pub verify_token: String,
    /// WhatsApp Cloud API bearer token.
    pub whatsapp_api_key: String,
    /// Sender phone-number id on the Graph API.
    pub whatsapp_phone_number_id: String,
    /// App secret for X-Hub-Signature-256 verification; unset disables it.
    pub app_secret: Option<String>,
    /// API key for the chat-completion provider.
    pub openai_api_key: String,
    /// OpenAI-compatible base URL (point at a local server if desired).
    pub openai_base_url: String,
    /// Chat model used for acknowledgments.
    pub chat_model: String,
    /// Whisper model used for voice transcription.
    pub whisper_model: String,
    /// Gemini API key for the search-augmented agent.
    pub gemini_api_key: String,
    /// Gemini model name.
    pub gemini_model: String,
    /// Cap on grounded search results surfaced to the agent.
    pub search_max_results: usize,
    /// Bound on each per-guest work queue.
    pub queue_capacity: usize,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: env_or("PORT", "8080")
                .parse()
                .context("PORT must be a number")?,
            verify_token: required("VERIFICATION_TOKEN")?,
            whatsapp_api_key: required("WHATSAPP_API_KEY")?,
            whatsapp_phone_number_id: required("WHATSAPP_PHONE_NUMBER_ID")?,
            app_secret: std::env::var("WHATSAPP_APP_SECRET").ok(),
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            chat_model: env_or("CHAT_MODEL", "gpt-4o-mini"),
            whisper_model: env_or("WHISPER_MODEL", "whisper-1"),
            gemini_api_key: required("GEMINI_API_KEY")?,
            gemini_model: env_or("GEMINI_MODEL", "gemini-2.0-flash"),
            search_max_results: env_or("SEARCH_MAX_RESULTS", "2")
                .parse()
                .context("SEARCH_MAX_RESULTS must be a number")?,
            queue_capacity: env_or("QUEUE_CAPACITY", "32")
                .parse()
                .context("QUEUE_CAPACITY must be a number")?,
        })
    }
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("{key} must be set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
