//! Application configuration. Chat endpoint credentials, UX timing.

use serde::Deserialize;

/// Pause shown behind the analysis spinner before results appear, in milliseconds.
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 1500;

/// TCP/TLS connect timeout for the chat endpoint, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Chat API key. Read from MEDIHELP_CHAT_API_KEY.
    #[serde(default)]
    pub chat_api_key: Option<String>,

    /// Chat API URL. Defaults to OpenAI. Read from MEDIHELP_CHAT_API_URL.
    #[serde(default)]
    pub chat_api_url: Option<String>,

    /// Chat model name. Defaults to "gpt-4o-mini". Read from MEDIHELP_CHAT_MODEL.
    #[serde(default)]
    pub chat_model: Option<String>,

    /// Analysis spinner pause in ms (default 1500). Read from MEDIHELP_ANALYSIS_DELAY_MS.
    #[serde(default)]
    pub analysis_delay_ms: Option<u64>,

    /// Connect timeout for the chat request in seconds (default 30).
    /// Read from MEDIHELP_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("MEDIHELP"));
        if let Ok(path) = std::env::var("MEDIHELP_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let cfg: Self = c.build()?.try_deserialize()?;
        Ok(cfg)
    }

    /// Returns the chat API key if configured. Reads from config or MEDIHELP_CHAT_API_KEY env.
    pub fn chat_api_key(&self) -> Option<String> {
        self.chat_api_key
            .clone()
            .or_else(|| std::env::var("MEDIHELP_CHAT_API_KEY").ok())
    }

    /// Returns the chat API URL. Defaults to the OpenAI chat completions endpoint.
    pub fn chat_api_url_or_default(&self) -> String {
        self.chat_api_url
            .clone()
            .or_else(|| std::env::var("MEDIHELP_CHAT_API_URL").ok())
            .unwrap_or_else(|| "https://api.openai.com/v1/chat/completions".to_string())
    }

    /// Returns the chat model name. Defaults to "gpt-4o-mini".
    pub fn chat_model_or_default(&self) -> String {
        self.chat_model
            .clone()
            .or_else(|| std::env::var("MEDIHELP_CHAT_MODEL").ok())
            .unwrap_or_else(|| "gpt-4o-mini".to_string())
    }

    /// Returns the analysis spinner pause in milliseconds. Defaults to 1500 if unset.
    pub fn analysis_delay_ms_or_default(&self) -> u64 {
        self.analysis_delay_ms.unwrap_or(DEFAULT_ANALYSIS_DELAY_MS)
    }

    /// Returns the connect timeout in seconds. Defaults to 30 if unset.
    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    /// Returns true if the live chat endpoint is configured (API key present).
    pub fn is_chat_configured(&self) -> bool {
        self.chat_api_key().is_some()
    }
}
