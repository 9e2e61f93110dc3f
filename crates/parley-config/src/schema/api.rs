use serde::{Deserialize, Serialize};

/// Remote generative-text API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Model collection URL; the model name and method are appended to it.
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the API key. The key itself never
    /// lives in the config file.
    pub api_key_env: String,
    /// Total request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
    /// Connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            model: "gemini-1.5-flash".into(),
            api_key_env: "GEMINI_API_KEY".into(),
            timeout_secs: 120,
            connect_timeout_secs: 10,
        }
    }
}
