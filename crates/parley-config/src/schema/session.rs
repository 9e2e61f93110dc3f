use serde::{Deserialize, Serialize};

/// Conversation session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// First user turn sent automatically when the session starts.
    pub seed_message: String,
    /// Log a warning once the history reaches this many messages.
    /// History is never truncated. 0 disables the warning.
    pub history_warn_threshold: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed_message: "Hello, Gemini 1.5 Flash API!".into(),
            history_warn_threshold: 200,
        }
    }
}
