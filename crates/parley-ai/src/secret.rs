//! Credential providers.
//!
//! The API key is injected into the transport through [`SecretProvider`]
//! and read on every call; it is never stored in config files or logged.

use std::fmt;

/// Default environment variable holding the Gemini API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Source of the one read-only API credential.
pub trait SecretProvider: Send + Sync {
    /// Current credential, or `None` if it is not configured.
    fn secret(&self) -> Option<String>;
}

/// Reads the credential from an environment variable at call time.
#[derive(Debug, Clone)]
pub struct EnvSecret {
    var: String,
}

impl EnvSecret {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvSecret {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_ENV)
    }
}

impl SecretProvider for EnvSecret {
    fn secret(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}

/// A fixed credential.
#[derive(Clone)]
pub struct StaticSecret(String);

impl StaticSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Debug for StaticSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticSecret").field(&"[REDACTED]").finish()
    }
}

impl SecretProvider for StaticSecret {
    fn secret(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Replace the value of any `key` query parameter with `[REDACTED]`.
pub fn redact_url(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let query: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some(("key", _)) => "key=[REDACTED]".to_string(),
            _ => pair.to_string(),
        })
        .collect();
    format!("{base}?{}", query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_secret_reads_variable_at_call_time() {
        let provider = EnvSecret::new("PARLEY_TEST_SECRET_CALL_TIME");
        std::env::remove_var("PARLEY_TEST_SECRET_CALL_TIME");
        assert_eq!(provider.secret(), None);

        std::env::set_var("PARLEY_TEST_SECRET_CALL_TIME", "abc123");
        assert_eq!(provider.secret().as_deref(), Some("abc123"));
        std::env::remove_var("PARLEY_TEST_SECRET_CALL_TIME");
    }

    #[test]
    fn env_secret_treats_blank_as_missing() {
        std::env::set_var("PARLEY_TEST_SECRET_BLANK", "  ");
        assert_eq!(EnvSecret::new("PARLEY_TEST_SECRET_BLANK").secret(), None);
        std::env::remove_var("PARLEY_TEST_SECRET_BLANK");
    }

    #[test]
    fn default_env_secret_uses_gemini_key() {
        assert_eq!(EnvSecret::default().var(), "GEMINI_API_KEY");
    }

    #[test]
    fn static_secret_debug_is_redacted() {
        let secret = StaticSecret::new("super-secret");
        assert_eq!(secret.secret().as_deref(), Some("super-secret"));
        let debug = format!("{secret:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn redact_url_hides_key_only() {
        assert_eq!(
            redact_url("https://host/m:generateContent?key=abc&alt=json"),
            "https://host/m:generateContent?key=[REDACTED]&alt=json"
        );
        assert_eq!(redact_url("https://host/path"), "https://host/path");
    }
}
