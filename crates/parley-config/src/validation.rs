//! Full configuration validation.
//!
//! Collects every violation into a single `ConfigError`.

use parley_common::ConfigError;

use crate::schema::ParleyConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ParleyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let api = &config.api;
    if !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://")) {
        errors.push(format!(
            "api.base_url = {:?} must start with http:// or https://",
            api.base_url
        ));
    }
    validate_not_blank(&mut errors, "api.model", &api.model);
    validate_not_blank(&mut errors, "api.api_key_env", &api.api_key_env);
    validate_range(&mut errors, "api.timeout_secs", api.timeout_secs, 1, 600);
    validate_range(
        &mut errors,
        "api.connect_timeout_secs",
        api.connect_timeout_secs,
        1,
        120,
    );

    validate_not_blank(&mut errors, "session.seed_message", &config.session.seed_message);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_not_blank(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&ParleyConfig::default()).is_ok());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = ParleyConfig::default();
        config.api.base_url = "ftp://example.com".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("api.base_url"));
    }

    #[test]
    fn rejects_blank_seed_message() {
        let mut config = ParleyConfig::default();
        config.session.seed_message = "   ".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("session.seed_message must not be empty"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = ParleyConfig::default();
        config.api.model = String::new();
        config.api.timeout_secs = 0;
        config.api.connect_timeout_secs = 500;

        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(msg.contains("api.model must not be empty"));
        assert!(msg.contains("api.timeout_secs = 0 is out of range [1, 600]"));
        assert!(msg.contains("api.connect_timeout_secs = 500 is out of range [1, 120]"));
    }
}
