/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r##"# Parley Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# model = "gemini-1.5-flash"
# api_key_env = "GEMINI_API_KEY"   # the key itself is read from this variable
# timeout_secs = 120               # 1-600
# connect_timeout_secs = 10        # 1-120

[session]
# seed_message = "Hello, Gemini 1.5 Flash API!"
# history_warn_threshold = 200     # 0 disables

[logging]
# level = "info"                   # trace, debug, info, warn, error
"##
}
