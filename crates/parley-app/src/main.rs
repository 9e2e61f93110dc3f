mod cli;
mod console;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use parley_config::schema::LogLevel;
use parley_config::ParleyConfig;
use tracing_subscriber::EnvFilter;

/// `.env` in the working directory first, then the one next to the config.
fn dotenv_candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".env")];
    paths.extend(dirs::config_dir().map(|dir| dir.join("parley").join(".env")));
    paths
}

/// Split a `KEY=VALUE` line, allowing an `export ` prefix and quoted values.
/// Blank lines and `#` comments yield `None`.
fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let value = value.trim();
    let value = ['"', '\'']
        .iter()
        .find_map(|q| value.strip_prefix(*q)?.strip_suffix(*q))
        .unwrap_or(value);
    Some((key, value))
}

/// Apply the first readable `.env` file. Variables already in the
/// environment are left alone.
fn load_dotenv() {
    let Some(contents) = dotenv_candidates()
        .iter()
        .find_map(|path| std::fs::read_to_string(path).ok())
    else {
        return;
    };
    for (key, value) in contents.lines().filter_map(parse_env_line) {
        if std::env::var_os(key).is_none() {
            std::env::set_var(key, value);
        }
    }
}

/// Apply CLI overrides on top of the loaded config and validate the result.
fn effective_config(
    mut config: ParleyConfig,
    model: Option<String>,
) -> parley_common::Result<ParleyConfig> {
    if let Some(model) = model {
        config.api.model = model;
    }
    parley_config::validation::validate(&config)?;
    Ok(config)
}

/// Initialize logging to stderr. Precedence: `--log-level`, then
/// `RUST_LOG`, then the configured level.
fn init_logging(cli_directive: Option<&str>, configured: LogLevel) {
    let fallback = || EnvFilter::new(configured.directive());
    let filter = match cli_directive {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|_| fallback()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();

    let args = cli::parse();

    // Config is read before logging starts so its level can seed the filter.
    let loaded = parley_config::load_config(args.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    init_logging(args.log_level.as_deref(), level);

    tracing::info!("Parley v{} starting...", env!("CARGO_PKG_VERSION"));

    let loaded = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ParleyConfig::default()
    });
    let config = match effective_config(loaded, args.model) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.print_config {
        println!("{}", parley_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    match repl::run(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
