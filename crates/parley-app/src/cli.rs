use std::path::PathBuf;

use clap::Parser;

/// Parley: a terminal chat client for the Gemini API.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, parley_ai=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model name override.
    #[arg(short, long, value_parser = non_blank)]
    pub model: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

fn non_blank(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err("must not be empty".into())
    } else {
        Ok(value.to_string())
    }
}
