//! Interactive loop: stdin lines in, conversation events out.

use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

use parley_ai::{
    ClientConfig, Conversation, Endpoint, EnvSecret, ExchangeError, HttpTransport,
    SecretProvider, SessionConfig,
};
use parley_common::ParleyError;
use parley_config::ParleyConfig;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::console::{transcript_line, ConsoleSink};

/// One line of user input, classified.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    History,
    Text(&'a str),
}

fn classify(line: &str) -> Input<'_> {
    match line.trim() {
        "/quit" | "/exit" => Input::Quit,
        "/history" => Input::History,
        _ => Input::Text(line),
    }
}

/// Read stdin on a dedicated thread so a pending read never holds up the
/// runtime.
fn spawn_line_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn client_config(config: &ParleyConfig) -> ClientConfig {
    let api = &config.api;
    ClientConfig::new(Endpoint::new(&api.base_url, &api.model))
        .with_timeout(Duration::from_secs(api.timeout_secs.into()))
        .with_connect_timeout(Duration::from_secs(api.connect_timeout_secs.into()))
}

fn session_config(config: &ParleyConfig) -> SessionConfig {
    SessionConfig::default()
        .with_seed_message(config.session.seed_message.clone())
        .with_history_warn_threshold(config.session.history_warn_threshold)
}

fn closed(e: ExchangeError) -> ParleyError {
    ParleyError::Ai(e.to_string())
}

/// Run one conversation session until `/quit` or end of input.
pub async fn run(config: ParleyConfig) -> parley_common::Result<()> {
    let secrets = Arc::new(EnvSecret::new(&config.api.api_key_env));
    if secrets.secret().is_none() {
        warn!(
            "{} is not set; requests will fail until it is",
            config.api.api_key_env
        );
    }

    let transport = HttpTransport::new(client_config(&config), secrets)
        .map_err(|e| ParleyError::Ai(e.to_string()))?;
    let handle = Conversation::new(transport, Box::new(ConsoleSink))
        .with_config(session_config(&config))
        .spawn();

    info!(model = %config.api.model, "conversation started");
    handle.start().map_err(closed)?;

    let mut lines = spawn_line_reader();
    while let Some(line) = lines.recv().await {
        match classify(&line) {
            Input::Quit => break,
            Input::History => {
                for message in handle.history().await.map_err(closed)? {
                    println!("{}", transcript_line(message.role(), message.text()));
                }
            }
            Input::Text(text) => match handle.submit(text) {
                Ok(()) => {}
                Err(ExchangeError::EmptyInput) => debug!("empty input ignored"),
                Err(e) => return Err(closed(e)),
            },
        }
    }

    // Let queued exchanges finish so piped input gets every reply.
    let conversation = handle.finish().await.map_err(closed)?;
    info!(
        session = %conversation.id(),
        messages = conversation.message_count(),
        "conversation ended"
    );
    Ok(())
}
