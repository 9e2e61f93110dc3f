//! Session configuration and UI sink types.

use parley_common::Diagnostic;
use tokio::sync::mpsc;

/// Receives what the conversation wants shown.
///
/// Messages and diagnostics arrive on separate methods so a front-end can
/// keep the transcript free of error noise.
pub trait ConversationSink: Send {
    fn on_message(&mut self, role: &str, text: &str);

    fn on_diagnostic(&mut self, _diagnostic: &Diagnostic) {}
}

/// Event forwarded by [`ChannelSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Message { role: String, text: String },
    Diagnostic(Diagnostic),
}

/// Sink that forwards every event over an unbounded channel.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ConversationSink for ChannelSink {
    fn on_message(&mut self, role: &str, text: &str) {
        let _ = self.tx.send(SessionEvent::Message {
            role: role.to_string(),
            text: text.to_string(),
        });
    }

    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {
        let _ = self.tx.send(SessionEvent::Diagnostic(diagnostic.clone()));
    }
}

/// Per-session settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// User turn appended and sent when the session starts.
    pub seed_message: String,
    /// History length at which a one-time warning is logged. 0 disables.
    pub history_warn_threshold: usize,
}

impl SessionConfig {
    pub fn with_seed_message(mut self, seed: impl Into<String>) -> Self {
        self.seed_message = seed.into();
        self
    }

    pub fn with_history_warn_threshold(mut self, threshold: usize) -> Self {
        self.history_warn_threshold = threshold;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed_message: "Hello, Gemini 1.5 Flash API!".to_string(),
            history_warn_threshold: 200,
        }
    }
}
