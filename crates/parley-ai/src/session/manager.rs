//! Conversation struct and history bookkeeping.

use parley_common::{Diagnostic, DiagnosticLevel, SessionId};
use tracing::{error, warn};

use crate::transport::Transport;
use crate::{History, Message};

use super::types::{ConversationSink, SessionConfig};

/// A single conversation session. Owns its history exclusively.
pub struct Conversation<T: Transport> {
    pub(super) id: SessionId,
    pub(super) history: History,
    pub(super) transport: T,
    pub(super) sink: Box<dyn ConversationSink>,
    pub(super) config: SessionConfig,
    /// The seed exchange has been queued into history.
    pub(super) started: bool,
    /// Set once the history-size warning has been logged.
    pub(super) size_warned: bool,
}

impl<T: Transport> Conversation<T> {
    pub fn new(transport: T, sink: Box<dyn ConversationSink>) -> Self {
        Self {
            id: SessionId::new(),
            history: History::new(),
            transport,
            sink,
            config: SessionConfig::default(),
            started: false,
            size_warned: false,
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Get the full conversation history.
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of messages in history.
    pub fn message_count(&self) -> usize {
        self.history.len()
    }

    pub(super) fn append(&mut self, message: Message) {
        self.history.append(message);

        let threshold = self.config.history_warn_threshold;
        if threshold > 0 && !self.size_warned && self.history.len() >= threshold {
            self.size_warned = true;
            warn!(
                session = %self.id,
                messages = self.history.len(),
                "conversation history reached the warning threshold; every request resends it in full"
            );
        }
    }

    pub(super) fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level {
            DiagnosticLevel::Error => error!(kind = ?diagnostic.kind, "{}", diagnostic.detail),
            DiagnosticLevel::Warning => warn!(kind = ?diagnostic.kind, "{}", diagnostic.detail),
        }
        self.sink.on_diagnostic(&diagnostic);
    }
}
