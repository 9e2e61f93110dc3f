//! Background task driving a conversation from a submission queue.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::transport::Transport;
use crate::{ExchangeError, Message};

use super::manager::Conversation;

enum Command {
    Start,
    Submit(String),
    Snapshot(oneshot::Sender<Vec<Message>>),
}

/// Handle to a conversation running on its own task.
///
/// Commands are processed strictly in the order they were sent, one
/// exchange at a time, so replies are appended in submission order.
/// Dropping the handle closes the queue; already queued submissions still
/// run to completion.
pub struct ConversationHandle<T: Transport> {
    tx: mpsc::UnboundedSender<Command>,
    cancel: CancellationToken,
    started: AtomicBool,
    task: JoinHandle<Conversation<T>>,
}

impl<T: Transport + 'static> Conversation<T> {
    /// Move the conversation onto a tokio task.
    pub fn spawn(self) -> ConversationHandle<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let started = AtomicBool::new(self.started);
        let task = tokio::spawn(run(self, rx, cancel.clone()));
        ConversationHandle {
            tx,
            cancel,
            started,
            task,
        }
    }
}

impl<T: Transport> ConversationHandle<T> {
    /// Queue the session-start exchange (seed message). Only the first
    /// call is queued.
    pub fn start(&self) -> Result<(), ExchangeError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(ExchangeError::AlreadyStarted);
        }
        self.send(Command::Start)
    }

    /// Queue a user submission. Blank input is rejected here and never
    /// reaches the conversation.
    pub fn submit(&self, text: &str) -> Result<(), ExchangeError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ExchangeError::EmptyInput);
        }
        self.send(Command::Submit(text.to_string()))
    }

    /// Copy of the history once every previously queued command is done.
    pub async fn history(&self) -> Result<Vec<Message>, ExchangeError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Snapshot(reply_tx))?;
        reply_rx.await.map_err(|_| ExchangeError::Closed)
    }

    /// Close the queue, wait for queued work, and take the conversation back.
    pub async fn finish(self) -> Result<Conversation<T>, ExchangeError> {
        let Self { tx, task, .. } = self;
        drop(tx);
        task.await.map_err(|e| {
            warn!("conversation task failed: {e}");
            ExchangeError::Closed
        })
    }

    /// Tear the conversation down. An in-flight exchange is abandoned and
    /// its reply, if any, is discarded without touching the history.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(e) = self.task.await {
            warn!("conversation task failed: {e}");
        }
    }

    fn send(&self, command: Command) -> Result<(), ExchangeError> {
        if self.cancel.is_cancelled() {
            return Err(ExchangeError::Closed);
        }
        self.tx.send(command).map_err(|_| ExchangeError::Closed)
    }
}

async fn run<T: Transport>(
    mut conversation: Conversation<T>,
    mut rx: mpsc::UnboundedReceiver<Command>,
    cancel: CancellationToken,
) -> Conversation<T> {
    loop {
        let command = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            command = rx.recv() => match command {
                Some(command) => command,
                None => break,
            },
        };

        // Outcomes reach the UI through the sink; errors need no handling here.
        let cancelled = match command {
            Command::Start => tokio::select! {
                biased;
                _ = cancel.cancelled() => true,
                _ = conversation.start() => false,
            },
            Command::Submit(text) => tokio::select! {
                biased;
                _ = cancel.cancelled() => true,
                _ = conversation.submit(&text) => false,
            },
            Command::Snapshot(reply) => {
                let _ = reply.send(conversation.history().snapshot().to_vec());
                false
            }
        };
        if cancelled {
            debug!(session = %conversation.id(), "in-flight exchange abandoned");
            break;
        }
    }
    debug!(session = %conversation.id(), "conversation task stopped");
    conversation
}
