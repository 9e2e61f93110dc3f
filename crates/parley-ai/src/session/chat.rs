//! Session start, user submission, and the exchange cycle.

use parley_common::{Diagnostic, ExchangeId};
use tracing::{debug, info, info_span, Instrument};

use crate::transport::Transport;
use crate::{request, response, ExchangeError, Message, USER_ROLE};

use super::manager::Conversation;

impl<T: Transport> Conversation<T> {
    /// Append the seed message and run the first exchange.
    ///
    /// The seed is sent but not echoed to the sink. A session starts once;
    /// later calls are rejected with no state change and no request, even
    /// when the first seed exchange failed.
    pub async fn start(&mut self) -> Result<Message, ExchangeError> {
        if self.started {
            debug!(session = %self.id, "conversation already started");
            return Err(ExchangeError::AlreadyStarted);
        }
        self.started = true;
        info!(session = %self.id, "starting conversation");
        let seed = Message::user(self.config.seed_message.clone());
        self.append(seed);
        self.exchange().await
    }

    /// Append a user turn and run one exchange.
    ///
    /// Input is trimmed first; blank input is rejected with no state change
    /// and no request.
    pub async fn submit(&mut self, text: &str) -> Result<Message, ExchangeError> {
        let text = text.trim();
        if text.is_empty() {
            debug!(session = %self.id, "ignoring empty submission");
            return Err(ExchangeError::EmptyInput);
        }

        self.append(Message::user(text));
        self.sink.on_message(USER_ROLE, text);
        self.exchange().await
    }

    /// Snapshot, build, send, then apply the reply or report the failure.
    ///
    /// Failures leave the history untouched and emit exactly one diagnostic.
    async fn exchange(&mut self) -> Result<Message, ExchangeError> {
        let span = info_span!("exchange", session = %self.id, exchange = %ExchangeId::new());

        async {
            let sent = {
                let payload = request::build(self.history.snapshot());
                debug!(messages = payload.contents().len(), "sending history");
                self.transport.send(&payload).await
            };

            let raw = match sent {
                Ok(raw) => raw,
                Err(e) => {
                    self.report(Diagnostic::transport(format!("API request failed: {e}")));
                    return Err(ExchangeError::from(e));
                }
            };

            let reply = match response::parse(&raw) {
                Ok(reply) => reply,
                Err(e) => {
                    self.report(Diagnostic::parse(format!("unexpected reply format: {e}")));
                    return Err(ExchangeError::from(e));
                }
            };

            info!(role = reply.role(), chars = reply.text().len(), "reply received");
            self.append(reply.clone());
            self.sink.on_message(reply.role(), reply.text());
            Ok(reply)
        }
        .instrument(span)
        .await
    }
}
