//! Conversation engine for Parley.
//!
//! Keeps a linear chat history, sends the whole history to the Gemini
//! `generateContent` endpoint on every turn, and folds the first candidate
//! of each reply back into the history.
//!
//! - [`message`]: the turn value types
//! - [`history`]: append-only conversation log
//! - [`request`] / [`response`]: wire payloads
//! - [`transport`]: the HTTP exchange
//! - [`session`]: the controller tying it together

pub mod history;
pub mod message;
pub mod request;
pub mod response;
pub mod secret;
pub mod session;
pub mod transport;

pub use history::History;
pub use message::{Message, Part, MODEL_ROLE, USER_ROLE};
pub use request::RequestPayload;
pub use secret::{EnvSecret, SecretProvider, StaticSecret};
pub use session::{
    ChannelSink, Conversation, ConversationHandle, ConversationSink, SessionConfig, SessionEvent,
};
pub use transport::{ClientConfig, Endpoint, HttpTransport, Transport};

/// Failure to complete the HTTP round trip.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("API credential is not available")]
    MissingCredential,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("Rate limited")]
    RateLimited,
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("HTTP client error: {0}")]
    Client(String),
}

/// A reply arrived but did not carry a usable assistant turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed response body: {0}")]
    MalformedBody(String),
    #[error("response contained no candidates")]
    EmptyCandidates,
}

/// Outcome of a rejected submission or a failed exchange cycle.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("input is empty")]
    EmptyInput,
    #[error("conversation already started")]
    AlreadyStarted,
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("conversation is closed")]
    Closed,
}

impl ExchangeError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_parse_errors_are_distinguishable() {
        let err: ExchangeError = TransportError::Timeout.into();
        assert!(err.is_transport());
        assert!(!err.is_parse());

        let err: ExchangeError = ParseError::EmptyCandidates.into();
        assert!(err.is_parse());
        assert!(!err.is_transport());
    }

    #[test]
    fn error_display() {
        let err = TransportError::Status {
            status: 503,
            body: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "HTTP 503: unavailable");

        let err = ExchangeError::Parse(ParseError::MalformedBody("missing candidates".into()));
        assert_eq!(
            err.to_string(),
            "parse error: malformed response body: missing candidates"
        );
    }
}
