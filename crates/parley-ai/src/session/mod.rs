//! Conversation controller.
//!
//! A [`Conversation`] owns the history and runs one exchange cycle per
//! session start or user submission: snapshot, build, send, then append
//! the reply or report a diagnostic. Cycles never overlap: direct calls
//! take `&mut self`, and [`ConversationHandle`] feeds a single task
//! through a queue.

mod chat;
mod manager;
mod types;
mod worker;


pub use manager::Conversation;
pub use types::{ChannelSink, ConversationSink, SessionConfig, SessionEvent};
pub use worker::ConversationHandle;
