//! HTTP transport for the Gemini `generateContent` endpoint.
//!
//! [`Transport`] is the seam the conversation controller talks to; the
//! production implementation is [`HttpTransport`].

mod config;
mod http;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{RequestPayload, TransportError};

pub use config::{ClientConfig, Endpoint, DEFAULT_MODEL, GEMINI_API_BASE};
pub use http::HttpTransport;

/// One network exchange: submit a payload, await the raw reply body.
///
/// Implementations never retry; a failure is returned to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, payload: &RequestPayload<'_>) -> Result<String, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, payload: &RequestPayload<'_>) -> Result<String, TransportError> {
        (**self).send(payload).await
    }
}
