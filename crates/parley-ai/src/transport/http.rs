//! reqwest-backed transport.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::secret::{redact_url, SecretProvider};
use crate::{RequestPayload, TransportError};

use super::{ClientConfig, Transport};

/// Sends payloads to the configured endpoint with the credential appended
/// as the `key` query parameter.
pub struct HttpTransport {
    config: ClientConfig,
    secrets: Arc<dyn SecretProvider>,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(
        config: ClientConfig,
        secrets: Arc<dyn SecretProvider>,
    ) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(Self {
            config,
            secrets,
            http,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, payload: &RequestPayload<'_>) -> Result<String, TransportError> {
        let key = self
            .secrets
            .secret()
            .ok_or(TransportError::MissingCredential)?;

        let body = payload
            .to_json_bytes()
            .map_err(|e| TransportError::Client(format!("failed to encode request: {e}")))?;
        debug!(body = %String::from_utf8_lossy(&body), "Gemini request payload");

        let request = self
            .http
            .post(self.config.endpoint.url())
            .query(&[("key", key.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()
            .map_err(classify)?;

        debug!(
            url = %redact_url(request.url().as_str()),
            messages = payload.contents().len(),
            "Gemini API request"
        );

        let response = self.http.execute(request).await.map_err(classify)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TransportError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let text = response.text().await.map_err(classify)?;
        debug!(body = %text, "Gemini API reply");
        Ok(text)
    }
}

/// reqwest errors carry the request URL, which includes the key.
fn classify(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(e.without_url().to_string())
    }
}
