//! HTTP transport tests against a local mock server.

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::secret::SecretProvider;
use crate::{request, History, Message, StaticSecret};

const REPLY: &str = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hi there!"}]}}]}"#;

struct NoSecret;

impl SecretProvider for NoSecret {
    fn secret(&self) -> Option<String> {
        None
    }
}

fn transport_for(server: &MockServer, secrets: Arc<dyn SecretProvider>) -> HttpTransport {
    let endpoint = Endpoint::new(format!("{}/v1beta/models", server.uri()), "gemini-1.5-flash");
    HttpTransport::new(ClientConfig::new(endpoint), secrets).unwrap()
}

fn sample_history() -> History {
    let mut history = History::new();
    history.append(Message::user("Hello"));
    history.append(Message::new("model", "Hi there!"));
    history.append(Message::user("How are you?"));
    history
}

#[tokio::test]
async fn posts_full_history_with_key_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "contents": [
                {"role": "user", "parts": [{"text": "Hello"}]},
                {"role": "model", "parts": [{"text": "Hi there!"}]},
                {"role": "user", "parts": [{"text": "How are you?"}]}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(REPLY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server, Arc::new(StaticSecret::new("test-key")));
    let history = sample_history();
    let body = transport
        .send(&request::build(history.snapshot()))
        .await
        .expect("send");
    assert_eq!(body, REPLY);
}

#[tokio::test]
async fn returns_body_unparsed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let transport = transport_for(&server, Arc::new(StaticSecret::new("k")));
    let body = transport.send(&request::build(&[])).await.unwrap();
    assert_eq!(body, "not json at all");
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let transport = transport_for(&server, Arc::new(StaticSecret::new("k")));
    let err = transport.send(&request::build(&[])).await.unwrap_err();
    match err {
        TransportError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let transport = transport_for(&server, Arc::new(StaticSecret::new("k")));
    let err = transport.send(&request::build(&[])).await.unwrap_err();
    assert!(matches!(err, TransportError::RateLimited));
}

#[tokio::test]
async fn missing_credential_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REPLY))
        .expect(0)
        .mount(&server)
        .await;

    let transport = transport_for(&server, Arc::new(NoSecret));
    let err = transport.send(&request::build(&[])).await.unwrap_err();
    assert!(matches!(err, TransportError::MissingCredential));
}

#[tokio::test]
async fn slow_reply_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(REPLY)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let endpoint = Endpoint::new(format!("{}/v1beta/models", server.uri()), "gemini-1.5-flash");
    let config = ClientConfig::new(endpoint).with_timeout(Duration::from_millis(200));
    let transport = HttpTransport::new(config, Arc::new(StaticSecret::new("k"))).unwrap();

    let err = transport.send(&request::build(&[])).await.unwrap_err();
    assert!(matches!(err, TransportError::Timeout));
}

#[tokio::test]
async fn connection_failure_does_not_leak_key() {
    let endpoint = Endpoint::new("http://127.0.0.1:1/v1beta/models", "gemini-1.5-flash");
    let config = ClientConfig::new(endpoint).with_connect_timeout(Duration::from_secs(2));
    let transport =
        HttpTransport::new(config, Arc::new(StaticSecret::new("leaky-secret-key"))).unwrap();

    let err = transport.send(&request::build(&[])).await.unwrap_err();
    assert!(matches!(
        err,
        TransportError::Network(_) | TransportError::Timeout
    ));
    assert!(!err.to_string().contains("leaky-secret-key"));
}

#[test]
fn endpoint_url_appends_model_and_method() {
    let endpoint = Endpoint::default();
    assert_eq!(
        endpoint.url(),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
    );
    assert_eq!(
        Endpoint::new("http://localhost/", "m").url(),
        "http://localhost/m:generateContent"
    );
}
