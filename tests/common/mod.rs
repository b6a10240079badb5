//! Common test utilities for integration tests.
//!
//! Fixtures for memo payloads, SSE bodies and client construction against
//! a local mock server.

#![allow(dead_code)]

pub mod mocks;

use serde_json::{json, Value};
use skald::{ClientConfig, SkaldClient};

pub const TEST_API_KEY: &str = "sk_test_12345";

/// Install a test subscriber once. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Client using the real reqwest transport against `base_url`.
pub fn client_for(base_url: &str) -> SkaldClient {
    init_tracing();
    SkaldClient::from_config(ClientConfig::new(TEST_API_KEY).with_base_url(base_url))
        .expect("failed to build client")
}

/// A full memo as returned by `GET /api/v1/memo/{id}`.
pub fn memo_json(uuid: &str) -> Value {
    json!({
        "uuid": uuid,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
        "title": "Meeting Notes",
        "content": "Discussion about Q1 goals...",
        "summary": "Q1 goals",
        "content_length": 28,
        "metadata": {"type": "notes", "author": "John Doe"},
        "client_reference_id": "external-id-123",
        "source": "notion",
        "type": "document",
        "expiration_date": null,
        "archived": false,
        "pending": false,
        "tags": ["meeting"],
        "chunks": []
    })
}

/// Build an SSE body from `data:` payloads, with a heartbeat after the first.
pub fn sse_body(payloads: &[Value]) -> String {
    let mut body = String::new();
    for (i, payload) in payloads.iter().enumerate() {
        body.push_str("data: ");
        body.push_str(&payload.to_string());
        body.push('\n');
        if i == 0 {
            body.push_str(": ping\n");
        }
    }
    body
}

pub fn token(content: &str) -> Value {
    json!({"type": "token", "content": content})
}

pub fn done() -> Value {
    json!({"type": "done"})
}
