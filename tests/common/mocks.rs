//! Mock transport fixtures.
//!
//! Re-exports the mock from `skald::adapters::mock` and adds a builder for
//! common response setups.

pub use skald::adapters::mock::{MockHttpClient, MockResponse};
pub use skald::traits::{HttpError, Response};

use bytes::Bytes;
use skald::{ClientConfig, SkaldClient};
use std::sync::Arc;

use super::TEST_API_KEY;

pub const MOCK_BASE_URL: &str = "https://skald.test";

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Configures a JSON response for an API path.
    pub fn with_json_response(self, path: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            &format!("{}{}", MOCK_BASE_URL, path),
            MockResponse::Success(Response::new(status, Bytes::from(json.to_string()))),
        );
        self
    }

    /// Configures an SSE body, delivered in the given chunks, for an API path.
    pub fn with_stream_response(self, path: &str, chunks: &[&str]) -> Self {
        self.client.set_response(
            &format!("{}{}", MOCK_BASE_URL, path),
            MockResponse::Stream(chunks.iter().map(|c| Bytes::from(c.to_string())).collect()),
        );
        self
    }

    /// Configures an SSE body whose transport fails after the given chunks.
    pub fn with_stream_then_error(self, path: &str, chunks: &[&str], error: HttpError) -> Self {
        self.client.set_response(
            &format!("{}{}", MOCK_BASE_URL, path),
            MockResponse::StreamThenError(
                chunks.iter().map(|c| Bytes::from(c.to_string())).collect(),
                error,
            ),
        );
        self
    }

    /// Configures a transport failure for unmatched URLs.
    pub fn with_default_error(self, error: HttpError) -> Self {
        self.client.set_default_response(MockResponse::Error(error));
        self
    }

    /// Builds a client over the configured mock. The mock handle stays
    /// usable for inspecting recorded requests.
    pub fn build(self) -> (SkaldClient, MockHttpClient) {
        let client = SkaldClient::with_http_client(
            ClientConfig::new(TEST_API_KEY).with_base_url(MOCK_BASE_URL),
            Arc::new(self.client.clone()),
        );
        (client, self.client)
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
