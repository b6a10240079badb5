//! Skald API client.
//!
//! One method per remote action: memo CRUD, search, chat and document
//! generation, with token-streamed variants of the last two.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::config::ClientConfig;
use crate::error::{SkaldError, SkaldResult};
use crate::models::{
    ChatRequest, ChatResponse, CreateMemoResponse, GenerateDocRequest, GenerateDocResponse,
    IdType, ListMemosParams, ListMemosResponse, Memo, MemoData, SearchRequest, SearchResponse,
    UpdateMemoData, UpdateMemoResponse, WithStreamFlag,
};
use crate::sse::{decode_event_stream, EventStream};
use crate::traits::{Headers, HttpClient, Response};

const MEMO_PATH: &str = "/api/v1/memo";
const SEARCH_PATH: &str = "/api/v1/search";
const CHAT_PATH: &str = "/api/v1/chat";
const GENERATE_PATH: &str = "/api/v1/generate";

/// Client for the Skald knowledge-management API.
///
/// Holds only immutable configuration and a shared transport handle, so it
/// is cheap to clone and safe to use from concurrent tasks.
///
/// # Example
///
/// ```ignore
/// use futures_util::StreamExt;
/// use skald::{ChatRequest, MemoData, SkaldClient, StreamEvent};
///
/// let client = SkaldClient::new("sk_live_...")?;
/// client
///     .create_memo(MemoData::new("Meeting Notes", "Discussion about Q1 goals..."))
///     .await?;
///
/// let mut events = client.streamed_chat(&ChatRequest::new("What are our goals?")).await?;
/// while let Some(event) = events.next().await {
///     match event? {
///         StreamEvent::Token { content } => print!("{}", content),
///         StreamEvent::Done => println!(),
///     }
/// }
/// ```
#[derive(Clone)]
pub struct SkaldClient {
    config: ClientConfig,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for SkaldClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkaldClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SkaldClient {
    /// Create a client for the production endpoint.
    pub fn new(api_key: impl Into<String>) -> SkaldResult<Self> {
        Self::from_config(ClientConfig::new(api_key))
    }

    /// Create a client for a custom endpoint. Trailing slashes are stripped.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> SkaldResult<Self> {
        Self::from_config(ClientConfig::new(api_key).with_base_url(base_url))
    }

    /// Create a client from `SKALD_API_KEY` / `SKALD_BASE_URL`.
    pub fn from_env() -> SkaldResult<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Create a client using the reqwest transport.
    pub fn from_config(config: ClientConfig) -> SkaldResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.timeout)?;
        Ok(Self::with_http_client(config, Arc::new(http)))
    }

    /// Create a client over any [`HttpClient`], e.g. a mock in tests.
    pub fn with_http_client(config: ClientConfig, http: Arc<dyn HttpClient>) -> Self {
        let config = ClientConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ..config
        };
        Self { config, http }
    }

    /// API root without trailing slashes.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // ─────────────────────────────────────────────────────────────────────
    // Memo CRUD
    // ─────────────────────────────────────────────────────────────────────

    /// Create a memo. The service summarizes, chunks and indexes it.
    ///
    /// `metadata` is sent as `{}` when not supplied.
    pub async fn create_memo(&self, memo: MemoData) -> SkaldResult<CreateMemoResponse> {
        let body = serde_json::to_string(&memo.into_create_body())?;
        let url = self.url(MEMO_PATH);

        tracing::debug!(%url, "POST memo");
        let response = self.http.post(&url, &body, &self.headers()).await?;
        Self::handle_response(response)
    }

    /// Fetch a memo by UUID or reference id.
    ///
    /// # Arguments
    /// * `memo_id` - UUID or reference id; percent-encoded into the path
    /// * `id_type` - `IdType` or its wire name (`"memo_uuid"`, `"reference_id"`)
    pub async fn get_memo(&self, memo_id: &str, id_type: impl AsRef<str>) -> SkaldResult<Memo> {
        let id_type = parse_id_type(id_type)?;
        let url = self.url(&memo_path(memo_id, id_type));

        tracing::debug!(%url, "GET memo");
        let response = self.http.get(&url, &self.headers()).await?;
        Self::handle_response(response)
    }

    /// List memos, one page at a time. Unset pagination fields default to
    /// page 1 with 20 memos per page.
    pub async fn list_memos(&self, params: ListMemosParams) -> SkaldResult<ListMemosResponse> {
        let url = self.url(&format!("{}?{}", MEMO_PATH, params.query()));

        tracing::debug!(%url, "GET memo list");
        let response = self.http.get(&url, &self.headers()).await?;
        Self::handle_response(response)
    }

    /// Update the supplied fields of a memo. Updating `content` makes the
    /// service re-summarize and re-index it.
    pub async fn update_memo(
        &self,
        memo_id: &str,
        update: &UpdateMemoData,
        id_type: impl AsRef<str>,
    ) -> SkaldResult<UpdateMemoResponse> {
        let id_type = parse_id_type(id_type)?;
        let url = self.url(&memo_path(memo_id, id_type));
        let body = serde_json::to_string(update)?;

        tracing::debug!(%url, "PATCH memo");
        let response = self.http.patch(&url, &body, &self.headers()).await?;
        Self::handle_response(response)
    }

    /// Delete a memo. Success carries no payload.
    pub async fn delete_memo(&self, memo_id: &str, id_type: impl AsRef<str>) -> SkaldResult<()> {
        let id_type = parse_id_type(id_type)?;
        let url = self.url(&memo_path(memo_id, id_type));

        tracing::debug!(%url, "DELETE memo");
        let response = self.http.delete(&url, &self.headers()).await?;
        Self::check_status(response).map(|_| ())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Search and generation
    // ─────────────────────────────────────────────────────────────────────

    /// Search memos by vector similarity or title.
    pub async fn search(&self, request: &SearchRequest) -> SkaldResult<SearchResponse> {
        self.post_json(SEARCH_PATH, request).await
    }

    /// Ask a question against the knowledge base and wait for the full answer.
    pub async fn chat(&self, request: &ChatRequest) -> SkaldResult<ChatResponse> {
        self.post_json(CHAT_PATH, &WithStreamFlag::new(request, false)).await
    }

    /// Ask a question and receive the answer token by token.
    pub async fn streamed_chat(&self, request: &ChatRequest) -> SkaldResult<EventStream> {
        self.post_stream(CHAT_PATH, &WithStreamFlag::new(request, true)).await
    }

    /// Generate a document from the knowledge base and wait for all of it.
    pub async fn generate_doc(
        &self,
        request: &GenerateDocRequest,
    ) -> SkaldResult<GenerateDocResponse> {
        self.post_json(GENERATE_PATH, &WithStreamFlag::new(request, false)).await
    }

    /// Generate a document and receive it token by token.
    pub async fn streamed_generate_doc(
        &self,
        request: &GenerateDocRequest,
    ) -> SkaldResult<EventStream> {
        self.post_stream(GENERATE_PATH, &WithStreamFlag::new(request, true)).await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Internal helpers
    // ─────────────────────────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.config.api_key),
        );
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> SkaldResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)?;
        let url = self.url(path);

        tracing::debug!(%url, "POST");
        let response = self.http.post(&url, &body, &self.headers()).await?;
        Self::handle_response(response)
    }

    async fn post_stream<B>(&self, path: &str, body: &B) -> SkaldResult<EventStream>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        let url = self.url(path);

        let mut headers = self.headers();
        headers.insert("Accept".to_string(), "text/event-stream".to_string());

        tracing::debug!(%url, "POST (streaming)");
        let bytes = self
            .http
            .post_stream(&url, &body, &headers)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Streaming request failed");
                SkaldError::from(e)
            })?;

        Ok(decode_event_stream(bytes))
    }

    fn check_status(response: Response) -> SkaldResult<Response> {
        if response.is_success() {
            return Ok(response);
        }

        let status = response.status;
        tracing::debug!(status, "Skald API returned error status");
        Err(SkaldError::Api {
            status,
            message: response.text(),
        })
    }

    fn handle_response<T: DeserializeOwned>(response: Response) -> SkaldResult<T> {
        let response = Self::check_status(response)?;
        Ok(response.json()?)
    }
}

/// Validate a caller-supplied id type before any request is built.
fn parse_id_type(id_type: impl AsRef<str>) -> SkaldResult<IdType> {
    id_type.as_ref().parse()
}

/// Path of a single memo. Every reserved character in the id is escaped.
fn memo_path(memo_id: &str, id_type: IdType) -> String {
    format!(
        "{}/{}{}",
        MEMO_PATH,
        urlencoding::encode(memo_id),
        id_type.query_suffix()
    )
}
