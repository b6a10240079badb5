//! Memo request and response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::error::SkaldError;

/// Open key-value metadata attached to a memo.
pub type Metadata = Map<String, Value>;

/// How a memo identifier should be resolved by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdType {
    /// Server-assigned UUID
    #[default]
    MemoUuid,
    /// Caller-supplied reference id
    ReferenceId,
}

impl IdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::MemoUuid => "memo_uuid",
            IdType::ReferenceId => "reference_id",
        }
    }

    /// Query string suffix for a memo path. The default id type sends none.
    pub(crate) fn query_suffix(&self) -> &'static str {
        match self {
            IdType::MemoUuid => "",
            IdType::ReferenceId => "?id_type=reference_id",
        }
    }
}

impl AsRef<str> for IdType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for IdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdType {
    type Err = SkaldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memo_uuid" => Ok(IdType::MemoUuid),
            "reference_id" => Ok(IdType::ReferenceId),
            other => Err(SkaldError::InvalidIdType(other.to_string())),
        }
    }
}

/// Data required to create a new memo.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoData {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

impl MemoData {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_expiration_date(mut self, expiration_date: impl Into<String>) -> Self {
        self.expiration_date = Some(expiration_date.into());
        self
    }

    /// Body actually sent on create: `metadata` is always present and
    /// defaults to an empty object.
    pub fn into_create_body(self) -> CreateMemoBody {
        CreateMemoBody {
            title: self.title,
            content: self.content,
            metadata: self.metadata.unwrap_or_default(),
            reference_id: self.reference_id,
            tags: self.tags,
            source: self.source,
            expiration_date: self.expiration_date,
        }
    }
}

/// Wire body for `POST /api/v1/memo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateMemoBody {
    pub title: String,
    pub content: String,
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

/// Partial update; only fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateMemoData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

impl UpdateMemoData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_client_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.client_reference_id = Some(reference_id.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_expiration_date(mut self, expiration_date: impl Into<String>) -> Self {
        self.expiration_date = Some(expiration_date.into());
        self
    }
}

/// Pagination for `list_memos`. Unset fields default to page 1, 20 per page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListMemosParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListMemosParams {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PAGE_SIZE: u32 = 20;

    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    pub(crate) fn query(&self) -> String {
        format!(
            "page={}&page_size={}",
            self.page.unwrap_or(Self::DEFAULT_PAGE),
            self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE)
        )
    }
}

/// Response from creating a memo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateMemoResponse {
    pub ok: bool,
}

/// Response from updating a memo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateMemoResponse {
    pub ok: bool,
}

/// Complete memo details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Memo {
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content_length: u64,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub client_reference_id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(rename = "type", default)]
    pub memo_type: String,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Lightweight memo information returned by `list_memos`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemoListItem {
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content_length: u64,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub client_reference_id: Option<String>,
}

/// One page of memos.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListMemosResponse {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<MemoListItem>,
}
