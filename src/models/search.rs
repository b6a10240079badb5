//! Search request and response types.

use serde::{Deserialize, Serialize};

use super::filter::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMethod {
    /// Semantic similarity over memo chunks
    #[serde(rename = "chunk_vector_search")]
    ChunkVectorSearch,
    #[serde(rename = "title_contains")]
    TitleContains,
    #[serde(rename = "title_startswith")]
    TitleStartsWith,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub search_method: SearchMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, search_method: SearchMethod) -> Self {
        Self {
            query: query.into(),
            search_method,
            limit: None,
            filters: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = Some(filters);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    pub uuid: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content_snippet: String,
    /// Vector distance; absent for title searches
    #[serde(default)]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}
