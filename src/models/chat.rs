//! Chat and document generation types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::filter::Filter;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
}

impl ChatRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: None,
        }
    }

    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = Some(filters);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateDocRequest {
    pub prompt: String,
    /// Free-form style and structure instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
}

impl GenerateDocRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            rules: None,
            filters: None,
        }
    }

    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = Some(filters);
        self
    }
}

/// Request body with the delivery mode forced in.
///
/// The caller's request never carries `stream`; the client picks it per call.
#[derive(Debug, Serialize)]
pub(crate) struct WithStreamFlag<'a, T> {
    #[serde(flatten)]
    pub request: &'a T,
    pub stream: bool,
}

impl<'a, T: Serialize> WithStreamFlag<'a, T> {
    pub(crate) fn new(request: &'a T, stream: bool) -> Self {
        Self { request, stream }
    }
}

/// Complete chat answer. Citations appear inline as `[[N]]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub ok: bool,
    pub response: String,
    #[serde(default)]
    pub intermediate_steps: Vec<Value>,
}

/// Complete generated document. Citations appear inline as `[[N]]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateDocResponse {
    pub ok: bool,
    pub response: String,
    #[serde(default)]
    pub intermediate_steps: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::filter::FilterOperator;
    use serde_json::json;

    #[test]
    fn test_stream_flag_is_added() {
        let request = ChatRequest::new("What is the answer?");
        assert_eq!(
            serde_json::to_value(WithStreamFlag::new(&request, false)).unwrap(),
            json!({"query": "What is the answer?", "stream": false})
        );
        assert_eq!(
            serde_json::to_value(WithStreamFlag::new(&request, true)).unwrap(),
            json!({"query": "What is the answer?", "stream": true})
        );
    }

    #[test]
    fn test_generate_request_with_rules_and_filters() {
        let request = GenerateDocRequest::new("Create a PRD")
            .with_rules("Use formal language")
            .with_filters(vec![Filter::native("tags", FilterOperator::In, vec!["product"])]);
        let value = serde_json::to_value(WithStreamFlag::new(&request, false)).unwrap();

        assert_eq!(value["prompt"], "Create a PRD");
        assert_eq!(value["rules"], "Use formal language");
        assert_eq!(value["filters"][0]["value"], json!(["product"]));
        assert_eq!(value["stream"], false);
    }

    #[test]
    fn test_chat_response_deserialize() {
        let response: ChatResponse = serde_json::from_value(json!({
            "ok": true,
            "response": "The answer is 42 [[1]]",
            "intermediate_steps": []
        }))
        .unwrap();
        assert!(response.ok);
        assert!(response.response.contains("[[1]]"));
    }
}
