//! Filters for search, chat and document generation.
//!
//! The service expects a list `value` for `in` / `not_in` and a scalar for
//! every other operator. That pairing is enforced server-side, not here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Eq,
    Neq,
    Contains,
    #[serde(rename = "startswith")]
    StartsWith,
    #[serde(rename = "endswith")]
    EndsWith,
    In,
    NotIn,
}

/// Which domain `field` is resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Indexed system field such as `source` or `tags`
    NativeField,
    /// Caller-defined key in memo metadata
    CustomMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Single(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::Many(values)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(values: Vec<&str>) -> Self {
        FilterValue::Many(values.into_iter().map(String::from).collect())
    }
}

/// A predicate over a native field or custom metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
    pub filter_type: FilterType,
}

impl Filter {
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
        filter_type: FilterType,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
            filter_type,
        }
    }

    /// Filter on an indexed system field.
    pub fn native(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self::new(field, operator, value, FilterType::NativeField)
    }

    /// Filter on a caller-defined metadata key.
    pub fn metadata(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self::new(field, operator, value, FilterType::CustomMetadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operator_wire_names() {
        let names: Vec<String> = [
            FilterOperator::Eq,
            FilterOperator::Neq,
            FilterOperator::Contains,
            FilterOperator::StartsWith,
            FilterOperator::EndsWith,
            FilterOperator::In,
            FilterOperator::NotIn,
        ]
        .iter()
        .map(|op| serde_json::to_value(op).unwrap().as_str().unwrap().to_string())
        .collect();

        assert_eq!(
            names,
            ["eq", "neq", "contains", "startswith", "endswith", "in", "not_in"]
        );
    }

    #[test]
    fn test_scalar_filter_serialization() {
        let filter = Filter::native("source", FilterOperator::Eq, "notion");
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "field": "source",
                "operator": "eq",
                "value": "notion",
                "filter_type": "native_field"
            })
        );
    }

    #[test]
    fn test_list_filter_serialization() {
        let filter = Filter::metadata("team", FilterOperator::In, vec!["eng", "design"]);
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "field": "team",
                "operator": "in",
                "value": ["eng", "design"],
                "filter_type": "custom_metadata"
            })
        );
    }

    #[test]
    fn test_value_deserializes_either_shape() {
        let single: FilterValue = serde_json::from_value(json!("a")).unwrap();
        let many: FilterValue = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(single, FilterValue::Single("a".to_string()));
        assert_eq!(many, FilterValue::from(vec!["a", "b"]));
    }
}
