//! Search filter builder for the `search` query parameter.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Builder for the Akeneo `search` parameter: property code mapped to one or
/// more `{operator, value}` clauses, rendered as compact JSON.
///
/// See <https://api.akeneo.com/documentation/filter.html>.
///
/// # Example
///
/// ```
/// use akeneo_rs::models::SearchFilter;
///
/// let mut filter = SearchFilter::new();
/// filter.add("enabled", "=", true);
/// filter.add("family", "IN", vec!["camcorders", "digital_cameras"]);
/// assert_eq!(
///     filter.to_string(),
///     r#"{"enabled":[{"operator":"=","value":true}],"family":[{"operator":"IN","value":["camcorders","digital_cameras"]}]}"#
/// );
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchFilter(BTreeMap<String, Vec<FilterClause>>);

/// One `{operator, value}` clause of a [`SearchFilter`].
#[derive(Debug, Clone, Serialize)]
pub struct FilterClause {
    /// Comparison operator, e.g. `=`, `IN`, `EMPTY`.
    pub operator: String,
    /// Comparison operand. Omitted for operand-free operators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl SearchFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause for `property`.
    pub fn add(&mut self, property: impl Into<String>, operator: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.entry(property.into()).or_default().push(FilterClause {
            operator: operator.into(),
            value: Some(value.into()),
        });
        self
    }

    /// Add an operand-free clause (e.g. `EMPTY`, `NOT EMPTY`) for `property`.
    pub fn add_unary(&mut self, property: impl Into<String>, operator: impl Into<String>) -> &mut Self {
        self.0.entry(property.into()).or_default().push(FilterClause {
            operator: operator.into(),
            value: None,
        });
        self
    }

    /// True when no clause has been added.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clauses_accumulate_per_property() {
        let mut filter = SearchFilter::new();
        filter
            .add("updated", ">", "2024-01-01 00:00:00")
            .add("updated", "<", "2024-02-01 00:00:00");
        assert_eq!(
            filter.to_string(),
            r#"{"updated":[{"operator":">","value":"2024-01-01 00:00:00"},{"operator":"<","value":"2024-02-01 00:00:00"}]}"#
        );
    }

    #[test]
    fn test_unary_operator_omits_value() {
        let mut filter = SearchFilter::new();
        filter.add_unary("description", "EMPTY");
        assert_eq!(filter.to_string(), r#"{"description":[{"operator":"EMPTY"}]}"#);
    }
}
