//! Product model entity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Links, ProductValue, QualityScore};
use crate::{Error, Result};

/// An Akeneo product model: the common part of a variant tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductModel {
    /// Entity links (server-provided, never sent back).
    #[serde(rename = "_links", default, skip_serializing)]
    pub links: Links,
    /// Product model code.
    pub code: String,
    /// Family code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Family variant code, fixed at creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_variant: Option<String>,
    /// Parent product model code, for sub product models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Category codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Attribute values, keyed by attribute code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub values: HashMap<String, Vec<ProductValue>>,
    /// Creation timestamp, ISO-8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Last-update timestamp, ISO-8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Quality scores. Served only when requested with `with_quality_scores`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quality_scores: Vec<QualityScore>,
}

impl ProductModel {
    /// Check the fields the creation endpoint requires.
    pub(crate) fn validate_for_create(&self) -> Result<()> {
        if self.code.is_empty() {
            return Err(Error::InvalidInput("product model code is empty".into()));
        }
        if self.family_variant.as_deref().unwrap_or_default().is_empty() {
            return Err(Error::InvalidInput(format!(
                "product model {} has no family variant",
                self.code
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_for_create() {
        let mut model = ProductModel {
            code: "amor".into(),
            family_variant: Some("clothing_color_size".into()),
            ..Default::default()
        };
        assert!(model.validate_for_create().is_ok());

        model.family_variant = None;
        assert!(model.validate_for_create().is_err());

        model.code = String::new();
        assert!(model.validate_for_create().is_err());
    }
}
