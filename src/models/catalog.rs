//! Catalog structure entities: families, attributes, categories, channels
//! and locales.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Links;

/// A product family.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Family {
    /// Entity links (server-provided, never sent back).
    #[serde(rename = "_links", default, skip_serializing)]
    pub links: Links,
    /// Family code.
    pub code: String,
    /// Attribute used as the product label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_as_label: Option<String>,
    /// Attribute used as the main product image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_as_image: Option<String>,
    /// Attribute codes composing the family.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    /// Required attribute codes per channel code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attribute_requirements: HashMap<String, Vec<String>>,
    /// Labels per locale code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

/// A family variant, describing the attribute distribution of a product
/// model tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FamilyVariant {
    /// Entity links (server-provided, never sent back).
    #[serde(rename = "_links", default, skip_serializing)]
    pub links: Links,
    /// Variant code.
    pub code: String,
    /// Variant attribute sets, one per enrichment level.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variant_attribute_sets: Vec<VariantAttributeSet>,
    /// Labels per locale code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

/// Attributes and axes of one variant level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantAttributeSet {
    /// Enrichment level, 1-based.
    pub level: i32,
    /// Axis attribute codes.
    #[serde(default)]
    pub axes: Vec<String>,
    /// Attribute codes of this level.
    #[serde(default)]
    pub attributes: Vec<String>,
}

/// An attribute definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attribute {
    /// Entity links (server-provided, never sent back).
    #[serde(rename = "_links", default, skip_serializing)]
    pub links: Links,
    /// Attribute code.
    pub code: String,
    /// Attribute type, e.g. `pim_catalog_text`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<String>,
    /// Attribute group code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Sort order inside the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    /// Whether values differ per locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizable: Option<bool>,
    /// Whether values differ per channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopable: Option<bool>,
    /// Whether values must be unique across products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    /// Whether the attribute can be used as a grid filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub useable_as_grid_filter: Option<bool>,
    /// Allowed file extensions, for media attributes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_extensions: Vec<String>,
    /// Metric family, for metric attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_family: Option<String>,
    /// Default metric unit, for metric attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_metric_unit: Option<String>,
    /// Whether decimal values are accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals_allowed: Option<bool>,
    /// Locales the attribute is restricted to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_locales: Vec<String>,
    /// Maximum value length, for text attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_characters: Option<i32>,
    /// Labels per locale code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

/// An option of a select attribute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeOption {
    /// Entity links (server-provided, never sent back).
    #[serde(rename = "_links", default, skip_serializing)]
    pub links: Links,
    /// Option code.
    pub code: String,
    /// Owning attribute code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Sort order among the attribute's options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    /// Labels per locale code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

/// A category tree node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    /// Entity links (server-provided, never sent back).
    #[serde(rename = "_links", default, skip_serializing)]
    pub links: Links,
    /// Category code.
    pub code: String,
    /// Parent category code; `None` for tree roots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Last-update timestamp, ISO-8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Position among siblings. Served only with `with_position`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    /// Labels per locale code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

/// A channel (scope).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Channel {
    /// Entity links (server-provided, never sent back).
    #[serde(rename = "_links", default, skip_serializing)]
    pub links: Links,
    /// Channel code.
    pub code: String,
    /// Currency codes activated for the channel.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub currencies: Vec<String>,
    /// Locale codes activated for the channel.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locales: Vec<String>,
    /// Root category code of the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_tree: Option<String>,
    /// Conversion units per metric attribute code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub conversion_units: HashMap<String, String>,
    /// Labels per locale code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

/// A locale known to the PIM.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Locale {
    /// Entity links (server-provided, never sent back).
    #[serde(rename = "_links", default, skip_serializing)]
    pub links: Links,
    /// Locale code, e.g. `en_US`.
    pub code: String,
    /// Whether the locale is activated.
    #[serde(default)]
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_type_field_rename() {
        let attribute: Attribute = serde_json::from_value(serde_json::json!({
            "code": "weight",
            "type": "pim_catalog_metric",
            "metric_family": "Weight",
            "default_metric_unit": "KILOGRAM",
            "decimals_allowed": true
        }))
        .unwrap();

        assert_eq!(attribute.attribute_type.as_deref(), Some("pim_catalog_metric"));
        assert_eq!(attribute.decimals_allowed, Some(true));
    }

    #[test]
    fn test_category_tolerates_sparse_payload() {
        let category: Category =
            serde_json::from_value(serde_json::json!({"code": "master"})).unwrap();
        assert_eq!(category.code, "master");
        assert!(category.parent.is_none());
        assert!(category.labels.is_empty());
    }
}
