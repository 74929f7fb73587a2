//! Product entity and its attribute value shapes.
//!
//! See <https://api.akeneo.com/concepts/products.html#the-data-format> for
//! the value format the PIM serves.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Links;

/// An Akeneo product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    /// Entity links (server-provided, never sent back).
    #[serde(rename = "_links", default, skip_serializing)]
    pub links: Links,
    /// Product UUID. Since Akeneo 7.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Product identifier (SKU).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Whether the product is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Family code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Category codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Group codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    /// Parent product model code, for variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Attribute values, keyed by attribute code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub values: HashMap<String, Vec<ProductValue>>,
    /// Plain associations, keyed by association type code.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub associations: HashMap<String, Association>,
    /// Quantified associations. Since Akeneo 5.0.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub quantified_associations: HashMap<String, QuantifiedAssociation>,
    /// Creation timestamp, ISO-8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Last-update timestamp, ISO-8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Quality scores. Served only when requested with `with_quality_scores`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quality_scores: Vec<QualityScore>,
    /// Completeness data. Served only when requested with `with_completeness`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub completenesses: Vec<serde_json::Value>,
    /// Enterprise Edition metadata.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

/// One attribute value: data plus its locale/scope qualifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductValue {
    /// Locale code, for localizable attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Channel code, for scopable attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// The value payload, shaped by the attribute type.
    pub data: ValueData,
    /// Option labels, served with select attribute values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_data: Option<serde_json::Value>,
}

/// Typed payload of a product value.
///
/// The wire shape depends on the attribute type; variants are tried in
/// declaration order. Anything unrecognized lands in [`ValueData::Other`]
/// rather than failing the whole page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueData {
    /// `pim_catalog_boolean`
    Boolean(bool),
    /// `pim_catalog_number` with decimals disabled.
    Number(i64),
    /// Text, textarea, dates, file paths, simple selects, and decimal
    /// numbers (the PIM serves decimals as strings).
    Text(String),
    /// Multi selects and reference entity collections.
    Collection(Vec<String>),
    /// `pim_catalog_metric`
    Metric(MetricData),
    /// `pim_catalog_price_collection`
    Price(Vec<PriceData>),
    /// Table attributes: rows of cell maps.
    Table(Vec<HashMap<String, serde_json::Value>>),
    /// Any other shape.
    Other(serde_json::Value),
}

/// Measurement payload: an amount and its unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricData {
    /// Amount; string when decimals are allowed, integer otherwise.
    pub amount: Amount,
    /// Measurement unit code.
    pub unit: String,
}

/// Price payload: an amount in one currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceData {
    /// Amount; string when decimals are allowed, integer otherwise.
    pub amount: Amount,
    /// ISO currency code.
    pub currency: String,
}

/// Amount of a metric or price value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// Decimal amounts are served as strings.
    Text(String),
    /// Non-decimal amounts are served as integers.
    Integer(i64),
    /// Defensive catch for plain JSON numbers.
    Float(f64),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Text(s) => write!(f, "{s}"),
            Amount::Integer(i) => write!(f, "{i}"),
            Amount::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Plain association targets for one association type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Association {
    /// Associated group codes.
    #[serde(default)]
    pub groups: Vec<String>,
    /// Associated product identifiers.
    #[serde(default)]
    pub products: Vec<String>,
    /// Associated product model codes.
    #[serde(default)]
    pub product_models: Vec<String>,
}

/// Quantified association targets for one association type. Since Akeneo 5.0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuantifiedAssociation {
    /// Associated products with quantities.
    #[serde(default)]
    pub products: Vec<ProductQuantity>,
    /// Associated product models with quantities.
    #[serde(default)]
    pub product_models: Vec<ProductModelQuantity>,
}

/// A product identifier paired with a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductQuantity {
    /// Product identifier.
    pub identifier: String,
    /// Associated quantity.
    pub quantity: i64,
}

/// A product model code paired with a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductModelQuantity {
    /// Product model code.
    pub code: String,
    /// Associated quantity.
    pub quantity: i64,
}

/// Quality score of a product on one channel/locale pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityScore {
    /// Channel code.
    pub scope: String,
    /// Locale code.
    pub locale: String,
    /// Score grade, "A" through "E".
    pub data: String,
}

/// One line of the response to a batch product upsert.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchResponseLine {
    /// Input line number, 1-based.
    #[serde(default)]
    pub line: i32,
    /// Product identifier of the line.
    #[serde(default)]
    pub identifier: Option<String>,
    /// Entity code of the line, for code-keyed resources.
    #[serde(default)]
    pub code: Option<String>,
    /// Per-line HTTP status.
    #[serde(default)]
    pub status_code: u16,
    /// Server message, present on failed lines.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_data_variants_decode() {
        let values: HashMap<String, Vec<ProductValue>> = serde_json::from_value(serde_json::json!({
            "auto_focus": [{"locale": null, "scope": null, "data": true}],
            "name": [{"locale": "en_US", "scope": "ecommerce", "data": "Canon EOS"}],
            "weight": [{"locale": null, "scope": null, "data": {"amount": "0.8", "unit": "KILOGRAM"}}],
            "price": [{"locale": null, "scope": null, "data": [{"amount": 4500, "currency": "EUR"}]}],
            "colors": [{"locale": null, "scope": null, "data": ["red", "black"]}],
            "iso": [{"locale": null, "scope": null, "data": 3200}]
        }))
        .unwrap();

        assert!(matches!(values["auto_focus"][0].data, ValueData::Boolean(true)));
        assert!(matches!(values["name"][0].data, ValueData::Text(_)));
        assert!(matches!(values["iso"][0].data, ValueData::Number(3200)));
        match &values["weight"][0].data {
            ValueData::Metric(metric) => {
                assert_eq!(metric.amount.to_string(), "0.8");
                assert_eq!(metric.unit, "KILOGRAM");
            }
            other => panic!("expected metric, got {other:?}"),
        }
        match &values["price"][0].data {
            ValueData::Price(prices) => {
                assert_eq!(prices[0].amount.to_string(), "4500");
                assert_eq!(prices[0].currency, "EUR");
            }
            other => panic!("expected price collection, got {other:?}"),
        }
        assert!(matches!(&values["colors"][0].data, ValueData::Collection(c) if c.len() == 2));
    }

    #[test]
    fn test_product_serialization_omits_server_fields() {
        let product = Product {
            identifier: Some("cap-1234".into()),
            enabled: Some(true),
            family: Some("camcorders".into()),
            ..Default::default()
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["identifier"], "cap-1234");
        assert!(json.get("_links").is_none());
        assert!(json.get("values").is_none());
        assert!(json.get("created").is_none());
    }
}
