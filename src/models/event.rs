//! Events API payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An event dispatched by the PIM events subscription.
///
/// See <https://api.akeneo.com/events-documentation/subscription.html>.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    /// Action performed, e.g. `product.updated`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Username of the author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Author kind, `ui` or `api`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_type: Option<String>,
    /// Unique event identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// Event timestamp, ISO-8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_datetime: Option<String>,
    /// Source PIM instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pim_source: Option<String>,
    /// The resource the event is about.
    #[serde(default)]
    pub data: EventData,
}

/// Resource payload of an [`Event`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventData {
    /// Raw resource fields.
    #[serde(default)]
    pub resource: HashMap<String, serde_json::Value>,
}
