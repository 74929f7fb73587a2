//! Media file entity.

use serde::{Deserialize, Serialize};

use super::Links;

/// A media file stored by the PIM.
///
/// The entity itself is metadata; the binary content hangs off
/// `links.download`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaFile {
    /// Entity links, including the `download` address.
    #[serde(rename = "_links", default, skip_serializing)]
    pub links: Links,
    /// Media file code (its storage path).
    pub code: String,
    /// Filename at upload time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
    /// MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// File extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}
