//! HAL-style links and the paged response envelope shared by every list
//! endpoint.

use serde::{Deserialize, Serialize};
use url::Url;

/// A single HAL link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Fully navigable address.
    #[serde(default)]
    pub href: String,
}

/// Links attached to entities and list envelopes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    /// The resource itself.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    /// First page of the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<Link>,
    /// Previous page, when not on the first one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Link>,
    /// Next page. Presence of a non-empty href is the sole "more pages"
    /// signal; absence ends a pagination stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    /// Raw binary content of a media file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<Link>,
}

impl Links {
    /// True when a non-empty `next` link is present.
    pub fn has_next(&self) -> bool {
        self.next.as_ref().is_some_and(|link| !link.href.is_empty())
    }

    /// Query parameters of the `next` link, to be used verbatim as the next
    /// page's request options. `None` when there is no next page or its
    /// address does not parse.
    pub fn next_query(&self) -> Option<Vec<(String, String)>> {
        let next = self.next.as_ref()?;
        if next.href.is_empty() {
            return None;
        }
        let url = Url::parse(&next.href).ok()?;
        Some(url.query_pairs().into_owned().collect())
    }

    /// Address of the `download` link, when present.
    pub fn download_href(&self) -> Option<&str> {
        self.download
            .as_ref()
            .map(|link| link.href.as_str())
            .filter(|href| !href.is_empty())
    }
}

/// Paged response envelope returned by list endpoints:
/// `{ "_links": {...}, "current_page": N, "_embedded": { "items": [...] } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse<T> {
    /// Navigation links for the collection.
    #[serde(rename = "_links", default)]
    pub links: Links,
    /// Page number reported by the server.
    #[serde(default)]
    pub current_page: Option<u32>,
    /// The page's items.
    #[serde(rename = "_embedded", default = "Embedded::empty")]
    pub embedded: Embedded<T>,
}

impl<T> PageResponse<T> {
    /// Consume the envelope, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.embedded.items
    }

    /// The page's items.
    pub fn items(&self) -> &[T] {
        &self.embedded.items
    }
}

/// Wrapper for the `_embedded` object.
#[derive(Debug, Clone, Deserialize)]
pub struct Embedded<T> {
    /// Items of the current page, in server order.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Embedded<T> {
    fn empty() -> Self {
        Self { items: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_next() {
        let mut links = Links::default();
        assert!(!links.has_next());

        links.next = Some(Link { href: String::new() });
        assert!(!links.has_next());

        links.next = Some(Link {
            href: "https://pim.example.com/api/rest/v1/products?page=2".into(),
        });
        assert!(links.has_next());
    }

    #[test]
    fn test_next_query_extracts_pairs() {
        let links = Links {
            next: Some(Link {
                href: "https://pim.example.com/api/rest/v1/products?page=2&limit=10&with_count=false"
                    .into(),
            }),
            ..Default::default()
        };

        let pairs = links.next_query().expect("next link present");
        assert!(pairs.contains(&("page".to_string(), "2".to_string())));
        assert!(pairs.contains(&("limit".to_string(), "10".to_string())));
        assert!(pairs.contains(&("with_count".to_string(), "false".to_string())));
    }

    #[test]
    fn test_envelope_decoding() {
        let body = serde_json::json!({
            "_links": {
                "self": {"href": "https://pim.example.com/api/rest/v1/categories?page=1"},
                "first": {"href": "https://pim.example.com/api/rest/v1/categories?page=1"},
                "next": {"href": "https://pim.example.com/api/rest/v1/categories?page=2"}
            },
            "current_page": 1,
            "_embedded": {"items": [{"code": "master"}, {"code": "shoes"}]}
        });

        let page: PageResponse<serde_json::Value> = serde_json::from_value(body).unwrap();
        assert_eq!(page.current_page, Some(1));
        assert_eq!(page.items().len(), 2);
        assert!(page.links.has_next());
    }
}
