//! Per-resource services for the Akeneo REST endpoints.
//!
//! Each service composes the shared request executor; none of them carry
//! state of their own beyond the client handle.

mod attributes;
mod categories;
mod channels;
mod families;
mod locales;
mod media_files;
mod product_models;
mod products;

pub use attributes::{AttributeListOptions, AttributesService};
pub use categories::{CategoriesService, CategoryListOptions};
pub use channels::ChannelsService;
pub use families::FamiliesService;
pub use locales::LocalesService;
pub use media_files::MediaFilesService;
pub use product_models::{ProductModelGetOptions, ProductModelListOptions, ProductModelsService};
pub use products::{ProductGetOptions, ProductListOptions, ProductsService};

use serde::Serialize;

/// Common list options shared by every collection endpoint.
///
/// Fields left at `None` are omitted from the query string.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ListOptions {
    /// Search filter, as produced by
    /// [`SearchFilter`](crate::models::SearchFilter).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Page number to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page (10 by default on the server).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Ask the server for a total count. Decreases performance when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_count: Option<bool>,
}
