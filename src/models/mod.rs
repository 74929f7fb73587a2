//! Data models for the Akeneo API.
//!
//! These are plain serialization shapes: entities mirror the REST payloads
//! field by field, and the only behavior they carry is link navigation
//! ([`Links`]) and search-filter rendering ([`SearchFilter`]).

mod catalog;
mod event;
mod filter;
mod links;
mod media;
mod product;
mod product_model;

pub use catalog::{
    Attribute, AttributeOption, Category, Channel, Family, FamilyVariant, Locale,
    VariantAttributeSet,
};
pub use event::{Event, EventData};
pub use filter::{FilterClause, SearchFilter};
pub use links::{Embedded, Link, Links, PageResponse};
pub use media::MediaFile;
pub use product::{
    Amount, Association, MetricData, PatchResponseLine, PriceData, Product, ProductModelQuantity,
    ProductQuantity, ProductValue, QualityScore, QuantifiedAssociation, ValueData,
};
pub use product_model::ProductModel;
