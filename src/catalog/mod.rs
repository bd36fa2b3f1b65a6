//! The remote product catalog: entity model, HTTP client, and failure
//! taxonomy. Nothing in here knows about the UI; screens talk to this
//! module through the command worker.

pub mod client;
pub mod error;
pub mod product;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use product::{Price, Product, ProductDraft, ProductId};
