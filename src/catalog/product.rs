//! The product entity as the remote catalog defines it.
//!
//! The catalog service owns this shape; we parse it, render it, and send it
//! back unmodified. Display normalization (currency prefix, category
//! capitalization) happens at render time only and never touches the stored
//! values.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the catalog service. Immutable once created.
pub type ProductId = u64;

/// A price exactly as the wire carried it.
///
/// The catalog API returns JSON numbers, while form submissions send the
/// entered text verbatim; both forms must round-trip unchanged, so the enum
/// keeps whichever representation was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Price {
    /// Currency prefix plus two fraction digits, e.g. `$19.99`.
    ///
    /// Text that does not parse as a number is shown raw behind the prefix;
    /// the stored value is never coerced.
    pub fn display(&self) -> String {
        match self {
            Price::Number(value) => format!("${value:.2}"),
            Price::Text(text) => match text.parse::<f64>() {
                Ok(value) => format!("${value:.2}"),
                Err(_) => format!("${text}"),
            },
        }
    }

    /// The value as it should appear in an editable form field.
    pub fn as_entry(&self) -> String {
        match self {
            Price::Number(value) => format!("{value}"),
            Price::Text(text) => text.clone(),
        }
    }
}

/// One catalog product. Unknown fields from the service (e.g. ratings) are
/// ignored on parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: Price,
    pub image: String,
}

impl Product {
    /// Category with its first letter capitalized, for display only.
    pub fn display_category(&self) -> String {
        let mut chars = self.category.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// Mutation payload: every product field except the server-assigned `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: Price,
    pub image: String,
}
