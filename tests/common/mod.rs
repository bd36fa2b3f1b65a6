//! Shared fixtures and mock infrastructure.

#![allow(dead_code)]

pub mod mock_store;

use serde_json::{json, Value};
use stockroom::catalog::{Price, Product, ProductDraft};

/// A product as the catalog service would serialize it.
pub fn product_json(id: u64, title: &str, price: f64) -> Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "description": format!("{title}, quite a find"),
        "category": "electronics",
        "image": format!("https://img.example/{id}.png"),
    })
}

pub fn product(id: u64, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: format!("{title}, quite a find"),
        category: "electronics".to_string(),
        price: Price::Number(price),
        image: format!("https://img.example/{id}.png"),
    }
}

/// A draft as the forms build it: the price is the entered text, verbatim.
pub fn draft(title: &str, price: &str) -> ProductDraft {
    ProductDraft {
        title: title.to_string(),
        description: "From the test bench".to_string(),
        category: "gear".to_string(),
        price: Price::Text(price.to_string()),
        image: "https://img.example/new.png".to_string(),
    }
}
