//! Intents for the products list screen.

use crate::catalog::product::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent {
    /// The entry fetch came back with data.
    Loaded { products: Vec<Product> },
    /// The entry fetch failed; `message` is ready for display.
    LoadFailed { message: String },
    /// Move the cursor up (wraps).
    MoveUp,
    /// Move the cursor down (wraps).
    MoveDown,
}

impl Intent for ListIntent {}
