//! Intents for the product detail screen.

use crate::catalog::product::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailIntent {
    /// The entry fetch came back with the product.
    Loaded { product: Product },
    /// The entry fetch failed; `message` is ready for display.
    LoadFailed { message: String },
    /// User asked to delete; opens the confirmation dialog.
    DeleteRequested,
    /// User confirmed; the caller fires the remove call alongside this.
    DeleteConfirmed,
    /// User backed out of the confirmation dialog.
    DeleteCancelled,
    /// The remove call succeeded.
    DeleteSucceeded,
    /// The remove call failed; back to the plain detail view with an
    /// inline message.
    DeleteFailed { message: String },
    /// "Add to Cart" pressed.
    TeaserOpened,
    /// The teaser dialog dismissed.
    TeaserClosed,
}

impl Intent for DetailIntent {}
