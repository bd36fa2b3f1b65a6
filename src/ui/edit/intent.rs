//! Intents for the edit-product screen.

use crate::catalog::product::Product;
use crate::ui::form::FormIntent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum EditIntent {
    /// The entry fetch came back; the form prefills from the product.
    Loaded { product: Product },
    /// The entry fetch failed; `message` is ready for display.
    LoadFailed { message: String },
    /// An edit inside the form.
    Form(FormIntent),
    /// Submission refused before any call went out (an empty required
    /// field); `message` names the field.
    SubmitRejected { message: String },
    /// The caller validated the form and fired the update call.
    SubmitStarted,
    /// The update call came back with the product as the service now has
    /// it; the form re-prefills from it.
    SubmitSucceeded { product: Product },
    /// The update call failed; the form stays as typed.
    SubmitFailed { message: String },
}

impl Intent for EditIntent {}
