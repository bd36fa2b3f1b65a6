//! Intents for the add-product screen.

use crate::catalog::product::Product;
use crate::ui::form::FormIntent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CreateIntent {
    /// An edit inside the form.
    Form(FormIntent),
    /// Submission refused before any call went out (an empty required
    /// field); `message` names the field.
    SubmitRejected { message: String },
    /// The caller validated the form and fired the create call.
    SubmitStarted,
    /// The create call came back with the new product.
    SubmitSucceeded { product: Product },
    /// The create call failed; the form stays as typed.
    SubmitFailed { message: String },
}

impl Intent for CreateIntent {}
