//! State for the add-product screen.

use crate::catalog::product::Product;
use crate::ui::form::ProductForm;
use crate::ui::mvi::UiState;

/// The add-product screen: pure input, so no entry fetch. The screen is
/// usable the moment it mounts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateFormState {
    pub form: ProductForm,
    /// A create call is outstanding. Further submits are ignored until it
    /// settles; the form itself stays editable.
    pub in_flight: bool,
    /// The created product as the service returned it. `Some` puts up the
    /// confirmation dialog, whose only exit is back to the list.
    pub submitted: Option<Product>,
    /// Inline message for a refused or failed submit.
    pub notice: Option<String>,
}

impl UiState for CreateFormState {}

impl CreateFormState {
    /// True while the confirmation dialog owns the keyboard.
    pub fn dialog_open(&self) -> bool {
        self.submitted.is_some()
    }
}
