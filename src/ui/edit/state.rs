//! State for the edit-product screen.

use crate::catalog::product::ProductId;
use crate::ui::form::ProductForm;
use crate::ui::mvi::UiState;
use crate::ui::remote::Remote;

/// The edit-product screen. The entry fetch prefills the form, so the
/// remote payload here is the form itself rather than a bare product.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditFormState {
    /// Which product this screen instance was opened for.
    pub id: ProductId,
    pub remote: Remote<ProductForm>,
    /// An update call is outstanding. Further submits are ignored until it
    /// settles; the form itself stays editable.
    pub in_flight: bool,
    /// Id from the service's update response. `Some` puts up the
    /// confirmation dialog, whose only exit is back to the list.
    pub updated: Option<ProductId>,
    /// Inline message for a refused or failed submit.
    pub notice: Option<String>,
}

impl UiState for EditFormState {}

impl EditFormState {
    pub fn for_product(id: ProductId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// True while the confirmation dialog owns the keyboard.
    pub fn dialog_open(&self) -> bool {
        self.updated.is_some()
    }
}
