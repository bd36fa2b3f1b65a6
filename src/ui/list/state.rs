//! State for the products list screen.

use crate::catalog::product::Product;
use crate::ui::mvi::UiState;
use crate::ui::remote::Remote;

/// The products list: one fetch, one cursor.
///
/// `selected` only means anything while the fetch is `Ready` with a
/// non-empty result; the reducer keeps it in range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductListState {
    pub remote: Remote<Vec<Product>>,
    pub selected: usize,
}

impl UiState for ProductListState {}

impl ProductListState {
    /// The product under the cursor, if the list is ready and non-empty.
    pub fn selected_product(&self) -> Option<&Product> {
        self.remote
            .ready()
            .and_then(|products| products.get(self.selected))
    }
}
