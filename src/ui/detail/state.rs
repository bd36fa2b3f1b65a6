//! State for the product detail screen.

use crate::catalog::product::{Product, ProductId};
use crate::ui::mvi::UiState;
use crate::ui::remote::Remote;

/// Delete confirmation sub-machine.
///
/// ```text
/// Idle ──d──→ ConfirmPending ──confirm──→ (call) ──ok──→ Deleted
///   ↑              │                                │
///   └──── cancel ──┘←──────────── failure ──────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    /// No delete activity.
    #[default]
    Idle,
    /// The confirmation dialog is up. `in_flight` flips once the user
    /// confirms; repeated confirms are ignored until the call settles.
    ConfirmPending { in_flight: bool },
    /// The remove call succeeded. Terminal: the only exit is navigating
    /// back to the products list.
    Deleted { id: ProductId },
}

/// The product detail screen: one fetch, plus the delete flow and the
/// cart teaser dialog layered on top of ready data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDetailState {
    /// Which product this screen instance was opened for.
    pub id: ProductId,
    pub remote: Remote<Product>,
    pub delete: DeleteFlow,
    /// Inline message for a failed delete. Entry-fetch failures use the
    /// `Failed` phase instead; this one coexists with ready data.
    pub notice: Option<String>,
    /// "Add to Cart" goes nowhere; it opens this dialog instead.
    pub teaser: bool,
}

impl UiState for ProductDetailState {}

impl ProductDetailState {
    pub fn for_product(id: ProductId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// True while any dialog owns the keyboard.
    pub fn dialog_open(&self) -> bool {
        self.teaser || self.delete != DeleteFlow::Idle
    }
}
