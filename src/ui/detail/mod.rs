//! Product detail screen.
//!
//! Shows one product and hosts the delete confirmation flow plus the
//! "Add to Cart" teaser dialog.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::{DeleteFlow, ProductDetailState};
pub use view::render_detail;
