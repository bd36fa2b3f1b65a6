//! Products list screen.
//!
//! Fetches the full catalog on entry and gives the cursor-selected product
//! to the detail, edit, and delete flows.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::ProductListState;
pub use view::render_list;
