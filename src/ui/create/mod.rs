//! Add-product screen.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CreateIntent;
pub use reducer::CreateReducer;
pub use state::CreateFormState;
pub use view::render_create;
