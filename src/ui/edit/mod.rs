//! Edit-product screen.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::EditIntent;
pub use reducer::EditReducer;
pub use state::EditFormState;
pub use view::render_edit;
