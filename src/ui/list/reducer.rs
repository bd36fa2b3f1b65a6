//! State transitions for the products list screen.

use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ProductListState;
use crate::ui::mvi::Reducer;
use crate::ui::remote::Remote;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ProductListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Loaded { products } => ProductListState {
                remote: Remote::Ready(products),
                selected: 0,
            },

            ListIntent::LoadFailed { message } => ProductListState {
                remote: Remote::Failed { message },
                selected: 0,
            },

            ListIntent::MoveUp => move_cursor(state, Direction::Up),
            ListIntent::MoveDown => move_cursor(state, Direction::Down),
        }
    }
}

enum Direction {
    Up,
    Down,
}

/// Cursor movement only applies to a ready, non-empty list; anything else
/// leaves the state untouched.
fn move_cursor(state: ProductListState, direction: Direction) -> ProductListState {
    let len = match state.remote.ready() {
        Some(products) if !products.is_empty() => products.len(),
        _ => return state,
    };

    let selected = match direction {
        Direction::Up => {
            if state.selected == 0 {
                len - 1
            } else {
                state.selected - 1
            }
        }
        Direction::Down => (state.selected + 1) % len,
    };

    ProductListState { selected, ..state }
}
