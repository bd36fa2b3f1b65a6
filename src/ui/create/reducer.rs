//! State transitions for the add-product screen.

use crate::ui::create::intent::CreateIntent;
use crate::ui::create::state::CreateFormState;
use crate::ui::mvi::Reducer;

pub struct CreateReducer;

impl Reducer for CreateReducer {
    type State = CreateFormState;
    type Intent = CreateIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CreateIntent::Form(form_intent) => {
                // The confirmation dialog owns the keyboard once it is up.
                if state.dialog_open() {
                    return state;
                }
                let mut next = state;
                next.form = next.form.apply(form_intent);
                next
            }

            CreateIntent::SubmitRejected { message } => CreateFormState {
                notice: Some(message),
                ..state
            },

            CreateIntent::SubmitStarted => {
                if state.in_flight || state.dialog_open() {
                    return state;
                }
                CreateFormState {
                    in_flight: true,
                    notice: None,
                    ..state
                }
            }

            CreateIntent::SubmitSucceeded { product } => CreateFormState {
                in_flight: false,
                submitted: Some(product),
                notice: None,
                ..state
            },

            CreateIntent::SubmitFailed { message } => CreateFormState {
                in_flight: false,
                submitted: None,
                notice: Some(message),
                ..state
            },
        }
    }
}
