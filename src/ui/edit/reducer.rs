//! State transitions for the edit-product screen.
//!
//! Form edits and submits only apply on top of a ready, prefilled form;
//! before the entry fetch settles there is nothing to edit.

use crate::ui::edit::intent::EditIntent;
use crate::ui::edit::state::EditFormState;
use crate::ui::form::ProductForm;
use crate::ui::mvi::Reducer;
use crate::ui::remote::Remote;

pub struct EditReducer;

impl Reducer for EditReducer {
    type State = EditFormState;
    type Intent = EditIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditIntent::Loaded { product } => EditFormState {
                remote: Remote::Ready(ProductForm::from_product(&product)),
                ..state
            },

            EditIntent::LoadFailed { message } => EditFormState {
                remote: Remote::Failed { message },
                ..state
            },

            EditIntent::Form(form_intent) => {
                if state.dialog_open() {
                    return state;
                }
                let mut next = state;
                if let Remote::Ready(form) = next.remote {
                    next.remote = Remote::Ready(form.apply(form_intent));
                }
                next
            }

            EditIntent::SubmitRejected { message } => EditFormState {
                notice: Some(message),
                ..state
            },

            EditIntent::SubmitStarted => {
                if state.remote.ready().is_none() || state.in_flight || state.dialog_open() {
                    return state;
                }
                EditFormState {
                    in_flight: true,
                    notice: None,
                    ..state
                }
            }

            EditIntent::SubmitSucceeded { product } => EditFormState {
                remote: Remote::Ready(ProductForm::from_product(&product)),
                in_flight: false,
                updated: Some(product.id),
                notice: None,
                ..state
            },

            EditIntent::SubmitFailed { message } => EditFormState {
                in_flight: false,
                updated: None,
                notice: Some(message),
                ..state
            },
        }
    }
}
