//! State transitions for the product detail screen.
//!
//! Delete intents only apply on top of ready data, and each phase of the
//! flow accepts exactly the intents drawn in the `DeleteFlow` diagram;
//! everything else is ignored.

use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::{DeleteFlow, ProductDetailState};
use crate::ui::mvi::Reducer;
use crate::ui::remote::Remote;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = ProductDetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Loaded { product } => ProductDetailState {
                remote: Remote::Ready(product),
                ..state
            },

            DetailIntent::LoadFailed { message } => ProductDetailState {
                remote: Remote::Failed { message },
                ..state
            },

            DetailIntent::DeleteRequested => {
                if state.remote.ready().is_none() || state.delete != DeleteFlow::Idle {
                    return state;
                }
                ProductDetailState {
                    delete: DeleteFlow::ConfirmPending { in_flight: false },
                    notice: None,
                    ..state
                }
            }

            DetailIntent::DeleteConfirmed => match state.delete {
                DeleteFlow::ConfirmPending { in_flight: false } => ProductDetailState {
                    delete: DeleteFlow::ConfirmPending { in_flight: true },
                    ..state
                },
                _ => state,
            },

            DetailIntent::DeleteCancelled => match state.delete {
                // Once the call is out there is nothing to cancel.
                DeleteFlow::ConfirmPending { in_flight: false } => ProductDetailState {
                    delete: DeleteFlow::Idle,
                    ..state
                },
                _ => state,
            },

            DetailIntent::DeleteSucceeded => match state.delete {
                DeleteFlow::ConfirmPending { .. } => ProductDetailState {
                    delete: DeleteFlow::Deleted { id: state.id },
                    notice: None,
                    ..state
                },
                _ => state,
            },

            DetailIntent::DeleteFailed { message } => match state.delete {
                DeleteFlow::ConfirmPending { .. } => ProductDetailState {
                    delete: DeleteFlow::Idle,
                    notice: Some(message),
                    ..state
                },
                _ => state,
            },

            DetailIntent::TeaserOpened => {
                if state.remote.ready().is_none() || state.dialog_open() {
                    return state;
                }
                ProductDetailState {
                    teaser: true,
                    ..state
                }
            }

            DetailIntent::TeaserClosed => ProductDetailState {
                teaser: false,
                ..state
            },
        }
    }
}
