//! End-to-end walks through the screen reducers, one user story per test.

mod common;

use common::product;
use stockroom::catalog::Price;
use stockroom::ui::create::{CreateFormState, CreateIntent, CreateReducer};
use stockroom::ui::detail::{DeleteFlow, DetailIntent, DetailReducer, ProductDetailState};
use stockroom::ui::edit::{EditFormState, EditIntent, EditReducer};
use stockroom::ui::form::{FieldId, FormIntent};
use stockroom::ui::list::{ListIntent, ListReducer, ProductListState};
use stockroom::ui::mvi::Reducer;

fn type_into_create(mut state: CreateFormState, text: &str) -> CreateFormState {
    for ch in text.chars() {
        state = CreateReducer::reduce(state, CreateIntent::Form(FormIntent::Insert(ch)));
    }
    state
}

fn type_into_edit(mut state: EditFormState, text: &str) -> EditFormState {
    for ch in text.chars() {
        state = EditReducer::reduce(state, EditIntent::Form(FormIntent::Insert(ch)));
    }
    state
}

#[test]
fn list_loads_moves_and_selects() {
    let mut products = vec![
        product(1, "Keyboard", 49.5),
        product(2, "Mouse", 25.0),
        product(3, "Monitor", 199.0),
    ];
    // Prices can arrive as text when the entry was created through the form.
    products[1].price = Price::Text("19.99".to_string());

    let state = ListReducer::reduce(ProductListState::default(), ListIntent::Loaded { products });
    assert_eq!(state.selected, 0);

    let state = ListReducer::reduce(state, ListIntent::MoveDown);
    let state = ListReducer::reduce(state, ListIntent::MoveDown);
    let state = ListReducer::reduce(state, ListIntent::MoveUp);

    let selected = state.selected_product().expect("selection");
    assert_eq!(selected.title, "Mouse");
    assert_eq!(selected.price.display(), "$19.99");
}

#[test]
fn list_failure_shows_the_message_and_nothing_moves() {
    let state = ListReducer::reduce(
        ProductListState::default(),
        ListIntent::LoadFailed {
            message: "Failed to retrieve products: request failed".to_string(),
        },
    );
    assert_eq!(
        state.remote.error_message(),
        Some("Failed to retrieve products: request failed")
    );

    let state = ListReducer::reduce(state, ListIntent::MoveDown);
    assert_eq!(state.selected, 0);
    assert!(state.selected_product().is_none());
}

#[test]
fn detail_delete_walks_to_the_success_dialog() {
    let state = ProductDetailState::for_product(7);
    assert!(state.remote.is_loading());

    let state = DetailReducer::reduce(
        state,
        DetailIntent::Loaded {
            product: product(7, "Old Chair", 80.0),
        },
    );
    let state = DetailReducer::reduce(state, DetailIntent::DeleteRequested);
    assert_eq!(state.delete, DeleteFlow::ConfirmPending { in_flight: false });

    let state = DetailReducer::reduce(state, DetailIntent::DeleteConfirmed);
    assert_eq!(state.delete, DeleteFlow::ConfirmPending { in_flight: true });

    let state = DetailReducer::reduce(state, DetailIntent::DeleteSucceeded);
    assert_eq!(state.delete, DeleteFlow::Deleted { id: 7 });
    assert!(state.dialog_open());
}

#[test]
fn detail_delete_failure_returns_to_the_product() {
    let state = ProductDetailState::for_product(7);
    let state = DetailReducer::reduce(
        state,
        DetailIntent::Loaded {
            product: product(7, "Old Chair", 80.0),
        },
    );
    let state = DetailReducer::reduce(state, DetailIntent::DeleteRequested);
    let state = DetailReducer::reduce(state, DetailIntent::DeleteConfirmed);

    let state = DetailReducer::reduce(
        state,
        DetailIntent::DeleteFailed {
            message: "Failed to delete product: service returned 500: Internal Server Error"
                .to_string(),
        },
    );

    assert_eq!(state.delete, DeleteFlow::Idle);
    assert!(state.notice.as_deref().unwrap().starts_with("Failed to delete product"));
    assert_eq!(state.remote.ready().map(|p| p.title.as_str()), Some("Old Chair"));
}

#[test]
fn detail_cancel_is_ignored_while_the_remove_is_in_flight() {
    let state = ProductDetailState::for_product(7);
    let state = DetailReducer::reduce(state, DetailIntent::DeleteRequested);
    let state = DetailReducer::reduce(state, DetailIntent::DeleteConfirmed);

    let state = DetailReducer::reduce(state, DetailIntent::DeleteCancelled);
    assert_eq!(state.delete, DeleteFlow::ConfirmPending { in_flight: true });
}

#[test]
fn edit_prefills_then_updates() {
    let state = EditFormState::for_product(7);
    assert!(state.remote.is_loading());

    let state = EditReducer::reduce(
        state,
        EditIntent::Loaded {
            product: product(7, "Old Chair", 55.0),
        },
    );

    let form = state.remote.ready().expect("form");
    assert_eq!(form.fields[0].id, FieldId::Title);
    assert_eq!(form.fields[0].value, "Old Chair");
    // A whole number prefills without a trailing ".0".
    let price = form.fields.iter().find(|f| f.id == FieldId::Price).expect("price");
    assert_eq!(price.value, "55");

    let state = type_into_edit(state, "!!");
    let state = EditReducer::reduce(state, EditIntent::SubmitStarted);
    assert!(state.in_flight);

    let state = EditReducer::reduce(
        state,
        EditIntent::SubmitSucceeded {
            product: product(7, "Old Chair!!", 55.0),
        },
    );
    assert_eq!(state.updated, Some(7));
    assert!(!state.in_flight);
    assert!(state.dialog_open());
}

#[test]
fn edit_submit_failure_keeps_the_typed_form() {
    let state = EditFormState::for_product(7);
    let state = EditReducer::reduce(
        state,
        EditIntent::Loaded {
            product: product(7, "Old Chair", 80.0),
        },
    );
    let state = type_into_edit(state, " v2");
    let state = EditReducer::reduce(state, EditIntent::SubmitStarted);
    let state = EditReducer::reduce(
        state,
        EditIntent::SubmitFailed {
            message: "Error submitting form. Please try again: request failed".to_string(),
        },
    );

    assert!(!state.in_flight);
    assert_eq!(state.updated, None);
    assert_eq!(
        state.notice.as_deref(),
        Some("Error submitting form. Please try again: request failed")
    );
    let form = state.remote.ready().expect("form");
    assert_eq!(form.fields[0].value, "Old Chair v2");
}

#[test]
fn create_rejection_then_a_filled_submission() {
    let state = CreateFormState::default();
    let state = CreateReducer::reduce(
        state,
        CreateIntent::SubmitRejected {
            message: "Title is required.".to_string(),
        },
    );
    assert_eq!(state.notice.as_deref(), Some("Title is required."));

    let state = type_into_create(state, "Desk Lamp");
    let state = CreateReducer::reduce(state, CreateIntent::SubmitStarted);
    assert!(state.in_flight);
    assert_eq!(state.notice, None);

    let state = CreateReducer::reduce(
        state,
        CreateIntent::SubmitSucceeded {
            product: product(1, "Desk Lamp", 19.99),
        },
    );
    assert!(!state.in_flight);
    assert_eq!(state.submitted.as_ref().map(|p| p.title.as_str()), Some("Desk Lamp"));
    assert!(state.dialog_open());
}

#[test]
fn dialogs_freeze_form_editing() {
    let state = type_into_create(CreateFormState::default(), "Desk Lamp");
    let state = CreateReducer::reduce(state, CreateIntent::SubmitStarted);
    let state = CreateReducer::reduce(
        state,
        CreateIntent::SubmitSucceeded {
            product: product(1, "Desk Lamp", 19.99),
        },
    );

    let state = type_into_create(state, "zzz");
    assert_eq!(state.form.fields[0].value, "Desk Lamp");
}
