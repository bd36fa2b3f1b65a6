//! The keymap: one place that turns key events into app actions.
//!
//! Dialogs take the keyboard before the screen under them; text fields
//! take plain characters before screen shortcuts, so typing "add" into a
//! title never navigates anywhere.

use crate::ui::app::{App, Screen};
use crate::ui::detail::DeleteFlow;
use crate::ui::form::FormIntent;
use crate::ui::router::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the pressed key applies to. Copied out of the screen state up
/// front so the keymap can mutate the app freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyTarget {
    Home,
    List,
    DetailView,
    DeleteConfirm { in_flight: bool },
    DeleteDone,
    Teaser,
    CreateForm { dialog_open: bool },
    EditForm { dialog_open: bool, editable: bool },
}

fn key_target(screen: &Screen) -> KeyTarget {
    match screen {
        Screen::Home => KeyTarget::Home,
        Screen::List(_) => KeyTarget::List,
        Screen::Detail(state) => {
            if state.teaser {
                return KeyTarget::Teaser;
            }
            match state.delete {
                DeleteFlow::Idle => KeyTarget::DetailView,
                DeleteFlow::ConfirmPending { in_flight } => KeyTarget::DeleteConfirm { in_flight },
                DeleteFlow::Deleted { .. } => KeyTarget::DeleteDone,
            }
        }
        Screen::Create(state) => KeyTarget::CreateForm {
            dialog_open: state.dialog_open(),
        },
        Screen::Edit(state) => KeyTarget::EditForm {
            dialog_open: state.dialog_open(),
            editable: state.remote.ready().is_some(),
        },
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key_target(app.screen()) {
        KeyTarget::Home => {
            if key.code == KeyCode::Enter {
                app.navigate(Route::Products);
            }
        }

        KeyTarget::List => match key.code {
            KeyCode::Up => app.list_move_up(),
            KeyCode::Down => app.list_move_down(),
            KeyCode::Enter => app.open_selected_detail(),
            KeyCode::Char('e') => app.open_selected_edit(),
            KeyCode::Char('a') => app.navigate(Route::AddProduct),
            KeyCode::Esc => app.back(),
            _ => {}
        },

        KeyTarget::DetailView => match key.code {
            KeyCode::Char('c') => app.open_teaser(),
            KeyCode::Char('d') => app.request_delete(),
            KeyCode::Esc => app.back(),
            _ => {}
        },

        KeyTarget::DeleteConfirm { in_flight } => {
            // While the remove call is out the dialog only waits.
            if in_flight {
                return;
            }
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(),
                KeyCode::Char('n') | KeyCode::Esc => app.cancel_delete(),
                _ => {}
            }
        }

        KeyTarget::DeleteDone => {
            if key.code == KeyCode::Enter {
                app.navigate(Route::Products);
            }
        }

        KeyTarget::Teaser => match key.code {
            KeyCode::Esc | KeyCode::Enter => app.close_teaser(),
            _ => {}
        },

        KeyTarget::CreateForm { dialog_open } => {
            if dialog_open {
                if key.code == KeyCode::Enter {
                    app.navigate(Route::Products);
                }
                return;
            }
            if let Some(intent) = form_intent(key) {
                app.create_form(intent);
                return;
            }
            match key.code {
                KeyCode::Enter => app.submit_create(),
                KeyCode::Esc => app.back(),
                _ => {}
            }
        }

        KeyTarget::EditForm { dialog_open, editable } => {
            if dialog_open {
                if key.code == KeyCode::Enter {
                    app.navigate(Route::Products);
                }
                return;
            }
            if !editable {
                // Loading or failed: nothing to type into.
                if key.code == KeyCode::Esc {
                    app.back();
                }
                return;
            }
            if let Some(intent) = form_intent(key) {
                app.edit_form(intent);
                return;
            }
            match key.code {
                KeyCode::Enter => app.submit_edit(),
                KeyCode::Esc => app.back(),
                _ => {}
            }
        }
    }
}

/// Keys that edit the focused form field. Shift is fine (capitals,
/// BackTab); Ctrl and Alt chords are left for shortcuts.
fn form_intent(key: KeyEvent) -> Option<FormIntent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(FormIntent::Insert(c)),
        KeyCode::Backspace => Some(FormIntent::Backspace),
        KeyCode::Tab | KeyCode::Down => Some(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(FormIntent::FocusPrev),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::{Price, Product};
    use crate::ui::events::{ApiEvent, ApiOutcome, CatalogCommand};
    use crossterm::event::KeyEventState;
    use tokio::sync::mpsc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            description: "desc".to_string(),
            category: "misc".to_string(),
            price: Price::Number(5.0),
            image: String::new(),
        }
    }

    /// App wired to a command channel, so tests can watch what goes out
    /// and answer with the right generation.
    fn wired_app() -> (App, mpsc::Receiver<CatalogCommand>) {
        let (tx, rx) = mpsc::channel(8);
        let mut app = App::new();
        app.set_command_sender(tx);
        (app, rx)
    }

    fn answer_detail(app: &mut App, rx: &mut mpsc::Receiver<CatalogCommand>) {
        let command = rx.try_recv().expect("a fetch should have been sent");
        let CatalogCommand::Get { generation, id } = command else {
            panic!("expected a get command");
        };
        app.on_api(ApiEvent {
            generation,
            outcome: ApiOutcome::Fetched(Ok(product(id))),
        });
    }

    #[test]
    fn ctrl_q_quits_from_any_screen() {
        let (mut app, _rx) = wired_app();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let (mut app, _rx) = wired_app();
        let mut key = ctrl('q');
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }

    #[test]
    fn enter_on_home_opens_the_products_list() {
        let (mut app, mut rx) = wired_app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.route(), Route::Products);
        assert!(matches!(rx.try_recv(), Ok(CatalogCommand::List { .. })));
    }

    #[test]
    fn esc_walks_back_through_the_stack() {
        let (mut app, _rx) = wired_app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Char('a')));
        assert_eq!(app.route(), Route::AddProduct);

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.route(), Route::Products);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.route(), Route::Home);
    }

    #[test]
    fn typing_in_a_form_never_triggers_shortcuts() {
        let (mut app, _rx) = wired_app();
        app.open(Route::AddProduct);
        for c in ['a', 'd', 'e', 'q'] {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.route(), Route::AddProduct);
        assert!(!app.should_quit());

        let Screen::Create(state) = app.screen() else {
            panic!("expected the create screen");
        };
        assert_eq!(state.form.fields[0].value, "adeq");
    }

    #[test]
    fn delete_flow_keys_confirm_and_cancel() {
        let (mut app, mut rx) = wired_app();
        app.open(Route::ProductDetail(7));
        answer_detail(&mut app, &mut rx);

        handle_key(&mut app, press(KeyCode::Char('d')));
        handle_key(&mut app, press(KeyCode::Char('n')));
        let Screen::Detail(state) = app.screen() else {
            panic!("expected the detail screen");
        };
        assert_eq!(state.delete, DeleteFlow::Idle);

        handle_key(&mut app, press(KeyCode::Char('d')));
        handle_key(&mut app, press(KeyCode::Char('y')));
        let Screen::Detail(state) = app.screen() else {
            panic!("expected the detail screen");
        };
        assert_eq!(state.delete, DeleteFlow::ConfirmPending { in_flight: true });
        assert!(matches!(rx.try_recv(), Ok(CatalogCommand::Remove { id: 7, .. })));
    }

    #[test]
    fn teaser_keys_open_and_close() {
        let (mut app, mut rx) = wired_app();
        app.open(Route::ProductDetail(7));
        answer_detail(&mut app, &mut rx);

        handle_key(&mut app, press(KeyCode::Char('c')));
        let Screen::Detail(state) = app.screen() else {
            panic!("expected the detail screen");
        };
        assert!(state.teaser);

        // A dialog is up, so 'd' must not start a delete.
        handle_key(&mut app, press(KeyCode::Char('d')));
        let Screen::Detail(state) = app.screen() else {
            panic!("expected the detail screen");
        };
        assert_eq!(state.delete, DeleteFlow::Idle);

        handle_key(&mut app, press(KeyCode::Esc));
        let Screen::Detail(state) = app.screen() else {
            panic!("expected the detail screen");
        };
        assert!(!state.teaser);
    }

    #[test]
    fn success_dialog_only_answers_enter() {
        let (mut app, mut rx) = wired_app();
        app.open(Route::AddProduct);
        for c in "Shirt".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        for _ in 0..4 {
            handle_key(&mut app, press(KeyCode::Tab));
            for c in "x".chars() {
                handle_key(&mut app, press(KeyCode::Char(c)));
            }
        }
        handle_key(&mut app, press(KeyCode::Enter));
        let CatalogCommand::Create { generation, draft } =
            rx.try_recv().expect("a create should have been sent")
        else {
            panic!("expected a create command");
        };
        app.on_api(ApiEvent {
            generation,
            outcome: ApiOutcome::Created(Ok(Product {
                id: 21,
                title: draft.title.clone(),
                description: draft.description.clone(),
                category: draft.category.clone(),
                price: draft.price.clone(),
                image: draft.image.clone(),
            })),
        });

        // Esc does not dismiss it; Enter goes back to the list.
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.route(), Route::AddProduct);
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.route(), Route::Products);
    }
}
