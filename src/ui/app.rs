use crate::catalog::product::ProductId;
use crate::ui::create::{CreateFormState, CreateIntent, CreateReducer};
use crate::ui::detail::{DeleteFlow, DetailIntent, DetailReducer, ProductDetailState};
use crate::ui::edit::{EditFormState, EditIntent, EditReducer};
use crate::ui::events::{ApiEvent, ApiOutcome, CatalogCommand, Generation};
use crate::ui::form::FormIntent;
use crate::ui::list::{ListIntent, ListReducer, ProductListState};
use crate::ui::mvi::Reducer;
use crate::ui::router::Route;
use tokio::sync::mpsc;

pub type CatalogCommandSender = mpsc::Sender<CatalogCommand>;

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// The mounted screen and its state. Navigation replaces the whole value,
/// so screen state never leaks across navigations.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    List(ProductListState),
    Detail(ProductDetailState),
    Create(CreateFormState),
    Edit(EditFormState),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
/// No-op when a different screen is mounted.
macro_rules! dispatch_screen {
    ($self:expr, $variant:path, $reducer:ty, $intent:expr) => {
        if let $variant(state) = &mut $self.screen {
            *state = <$reducer>::reduce(std::mem::take(state), $intent);
        }
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    screen: Screen,
    back_stack: Vec<Route>,
    /// Bumped on every navigation; catalog results tagged with an older
    /// value are dropped.
    generation: Generation,
    command_sender: Option<CatalogCommandSender>,
    last_command_error: Option<String>,
    tick: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            route: Route::Home,
            screen: Screen::Home,
            back_stack: Vec::new(),
            generation: 0,
            command_sender: None,
            last_command_error: None,
            tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn set_command_sender(&mut self, sender: CatalogCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn spinner_frame(&self) -> char {
        SPINNER_FRAMES[(self.tick % SPINNER_FRAMES.len() as u64) as usize]
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Mount the given route without touching the back stack. Used for the
    /// route the app starts on.
    pub fn open(&mut self, route: Route) {
        self.enter(route);
    }

    /// Leave the current route for a new one; Esc comes back here.
    pub fn navigate(&mut self, route: Route) {
        self.back_stack.push(self.route);
        self.enter(route);
    }

    /// Return to the previous route. Re-entering re-fetches: the screen is
    /// rebuilt fresh, never restored.
    pub fn back(&mut self) {
        if let Some(route) = self.back_stack.pop() {
            self.enter(route);
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    fn enter(&mut self, route: Route) {
        self.generation += 1;
        let generation = self.generation;
        self.route = route;
        self.screen = match route {
            Route::Home => Screen::Home,
            Route::Products => {
                self.send_command(CatalogCommand::List { generation });
                Screen::List(ProductListState::default())
            }
            Route::ProductDetail(id) => {
                self.send_command(CatalogCommand::Get { generation, id });
                Screen::Detail(ProductDetailState::for_product(id))
            }
            Route::AddProduct => Screen::Create(CreateFormState::default()),
            Route::EditProduct(id) => {
                self.send_command(CatalogCommand::Get { generation, id });
                Screen::Edit(EditFormState::for_product(id))
            }
        };
        tracing::info!(path = %route.path(), generation, "navigated");
    }

    // ========================================================================
    // Finished catalog calls
    // ========================================================================

    pub fn on_api(&mut self, event: ApiEvent) {
        if event.generation != self.generation {
            tracing::debug!(
                stale = event.generation,
                current = self.generation,
                "dropped result for a torn-down screen"
            );
            return;
        }

        match event.outcome {
            ApiOutcome::Listed(result) => {
                let intent = match result {
                    Ok(products) => ListIntent::Loaded { products },
                    Err(err) => ListIntent::LoadFailed {
                        message: format!("Failed to retrieve products: {err}"),
                    },
                };
                self.dispatch_list(intent);
            }

            // One fetch op serves two screens; the generation check above
            // guarantees the mounted screen is the one that asked.
            ApiOutcome::Fetched(result) => {
                if matches!(self.screen, Screen::Detail(_)) {
                    let intent = match result {
                        Ok(product) => DetailIntent::Loaded { product },
                        Err(err) => DetailIntent::LoadFailed {
                            message: format!("Failed to load product details: {err}"),
                        },
                    };
                    self.dispatch_detail(intent);
                } else if matches!(self.screen, Screen::Edit(_)) {
                    let intent = match result {
                        Ok(product) => EditIntent::Loaded { product },
                        Err(err) => EditIntent::LoadFailed {
                            message: format!("Failed to load product: {err}"),
                        },
                    };
                    self.dispatch_edit(intent);
                }
            }

            ApiOutcome::Created(result) => {
                let intent = match result {
                    Ok(product) => CreateIntent::SubmitSucceeded { product },
                    Err(err) => CreateIntent::SubmitFailed {
                        message: format!("Error submitting form. Please try again: {err}"),
                    },
                };
                self.dispatch_create(intent);
            }

            ApiOutcome::Updated(result) => {
                let intent = match result {
                    Ok(product) => EditIntent::SubmitSucceeded { product },
                    Err(err) => EditIntent::SubmitFailed {
                        message: format!("Error submitting form. Please try again: {err}"),
                    },
                };
                self.dispatch_edit(intent);
            }

            ApiOutcome::Removed(result) => {
                let intent = match result {
                    Ok(()) => DetailIntent::DeleteSucceeded,
                    Err(err) => DetailIntent::DeleteFailed {
                        message: format!("Failed to delete product: {err}"),
                    },
                };
                self.dispatch_detail(intent);
            }
        }
    }

    // ========================================================================
    // Products list actions
    // ========================================================================

    pub fn list_move_up(&mut self) {
        self.dispatch_list(ListIntent::MoveUp);
    }

    pub fn list_move_down(&mut self) {
        self.dispatch_list(ListIntent::MoveDown);
    }

    /// Open the detail screen for the product under the cursor.
    pub fn open_selected_detail(&mut self) {
        if let Some(id) = self.selected_product_id() {
            self.navigate(Route::ProductDetail(id));
        }
    }

    /// Open the edit screen for the product under the cursor.
    pub fn open_selected_edit(&mut self) {
        if let Some(id) = self.selected_product_id() {
            self.navigate(Route::EditProduct(id));
        }
    }

    fn selected_product_id(&self) -> Option<ProductId> {
        match &self.screen {
            Screen::List(state) => state.selected_product().map(|product| product.id),
            _ => None,
        }
    }

    // ========================================================================
    // Detail screen actions
    // ========================================================================

    pub fn request_delete(&mut self) {
        self.dispatch_detail(DetailIntent::DeleteRequested);
    }

    pub fn cancel_delete(&mut self) {
        self.dispatch_detail(DetailIntent::DeleteCancelled);
    }

    /// Confirm the pending delete and fire the remove call. A confirm
    /// while one is already in flight changes nothing and sends nothing.
    pub fn confirm_delete(&mut self) {
        let Screen::Detail(state) = &self.screen else {
            return;
        };
        if state.delete != (DeleteFlow::ConfirmPending { in_flight: false }) {
            return;
        }
        let id = state.id;
        let generation = self.generation;

        self.dispatch_detail(DetailIntent::DeleteConfirmed);
        self.send_command(CatalogCommand::Remove { generation, id });
    }

    pub fn open_teaser(&mut self) {
        self.dispatch_detail(DetailIntent::TeaserOpened);
    }

    pub fn close_teaser(&mut self) {
        self.dispatch_detail(DetailIntent::TeaserClosed);
    }

    // ========================================================================
    // Form screen actions
    // ========================================================================

    pub fn create_form(&mut self, intent: FormIntent) {
        self.dispatch_create(CreateIntent::Form(intent));
    }

    pub fn edit_form(&mut self, intent: FormIntent) {
        self.dispatch_edit(EditIntent::Form(intent));
    }

    /// Validate and submit the add-product form. Empty required fields
    /// refuse the submit locally; repeats while in flight are ignored.
    pub fn submit_create(&mut self) {
        let Screen::Create(state) = &self.screen else {
            return;
        };
        if state.in_flight || state.dialog_open() {
            return;
        }
        if let Some(field) = state.form.first_empty() {
            let message = format!("{} is required.", field.label);
            self.dispatch_create(CreateIntent::SubmitRejected { message });
            return;
        }
        let draft = state.form.draft();
        let generation = self.generation;

        self.dispatch_create(CreateIntent::SubmitStarted);
        self.send_command(CatalogCommand::Create { generation, draft });
    }

    /// Validate and submit the edit-product form.
    pub fn submit_edit(&mut self) {
        let Screen::Edit(state) = &self.screen else {
            return;
        };
        if state.in_flight || state.dialog_open() {
            return;
        }
        let Some(form) = state.remote.ready() else {
            return;
        };
        if let Some(field) = form.first_empty() {
            let message = format!("{} is required.", field.label);
            self.dispatch_edit(EditIntent::SubmitRejected { message });
            return;
        }
        let id = state.id;
        let draft = form.draft();
        let generation = self.generation;

        self.dispatch_edit(EditIntent::SubmitStarted);
        self.send_command(CatalogCommand::Update { generation, id, draft });
    }

    // ========================================================================
    // Dispatch and effects
    // ========================================================================

    fn dispatch_list(&mut self, intent: ListIntent) {
        dispatch_screen!(self, Screen::List, ListReducer, intent);
    }

    fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_screen!(self, Screen::Detail, DetailReducer, intent);
    }

    fn dispatch_create(&mut self, intent: CreateIntent) {
        dispatch_screen!(self, Screen::Create, CreateReducer, intent);
    }

    fn dispatch_edit(&mut self, intent: EditIntent) {
        dispatch_screen!(self, Screen::Edit, EditReducer, intent);
    }

    fn send_command(&mut self, command: CatalogCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                self.last_command_error = Some(format!("Catalog request not sent: {err}"));
                false
            }
        }
    }
}
