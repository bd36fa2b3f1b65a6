//! Events feeding the main loop, and the commands leaving it.
//!
//! Keyboard input, the redraw tick, and finished catalog calls all arrive
//! through one channel, so the loop body stays a single `match`.

use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::catalog::error::CatalogError;
use crate::catalog::product::{Product, ProductDraft, ProductId};

/// Identifies the screen instance a command and its result belong to.
///
/// Bumped on every navigation. A result tagged with an old generation is
/// dropped instead of mutating a screen that no longer exists.
pub type Generation = u64;

/// Work requested from the catalog worker.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogCommand {
    List { generation: Generation },
    Get { generation: Generation, id: ProductId },
    Create { generation: Generation, draft: ProductDraft },
    Update { generation: Generation, id: ProductId, draft: ProductDraft },
    Remove { generation: Generation, id: ProductId },
}

impl CatalogCommand {
    pub fn generation(&self) -> Generation {
        match self {
            CatalogCommand::List { generation }
            | CatalogCommand::Get { generation, .. }
            | CatalogCommand::Create { generation, .. }
            | CatalogCommand::Update { generation, .. }
            | CatalogCommand::Remove { generation, .. } => *generation,
        }
    }

    pub fn op(&self) -> &'static str {
        match self {
            CatalogCommand::List { .. } => "list",
            CatalogCommand::Get { .. } => "get",
            CatalogCommand::Create { .. } => "create",
            CatalogCommand::Update { .. } => "update",
            CatalogCommand::Remove { .. } => "remove",
        }
    }
}

/// One finished catalog call, tagged with the generation of the screen
/// that asked for it.
#[derive(Debug)]
pub struct ApiEvent {
    pub generation: Generation,
    pub outcome: ApiOutcome,
}

#[derive(Debug)]
pub enum ApiOutcome {
    Listed(Result<Vec<Product>, CatalogError>),
    Fetched(Result<Product, CatalogError>),
    Created(Result<Product, CatalogError>),
    Updated(Result<Product, CatalogError>),
    Removed(Result<(), CatalogError>),
}

impl ApiOutcome {
    pub fn is_ok(&self) -> bool {
        match self {
            ApiOutcome::Listed(result) => result.is_ok(),
            ApiOutcome::Fetched(result) => result.is_ok(),
            ApiOutcome::Created(result) => result.is_ok(),
            ApiOutcome::Updated(result) => result.is_ok(),
            ApiOutcome::Removed(result) => result.is_ok(),
        }
    }
}

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    Api(ApiEvent),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
