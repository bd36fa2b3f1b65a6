//! Terminal viewer and editor for a remote product catalog.
//!
//! The `catalog` module talks to the HTTP service, `ui` holds the
//! screens and their reducers, and `config`/`cli` cover startup wiring.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
