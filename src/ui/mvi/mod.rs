//! Model-View-Intent (MVI) architecture primitives.
//!
//! Every screen in the app is a small state machine built from these
//! traits: a state struct, an intent enum, and a pure reducer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or completed catalog calls
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Side effects (network calls, navigation) never happen inside a reducer;
//! the caller decides them around the dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
