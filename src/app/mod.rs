//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the terminal host (main.rs) and the
//! catalog/worker layers. It owns the paginated list state machine and the
//! collaborators that feed it.
//!
//! # Architecture
//!
//! ```text
//! Input → Events → handle_event → State Mutations → Actions → Side Effects
//!                      ↑                                  ↓
//!                      └────────── Fetch Completions ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`controller`]: Composition root driving the list
//! - [`debounce`]: Quiet-period timer for the search box
//! - [`detail`]: Ticketed detail fetches for the selected row
//! - [`filter`]: Type filter categories and selection
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Mode and status enums
//! - [`state`]: List state machine and view model computation
//! - [`visibility`]: One-shot reach-end trigger

pub mod actions;
pub mod controller;
pub mod debounce;
pub mod detail;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod state;
pub mod visibility;

pub use actions::Action;
pub use controller::ListController;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, LoadStatus, Mode};
pub use state::{AppState, ListSnapshot, ListState};
