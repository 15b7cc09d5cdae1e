//! Side effects requested by the event handler.
//!
//! [`handle_event`](super::handle_event) never performs I/O. It returns a
//! `Vec<Action>` that the [`ListController`](super::ListController) executes
//! in order: fetches go to the worker, search edits go to the debounce timer.
//!
//! # Example
//!
//! ```rust
//! use pokedex_explorer::app::Action;
//! use pokedex_explorer::worker::FetchRequest;
//!
//! let actions = vec![
//!     Action::Fetch(FetchRequest::page(1, 0, 20, None)),
//!     Action::Fetch(FetchRequest::categories()),
//! ];
//! # let _ = actions;
//! ```

use crate::worker::FetchRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Runs a catalog request on the fetch worker.
    ///
    /// The response comes back as `Event::FetchCompleted`.
    Fetch(FetchRequest),

    /// Feeds the raw search box contents to the debounce timer.
    ///
    /// The settled value comes back as `Event::SearchSettled`.
    DebounceSearch(String),

    /// Leaves the event loop.
    Quit,
}
