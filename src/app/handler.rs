//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which every input
//! reaches the application state: keystrokes, debounced search terms,
//! reach-end signals and fetch completions. It mutates [`AppState`] and
//! returns whether a re-render is needed together with the actions to run.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Search box**: `FocusSearch`, `FocusList`, `Char`, `Backspace`, `ClearSearch`
//! - **List control**: `Start`, `SearchSettled`, `CategorySelected`, `TailVisible`
//! - **Type filter**: `NextCategory`, `PrevCategory`, `AllCategories`
//! - **Worker**: `FetchCompleted`
//!
//! After every event the detail panel is pointed at the selected row, which
//! may add a detail fetch to the returned actions.
//!
//! # Example
//!
//! ```rust
//! use pokedex_explorer::app::{handle_event, Action, AppState, Event};
//! use pokedex_explorer::ui::Theme;
//!
//! let mut state = AppState::new(20, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::Fetch(_)));
//! # Ok::<(), pokedex_explorer::domain::ExplorerError>(())
//! ```

use super::modes::InputMode;
use super::state::Applied;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{FetchKind, FetchRequest, FetchResponse};

/// Inputs to the application state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the initial browse view and loads the category list.
    Start,

    /// Moves the selection down by one row.
    KeyDown,
    /// Moves the selection up by one row.
    KeyUp,

    /// Sends keystrokes to the search box.
    FocusSearch,
    /// Sends keystrokes back to the list.
    FocusList,
    /// Appends a character to the search box.
    Char(char),
    /// Removes the last character from the search box.
    Backspace,
    /// Empties the search box and returns to the list.
    ClearSearch,

    /// The debounce timer settled on a search term.
    SearchSettled(String),

    /// Selects the next category in the type filter.
    NextCategory,
    /// Selects the previous category in the type filter.
    PrevCategory,
    /// Clears the type filter.
    AllCategories,
    /// Sets the category filter directly. `None` means all types.
    CategorySelected(Option<String>),

    /// The sentinel row entered the viewport.
    TailVisible,

    /// A fetch issued through [`Action::Fetch`] finished.
    FetchCompleted(FetchResponse),

    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(render, actions)`: whether the view changed and the side effects
/// to run in order.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for
/// handlers that propagate errors.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let (render, mut actions) = dispatch(state, event)?;

    if let Some(request) = state.sync_detail() {
        actions.push(Action::Fetch(request));
    }

    Ok((render, actions))
}

fn fetch(request: Option<FetchRequest>) -> Vec<Action> {
    request.map(Action::Fetch).into_iter().collect()
}

#[allow(clippy::too_many_lines)]
fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::Start => {
            let first_page = state.list.start();
            state.selected_index = 0;
            Ok((
                true,
                vec![Action::Fetch(first_page), Action::Fetch(FetchRequest::categories())],
            ))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::FocusSearch => {
            state.input_mode = InputMode::Typing;
            Ok((true, vec![]))
        }
        Event::FocusList => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            state.search_input.push(*c);
            tracing::trace!(query = %state.search_input, "search input updated");
            Ok((true, vec![Action::DebounceSearch(state.search_input.clone())]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Typing || state.search_input.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![Action::DebounceSearch(state.search_input.clone())]))
        }
        Event::ClearSearch => {
            state.input_mode = InputMode::Normal;
            state.search_input.clear();
            Ok((true, vec![Action::DebounceSearch(String::new())]))
        }
        Event::SearchSettled(term) => {
            let request = state.list.set_search_term(term);
            if request.is_none() {
                return Ok((false, vec![]));
            }
            state.selected_index = 0;
            Ok((true, fetch(request)))
        }
        Event::NextCategory => {
            let category = state.filter.next();
            dispatch(state, &Event::CategorySelected(category))
        }
        Event::PrevCategory => {
            let category = state.filter.prev();
            dispatch(state, &Event::CategorySelected(category))
        }
        Event::AllCategories => dispatch(state, &Event::CategorySelected(None)),
        Event::CategorySelected(category) => {
            state.filter.select(category.as_deref());
            let request = state.list.set_category(category.clone());
            if request.is_none() {
                return Ok((true, vec![]));
            }
            state.selected_index = 0;
            Ok((true, fetch(request)))
        }
        Event::TailVisible => {
            let request = state.list.request_next_page();
            Ok((request.is_some(), fetch(request)))
        }
        Event::FetchCompleted(response) if response.request.is_list_fetch() => {
            if state.list.apply(response) == Applied::Stale {
                return Ok((false, vec![]));
            }
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::FetchCompleted(response) => match response.request {
            FetchKind::Detail { .. } => Ok((state.detail.apply(response), vec![])),
            _ => Ok((state.filter.apply(response), vec![])),
        },
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}
