//! Composition root for the paginated list.
//!
//! [`ListController`] wires the pieces together:
//!
//! ```text
//! search box ─→ Debouncer ─→ SearchSettled ─┐
//! render ─→ VisibilityTrigger ─→ TailVisible ┼─→ handle_event ─→ Fetch ─→ FetchWorker
//!                          FetchCompleted ←──┘                               │
//!        ↑ ─────────────────────────── completions channel ←─────────────────┘
//! ```
//!
//! The controller is driven through `&mut self`, so no two events are ever
//! processed at once. Fetch completions arrive on the receiver returned by
//! [`ListController::new`]; the host forwards each one with
//! [`ListController::complete`].

use super::debounce::Debouncer;
use super::handler::{handle_event, Event};
use super::modes::Mode;
use super::state::ListSnapshot;
use super::visibility::VisibilityTrigger;
use super::{Action, AppState};
use crate::catalog::CatalogSource;
use crate::domain::Result;
use crate::infrastructure::Clock;
use crate::worker::{FetchOutcome, FetchResponse, FetchWorker};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;

/// Incremental paginated list controller.
pub struct ListController<C: Clock> {
    state: AppState,
    worker: FetchWorker,
    completions: UnboundedSender<FetchResponse>,
    clock: C,
    debouncer: Debouncer,
    trigger: VisibilityTrigger,
    observed_generation: u64,
    quit: bool,
}

impl<C: Clock> ListController<C> {
    /// Creates a controller and the channel its fetch completions arrive on.
    ///
    /// Nothing is fetched until [`start`](Self::start).
    pub fn new(
        source: Arc<dyn CatalogSource>,
        clock: C,
        state: AppState,
        debounce: Duration,
    ) -> (Self, UnboundedReceiver<FetchResponse>) {
        let (completions, receiver) = mpsc::unbounded_channel();
        let observed_generation = state.list.generation();
        let controller = Self {
            state,
            worker: FetchWorker::new(source),
            completions,
            clock,
            debouncer: Debouncer::new(debounce),
            trigger: VisibilityTrigger::new(),
            observed_generation,
            quit: false,
        };
        (controller, receiver)
    }

    /// Loads the first page and the category list.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn start(&mut self) -> Result<bool> {
        tracing::info!("starting list controller");
        self.dispatch(Event::Start)
    }

    /// Runs one event through the handler and executes its actions.
    ///
    /// Returns whether the view needs a re-render.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let list_success = match &event {
            Event::FetchCompleted(response) => {
                response.generation == self.state.list.generation()
                    && response.request.is_list_fetch()
                    && !matches!(response.outcome, FetchOutcome::Failed { .. })
            }
            _ => false,
        };

        let (render, actions) = handle_event(&mut self.state, &event)?;

        for action in actions {
            match action {
                Action::Fetch(request) => self.worker.spawn(request, self.completions.clone()),
                Action::DebounceSearch(value) => self.debouncer.feed(value, self.clock.now()),
                Action::Quit => self.quit = true,
            }
        }

        if list_success {
            self.trigger.rearm();
        }
        self.sync_sentinel();

        Ok(render)
    }

    /// Feeds raw search text to the debounce timer.
    ///
    /// The term reaches the list once it has been stable for the quiet
    /// interval and [`tick`](Self::tick) observes it.
    pub fn set_search_term(&mut self, term: &str) {
        self.state.search_input = term.to_string();
        self.debouncer.feed(term, self.clock.now());
    }

    /// Sets the category filter immediately.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn set_category_filter(&mut self, category: Option<String>) -> Result<bool> {
        self.dispatch(Event::CategorySelected(category))
    }

    /// Reports whether the last rendered row is inside the viewport.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn on_tail_visible(&mut self, visible: bool) -> Result<bool> {
        if self.trigger.observe(visible) {
            tracing::debug!(sentinel = ?self.trigger.sentinel(), "tail reached");
            return self.dispatch(Event::TailVisible);
        }
        Ok(false)
    }

    /// Folds a fetch completion into the state.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn complete(&mut self, response: FetchResponse) -> Result<bool> {
        self.dispatch(Event::FetchCompleted(response))
    }

    /// Delivers a settled search term, if the quiet interval has elapsed.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn tick(&mut self) -> Result<bool> {
        match self.debouncer.poll(self.clock.now()) {
            Some(term) => {
                tracing::debug!(term = %term, "search term settled");
                self.dispatch(Event::SearchSettled(term))
            }
            None => Ok(false),
        }
    }

    /// Instant at which [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot {
        self.state.list.snapshot()
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    /// Disposes the debounce timer and detaches the sentinel.
    pub fn shutdown(&mut self) {
        tracing::info!("shutting down list controller");
        self.debouncer.cancel();
        self.trigger.reset();
    }

    /// Rebinds the sentinel to the current tail row.
    fn sync_sentinel(&mut self) {
        let generation = self.state.list.generation();
        if generation != self.observed_generation {
            self.observed_generation = generation;
            self.trigger.reset();
        }

        if self.state.list.is_pending() || self.state.list.mode() != Mode::Browse {
            self.trigger.detach();
            return;
        }

        match self.state.list.items().last() {
            Some(tail) => self.trigger.attach(&tail.key),
            None => self.trigger.detach(),
        }
    }
}

impl<C: Clock> std::fmt::Debug for ListController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListController")
            .field("generation", &self.state.list.generation())
            .field("mode", &self.state.list.mode())
            .field("sentinel", &self.trigger.sentinel())
            .field("quit", &self.quit)
            .finish_non_exhaustive()
    }
}
