//! List state machine and application state.
//!
//! [`ListState`] owns everything the paginated list needs to stay consistent:
//! the accumulated items, the offset of the next page, the exhaustion and
//! pending flags, the generation token and the current mode and filter. Every
//! list fetch is issued through it and every list response is reconciled by
//! [`ListState::apply`].
//!
//! [`AppState`] wraps the list together with the UI-facing pieces (selection,
//! search box, type filter, detail panel, theme) and computes view models.
//!
//! # Generations
//!
//! Entering or leaving search, changing the term or changing the category
//! starts a new view: the generation is incremented, the collection and
//! cursor are cleared and exactly one fetch is issued. Responses carrying an
//! older generation are reported as [`Applied::Stale`] and dropped.
//!
//! # Example
//!
//! ```rust
//! use pokedex_explorer::app::state::ListState;
//!
//! let mut list = ListState::new(20);
//! let first = list.start();
//! assert!(list.is_pending());
//! // A second reach-end while the first page is in flight is ignored.
//! assert!(list.request_next_page().is_none());
//! # let _ = first;
//! ```

use super::detail::{DetailPanel, DetailStatus};
use super::filter::{TypeFilter, ALL_TYPES};
use super::modes::{InputMode, LoadStatus, Mode};
use crate::domain::Item;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatusKind, StatusLine, UIViewModel,
    DETAIL_PANEL_ROWS,
};
use crate::worker::{FetchKind, FetchOutcome, FetchRequest, FetchResponse};
use std::collections::HashSet;

/// Result of reconciling one list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response belonged to the current view and was folded in.
    Merged,
    /// The response was issued under an older generation and was discarded.
    Stale,
}

/// Read-only view of the list for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    pub items: Vec<Item>,
    pub mode: Mode,
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// Whether reaching the tail can load more. Always `false` in search.
    pub has_more: bool,
}

/// The paginated list state machine.
#[derive(Debug, Clone)]
pub struct ListState {
    items: Vec<Item>,
    keys: HashSet<String>,
    cursor: usize,
    page_size: usize,
    exhausted: bool,
    pending: bool,
    generation: u64,
    mode: Mode,
    search_term: String,
    category: Option<String>,
    status: LoadStatus,
}

impl ListState {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            keys: HashSet::new(),
            cursor: 0,
            page_size: page_size.max(1),
            exhausted: false,
            pending: false,
            generation: 0,
            mode: Mode::Browse,
            search_term: String::new(),
            category: None,
            status: LoadStatus::Idle,
        }
    }

    /// Opens the initial browse view and returns its first page request.
    pub fn start(&mut self) -> FetchRequest {
        self.mode = Mode::Browse;
        self.search_term.clear();
        self.begin_view()
    }

    /// Applies a settled search term.
    ///
    /// A non-empty term enters (or re-targets) search; an empty term returns
    /// to browsing. Settling the term that is already active does nothing.
    pub fn set_search_term(&mut self, term: &str) -> Option<FetchRequest> {
        let term = term.trim().to_lowercase();

        if term.is_empty() {
            if self.mode == Mode::Browse {
                return None;
            }
            tracing::debug!("leaving search");
            self.mode = Mode::Browse;
            self.search_term.clear();
            return Some(self.begin_view());
        }

        if self.mode == Mode::Search && self.search_term == term {
            tracing::debug!(term = %term, "search term unchanged");
            return None;
        }

        tracing::debug!(term = %term, "entering search");
        self.mode = Mode::Search;
        self.search_term = term;
        Some(self.begin_view())
    }

    /// Changes the category filter, restarting the current view.
    ///
    /// In search mode the lookup for the current term is issued again.
    pub fn set_category(&mut self, category: Option<String>) -> Option<FetchRequest> {
        if self.category == category {
            return None;
        }
        tracing::debug!(category = ?category, "category changed");
        self.category = category;
        Some(self.begin_view())
    }

    /// Requests the next page, if browsing and not already loading or done.
    pub fn request_next_page(&mut self) -> Option<FetchRequest> {
        if self.mode != Mode::Browse || self.pending || self.exhausted {
            tracing::trace!(
                mode = ?self.mode,
                pending = self.pending,
                exhausted = self.exhausted,
                "next page suppressed"
            );
            return None;
        }

        self.pending = true;
        self.status = LoadStatus::Loading;
        tracing::debug!(cursor = self.cursor, generation = self.generation, "requesting next page");
        Some(FetchRequest::page(
            self.generation,
            self.cursor,
            self.page_size,
            self.category.clone(),
        ))
    }

    /// Reconciles a list response with the current view.
    pub fn apply(&mut self, response: &FetchResponse) -> Applied {
        if response.generation != self.generation {
            tracing::debug!(
                generation = response.generation,
                current = self.generation,
                "discarding stale list response"
            );
            return Applied::Stale;
        }

        self.pending = false;
        self.status = LoadStatus::Idle;

        match (&response.request, &response.outcome) {
            (FetchKind::Page { .. }, FetchOutcome::Page(batch)) => {
                let before = self.items.len();
                for item in &batch.items {
                    if self.keys.insert(item.key.clone()) {
                        self.items.push(item.clone());
                    }
                }
                if !batch.items.is_empty() || batch.has_more {
                    self.cursor += self.page_size;
                }
                self.exhausted = !batch.has_more;
                tracing::debug!(
                    received = batch.items.len(),
                    appended = self.items.len() - before,
                    cursor = self.cursor,
                    exhausted = self.exhausted,
                    "page merged"
                );
            }
            (FetchKind::Page { category, .. }, FetchOutcome::NotFound { .. }) => {
                tracing::debug!(category = ?category, "category has no listing");
                self.exhausted = true;
            }
            (FetchKind::Lookup { .. }, FetchOutcome::Found(item)) => {
                self.clear_items();
                self.keys.insert(item.key.clone());
                self.items.push(item.clone());
                self.exhausted = true;
            }
            (FetchKind::Lookup { key }, FetchOutcome::NotFound { .. }) => {
                tracing::debug!(key = %key, "lookup found nothing");
                self.clear_items();
                self.exhausted = true;
            }
            (_, FetchOutcome::Failed { message }) => {
                tracing::warn!(error = %message, "list fetch failed");
                self.status = LoadStatus::Error(message.clone());
            }
            (request, outcome) => {
                tracing::warn!(request = ?request, outcome = ?outcome, "unexpected list response");
            }
        }

        Applied::Merged
    }

    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            items: self.items.clone(),
            mode: self.mode,
            is_loading: self.status.is_loading(),
            error_message: self.status.error_message().map(str::to_string),
            has_more: self.has_more(),
        }
    }

    /// Accumulated rows in insertion order, one per key.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Load status of the most recent list fetch.
    ///
    /// `Error` keeps the collection; the next reach-end retries from the
    /// same cursor.
    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Offset of the next page. Always a multiple of the page size.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Token of the current view. Responses carrying another value are stale.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a list fetch for the current generation is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether the catalog reported no further page, or a lookup resolved.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Whether reaching the tail can load more rows.
    ///
    /// Search shows a single lookup result and never pages, so this is
    /// `false` there regardless of the exhaustion flag.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        matches!(self.mode, Mode::Browse) && !self.exhausted
    }

    /// Active type filter; `None` lists every entry.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Settled, normalized search term. Empty while browsing.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    fn clear_items(&mut self) {
        self.items.clear();
        self.keys.clear();
    }

    /// Starts a new generation and issues the one fetch for the current view.
    fn begin_view(&mut self) -> FetchRequest {
        self.generation += 1;
        self.clear_items();
        self.cursor = 0;
        self.exhausted = false;
        self.pending = true;
        self.status = LoadStatus::Loading;

        tracing::debug!(
            generation = self.generation,
            mode = ?self.mode,
            category = ?self.category,
            "view reset"
        );

        match self.mode {
            Mode::Browse => FetchRequest::page(self.generation, 0, self.page_size, self.category.clone()),
            Mode::Search => FetchRequest::lookup(self.generation, self.search_term.clone()),
        }
    }
}

/// Central application state container.
///
/// Mutated by the event handler; view models are computed on demand.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The paginated list.
    pub list: ListState,

    /// Type filter cycled with `t`/`T`.
    ///
    /// Holds the category names loaded at start. Its selection mirrors
    /// [`ListState::category`]; a failed category load is kept here and
    /// shown in the header.
    pub filter: TypeFilter,

    /// Detail record of the selected row.
    ///
    /// Re-targeted by [`AppState::sync_detail`] after every event. Only the
    /// latest ticket's response is applied.
    pub detail: DetailPanel,

    /// Which part of the UI receives keystrokes.
    pub input_mode: InputMode,

    /// Raw contents of the search box, before debouncing.
    pub search_input: String,

    /// Zero-based index of the selected row.
    ///
    /// Clamped to the collection after every list change.
    pub selected_index: usize,

    /// Color scheme used by the renderer.
    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(page_size: usize, theme: Theme) -> Self {
        Self {
            list: ListState::new(page_size),
            filter: TypeFilter::new(),
            detail: DetailPanel::new(),
            input_mode: InputMode::Normal,
            search_input: String::new(),
            selected_index: 0,
            theme,
        }
    }

    /// Moves the selection down, stopping at the last row.
    pub fn move_selection_down(&mut self) {
        let len = self.list.items().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1).min(len - 1);
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.list.items().get(self.selected_index)
    }

    /// Keeps the selection inside the collection.
    pub fn clamp_selection(&mut self) {
        let len = self.list.items().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Points the detail panel at the selected row.
    ///
    /// Returns the lookup request when the panel needs one.
    pub fn sync_detail(&mut self) -> Option<FetchRequest> {
        let selected = self.list.items().get(self.selected_index);
        self.detail.show(selected)
    }

    /// Computes a renderable view model for a `rows` x `cols` terminal.
    ///
    /// The visible window is centered on the selection and shifted back when
    /// it would run past the end of the collection. A terminal too short for
    /// the bottom panels shows no table rows, and the tail never counts as
    /// visible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let items = self.list.items();
        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(items.len());
        if visible_end - visible_start.min(visible_end) < available_rows && items.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }
        let visible_start = visible_start.min(visible_end);

        let display_items = items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, item)| Self::compute_display_item(item, visible_start + offset == self.selected_index, cols))
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            search_bar: self.compute_search_bar(),
            status: self.compute_status(),
            detail: self.compute_detail(),
            tail_visible: available_rows > 0 && !items.is_empty() && visible_end == items.len(),
        }
    }

    fn compute_display_item(item: &Item, is_selected: bool, cols: usize) -> DisplayItem {
        const NUMBER_COLUMN_WIDTH: usize = 8;

        let max_name = cols.saturating_sub(NUMBER_COLUMN_WIDTH + 2).max(4);
        let name = if item.display_name.chars().count() > max_name {
            let kept: String = item.display_name.chars().take(max_name - 3).collect();
            format!("{kept}...")
        } else {
            item.display_name.clone()
        };

        DisplayItem {
            number: item.id.map(|id| format!("#{id:03}")).unwrap_or_default(),
            name,
            is_selected,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.list.items().len();
        let types_note = self
            .filter
            .error()
            .map(|error| format!(" · types unavailable: {error}"))
            .unwrap_or_default();
        let title = match self.list.mode() {
            Mode::Browse => format!(
                " Pokédex · {} ({count}){types_note} ",
                self.list.category().unwrap_or(ALL_TYPES)
            ),
            Mode::Search => format!(" Pokédex · search \"{}\" ({count}){types_note} ", self.list.search_term()),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Typing => "Type to search  Enter: back to list  Esc: clear search",
            InputMode::Normal => "j/k: navigate  /: search  t/T: next/prev type  a: all types  q: quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let is_focused = self.input_mode == InputMode::Typing;
        if is_focused || !self.search_input.is_empty() || self.list.mode() == Mode::Search {
            Some(SearchBarInfo {
                query: self.search_input.clone(),
                is_focused,
            })
        } else {
            None
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.list.items().is_empty() || self.list.status().is_loading() {
            return None;
        }

        let empty = match self.list.mode() {
            Mode::Search => EmptyState {
                message: format!("No Pokémon named \"{}\"", self.list.search_term()),
                subtitle: "Esc clears the search".to_string(),
            },
            Mode::Browse if self.list.status().error_message().is_some() => EmptyState {
                message: "Could not load the Pokédex".to_string(),
                subtitle: "Change the type filter or search to retry".to_string(),
            },
            Mode::Browse => EmptyState {
                message: format!("No Pokémon in {}", self.filter.label()),
                subtitle: "Press a to show all types".to_string(),
            },
        };
        Some(empty)
    }

    fn compute_status(&self) -> Option<StatusLine> {
        match self.list.status() {
            LoadStatus::Loading => Some(StatusLine {
                text: "Loading...".to_string(),
                kind: StatusKind::Loading,
            }),
            LoadStatus::Error(message) => Some(StatusLine {
                text: format!("Error: {message}"),
                kind: StatusKind::Error,
            }),
            LoadStatus::Idle if self.list.mode() == Mode::Browse && self.list.is_exhausted() && !self.list.items().is_empty() => {
                Some(StatusLine {
                    text: "End of list".to_string(),
                    kind: StatusKind::End,
                })
            }
            LoadStatus::Idle => None,
        }
    }

    fn compute_detail(&self) -> DetailInfo {
        let title = self
            .selected_item()
            .map(|item| match item.id {
                Some(id) => format!("#{id:03} {}", item.display_name),
                None => item.display_name.clone(),
            })
            .unwrap_or_default();

        match self.detail.status() {
            DetailStatus::Empty => DetailInfo {
                title,
                rows: vec![],
                message: Some("Nothing selected".to_string()),
            },
            DetailStatus::Loading => DetailInfo {
                title,
                rows: vec![],
                message: Some("Loading details...".to_string()),
            },
            DetailStatus::Failed(message) => DetailInfo {
                title,
                rows: vec![],
                message: Some(format!("Details unavailable: {message}")),
            },
            DetailStatus::Loaded(detail) => {
                let stats = detail
                    .stats
                    .iter()
                    .map(|(name, base)| format!("{name} {base}"))
                    .collect::<Vec<_>>()
                    .join("  ");
                DetailInfo {
                    title,
                    rows: vec![
                        ("Types".to_string(), detail.types.join(", ")),
                        (
                            "Size".to_string(),
                            format!(
                                "{:.1} m, {:.1} kg",
                                f64::from(detail.height) / 10.0,
                                f64::from(detail.weight) / 10.0
                            ),
                        ),
                        ("Abilities".to_string(), detail.abilities.join(", ")),
                        ("Stats".to_string(), stats),
                    ],
                    message: None,
                }
            }
        }
    }

    /// Rows left for the table after the header, search box, status line,
    /// detail panel and footer.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let chrome = 7 + DETAIL_PANEL_ROWS;
        let search = if self.compute_search_bar().is_some() { 3 } else { 0 };
        total_rows.saturating_sub(chrome + search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Batch, ItemDetail};

    fn entries(range: std::ops::Range<u32>) -> Vec<Item> {
        range.map(|i| Item::entry(format!("mon-{i}"), format!("mon-{i}"), Some(i))).collect()
    }

    fn page(request: &FetchRequest, items: Vec<Item>, has_more: bool) -> FetchResponse {
        FetchResponse::new(request, FetchOutcome::Page(Batch::new(items, has_more)))
    }

    fn keys(list: &ListState) -> Vec<&str> {
        list.items().iter().map(|i| i.key.as_str()).collect()
    }

    #[test]
    fn pages_accumulate_in_order() {
        let mut list = ListState::new(3);
        let first = list.start();
        assert_eq!(list.apply(&page(&first, entries(1..4), true)), Applied::Merged);

        let second = list.request_next_page().unwrap();
        assert_eq!(second.kind, FetchKind::Page { cursor: 3, limit: 3, category: None });
        list.apply(&page(&second, entries(4..6), false));

        assert_eq!(keys(&list), vec!["mon-1", "mon-2", "mon-3", "mon-4", "mon-5"]);
        assert!(list.is_exhausted());
        assert!(!list.snapshot().has_more);
    }

    #[test]
    fn duplicate_keys_are_skipped() {
        let mut list = ListState::new(2);
        let first = list.start();
        list.apply(&page(&first, entries(1..3), true));

        let second = list.request_next_page().unwrap();
        list.apply(&page(&second, entries(2..4), true));

        assert_eq!(keys(&list), vec!["mon-1", "mon-2", "mon-3"]);
    }

    #[test]
    fn single_flight_guard() {
        let mut list = ListState::new(20);
        let first = list.start();
        assert!(list.request_next_page().is_none());

        list.apply(&page(&first, entries(0..20), true));
        assert!(list.request_next_page().is_some());
        assert!(list.request_next_page().is_none());
    }

    #[test]
    fn exhausted_list_issues_no_more_pages() {
        let mut list = ListState::new(20);
        let first = list.start();
        list.apply(&page(&first, entries(0..5), false));

        assert!(list.request_next_page().is_none());
        assert!(list.request_next_page().is_none());
    }

    #[test]
    fn empty_final_page_keeps_cursor() {
        let mut list = ListState::new(10);
        let first = list.start();
        list.apply(&page(&first, vec![], false));

        assert_eq!(list.cursor(), 0);
        assert!(list.is_exhausted());
    }

    #[test]
    fn stale_response_keeps_pending() {
        let mut list = ListState::new(10);
        let old = list.start();
        let fresh = list.set_category(Some("fire".into())).unwrap();

        assert_eq!(list.apply(&page(&old, entries(0..10), true)), Applied::Stale);
        assert!(list.is_pending());
        assert!(list.items().is_empty());

        list.apply(&page(&fresh, entries(100..102), false));
        assert_eq!(keys(&list), vec!["mon-100", "mon-101"]);
    }

    #[test]
    fn failure_keeps_collection_and_allows_retry() {
        let mut list = ListState::new(2);
        let first = list.start();
        list.apply(&page(&first, entries(0..2), true));

        let second = list.request_next_page().unwrap();
        list.apply(&FetchResponse::new(&second, FetchOutcome::Failed { message: "catalog unreachable: reset".into() }));

        let snapshot = list.snapshot();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.error_message.as_deref(), Some("catalog unreachable: reset"));
        assert!(!snapshot.is_loading);

        let retry = list.request_next_page().unwrap();
        assert_eq!(retry.kind, FetchKind::Page { cursor: 2, limit: 2, category: None });
    }

    #[test]
    fn search_replaces_and_clearing_restores_browse() {
        let mut list = ListState::new(20);
        let first = list.start();
        list.apply(&page(&first, entries(0..20), true));

        let lookup = list.set_search_term("  Ditto ").unwrap();
        assert_eq!(lookup.kind, FetchKind::Lookup { key: "ditto".into() });
        assert!(list.items().is_empty());

        let ditto = Item::from_detail(ItemDetail { id: 132, name: "ditto".into(), ..ItemDetail::default() });
        list.apply(&FetchResponse::new(&lookup, FetchOutcome::Found(ditto)));
        assert_eq!(keys(&list), vec!["ditto"]);
        assert_eq!(list.mode(), Mode::Search);
        assert!(list.request_next_page().is_none());

        let browse = list.set_search_term("").unwrap();
        assert_eq!(browse.kind, FetchKind::Page { cursor: 0, limit: 20, category: None });
        assert_eq!(list.mode(), Mode::Browse);
        assert!(list.items().is_empty());
    }

    #[test]
    fn unchanged_term_is_ignored() {
        let mut list = ListState::new(20);
        list.start();
        assert!(list.set_search_term("mew").is_some());
        assert!(list.set_search_term("MEW").is_none());
        assert!(list.set_search_term("").is_some());
        assert!(list.set_search_term("").is_none());
    }

    #[test]
    fn missing_lookup_is_quiet() {
        let mut list = ListState::new(20);
        list.start();
        let lookup = list.set_search_term("doesnotexist123").unwrap();
        list.apply(&FetchResponse::new(&lookup, FetchOutcome::NotFound { key: "doesnotexist123".into() }));

        assert_eq!(
            list.snapshot(),
            ListSnapshot {
                items: vec![],
                mode: Mode::Search,
                is_loading: false,
                error_message: None,
                has_more: false,
            }
        );
    }

    #[test]
    fn category_change_in_search_reissues_lookup() {
        let mut list = ListState::new(20);
        list.start();
        let first = list.set_search_term("eevee").unwrap();
        let again = list.set_category(Some("normal".into())).unwrap();

        assert_eq!(again.kind, FetchKind::Lookup { key: "eevee".into() });
        assert!(again.generation > first.generation);
        assert!(list.set_category(Some("normal".into())).is_none());
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let mut state = AppState::new(50, Theme::default());
        let first = state.list.start();
        state.list.apply(&page(&first, entries(1..51), true));
        state.selected_index = 25;

        let vm = state.compute_viewmodel(30, 80);
        let window = 30 - (7 + DETAIL_PANEL_ROWS);
        assert_eq!(vm.display_items.len(), window);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].number, "#026");
        assert!(!vm.tail_visible);

        state.selected_index = 49;
        assert!(state.compute_viewmodel(30, 80).tail_visible);
    }

    #[test]
    fn short_list_shows_its_tail() {
        let mut state = AppState::new(20, Theme::default());
        let first = state.list.start();
        state.list.apply(&page(&first, entries(1..4), true));

        let vm = state.compute_viewmodel(40, 80);
        assert_eq!(vm.display_items.len(), 3);
        assert!(vm.tail_visible);
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn loading_and_errors_reach_the_status_line() {
        let mut state = AppState::new(20, Theme::default());
        let first = state.list.start();
        assert_eq!(state.compute_viewmodel(30, 80).status.map(|s| s.kind), Some(StatusKind::Loading));

        state.list.apply(&FetchResponse::new(&first, FetchOutcome::Failed { message: "offline".into() }));
        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.status.map(|s| s.text), Some("Error: offline".to_string()));
        assert!(vm.empty_state.is_some());
        assert!(!vm.tail_visible);
    }

    #[test]
    fn leaving_search_returns_to_the_filtered_listing() {
        let mut list = ListState::new(20);
        list.start();
        let fire = list.set_category(Some("fire".into())).unwrap();
        list.apply(&page(&fire, entries(4..7), false));

        list.set_search_term("ditto").unwrap();
        let back = list.set_search_term("").unwrap();

        assert_eq!(
            back.kind,
            FetchKind::Page { cursor: 0, limit: 20, category: Some("fire".into()) }
        );
        assert_eq!(list.mode(), Mode::Browse);
        assert_eq!(list.category(), Some("fire"));
    }

    #[test]
    fn failed_category_load_reaches_the_header() {
        let mut state = AppState::new(20, Theme::default());
        state.list.start();
        state.filter.apply(&FetchResponse::new(
            &FetchRequest::categories(),
            FetchOutcome::Failed { message: "offline-xyz".into() },
        ));

        let title = state.compute_viewmodel(40, 120).header.title;
        assert!(title.contains("All types"), "{title}");
        assert!(title.contains("types unavailable: offline-xyz"), "{title}");
    }

    #[test]
    fn short_terminal_hides_rows_and_tail() {
        let mut state = AppState::new(20, Theme::default());
        let first = state.list.start();
        state.list.apply(&page(&first, entries(1..4), true));

        let vm = state.compute_viewmodel(7 + DETAIL_PANEL_ROWS, 80);
        assert!(vm.display_items.is_empty());
        assert!(!vm.tail_visible);

        let vm = state.compute_viewmodel(8 + DETAIL_PANEL_ROWS, 80);
        assert_eq!(vm.display_items.len(), 1);
        assert!(!vm.tail_visible);
    }

    #[test]
    fn detail_stats_keep_catalog_order() {
        let mut state = AppState::new(20, Theme::default());
        let lookup = state.list.set_search_term("bulbasaur").unwrap();
        let bulbasaur = Item::from_detail(ItemDetail {
            id: 1,
            name: "bulbasaur".into(),
            stats: vec![("hp".into(), 45), ("attack".into(), 49), ("speed".into(), 45)],
            ..ItemDetail::default()
        });
        state.list.apply(&FetchResponse::new(&lookup, FetchOutcome::Found(bulbasaur)));
        assert!(state.sync_detail().is_none());

        let detail = state.compute_viewmodel(40, 80).detail;
        let stats = detail.rows.iter().find(|(label, _)| label == "Stats").map(|(_, value)| value.as_str());
        assert_eq!(stats, Some("hp 45  attack 49  speed 45"));
    }

    #[test]
    fn selection_is_clamped() {
        let mut state = AppState::new(20, Theme::default());
        let first = state.list.start();
        state.list.apply(&page(&first, entries(0..3), false));

        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        for _ in 0..10 {
            state.move_selection_down();
        }
        assert_eq!(state.selected_index, 2);

        state.list.set_category(Some("ice".into()));
        state.clamp_selection();
        assert_eq!(state.selected_index, 0);
    }
}
