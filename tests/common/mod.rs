//! Shared fixtures for the controller integration tests.

#![allow(dead_code)]

use futures_util::future::BoxFuture;
use pokedex_explorer::catalog::CatalogSource;
use pokedex_explorer::domain::{Batch, ExplorerError, Item, ItemDetail, Result};
use pokedex_explorer::infrastructure::ManualClock;
use pokedex_explorer::worker::FetchResponse;
use pokedex_explorer::{AppState, ListController, Theme};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// One call received by a [`ScriptedCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Page {
        offset: usize,
        limit: usize,
        category: Option<String>,
    },
    ByKey(String),
    Categories,
}

/// In-memory catalog with per-call delays and a call log.
#[derive(Clone, Default)]
pub struct ScriptedCatalog {
    names: Arc<Vec<String>>,
    categories: Arc<BTreeMap<String, Vec<String>>>,
    page_delays: Arc<BTreeMap<Option<String>, Duration>>,
    lookup_delay: Duration,
    fail_pages: Arc<AtomicBool>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedCatalog {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: Arc::new(names.iter().map(|n| (*n).to_string()).collect()),
            ..Self::default()
        }
    }

    /// A catalog of `count` generated names followed by `extra`.
    pub fn generated(count: usize, extra: &[&str]) -> Self {
        let mut names: Vec<String> = (1..=count).map(|i| format!("mon-{i:03}")).collect();
        names.extend(extra.iter().map(|n| (*n).to_string()));
        Self {
            names: Arc::new(names),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, name: &str, members: &[&str]) -> Self {
        Arc::make_mut(&mut self.categories)
            .insert(name.to_string(), members.iter().map(|m| (*m).to_string()).collect());
        self
    }

    pub fn with_page_delay(mut self, category: Option<&str>, delay: Duration) -> Self {
        Arc::make_mut(&mut self.page_delays).insert(category.map(str::to_string), delay);
        self
    }

    pub fn with_lookup_delay(mut self, delay: Duration) -> Self {
        self.lookup_delay = delay;
        self
    }

    /// Makes every page fetch fail until switched off again.
    pub fn fail_pages(&self, failing: bool) {
        self.fail_pages.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn page_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Page { .. }))
            .collect()
    }

    pub fn key_calls(&self, key: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::ByKey(k) if k == key))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl CatalogSource for ScriptedCatalog {
    fn fetch_page(&self, offset: usize, limit: usize, category: Option<&str>) -> BoxFuture<'static, Result<Batch>> {
        self.record(Call::Page {
            offset,
            limit,
            category: category.map(str::to_string),
        });

        let delay = self
            .page_delays
            .get(&category.map(str::to_string))
            .copied()
            .unwrap_or_default();
        let failing = self.fail_pages.load(Ordering::SeqCst);
        let listing = match category {
            Some(category) => self.categories.get(category).cloned(),
            None => Some(self.names.as_ref().clone()),
        };
        let missing = category.unwrap_or_default().to_string();

        Box::pin(async move {
            tokio::time::sleep(delay).await;
            if failing {
                return Err(ExplorerError::Unreachable("scripted outage".to_string()));
            }
            let names = listing.ok_or(ExplorerError::NotFound(missing))?;
            let items = names
                .iter()
                .enumerate()
                .skip(offset)
                .take(limit)
                .map(|(i, name)| Item::entry(name.as_str(), name.as_str(), u32::try_from(i + 1).ok()))
                .collect();
            Ok(Batch::new(items, offset + limit < names.len()))
        })
    }

    fn fetch_by_key(&self, key: &str) -> BoxFuture<'static, Result<Item>> {
        self.record(Call::ByKey(key.to_string()));

        let delay = self.lookup_delay;
        let key = key.to_lowercase();
        let position = self.names.iter().position(|name| *name == key);

        Box::pin(async move {
            tokio::time::sleep(delay).await;
            let index = position.ok_or_else(|| ExplorerError::NotFound(key.clone()))?;
            Ok(Item::from_detail(ItemDetail {
                id: u32::try_from(index + 1).unwrap_or_default(),
                name: key,
                types: vec!["normal".to_string()],
                ..ItemDetail::default()
            }))
        })
    }

    fn fetch_categories(&self) -> BoxFuture<'static, Result<Vec<String>>> {
        self.record(Call::Categories);
        let names = self.categories.keys().cloned().collect();
        Box::pin(async move { Ok(names) })
    }
}

/// Controller over `catalog` driven by a manual clock.
pub fn controller(
    catalog: &ScriptedCatalog,
    page_size: usize,
) -> (ListController<ManualClock>, UnboundedReceiver<FetchResponse>, ManualClock) {
    let clock = ManualClock::new();
    let state = AppState::new(page_size, Theme::default());
    let (controller, completions) = ListController::new(Arc::new(catalog.clone()), clock.clone(), state, DEBOUNCE);
    (controller, completions, clock)
}

/// Feeds completions to the controller until no fetch is left in flight.
///
/// Needs a paused runtime: the timeout only elapses once every scripted
/// delay has run out.
pub async fn drain(controller: &mut ListController<ManualClock>, completions: &mut UnboundedReceiver<FetchResponse>) {
    while let Ok(Some(response)) = tokio::time::timeout(Duration::from_secs(60), completions.recv()).await {
        controller.complete(response).unwrap();
    }
}

/// Advances the manual clock past the quiet interval and delivers the term.
pub fn settle(controller: &mut ListController<ManualClock>, clock: &ManualClock) -> bool {
    clock.advance(DEBOUNCE);
    controller.tick().unwrap()
}

pub fn keys(controller: &ListController<ManualClock>) -> Vec<String> {
    controller.snapshot().items.into_iter().map(|item| item.key).collect()
}
