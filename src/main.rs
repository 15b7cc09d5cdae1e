//! Terminal host and entry point.
//!
//! This module is the thin integration layer between the explorer library and
//! a real terminal. It parses the command line, loads configuration, switches
//! the terminal into raw mode on the alternate screen and drives the
//! [`ListController`] from a single `tokio::select!` loop.
//!
//! # Event Loop
//!
//! ```text
//!            ┌──────────────── tokio::select! ────────────────┐
//! keys ────→ │ crossterm EventStream  → map_key_event → dispatch │
//! fetches ─→ │ completions channel    → complete                 │
//! timer ───→ │ debounce deadline      → tick                     │
//!            └────────────────────────────────────────────────────┘
//!                               │ dirty
//!                               ▼
//!                  render → on_tail_visible(tail drawn?)
//! ```
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+c`: Quit
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `/`: Focus the search box
//! - `t`/`T`: Next/previous type
//! - `a`: All types
//! - `Esc`: Clear an active search
//! - `q`: Quit
//!
//! In the search box:
//! - characters: Edit the search term
//! - `Backspace`: Delete a character
//! - `Down`/`Up`: Move the selection
//! - `Enter`: Back to the list
//! - `Esc`: Clear the search and go back to the list

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use futures_util::StreamExt;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;

use pokedex_explorer::catalog::{CatalogSource, HttpCatalog};
use pokedex_explorer::infrastructure::SystemClock;
use pokedex_explorer::observability::init_tracing;
use pokedex_explorer::worker::FetchResponse;
use pokedex_explorer::{initialize, AppState, Config, Event, InputMode, ListController, Mode, Result};

/// Browse the PokeAPI Pokédex from the terminal.
#[derive(Debug, Parser)]
#[command(name = "pokedex-explorer", version, about)]
struct Args {
    /// Configuration file (default: config.toml in the data directory)
    #[arg(short, long)]
    config: Option<String>,

    /// PokeAPI base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Entries loaded per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Built-in theme name (catppuccin-mocha, catppuccin-latte)
    #[arg(long)]
    theme: Option<String>,

    /// Custom theme TOML file
    #[arg(long)]
    theme_file: Option<String>,

    /// Log filter, e.g. "debug" or "pokedex_explorer=trace"
    #[arg(long)]
    trace_level: Option<String>,
}

impl Args {
    /// Overrides file values with the flags that were given.
    fn apply(self, config: &mut Config) {
        if let Some(api_url) = self.api_url {
            config.api_url = api_url;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if self.theme.is_some() {
            config.theme = self.theme;
        }
        if self.theme_file.is_some() {
            config.theme_file = self.theme_file;
        }
        if self.trace_level.is_some() {
            config.trace_level = self.trace_level;
        }
    }
}

/// Raw mode and alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "explorer exited with error");
            eprintln!("pokedex-explorer: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    init_tracing(&config);
    tracing::info!(api_url = %config.api_url, page_size = config.page_size, "pokedex explorer starting");

    let source: Arc<dyn CatalogSource> = Arc::new(HttpCatalog::new(&config)?);
    let state = initialize(&config);
    let (mut controller, completions) =
        ListController::new(source, SystemClock, state, config.debounce_interval());

    let guard = TerminalGuard::enter()?;
    let result = event_loop(&mut controller, completions).await;
    controller.shutdown();
    drop(guard);

    result
}

async fn event_loop(
    controller: &mut ListController<SystemClock>,
    mut completions: UnboundedReceiver<FetchResponse>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut dirty = controller.start()?;

    loop {
        // A reach-end may issue a fetch, which changes the status line.
        while dirty {
            let tail_visible = draw(controller.state())?;
            dirty = controller.on_tail_visible(tail_visible)?;
        }

        let deadline = controller.next_deadline();

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let Some(event) = map_key_event(controller.state(), key) {
                        dirty = controller.dispatch(event)?;
                    }
                }
                Some(Ok(TermEvent::Resize(cols, rows))) => {
                    tracing::debug!(cols, rows, "terminal resized");
                    dirty = true;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(response) = completions.recv() => {
                dirty = controller.complete(response)?;
            }
            () = sleep_until(deadline) => {
                dirty = controller.tick()?;
            }
        }

        if controller.should_quit() {
            break;
        }
    }

    Ok(())
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Draws one frame. Returns whether the tail row was drawn.
fn draw(state: &AppState) -> io::Result<bool> {
    let (cols, rows) = terminal::size()?;
    let mut stdout = io::stdout();

    queue!(stdout, Clear(ClearType::All))?;
    let tail_visible = pokedex_explorer::ui::render(state, usize::from(rows), usize::from(cols));
    stdout.flush()?;

    Ok(tail_visible)
}

/// Translates a key press into an application event.
fn map_key_event(state: &AppState, key: KeyEvent) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Event::Quit);
    }

    match state.input_mode {
        InputMode::Typing => Some(match key.code {
            KeyCode::Down => Event::KeyDown,
            KeyCode::Up => Event::KeyUp,
            KeyCode::Enter => Event::FocusList,
            KeyCode::Esc => Event::ClearSearch,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        }),
        InputMode::Normal => Some(match key.code {
            KeyCode::Down | KeyCode::Char('j') => Event::KeyDown,
            KeyCode::Up | KeyCode::Char('k') => Event::KeyUp,
            KeyCode::Char('/') => Event::FocusSearch,
            KeyCode::Char('t') => Event::NextCategory,
            KeyCode::Char('T') => Event::PrevCategory,
            KeyCode::Char('a') => Event::AllCategories,
            KeyCode::Char('q') => Event::Quit,
            KeyCode::Esc if state.list.mode() == Mode::Search || !state.search_input.is_empty() => {
                Event::ClearSearch
            }
            _ => return None,
        }),
    }
}
