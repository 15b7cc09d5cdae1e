//! Quiet-period debounce for the search box.
//!
//! [`Debouncer`] holds at most one pending value. Each [`Debouncer::feed`]
//! replaces it and restarts the quiet interval; [`Debouncer::poll`] hands the
//! value out once the interval has elapsed. The timer never reads a clock of
//! its own: callers pass `now` from an injected [`Clock`](crate::infrastructure::Clock),
//! and an async host sleeps until [`Debouncer::deadline`].

use std::time::Duration;
use tokio::time::Instant;

/// Collapses bursts of input into one settled value.
///
/// # Examples
///
/// ```
/// use pokedex_explorer::app::debounce::Debouncer;
/// use std::time::Duration;
/// use tokio::time::Instant;
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(300));
/// let t0 = Instant::now();
/// debouncer.feed("pik", t0);
/// debouncer.feed("pikachu", t0 + Duration::from_millis(100));
///
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(300)), None);
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(400)).as_deref(), Some("pikachu"));
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(900)), None);
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
    disposed: bool,
}

impl Debouncer {
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            disposed: false,
        }
    }

    /// Schedules `value` to settle one quiet interval after `now`.
    ///
    /// Replaces any value still waiting. Ignored once the timer is disposed.
    pub fn feed(&mut self, value: impl Into<String>, now: Instant) {
        if self.disposed {
            return;
        }
        let value = value.into();
        tracing::trace!(value = %value, "debounce fed");
        self.pending = Some((value, now + self.quiet));
    }

    /// Returns the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Instant at which the pending value settles.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Disposes the timer. Nothing settles afterwards.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.disposed = true;
    }
}
