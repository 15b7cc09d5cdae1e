//! Reach-end detection for the rendered list.
//!
//! The host reports after every render whether the last row is on screen. The
//! [`VisibilityTrigger`] turns that level signal into a single edge per
//! sentinel attachment, so a tail that stays visible across many renders asks
//! for more items once.
//!
//! A sentinel whose edge was consumed stays spent while it remains visible,
//! even across a detach and re-attach of the same key. It re-arms when it
//! leaves the viewport or when the owner calls [`VisibilityTrigger::rearm`].
//! The trigger knows nothing about pending fetches or exhaustion; the list
//! state machine applies those guards.

/// One-shot sentinel observer.
#[derive(Debug, Clone, Default)]
pub struct VisibilityTrigger {
    sentinel: Option<String>,
    armed: bool,
    spent: Option<String>,
}

impl VisibilityTrigger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes `key` as the new sentinel.
    ///
    /// Attaching the key that is already observed keeps the current
    /// attachment, including whether it already fired.
    pub fn attach(&mut self, key: &str) {
        if self.sentinel.as_deref() == Some(key) {
            return;
        }
        self.armed = self.spent.as_deref() != Some(key);
        tracing::trace!(sentinel = key, armed = self.armed, "sentinel attached");
        self.sentinel = Some(key.to_string());
    }

    pub fn detach(&mut self) {
        if let Some(key) = self.sentinel.take() {
            tracing::trace!(sentinel = %key, "sentinel detached");
        }
        self.armed = false;
    }

    /// Feeds one visibility sample. Returns `true` when the tail was reached.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.sentinel.is_none() {
            return false;
        }
        if !visible {
            self.spent = None;
            self.armed = true;
            return false;
        }
        if !self.armed {
            return false;
        }
        self.armed = false;
        self.spent.clone_from(&self.sentinel);
        true
    }

    /// Forgets the spent sentinel, so the next attachment fires again.
    pub fn rearm(&mut self) {
        self.spent = None;
        if self.sentinel.is_some() {
            self.armed = true;
        }
    }

    /// Detaches and forgets everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn sentinel(&self) -> Option<&str> {
        self.sentinel.as_deref()
    }
}
