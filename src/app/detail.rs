//! Detail panel for the selected row.
//!
//! Listing rows only carry a key and a name. When the selection lands on such
//! a row, [`DetailPanel::show`] issues a one-shot lookup under a fresh ticket;
//! responses carrying any older ticket are ignored. Rows resolved by a search
//! lookup already embed their record and are shown without a fetch.

use crate::domain::{Item, ItemDetail};
use crate::worker::{FetchOutcome, FetchRequest, FetchResponse};

/// What the detail panel currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailStatus {
    /// Nothing selected.
    #[default]
    Empty,
    /// Waiting for the lookup of the selected key.
    Loading,
    Loaded(Box<ItemDetail>),
    Failed(String),
}

/// Ticketed one-shot detail fetcher.
#[derive(Debug, Clone, Default)]
pub struct DetailPanel {
    key: Option<String>,
    ticket: u64,
    status: DetailStatus,
}

impl DetailPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the panel at `item`.
    ///
    /// Returns a lookup request when the item changed and carries no embedded
    /// record. Re-showing the current key is a no-op.
    pub fn show(&mut self, item: Option<&Item>) -> Option<FetchRequest> {
        let Some(item) = item else {
            if self.key.take().is_some() {
                self.ticket += 1;
                self.status = DetailStatus::Empty;
            }
            return None;
        };

        if self.key.as_deref() == Some(item.key.as_str()) {
            if let (DetailStatus::Loading, Some(detail)) = (&self.status, &item.detail) {
                self.status = DetailStatus::Loaded(detail.clone());
            }
            return None;
        }

        self.ticket += 1;
        self.key = Some(item.key.clone());

        if let Some(detail) = &item.detail {
            self.status = DetailStatus::Loaded(detail.clone());
            return None;
        }

        tracing::debug!(key = %item.key, ticket = self.ticket, "requesting detail");
        self.status = DetailStatus::Loading;
        Some(FetchRequest::detail(self.ticket, item.key.clone()))
    }

    /// Folds a detail response into the panel.
    ///
    /// Returns `false` for responses issued under an older ticket.
    pub fn apply(&mut self, response: &FetchResponse) -> bool {
        if response.generation != self.ticket || self.key.is_none() {
            tracing::debug!(
                ticket = response.generation,
                current = self.ticket,
                "discarding stale detail response"
            );
            return false;
        }

        self.status = match &response.outcome {
            FetchOutcome::Found(item) => item.detail.clone().map_or_else(
                || DetailStatus::Failed(format!("no record for {}", item.key)),
                DetailStatus::Loaded,
            ),
            FetchOutcome::NotFound { key } => DetailStatus::Failed(format!("no record for {key}")),
            FetchOutcome::Failed { message } => DetailStatus::Failed(message.clone()),
            FetchOutcome::Page(_) | FetchOutcome::Categories(_) => return false,
        };
        true
    }

    #[must_use]
    pub const fn status(&self) -> &DetailStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: u32, name: &str) -> ItemDetail {
        ItemDetail {
            id,
            name: name.to_string(),
            types: vec!["normal".to_string()],
            ..ItemDetail::default()
        }
    }

    #[test]
    fn listing_row_triggers_one_lookup() {
        let mut panel = DetailPanel::new();
        let row = Item::entry("snorlax", "snorlax", Some(143));

        let request = panel.show(Some(&row)).unwrap();
        assert_eq!(request, FetchRequest::detail(1, "snorlax"));
        assert_eq!(panel.status(), &DetailStatus::Loading);

        assert!(panel.show(Some(&row)).is_none());
    }

    #[test]
    fn embedded_record_needs_no_fetch() {
        let mut panel = DetailPanel::new();
        let item = Item::from_detail(detail(132, "ditto"));

        assert!(panel.show(Some(&item)).is_none());
        assert!(matches!(panel.status(), DetailStatus::Loaded(d) if d.id == 132));
    }

    #[test]
    fn older_tickets_are_ignored() {
        let mut panel = DetailPanel::new();
        let first = panel.show(Some(&Item::entry("abra", "abra", Some(63)))).unwrap();
        let second = panel.show(Some(&Item::entry("kadabra", "kadabra", Some(64)))).unwrap();

        let late = FetchResponse::new(&first, FetchOutcome::Found(Item::from_detail(detail(63, "abra"))));
        assert!(!panel.apply(&late));
        assert_eq!(panel.status(), &DetailStatus::Loading);

        let fresh = FetchResponse::new(&second, FetchOutcome::Found(Item::from_detail(detail(64, "kadabra"))));
        assert!(panel.apply(&fresh));
        assert!(matches!(panel.status(), DetailStatus::Loaded(d) if d.name == "kadabra"));
    }

    #[test]
    fn failures_are_shown() {
        let mut panel = DetailPanel::new();
        let request = panel.show(Some(&Item::entry("alakazam", "alakazam", Some(65)))).unwrap();

        panel.apply(&FetchResponse::new(&request, FetchOutcome::Failed { message: "timed out".into() }));
        assert_eq!(panel.status(), &DetailStatus::Failed("timed out".into()));
    }

    #[test]
    fn clearing_selection_empties_panel() {
        let mut panel = DetailPanel::new();
        let request = panel.show(Some(&Item::entry("onix", "onix", Some(95)))).unwrap();
        panel.show(None);

        assert_eq!(panel.status(), &DetailStatus::Empty);
        assert!(!panel.apply(&FetchResponse::new(&request, FetchOutcome::NotFound { key: "onix".into() })));
    }
}
