//! Guest view model
//!
//! The guest menu works on a [`MenuSnapshot`] taken when the view opens.
//! Admin edits made afterwards are not visible until the view is reopened
//! from a fresh snapshot.

use crate::filter::{MenuFilter, apply_filter};
use crate::stats::{MenuStats, derive_stats};
use shared::models::MenuItem;
use shared::util::now_millis;
use std::sync::Arc;

/// Immutable copy of the menu at a point in time. Clones share the items.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSnapshot {
    items: Arc<[MenuItem]>,
    taken_at: i64,
}

impl MenuSnapshot {
    pub fn new(items: &[MenuItem]) -> Self {
        Self {
            items: Arc::from(items),
            taken_at: now_millis(),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Milliseconds since the epoch when the copy was made
    pub fn taken_at(&self) -> i64 {
        self.taken_at
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Read-only, filterable menu shown to guests
#[derive(Debug, Clone)]
pub struct GuestView {
    snapshot: MenuSnapshot,
    filter: MenuFilter,
}

impl GuestView {
    /// Open on `snapshot` showing every course
    pub fn open(snapshot: MenuSnapshot) -> Self {
        tracing::debug!(items = snapshot.len(), "Guest view opened");
        Self {
            snapshot,
            filter: MenuFilter::All,
        }
    }

    pub fn active_filter(&self) -> MenuFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: MenuFilter) {
        self.filter = filter;
    }

    /// Items passing the active filter
    pub fn items(&self) -> Vec<&MenuItem> {
        apply_filter(self.snapshot.items(), self.filter)
    }

    /// True when the active filter leaves nothing to show
    pub fn is_empty(&self) -> bool {
        !self
            .snapshot
            .items()
            .iter()
            .any(|item| self.filter.matches(item))
    }

    /// Statistics over the whole snapshot, regardless of filter
    pub fn stats(&self) -> MenuStats {
        derive_stats(self.snapshot.items())
    }

    pub fn snapshot(&self) -> &MenuSnapshot {
        &self.snapshot
    }
}
