//! Composable list queries.
//!
//! Each query is a free-text search plus one or more categorical selectors,
//! combined with AND. Applying a query never reorders records.

use eventdesk_events::{Event, EventStatus};
use eventdesk_guests::{Guest, GuestStatus, Rsvp, RsvpStatus};
use eventdesk_inventory::{InventoryItem, StockStatus};

use crate::search::SearchTerm;
use crate::selector::Selector;
use crate::stats::{InventoryStats, categories};

/// A filter over records of type `T`.
pub trait ViewQuery<T> {
    fn admits(&self, record: &T) -> bool;

    /// Records admitted by this query, in input order.
    fn apply(&self, records: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        records.iter().filter(|r| self.admits(r)).cloned().collect()
    }
}

/// RSVP list filter: search over guest name and email, plus status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpQuery {
    pub search: SearchTerm,
    pub status: Selector<RsvpStatus>,
}

impl RsvpQuery {
    pub fn new(search: impl AsRef<str>, status: Selector<RsvpStatus>) -> Self {
        Self {
            search: SearchTerm::new(search),
            status,
        }
    }
}

impl ViewQuery<Rsvp> for RsvpQuery {
    fn admits(&self, record: &Rsvp) -> bool {
        self.search.matches(record) && self.status.admits(&record.status)
    }
}

/// Inventory filter: search over name, category and supplier, plus
/// category and stock status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryQuery {
    pub search: SearchTerm,
    pub category: Selector<String>,
    pub status: Selector<StockStatus>,
}

impl InventoryQuery {
    pub fn new(
        search: impl AsRef<str>,
        category: Selector<String>,
        status: Selector<StockStatus>,
    ) -> Self {
        Self {
            search: SearchTerm::new(search),
            category,
            status,
        }
    }
}

impl ViewQuery<InventoryItem> for InventoryQuery {
    fn admits(&self, record: &InventoryItem) -> bool {
        self.search.matches(record)
            && self.category.admits_str(&record.category)
            && self.status.admits(&record.status)
    }
}

/// Event list filter: search over title, location and category, plus
/// status and category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub search: SearchTerm,
    pub status: Selector<EventStatus>,
    pub category: Selector<String>,
}

impl ViewQuery<Event> for EventQuery {
    fn admits(&self, record: &Event) -> bool {
        self.search.matches(record)
            && self.status.admits(&record.status)
            && self.category.admits_str(&record.category)
    }
}

/// Guest list filter: search over name and email, plus status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestQuery {
    pub search: SearchTerm,
    pub status: Selector<GuestStatus>,
}

impl ViewQuery<Guest> for GuestQuery {
    fn admits(&self, record: &Guest) -> bool {
        self.search.matches(record) && self.status.admits(&record.status)
    }
}

/// Everything the inventory screen renders for one set of inputs.
///
/// `stats` and `categories` describe the FULL collection, not the filtered
/// rows, so the summary cards and the category picker stay stable while the
/// user narrows the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    pub items: Vec<InventoryItem>,
    pub stats: InventoryStats,
    pub categories: Vec<String>,
}

impl InventoryView {
    pub fn compute(inventory: &[InventoryItem], query: &InventoryQuery) -> Self {
        Self {
            items: query.apply(inventory),
            stats: InventoryStats::from_items(inventory),
            categories: categories(inventory),
        }
    }
}
