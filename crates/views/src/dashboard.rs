//! Dashboard summary across events and inventory.

use chrono::NaiveDate;
use serde::Serialize;

use eventdesk_core::Money;
use eventdesk_events::Event;
use eventdesk_inventory::InventoryItem;

use crate::stats::InventoryStats;

/// One row of the "upcoming events" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingEvent {
    pub title: String,
    pub date: NaiveDate,
    pub attendees: u32,
    pub fill_percent: Option<u64>,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub published_events: usize,
    pub total_attendees: u64,
    pub total_budget: Money,
    pub inventory_items: usize,
    pub items_needing_attention: usize,
    pub inventory_value: Money,
    pub upcoming: Vec<UpcomingEvent>,
}

impl DashboardSummary {
    /// Summarize the given snapshots.
    ///
    /// `upcoming` lists events dated on or after `today`, earliest first
    /// (ties keep store order), capped at `limit`.
    pub fn compute(
        events: &[Event],
        inventory: &[InventoryItem],
        today: NaiveDate,
        limit: usize,
    ) -> Self {
        let stock = InventoryStats::from_items(inventory);

        let mut upcoming: Vec<&Event> = events.iter().filter(|e| e.date >= today).collect();
        upcoming.sort_by_key(|e| (e.date, e.time));

        Self {
            published_events: events.iter().filter(|e| e.is_published()).count(),
            total_attendees: events.iter().map(|e| u64::from(e.attendees)).sum(),
            total_budget: events.iter().map(|e| e.budget).sum(),
            inventory_items: stock.total,
            items_needing_attention: inventory.iter().filter(|i| i.status.needs_attention()).count(),
            inventory_value: stock.total_value,
            upcoming: upcoming
                .into_iter()
                .take(limit)
                .map(|e| UpcomingEvent {
                    title: e.title.clone(),
                    date: e.date,
                    attendees: e.attendees,
                    fill_percent: e.fill_percent(),
                })
                .collect(),
        }
    }
}
