//! Summary statistics for list screens.

use std::collections::HashSet;

use serde::Serialize;

use eventdesk_core::Money;
use eventdesk_guests::{Guest, GuestStatus, Rsvp, RsvpStatus};
use eventdesk_inventory::{InventoryItem, StockStatus};

/// Response counts for one event's RSVPs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RsvpStats {
    pub total: usize,
    pub accepted: usize,
    pub declined: usize,
    pub pending: usize,
    /// Accepted guests plus their accepted plus-ones.
    pub expected_headcount: u32,
}

impl RsvpStats {
    pub fn from_rsvps(rsvps: &[Rsvp]) -> Self {
        let mut stats = Self {
            total: rsvps.len(),
            ..Self::default()
        };
        for rsvp in rsvps {
            match rsvp.status {
                RsvpStatus::Accepted => stats.accepted += 1,
                RsvpStatus::Declined => stats.declined += 1,
                RsvpStatus::Pending => stats.pending += 1,
            }
            stats.expected_headcount += rsvp.headcount();
        }
        stats
    }

    /// Share of RSVPs that have answered, rounded to the nearest percent.
    pub fn response_rate(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        let answered = (self.accepted + self.declined) as f64;
        Some((answered / self.total as f64 * 100.0).round() as u32)
    }
}

/// Stock counts and total value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub total: usize,
    pub available: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Σ quantity × cost per unit.
    pub total_value: Money,
}

impl InventoryStats {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        let mut stats = Self {
            total: items.len(),
            ..Self::default()
        };
        for item in items {
            match item.status {
                StockStatus::Available => stats.available += 1,
                StockStatus::LowStock => stats.low_stock += 1,
                StockStatus::OutOfStock => stats.out_of_stock += 1,
            }
        }
        stats.total_value = items.iter().map(InventoryItem::value).sum();
        stats
    }

    pub fn needing_attention(&self) -> usize {
        self.low_stock + self.out_of_stock
    }
}

/// Invitation counts for one event's guests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GuestStats {
    pub total: usize,
    pub invited: usize,
    pub confirmed: usize,
    pub declined: usize,
}

impl GuestStats {
    pub fn from_guests(guests: &[Guest]) -> Self {
        let mut stats = Self {
            total: guests.len(),
            ..Self::default()
        };
        for guest in guests {
            match guest.status {
                GuestStatus::Invited => stats.invited += 1,
                GuestStatus::Confirmed => stats.confirmed += 1,
                GuestStatus::Declined => stats.declined += 1,
            }
        }
        stats
    }
}

/// Distinct inventory categories in first-seen order.
pub fn categories(items: &[InventoryItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.category.as_str()))
        .map(|item| item.category.clone())
        .collect()
}
