//! Fixture data the store is seeded with at startup.
//!
//! The fixtures are embedded at compile time so a fresh process always
//! starts from the same state.

use anyhow::Context;
use serde::de::DeserializeOwned;

use eventdesk_events::Event;
use eventdesk_guests::{Guest, Rsvp};
use eventdesk_inventory::InventoryItem;

const EVENTS: &str = include_str!("../../fixtures/events.json");
const RSVPS: &str = include_str!("../../fixtures/rsvps.json");
const INVENTORY: &str = include_str!("../../fixtures/inventory.json");
const GUESTS: &str = include_str!("../../fixtures/guests.json");

/// Parsed seed records for every collection.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub events: Vec<Event>,
    pub rsvps: Vec<Rsvp>,
    pub inventory: Vec<InventoryItem>,
    pub guests: Vec<Guest>,
}

impl Fixtures {
    /// Parse the embedded fixture files.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            events: parse(EVENTS, "events.json")?,
            rsvps: parse(RSVPS, "rsvps.json")?,
            inventory: parse(INVENTORY, "inventory.json")?,
            guests: parse(GUESTS, "guests.json")?,
        })
    }
}

fn parse<T: DeserializeOwned>(raw: &str, name: &str) -> anyhow::Result<Vec<T>> {
    serde_json::from_str(raw).with_context(|| format!("failed to parse fixture {name}"))
}
