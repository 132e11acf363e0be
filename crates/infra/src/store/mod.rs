//! Entity store: the authoritative in-memory state of every collection.

pub mod collection;
pub mod seed;

pub use collection::InMemoryCollection;
pub use seed::Fixtures;

use eventdesk_core::DomainResult;
use eventdesk_events::Event;
use eventdesk_guests::{Guest, Rsvp};
use eventdesk_inventory::InventoryItem;

/// Process-wide store: one collection per entity kind.
///
/// Shared between services as `Arc<EntityStore>`. Services are the only
/// mutators; nothing here checks cross-collection references.
#[derive(Debug, Default)]
pub struct EntityStore {
    pub events: InMemoryCollection<Event>,
    pub rsvps: InMemoryCollection<Rsvp>,
    pub inventory: InMemoryCollection<InventoryItem>,
    pub guests: InMemoryCollection<Guest>,
}

impl EntityStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store populated from the given fixtures.
    pub fn from_fixtures(fixtures: Fixtures) -> DomainResult<Self> {
        Ok(Self {
            events: InMemoryCollection::seeded(fixtures.events)?,
            rsvps: InMemoryCollection::seeded(fixtures.rsvps)?,
            inventory: InMemoryCollection::seeded(fixtures.inventory)?,
            guests: InMemoryCollection::seeded(fixtures.guests)?,
        })
    }

    /// A store populated from the embedded fixture files.
    pub fn seeded() -> anyhow::Result<Self> {
        let fixtures = Fixtures::load()?;
        Ok(Self::from_fixtures(fixtures)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_core::EventId;

    #[test]
    fn seeded_store_has_fixture_records() {
        let store = EntityStore::seeded().unwrap();
        assert_eq!(store.events.len(), 3);
        assert_eq!(store.rsvps.len(), 5);
        assert_eq!(store.inventory.len(), 5);
        assert_eq!(store.guests.len(), 3);
        assert_eq!(
            store.events.get(&EventId::from("3")).unwrap().title,
            "Product Launch Event"
        );
    }
}
