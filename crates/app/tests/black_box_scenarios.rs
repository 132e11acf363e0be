use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};

use eventdesk_app::EventDesk;
use eventdesk_core::{DomainError, EventId, InventoryItemId, Money, RsvpId};
use eventdesk_events::{EventPatch, EventStatus, NewEvent};
use eventdesk_guests::RsvpStatus;
use eventdesk_infra::{DeletePolicy, EntityStore, ServiceConfig, ServiceContext};
use eventdesk_inventory::NewInventoryItem;
use eventdesk_views::{GuestQuery, InventoryQuery, InventoryStats, SearchTerm, Selector, ViewQuery};

fn desk() -> EventDesk {
    EventDesk::new(ServiceConfig::instant()).expect("seeded desk")
}

fn new_event(title: &str) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        description: String::new(),
        date: NaiveDate::from_ymd_opt(2024, 10, 5).unwrap(),
        time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        location: "Rooftop".to_string(),
        category: "social".to_string(),
        capacity: 80,
        attendees: 0,
        budget: Money::from_units(2_500),
        status: EventStatus::Draft,
        created_by: "John Doe".to_string(),
        image_url: None,
    }
}

fn new_item(name: &str, quantity: u32, cost_units: u64) -> NewInventoryItem {
    NewInventoryItem {
        name: name.to_string(),
        category: "Misc".to_string(),
        quantity,
        min_threshold: 1,
        location: "Warehouse A".to_string(),
        unit: "piece".to_string(),
        cost_per_unit: Money::from_units(cost_units),
        supplier: None,
    }
}

#[tokio::test]
async fn create_get_delete_round_trip() {
    let desk = desk();
    let events = &desk.services().events;

    let created = events.create(new_event("X")).await.unwrap();
    assert_eq!(events.get(&created.id).await.unwrap().unwrap().title, "X");

    events.delete(&created.id).await.unwrap();
    assert!(events.get(&created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn creates_never_reuse_ids() {
    let desk = desk();
    let events = &desk.services().events;

    let mut seen: Vec<EventId> = events.list().await.unwrap().into_iter().map(|e| e.id).collect();
    for n in 0..5 {
        let before = seen.len();
        let created = events.create(new_event(&format!("Event {n}"))).await.unwrap();
        assert!(!seen.contains(&created.id));
        seen.push(created.id);
        assert_eq!(events.list().await.unwrap().len(), before + 1);
    }
}

#[tokio::test]
async fn rsvps_for_event_one_keep_insertion_order() {
    let desk = desk();
    let rsvps = desk.services().rsvps.list_for_event(&EventId::from("1")).await.unwrap();

    let names: Vec<&str> = rsvps.iter().map(|r| r.guest_name.as_str()).collect();
    assert_eq!(names, ["Alice Johnson", "Bob Smith", "Carol Williams"]);
    assert!(rsvps.iter().all(|r| r.event_id == EventId::from("1")));
}

#[tokio::test]
async fn update_of_missing_event_fails_without_mutation() {
    let desk = desk();
    let events = &desk.services().events;
    let before = events.list().await.unwrap();

    let err = events
        .update(&EventId::from("missing"), EventPatch { title: Some("Y".into()), ..Default::default() })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { entity: "event", .. }));
    assert_eq!(events.list().await.unwrap(), before);
}

#[tokio::test]
async fn partial_update_touches_only_given_fields() {
    let desk = desk();
    let events = &desk.services().events;
    let id = EventId::from("3");
    let before = events.get(&id).await.unwrap().unwrap();

    let after = events
        .update(
            &id,
            EventPatch {
                status: Some(EventStatus::Published),
                image_url: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(after.status, EventStatus::Published);
    assert_eq!(after.image_url, None);
    assert_eq!(
        (&after.title, after.date, after.capacity, after.budget),
        (&before.title, before.date, before.capacity, before.budget)
    );
}

#[tokio::test]
async fn accepting_an_rsvp_records_the_response_time() {
    let desk = desk();
    let rsvps = &desk.services().rsvps;
    let id = RsvpId::from("2");

    let start = Utc::now();
    let first = rsvps.update_status(&id, RsvpStatus::Accepted).await.unwrap();
    let end = Utc::now();

    assert_eq!(first.status, RsvpStatus::Accepted);
    let at = first.responded_at.expect("stamped");
    assert!(start <= at && at <= end);

    let again = rsvps.update_status(&id, RsvpStatus::Accepted).await.unwrap();
    assert_eq!(again.status, RsvpStatus::Accepted);
}

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let desk = desk();
    let guests = desk.services().guests.list_for_event(&EventId::from("1")).await.unwrap();

    let query = GuestQuery {
        search: SearchTerm::new("ali"),
        status: Selector::All,
    };
    let names: Vec<String> = query.apply(&guests).into_iter().map(|g| g.name).collect();
    assert_eq!(names, ["Alice Johnson"]);
}

#[tokio::test]
async fn total_inventory_value_multiplies_quantity_by_unit_cost() {
    let ctx = ServiceContext::new(Arc::new(EntityStore::new()), ServiceConfig::instant());
    let desk = EventDesk::with_context(ctx);
    let inventory = &desk.services().inventory;

    inventory.add(new_item("Cups", 10, 2)).await.unwrap();
    inventory.add(new_item("Plates", 5, 3)).await.unwrap();

    let stats = InventoryStats::from_items(&inventory.list().await.unwrap());
    assert_eq!(stats.total_value, Money::from_units(35));
}

#[tokio::test]
async fn snapshot_summarizes_seed_data() {
    let desk = desk();
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    let snapshot = desk.snapshot(today, &InventoryQuery::default()).await.unwrap();

    let dashboard = &snapshot.dashboard;
    assert_eq!(dashboard.published_events, 2);
    assert_eq!(dashboard.total_attendees, 366);
    assert_eq!(dashboard.total_budget, Money::from_units(90_000));
    assert_eq!(dashboard.items_needing_attention, 1);
    let upcoming: Vec<&str> = dashboard.upcoming.iter().map(|u| u.title.as_str()).collect();
    assert_eq!(
        upcoming,
        ["Annual Tech Conference 2024", "Summer Team Building Retreat", "Product Launch Event"]
    );

    assert_eq!(snapshot.inventory.total, 5);
    assert_eq!(snapshot.categories, ["Furniture", "Audio/Visual", "Decor", "Kitchen"]);
    assert_eq!(snapshot.matching_items.len(), 5);

    let headcounts: Vec<(&str, u32)> = snapshot
        .attendance
        .iter()
        .map(|a| (a.event_id.as_str(), a.rsvps.expected_headcount))
        .collect();
    assert_eq!(headcounts, [("1", 2), ("2", 3)]);
}

#[tokio::test]
async fn cascade_configuration_cleans_up_dependents() {
    let desk = EventDesk::new(ServiceConfig::instant().with_delete_policy(DeletePolicy::Cascade)).unwrap();
    let services = desk.services();
    let event = EventId::from("2");

    services.events.delete(&event).await.unwrap();

    assert!(services.rsvps.list_for_event(&event).await.unwrap().is_empty());
    assert!(services.guests.list_for_event(&event).await.unwrap().is_empty());
    assert_eq!(services.rsvps.list_for_event(&EventId::from("1")).await.unwrap().len(), 3);
}

#[tokio::test]
async fn removed_inventory_item_disappears_from_the_view() {
    let desk = desk();
    let inventory = &desk.services().inventory;

    inventory.remove(&InventoryItemId::from("5")).await.unwrap();

    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let snapshot = desk.snapshot(today, &InventoryQuery::default()).await.unwrap();
    assert_eq!(snapshot.inventory.total, 4);
    assert_eq!(snapshot.dashboard.items_needing_attention, 0);
    assert!(!snapshot.categories.contains(&"Kitchen".to_string()));
}
