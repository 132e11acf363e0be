use tracing::{debug, info};

use eventdesk_core::{DomainError, DomainResult, Entity, EventId, ExpectedRevision, Revisioned};
use eventdesk_events::{Event, EventPatch, NewEvent};

use super::ServiceContext;
use crate::config::DeletePolicy;

/// Event resource service.
#[derive(Debug, Clone)]
pub struct EventService {
    ctx: ServiceContext,
}

impl EventService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// All events in store order.
    pub async fn list(&self) -> DomainResult<Vec<Event>> {
        self.ctx
            .run("events.list", self.ctx.profile().event_list, |store, _| {
                Ok(store.events.list())
            })
            .await
    }

    /// The event with `id`, or `None`. Absence is not an error.
    pub async fn get(&self, id: &EventId) -> DomainResult<Option<Event>> {
        let id = id.clone();
        self.ctx
            .run("events.get", self.ctx.profile().event_get, move |store, _| {
                Ok(store.events.get(&id))
            })
            .await
    }

    /// Like `get`, with the record's current revision for a later
    /// `update_at_revision`.
    pub async fn get_revisioned(&self, id: &EventId) -> DomainResult<Option<Revisioned<Event>>> {
        let id = id.clone();
        self.ctx
            .run("events.get", self.ctx.profile().event_get, move |store, _| {
                Ok(store.events.get_revisioned(&id))
            })
            .await
    }

    pub async fn create(&self, new: NewEvent) -> DomainResult<Event> {
        new.validate()?;
        self.ctx
            .run("events.create", self.ctx.profile().event_create, move |store, _| {
                let event = store.events.insert(Event::from_new(EventId::generate(), new))?;
                info!(event_id = %event.id, title = %event.title, "event created");
                Ok(event)
            })
            .await
    }

    /// Shallow-merge `patch` into the event (last write wins).
    pub async fn update(&self, id: &EventId, patch: EventPatch) -> DomainResult<Event> {
        self.update_at_revision(id, ExpectedRevision::Any, patch).await
    }

    /// Shallow-merge `patch` only if the event is still at `expected`.
    pub async fn update_at_revision(
        &self,
        id: &EventId,
        expected: ExpectedRevision,
        patch: EventPatch,
    ) -> DomainResult<Event> {
        patch.validate()?;
        let id = id.clone();
        self.ctx
            .run("events.update", self.ctx.profile().event_update, move |store, _| {
                let updated = store.events.update(&id, expected, |event| {
                    patch.apply_to(event);
                    Ok(())
                })?;
                debug!(event_id = %id, revision = updated.revision, "event updated");
                Ok(updated.value)
            })
            .await
    }

    /// Remove the event. Dependent RSVPs and guests follow the configured
    /// `DeletePolicy`; the cleanup is not atomic with the removal.
    pub async fn delete(&self, id: &EventId) -> DomainResult<()> {
        let id = id.clone();
        let policy = self.ctx.config().delete_policy;
        self.ctx
            .run("events.delete", self.ctx.profile().event_delete, move |store, _| {
                store
                    .events
                    .remove(&id)
                    .ok_or_else(|| DomainError::not_found(Event::KIND, &id))?;

                match policy {
                    DeletePolicy::Retain => {
                        info!(event_id = %id, "event deleted");
                    }
                    DeletePolicy::Cascade => {
                        let rsvps = store.rsvps.remove_where(|r| r.event_id == id);
                        let guests = store.guests.remove_where(|g| g.event_id == id);
                        info!(event_id = %id, rsvps, guests, "event deleted with dependents");
                    }
                }
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::latency::LatencyProfile;
    use crate::services::testing::{RecordingLatency, recording_context, seeded_context};
    use chrono::{NaiveDate, NaiveTime};
    use eventdesk_core::{Money, RsvpId};
    use eventdesk_events::EventStatus;
    use std::sync::Arc;
    use std::time::Duration;

    fn new_event(title: &str) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            description: "Quarterly all-hands".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            location: "HQ".to_string(),
            category: "corporate".to_string(),
            capacity: 120,
            attendees: 0,
            budget: Money::from_units(8_000),
            status: EventStatus::Draft,
            created_by: "Sarah Smith".to_string(),
            image_url: None,
        }
    }

    fn service(config: ServiceConfig) -> EventService {
        EventService::new(seeded_context(config))
    }

    #[tokio::test]
    async fn create_assigns_fresh_id_and_grows_collection() {
        let svc = service(ServiceConfig::instant());
        let before = svc.list().await.unwrap();

        let created = svc.create(new_event("X")).await.unwrap();

        let after = svc.list().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert!(before.iter().all(|e| e.id != created.id));
        assert_eq!(after.last().unwrap(), &created);
    }

    #[tokio::test]
    async fn create_get_delete_scenario() {
        let svc = service(ServiceConfig::instant());

        let created = svc.create(new_event("X")).await.unwrap();
        let fetched = svc.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "X");

        svc.delete(&created.id).await.unwrap();
        assert_eq!(svc.get(&created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn blank_title_fails_validation_without_mutation() {
        let svc = service(ServiceConfig::instant());
        let err = svc.create(new_event("   ")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(svc.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_merges_only_provided_fields() {
        let svc = service(ServiceConfig::instant());
        let id = EventId::from("1");
        let before = svc.get(&id).await.unwrap().unwrap();

        let updated = svc
            .update(
                &id,
                EventPatch {
                    attendees: Some(400),
                    status: Some(EventStatus::Completed),
                    ..EventPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.attendees, 400);
        assert_eq!(updated.status, EventStatus::Completed);
        assert_eq!(updated.title, before.title);
        assert_eq!(updated.budget, before.budget);
        assert_eq!(updated.image_url, before.image_url);
        assert_eq!(svc.get(&id).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_is_not_found_and_changes_nothing() {
        let svc = service(ServiceConfig::instant());
        let before = svc.list().await.unwrap();

        let err = svc
            .update(&EventId::from("nope"), EventPatch { title: Some("Y".into()), ..Default::default() })
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::not_found("event", "nope"));
        assert_eq!(svc.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let svc = service(ServiceConfig::instant());
        let err = svc.delete(&EventId::from("42")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn stale_revision_is_rejected() {
        let svc = service(ServiceConfig::instant());
        let id = EventId::from("2");
        let seen = svc.get_revisioned(&id).await.unwrap().unwrap();

        svc.update(&id, EventPatch { attendees: Some(45), ..Default::default() })
            .await
            .unwrap();

        let err = svc
            .update_at_revision(
                &id,
                ExpectedRevision::Exact(seen.revision),
                EventPatch { attendees: Some(1), ..Default::default() },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(svc.get(&id).await.unwrap().unwrap().attendees, 45);
    }

    #[tokio::test]
    async fn delete_retains_dependents_by_default() {
        let ctx = seeded_context(ServiceConfig::instant());
        let svc = EventService::new(ctx.clone());

        svc.delete(&EventId::from("1")).await.unwrap();

        assert!(ctx.store().rsvps.contains(&RsvpId::from("1")));
        assert_eq!(ctx.store().guests.len(), 3);
    }

    #[tokio::test]
    async fn cascade_policy_removes_dependents() {
        let ctx = seeded_context(ServiceConfig::instant().with_delete_policy(DeletePolicy::Cascade));
        let svc = EventService::new(ctx.clone());

        svc.delete(&EventId::from("1")).await.unwrap();

        let event_one = EventId::from("1");
        assert!(ctx.store().rsvps.list().iter().all(|r| r.event_id != event_one));
        assert_eq!(ctx.store().rsvps.len(), 2);
        assert_eq!(ctx.store().guests.len(), 1);
    }

    #[tokio::test]
    async fn each_operation_waits_its_profile_latency() {
        let (ctx, latency) = recording_context();
        let svc = EventService::new(ctx);

        svc.list().await.unwrap();
        svc.get(&EventId::from("1")).await.unwrap();
        let created = svc.create(new_event("Timed")).await.unwrap();
        svc.update(&created.id, EventPatch::default()).await.unwrap();
        svc.delete(&created.id).await.unwrap();

        let ms = Duration::from_millis;
        assert_eq!(latency.calls(), vec![ms(800), ms(500), ms(1000), ms(800), ms(600)]);
    }

    #[tokio::test]
    async fn custom_profile_overrides_default_delays() {
        let profile = LatencyProfile {
            event_list: Duration::from_millis(5),
            event_get: Duration::from_millis(7),
            ..LatencyProfile::default()
        };
        let latency = Arc::new(RecordingLatency::default());
        let ctx = seeded_context(ServiceConfig::default().with_profile(profile)).with_latency(latency.clone());
        let svc = EventService::new(ctx);

        svc.list().await.unwrap();
        svc.get(&EventId::from("1")).await.unwrap();
        svc.delete(&EventId::from("1")).await.unwrap();

        let ms = Duration::from_millis;
        assert_eq!(latency.calls(), vec![ms(5), ms(7), ms(600)]);
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_create_still_completes() {
        let ctx = seeded_context(ServiceConfig::default());
        let svc = EventService::new(ctx.clone());

        let pending = tokio::spawn({
            let svc = svc.clone();
            async move { svc.create(new_event("Abandoned")).await }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        pending.abort();

        tokio::time::sleep(Duration::from_millis(2_000)).await;
        assert!(ctx.store().events.list().iter().any(|e| e.title == "Abandoned"));
    }
}
