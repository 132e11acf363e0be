use tracing::{debug, info};

use eventdesk_core::{DomainError, DomainResult, Entity, EventId, ExpectedRevision, RsvpId};
use eventdesk_events::Event;
use eventdesk_guests::{NewRsvp, Rsvp, RsvpStatus};

use super::ServiceContext;

#[derive(Debug, Clone)]
pub struct RsvpService {
    ctx: ServiceContext,
}

impl RsvpService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// RSVPs for `event_id` in store order. Unknown events yield an empty list.
    pub async fn list_for_event(&self, event_id: &EventId) -> DomainResult<Vec<Rsvp>> {
        let event_id = event_id.clone();
        self.ctx
            .run("rsvps.list_for_event", self.ctx.profile().rsvp_list, move |store, _| {
                Ok(store.rsvps.filter(|r| r.event_id == event_id))
            })
            .await
    }

    /// Record a response. The referenced event must exist.
    pub async fn create(&self, new: NewRsvp) -> DomainResult<Rsvp> {
        new.validate()?;
        self.ctx
            .run("rsvps.create", self.ctx.profile().rsvp_create, move |store, clock| {
                if !store.events.contains(&new.event_id) {
                    return Err(DomainError::not_found(Event::KIND, &new.event_id));
                }
                let rsvp = store
                    .rsvps
                    .insert(Rsvp::from_new(RsvpId::generate(), new, clock.now()))?;
                info!(rsvp_id = %rsvp.id, event_id = %rsvp.event_id, status = rsvp.status.as_str(), "rsvp created");
                Ok(rsvp)
            })
            .await
    }

    /// Set the response status. Accepting or declining stamps the response
    /// time; going back to pending clears it.
    pub async fn update_status(&self, id: &RsvpId, status: RsvpStatus) -> DomainResult<Rsvp> {
        let id = id.clone();
        self.ctx
            .run("rsvps.update_status", self.ctx.profile().rsvp_update_status, move |store, clock| {
                let now = clock.now();
                let updated = store.rsvps.update(&id, ExpectedRevision::Any, |rsvp| {
                    rsvp.set_status(status, now);
                    Ok(())
                })?;
                debug!(rsvp_id = %id, status = status.as_str(), "rsvp status updated");
                Ok(updated.value)
            })
            .await
    }
}
