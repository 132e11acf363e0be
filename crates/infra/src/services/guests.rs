use tracing::{debug, info};

use eventdesk_core::{DomainError, DomainResult, Entity, EventId, ExpectedRevision, GuestId};
use eventdesk_events::Event;
use eventdesk_guests::{Guest, GuestStatus, NewGuest};

use super::ServiceContext;

#[derive(Debug, Clone)]
pub struct GuestService {
    ctx: ServiceContext,
}

impl GuestService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn list_for_event(&self, event_id: &EventId) -> DomainResult<Vec<Guest>> {
        let event_id = event_id.clone();
        self.ctx
            .run("guests.list_for_event", self.ctx.profile().guest_list, move |store, _| {
                Ok(store.guests.filter(|g| g.event_id == event_id))
            })
            .await
    }

    /// Add a guest to an existing event's list.
    pub async fn invite(&self, new: NewGuest) -> DomainResult<Guest> {
        new.validate()?;
        self.ctx
            .run("guests.invite", self.ctx.profile().guest_invite, move |store, clock| {
                if !store.events.contains(&new.event_id) {
                    return Err(DomainError::not_found(Event::KIND, &new.event_id));
                }
                let guest = store
                    .guests
                    .insert(Guest::from_new(GuestId::generate(), new, clock.now()))?;
                info!(guest_id = %guest.id, event_id = %guest.event_id, "guest invited");
                Ok(guest)
            })
            .await
    }

    pub async fn update_status(&self, id: &GuestId, status: GuestStatus) -> DomainResult<Guest> {
        let id = id.clone();
        self.ctx
            .run("guests.update_status", self.ctx.profile().guest_update_status, move |store, _| {
                let updated = store.guests.update(&id, ExpectedRevision::Any, |guest| {
                    guest.status = status;
                    Ok(())
                })?;
                debug!(guest_id = %id, status = status.as_str(), "guest status updated");
                Ok(updated.value)
            })
            .await
    }
}
