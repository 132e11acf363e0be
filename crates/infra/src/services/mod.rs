//! Resource services: async CRUD façades over the entity store.
//!
//! Every operation follows the same path: wait out the simulated latency,
//! then read or mutate one collection. Operations run on their own tokio
//! task, so a caller that stops awaiting does not cancel them; the work
//! completes and the result is dropped. Services must be used from within a
//! tokio runtime.

pub mod events;
pub mod guests;
pub mod inventory;
pub mod rsvps;

pub use events::EventService;
pub use guests::GuestService;
pub use inventory::InventoryService;
pub use rsvps::RsvpService;

use std::sync::Arc;
use std::time::Duration;

use eventdesk_core::{Clock, DomainError, DomainResult};

use crate::clock::SystemClock;
use crate::config::ServiceConfig;
use crate::latency::{Latency, LatencyProfile};
use crate::store::EntityStore;

/// Shared dependencies of every resource service.
#[derive(Debug, Clone)]
pub struct ServiceContext {
    store: Arc<EntityStore>,
    latency: Arc<dyn Latency>,
    clock: Arc<dyn Clock>,
    config: Arc<ServiceConfig>,
}

impl ServiceContext {
    /// Context with the latency from `config` and the system clock.
    pub fn new(store: Arc<EntityStore>, config: ServiceConfig) -> Self {
        Self {
            store,
            latency: config.latency.build(),
            clock: Arc::new(SystemClock),
            config: Arc::new(config),
        }
    }

    /// Replace the latency simulator (e.g. a recording one in tests).
    pub fn with_latency(mut self, latency: Arc<dyn Latency>) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &Arc<EntityStore> {
        &self.store
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub(crate) fn profile(&self) -> &LatencyProfile {
        &self.config.profile
    }

    /// Delay, then run `op` against the store on a detached task.
    pub(crate) async fn run<T, F>(&self, name: &'static str, delay: Duration, op: F) -> DomainResult<T>
    where
        F: FnOnce(&EntityStore, &dyn Clock) -> DomainResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let latency = Arc::clone(&self.latency);
        let clock = Arc::clone(&self.clock);

        let task = tokio::spawn(async move {
            latency.delay(delay).await;
            op(store.as_ref(), clock.as_ref())
        });

        match task.await {
            Ok(result) => result,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => Err(DomainError::interrupted(format!("{name}: {err}"))),
        }
    }
}

/// The four resource services over one shared store.
#[derive(Debug, Clone)]
pub struct Services {
    pub events: EventService,
    pub rsvps: RsvpService,
    pub inventory: InventoryService,
    pub guests: GuestService,
}

impl Services {
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            events: EventService::new(ctx.clone()),
            rsvps: RsvpService::new(ctx.clone()),
            inventory: InventoryService::new(ctx.clone()),
            guests: GuestService::new(ctx),
        }
    }
}
