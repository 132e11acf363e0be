//! Application wiring: configuration, the seeded store and the services,
//! plus the dashboard snapshot the binary prints.

use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;

use eventdesk_core::{DomainResult, EventId};
use eventdesk_infra::{EntityStore, ServiceConfig, ServiceContext, Services};
use eventdesk_views::{DashboardSummary, InventoryQuery, InventoryStats, InventoryView, RsvpStats};

/// Rows in the dashboard's upcoming-events list.
pub const UPCOMING_LIMIT: usize = 5;

/// One running instance: a store shared by the four resource services.
#[derive(Debug, Clone)]
pub struct EventDesk {
    ctx: ServiceContext,
    services: Services,
}

impl EventDesk {
    /// Seed the store from the embedded fixtures and wire services with
    /// `config`.
    pub fn new(config: ServiceConfig) -> anyhow::Result<Self> {
        let store = EntityStore::seeded().context("failed to load fixture data")?;
        Ok(Self::with_context(ServiceContext::new(Arc::new(store), config)))
    }

    /// Like `new`, reading configuration from `EVENTDESK_*` variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ServiceConfig::from_env().context("invalid EVENTDESK_* configuration")?;
        Self::new(config)
    }

    pub fn with_context(ctx: ServiceContext) -> Self {
        let services = Services::new(ctx.clone());
        Self { ctx, services }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    pub fn today(&self) -> NaiveDate {
        self.ctx.clock().today()
    }

    /// Fetch events and inventory, then RSVPs for each published event, and
    /// derive the dashboard views from them.
    pub async fn snapshot(&self, today: NaiveDate, inventory_query: &InventoryQuery) -> DomainResult<Snapshot> {
        let (events, inventory) = tokio::try_join!(
            self.services.events.list(),
            self.services.inventory.list(),
        )?;

        let mut attendance = Vec::new();
        for event in events.iter().filter(|e| e.is_published()) {
            let rsvps = self.services.rsvps.list_for_event(&event.id).await?;
            attendance.push(EventAttendance {
                event_id: event.id.clone(),
                title: event.title.clone(),
                rsvps: RsvpStats::from_rsvps(&rsvps),
            });
        }

        let view = InventoryView::compute(&inventory, inventory_query);
        Ok(Snapshot {
            dashboard: DashboardSummary::compute(&events, &inventory, today, UPCOMING_LIMIT),
            inventory: view.stats,
            categories: view.categories,
            matching_items: view.items.into_iter().map(|item| item.name).collect(),
            attendance,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventAttendance {
    pub event_id: EventId,
    pub title: String,
    pub rsvps: RsvpStats,
}

/// Everything the dashboard renders at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub dashboard: DashboardSummary,
    pub inventory: InventoryStats,
    pub categories: Vec<String>,
    /// Names of items admitted by the inventory query.
    pub matching_items: Vec<String>,
    pub attendance: Vec<EventAttendance>,
}
