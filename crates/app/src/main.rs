use anyhow::Context;

use eventdesk_app::EventDesk;
use eventdesk_views::InventoryQuery;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    eventdesk_observability::init();

    let desk = EventDesk::from_env()?;
    let config = desk.context().config();
    tracing::info!(
        latency = ?config.latency,
        delete_policy = ?config.delete_policy,
        "eventdesk starting"
    );

    let today = desk.today();
    let snapshot = desk
        .snapshot(today, &InventoryQuery::default())
        .await
        .context("failed to build dashboard snapshot")?;

    let dashboard = &snapshot.dashboard;
    tracing::info!(
        published_events = dashboard.published_events,
        total_attendees = dashboard.total_attendees,
        total_budget = %dashboard.total_budget,
        inventory_value = %dashboard.inventory_value,
        items_needing_attention = dashboard.items_needing_attention,
        upcoming = dashboard.upcoming.len(),
        "dashboard"
    );
    for row in &snapshot.attendance {
        tracing::info!(
            event_id = %row.event_id,
            accepted = row.rsvps.accepted,
            declined = row.rsvps.declined,
            pending = row.rsvps.pending,
            expected_headcount = row.rsvps.expected_headcount,
            "attendance"
        );
    }

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
