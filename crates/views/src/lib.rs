//! Derived views: filtering and statistics over entity snapshots.
//!
//! Everything here is a pure function of its input slice. Views are
//! recomputed from the full collection on every input change; nothing is
//! cached or persisted, and the store is never touched.

pub mod dashboard;
pub mod query;
pub mod search;
pub mod selector;
pub mod stats;

pub use dashboard::{DashboardSummary, UpcomingEvent};
pub use query::{EventQuery, GuestQuery, InventoryQuery, InventoryView, RsvpQuery, ViewQuery};
pub use search::{SearchTerm, Searchable};
pub use selector::Selector;
pub use stats::{GuestStats, InventoryStats, RsvpStats, categories};
