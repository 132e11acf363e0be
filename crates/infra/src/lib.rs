//! Infrastructure layer: in-memory store, latency simulation, configuration
//! and the async resource services built on top of them.

pub mod clock;
pub mod config;
pub mod latency;
pub mod services;
pub mod store;

pub use clock::SystemClock;
pub use config::{ConfigError, DeletePolicy, LatencyMode, ServiceConfig};
pub use latency::{Latency, LatencyProfile, NoLatency, SimulatedLatency};
pub use services::{EventService, GuestService, InventoryService, RsvpService, ServiceContext, Services};
pub use store::{EntityStore, Fixtures, InMemoryCollection};
