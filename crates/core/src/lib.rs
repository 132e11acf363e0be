//! `eventdesk-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no runtime).

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod revision;
pub mod value_object;

pub use clock::{Clock, FixedClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{EventId, GuestId, InventoryItemId, RsvpId};
pub use revision::{ExpectedRevision, Revisioned};
pub use value_object::{Money, ValueObject};
