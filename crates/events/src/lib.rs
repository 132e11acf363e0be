//! Events domain module.
//!
//! Planned events (conferences, retreats, launches) and the inputs used to
//! create and partially update them. Pure data + rules: no IO, no storage.

pub mod event;

pub use event::{Event, EventPatch, EventStatus, NewEvent};
