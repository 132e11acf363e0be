//! Guest-list domain module.
//!
//! RSVPs (responses to an event) and invited guests. Both reference an event
//! by id; the store layer checks that the event exists.

pub mod guest;
pub mod rsvp;

pub use guest::{Guest, GuestStatus, NewGuest};
pub use rsvp::{NewRsvp, Rsvp, RsvpStatus};
