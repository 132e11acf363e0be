use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventdesk_core::{DomainError, DomainResult, Entity, EventId, RsvpId};

/// Response state of an RSVP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Pending,
    Accepted,
    Declined,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Pending => "pending",
            RsvpStatus::Accepted => "accepted",
            RsvpStatus::Declined => "declined",
        }
    }

    pub fn is_responded(&self) -> bool {
        !matches!(self, RsvpStatus::Pending)
    }
}

impl core::str::FromStr for RsvpStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RsvpStatus::Pending),
            "accepted" => Ok(RsvpStatus::Accepted),
            "declined" => Ok(RsvpStatus::Declined),
            other => Err(DomainError::validation(format!(
                "unknown rsvp status '{other}' (expected pending, accepted, declined)"
            ))),
        }
    }
}

/// A guest's response to an event invitation.
///
/// Invariant: `responded_at.is_some() == status.is_responded()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: RsvpId,
    pub event_id: EventId,
    pub guest_name: String,
    pub email: String,
    pub status: RsvpStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,
    pub plus_one: bool,
}

impl Entity for Rsvp {
    type Id = RsvpId;
    const KIND: &'static str = "rsvp";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Rsvp {
    pub fn from_new(id: RsvpId, new: NewRsvp, now: DateTime<Utc>) -> Self {
        let responded_at = if new.status.is_responded() {
            Some(new.responded_at.unwrap_or(now))
        } else {
            None
        };
        Self {
            id,
            event_id: new.event_id,
            guest_name: new.guest_name,
            email: new.email,
            status: new.status,
            responded_at,
            dietary_restrictions: new.dietary_restrictions,
            plus_one: new.plus_one,
        }
    }

    /// Record a (re)response.
    ///
    /// Every call to a responded status restamps `responded_at`, so repeating
    /// a response refreshes the time. Moving back to `Pending` clears it.
    pub fn set_status(&mut self, status: RsvpStatus, now: DateTime<Utc>) {
        self.status = status;
        self.responded_at = status.is_responded().then_some(now);
    }

    /// Seats this RSVP takes if accepted (guest + optional plus-one).
    pub fn headcount(&self) -> u32 {
        match self.status {
            RsvpStatus::Accepted if self.plus_one => 2,
            RsvpStatus::Accepted => 1,
            _ => 0,
        }
    }
}

/// Input for creating an RSVP: every field except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRsvp {
    pub event_id: EventId,
    pub guest_name: String,
    pub email: String,
    pub status: RsvpStatus,
    #[serde(default)]
    pub responded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub dietary_restrictions: Option<String>,
    #[serde(default)]
    pub plus_one: bool,
}

impl NewRsvp {
    pub fn validate(&self) -> DomainResult<()> {
        if self.guest_name.trim().is_empty() {
            return Err(DomainError::validation("guest name cannot be empty"));
        }
        Ok(())
    }
}
