use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventdesk_core::{DomainError, DomainResult, Entity, EventId, GuestId};

/// Invitation state of a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestStatus {
    Invited,
    Confirmed,
    Declined,
}

impl GuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestStatus::Invited => "invited",
            GuestStatus::Confirmed => "confirmed",
            GuestStatus::Declined => "declined",
        }
    }
}

impl core::str::FromStr for GuestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invited" => Ok(GuestStatus::Invited),
            "confirmed" => Ok(GuestStatus::Confirmed),
            "declined" => Ok(GuestStatus::Declined),
            other => Err(DomainError::validation(format!(
                "unknown guest status '{other}' (expected invited, confirmed, declined)"
            ))),
        }
    }
}

/// A person invited to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: GuestId,
    pub event_id: EventId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub invited_at: DateTime<Utc>,
    pub status: GuestStatus,
}

impl Entity for Guest {
    type Id = GuestId;
    const KIND: &'static str = "guest";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Guest {
    pub fn from_new(id: GuestId, new: NewGuest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            event_id: new.event_id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            invited_at: new.invited_at.unwrap_or(now),
            status: new.status,
        }
    }
}

/// Input for inviting a guest. `invited_at` defaults to "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGuest {
    pub event_id: EventId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub invited_at: Option<DateTime<Utc>>,
    #[serde(default = "default_guest_status")]
    pub status: GuestStatus,
}

fn default_guest_status() -> GuestStatus {
    GuestStatus::Invited
}

impl NewGuest {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("guest name cannot be empty"));
        }
        if !self.email.contains('@') {
            return Err(DomainError::validation(format!(
                "invalid guest email '{}'",
                self.email
            )));
        }
        Ok(())
    }
}
