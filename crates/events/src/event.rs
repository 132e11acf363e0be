use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use eventdesk_core::{DomainError, DomainResult, Entity, EventId, Money};

/// Event publication lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Published,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Published => "published",
            EventStatus::Completed => "completed",
        }
    }
}

impl core::str::FromStr for EventStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(EventStatus::Draft),
            "published" => Ok(EventStatus::Published),
            "completed" => Ok(EventStatus::Completed),
            other => Err(DomainError::validation(format!(
                "unknown event status '{other}' (expected draft, published, completed)"
            ))),
        }
    }
}

/// A planned event.
///
/// `attendees` is not bounded by `capacity`: overbooking is representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub category: String,
    pub capacity: u32,
    pub attendees: u32,
    pub budget: Money,
    pub status: EventStatus,
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Entity for Event {
    type Id = EventId;
    const KIND: &'static str = "event";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Event {
    /// Materialize a new event under a freshly assigned id.
    pub fn from_new(id: EventId, new: NewEvent) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            date: new.date,
            time: new.time,
            location: new.location,
            category: new.category,
            capacity: new.capacity,
            attendees: new.attendees,
            budget: new.budget,
            status: new.status,
            created_by: new.created_by,
            image_url: new.image_url,
        }
    }

    /// Share of capacity taken, rounded to the nearest percent.
    ///
    /// `None` when capacity is zero. May exceed 100 when overbooked; the
    /// result is exact for every `u32` input (half rounds up).
    pub fn fill_percent(&self) -> Option<u64> {
        if self.capacity == 0 {
            return None;
        }
        let capacity = u64::from(self.capacity);
        Some((u64::from(self.attendees) * 100 + capacity / 2) / capacity)
    }

    pub fn is_published(&self) -> bool {
        self.status == EventStatus::Published
    }
}

/// Input for creating an event: every field except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub category: String,
    pub capacity: u32,
    #[serde(default)]
    pub attendees: u32,
    pub budget: Money,
    pub status: EventStatus,
    pub created_by: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewEvent {
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        Ok(())
    }
}

/// Partial update for an event.
///
/// `None` keeps the stored value; `Some` overwrites it. `image_url` is doubly
/// optional so a patch can clear it (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub capacity: Option<u32>,
    pub attendees: Option<u32>,
    pub budget: Option<Money>,
    pub status: Option<EventStatus>,
    pub created_by: Option<String>,
    pub image_url: Option<Option<String>>,
}

impl EventPatch {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(DomainError::validation("title cannot be empty"));
            }
        }
        Ok(())
    }

    /// Shallow merge into `event`, field by field.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(v) = self.title {
            event.title = v;
        }
        if let Some(v) = self.description {
            event.description = v;
        }
        if let Some(v) = self.date {
            event.date = v;
        }
        if let Some(v) = self.time {
            event.time = v;
        }
        if let Some(v) = self.location {
            event.location = v;
        }
        if let Some(v) = self.category {
            event.category = v;
        }
        if let Some(v) = self.capacity {
            event.capacity = v;
        }
        if let Some(v) = self.attendees {
            event.attendees = v;
        }
        if let Some(v) = self.budget {
            event.budget = v;
        }
        if let Some(v) = self.status {
            event.status = v;
        }
        if let Some(v) = self.created_by {
            event.created_by = v;
        }
        if let Some(v) = self.image_url {
            event.image_url = v;
        }
    }
}
