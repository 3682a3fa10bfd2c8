use super::time::TimeOfDay;
use crate::error::Error;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by the event store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of calendar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hearing,
    Meeting,
    Consultation,
    Deadline,
}

/// Style tokens a renderer uses for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Hearing,
        Category::Meeting,
        Category::Consultation,
        Category::Deadline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hearing => "hearing",
            Category::Meeting => "meeting",
            Category::Consultation => "consultation",
            Category::Deadline => "deadline",
        }
    }

    /// Color and icon for the category
    pub fn style(&self) -> CategoryStyle {
        match self {
            Category::Hearing => CategoryStyle {
                color: "red",
                icon: "gavel",
            },
            Category::Meeting => CategoryStyle {
                color: "blue",
                icon: "users",
            },
            Category::Consultation => CategoryStyle {
                color: "green",
                icon: "message-square",
            },
            Category::Deadline => CategoryStyle {
                color: "amber",
                icon: "alarm-clock",
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}

/// A stored calendar event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub category: Category,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub location: Option<String>,
    pub duration_label: Option<String>,
    pub related_party_name: Option<String>,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
}

impl CalendarEvent {
    /// Hour bucket used by the hourly grid
    pub fn hour(&self) -> u32 {
        self.time.hour
    }
}

/// Payload for creating an event. The time of day is still free text here
/// and is parsed when the event enters the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEventInput {
    pub title: String,
    pub category: Category,
    pub date: NaiveDate,
    pub time_of_day: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub duration_label: Option<String>,
    #[serde(default)]
    pub related_party_name: Option<String>,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewEventInput {
    /// Create an input with only the required fields set
    pub fn new(
        title: impl Into<String>,
        category: Category,
        date: NaiveDate,
        time_of_day: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            date,
            time_of_day: time_of_day.into(),
            location: None,
            duration_label: None,
            related_party_name: None,
            reference_number: None,
            notes: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_duration(mut self, label: impl Into<String>) -> Self {
        self.duration_label = Some(label.into());
        self
    }

    pub fn with_party(mut self, name: impl Into<String>) -> Self {
        self.related_party_name = Some(name.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_number = Some(reference.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Partial update for an existing event. `None` keeps the current value;
/// for optional metadata `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub time_of_day: Option<String>,
    pub location: Option<Option<String>>,
    pub duration_label: Option<Option<String>>,
    pub related_party_name: Option<Option<String>>,
    pub reference_number: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}
