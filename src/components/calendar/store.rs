use super::models::{CalendarEvent, EventId, EventPatch, NewEventInput};
use super::time::TimeOfDay;
use crate::error::{CalendarResult, Error};
use tracing::{debug, warn};

/// Authoritative, ordered collection of calendar events
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Build a store by adding each input in order
    pub fn from_inputs<I>(inputs: I) -> CalendarResult<Self>
    where
        I: IntoIterator<Item = NewEventInput>,
    {
        let mut store = Self::new();
        for input in inputs {
            store.add(input)?;
        }
        Ok(store)
    }

    /// Id the next added event will receive
    pub fn next_id(&self) -> EventId {
        let max = self.events.iter().map(|e| e.id.0).max().unwrap_or(0);
        EventId(max + 1)
    }

    /// Validate and append a new event
    pub fn add(&mut self, input: NewEventInput) -> CalendarResult<CalendarEvent> {
        let title = required(&input.title, "title")?;
        let time_text = required(&input.time_of_day, "time_of_day")?;
        let time = TimeOfDay::parse(time_text).inspect_err(|e| warn!("Rejected new event: {}", e))?;

        let event = CalendarEvent {
            id: self.next_id(),
            title: title.to_string(),
            category: input.category,
            date: input.date,
            time,
            location: input.location,
            duration_label: input.duration_label,
            related_party_name: input.related_party_name,
            reference_number: input.reference_number,
            notes: input.notes,
        };

        debug!(id = %event.id, category = %event.category, "Added event");
        self.events.push(event.clone());
        Ok(event)
    }

    /// Merge a patch over the event with the given id.
    ///
    /// The patch is validated before anything is written, so a rejected
    /// patch leaves the stored event unchanged.
    pub fn update(&mut self, id: EventId, patch: EventPatch) -> CalendarResult<CalendarEvent> {
        let index = self.position(id).ok_or(Error::NotFound(id))?;

        let title = patch
            .title
            .as_deref()
            .map(|t| required(t, "title").map(str::to_string))
            .transpose()?;
        let time = patch
            .time_of_day
            .as_deref()
            .map(|t| required(t, "time_of_day").and_then(TimeOfDay::parse))
            .transpose()?;

        let event = &mut self.events[index];
        if let Some(title) = title {
            event.title = title;
        }
        if let Some(time) = time {
            event.time = time;
        }
        if let Some(category) = patch.category {
            event.category = category;
        }
        if let Some(date) = patch.date {
            event.date = date;
        }
        if let Some(location) = patch.location {
            event.location = location;
        }
        if let Some(label) = patch.duration_label {
            event.duration_label = label;
        }
        if let Some(party) = patch.related_party_name {
            event.related_party_name = party;
        }
        if let Some(reference) = patch.reference_number {
            event.reference_number = reference;
        }
        if let Some(notes) = patch.notes {
            event.notes = notes;
        }

        debug!(id = %id, "Updated event");
        Ok(event.clone())
    }

    /// Remove the event with the given id. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: EventId) -> Option<CalendarEvent> {
        let index = self.position(id)?;
        debug!(id = %id, "Removed event");
        Some(self.events.remove(index))
    }

    /// Events in insertion order
    pub fn list(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }
}

/// Trimmed value of a required text field
fn required<'a>(value: &'a str, field: &'static str) -> CalendarResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        warn!("Rejected event with blank {}", field);
        return Err(Error::MissingRequiredField { field });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::calendar::models::Category;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hearing(title: &str) -> NewEventInput {
        NewEventInput::new(title, Category::Hearing, date(2026, 1, 6), "10:30 AM")
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = EventStore::new();
        assert_eq!(store.next_id(), EventId(1));

        let first = store.add(hearing("Bail hearing")).unwrap();
        let second = store.add(hearing("Final arguments")).unwrap();

        assert_eq!(first.id, EventId(1));
        assert_eq!(second.id, EventId(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_uses_max_id_after_removal() {
        let mut store = EventStore::new();
        store.add(hearing("A")).unwrap();
        store.add(hearing("B")).unwrap();
        store.add(hearing("C")).unwrap();

        // Removing from the middle keeps the maximum, removing the last lowers it
        store.remove(EventId(2));
        assert_eq!(store.add(hearing("D")).unwrap().id, EventId(4));
        store.remove(EventId(4));
        assert_eq!(store.add(hearing("E")).unwrap().id, EventId(4));
    }

    #[test]
    fn test_add_rejects_blank_required_fields() {
        let mut store = EventStore::new();

        let err = store.add(hearing("   ")).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { field: "title" }));

        let mut input = hearing("Filing");
        input.time_of_day = String::new();
        let err = store.add(input).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { field: "time_of_day" }));

        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_malformed_time() {
        let mut store = EventStore::new();
        let mut input = hearing("Filing");
        input.time_of_day = "around noon".to_string();

        assert!(matches!(store.add(input), Err(Error::InvalidTime(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_trims_title() {
        let mut store = EventStore::new();
        let event = store.add(hearing("  Case review  ")).unwrap();
        assert_eq!(event.title, "Case review");
    }

    #[test]
    fn test_update_merges_patch_in_place() {
        let mut store = EventStore::new();
        store.add(hearing("First")).unwrap();
        store
            .add(hearing("Second").with_location("Court 4").with_notes("Bring exhibits"))
            .unwrap();
        store.add(hearing("Third")).unwrap();

        let patch = EventPatch {
            title: Some("Second (rescheduled)".to_string()),
            time_of_day: Some("2:00 PM".to_string()),
            category: Some(Category::Meeting),
            notes: Some(None),
            ..Default::default()
        };
        let updated = store.update(EventId(2), patch).unwrap();

        assert_eq!(updated.title, "Second (rescheduled)");
        assert_eq!(updated.time, TimeOfDay { hour: 14, minute: 0 });
        assert_eq!(updated.category, Category::Meeting);
        assert_eq!(updated.location.as_deref(), Some("Court 4"));
        assert_eq!(updated.notes, None);

        // Position is unchanged
        assert_eq!(store.list()[1], updated);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = EventStore::new();
        store.add(hearing("Only")).unwrap();

        let err = store.update(EventId(9), EventPatch::default()).unwrap_err();
        assert!(matches!(err, Error::NotFound(EventId(9))));
    }

    #[test]
    fn test_rejected_patch_leaves_event_untouched() {
        let mut store = EventStore::new();
        let original = store.add(hearing("Original")).unwrap();

        let patch = EventPatch {
            date: Some(date(2026, 2, 1)),
            time_of_day: Some("25:00".to_string()),
            ..Default::default()
        };
        assert!(store.update(original.id, patch).is_err());

        let blank = EventPatch {
            title: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(store.update(original.id, blank).is_err());

        assert_eq!(store.get(original.id), Some(&original));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = EventStore::new();
        store.add(hearing("A")).unwrap();
        store.add(hearing("B")).unwrap();

        assert!(store.remove(EventId(1)).is_some());
        let after_once = store.list().to_vec();
        assert!(store.remove(EventId(1)).is_none());
        assert_eq!(store.list(), after_once.as_slice());
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut store = EventStore::new();
        let later = NewEventInput::new("Later", Category::Deadline, date(2026, 3, 1), "9:00 AM");
        let earlier = NewEventInput::new("Earlier", Category::Meeting, date(2026, 1, 1), "9:00 AM");
        store.add(later).unwrap();
        store.add(earlier).unwrap();

        let titles: Vec<_> = store.list().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Later", "Earlier"]);
    }
}
