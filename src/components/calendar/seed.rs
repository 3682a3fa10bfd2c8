use super::models::{Category, NewEventInput};
use super::store::EventStore;
use crate::error::CalendarResult;
use crate::utils::time::{shift_days, sunday_of_week};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

/// Something that can provide the initial events of a calendar
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Load the events to add, in order
    async fn load(&self) -> CalendarResult<Vec<NewEventInput>>;
}

/// Built-in practice calendar, laid out around the week of a reference date
#[derive(Debug, Clone)]
pub struct DemoSource {
    reference: NaiveDate,
}

impl DemoSource {
    pub fn new(reference: NaiveDate) -> Self {
        Self { reference }
    }

    fn day(&self, offset: i64) -> NaiveDate {
        shift_days(sunday_of_week(self.reference), offset)
    }
}

#[async_trait]
impl EventSource for DemoSource {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn load(&self) -> CalendarResult<Vec<NewEventInput>> {
        Ok(vec![
            NewEventInput::new("Bail hearing: State v. Sharma", Category::Hearing, self.day(1), "10:30 AM")
                .with_location("District Court, Courtroom 4")
                .with_duration("1 hour")
                .with_party("Rohan Sharma")
                .with_reference("CR-2026-0142"),
            NewEventInput::new("Client strategy meeting", Category::Meeting, self.day(1), "10:45 AM")
                .with_location("Conference Room B")
                .with_duration("45 minutes")
                .with_party("Mehta Textiles Pvt. Ltd."),
            NewEventInput::new("Initial consultation", Category::Consultation, self.day(2), "2:00 PM")
                .with_location("Video call")
                .with_duration("30 minutes")
                .with_party("Ananya Iyer")
                .with_notes("Property dispute, bring sale deed copies"),
            NewEventInput::new("Written statement due", Category::Deadline, self.day(3), "5:00 PM")
                .with_reference("CS-2025-0911")
                .with_notes("File through e-courts portal"),
            NewEventInput::new("Cross-examination", Category::Hearing, self.day(4), "11:00 AM")
                .with_location("High Court, Court 12")
                .with_duration("2 hours")
                .with_party("Kapoor Estates")
                .with_reference("CS-2025-0911"),
            NewEventInput::new("Partner review", Category::Meeting, self.day(5), "9:00 AM")
                .with_location("Office")
                .with_duration("1 hour"),
            NewEventInput::new("Contract review consultation", Category::Consultation, self.day(8), "12:00 PM")
                .with_location("Office")
                .with_party("Nikhil Verma"),
            NewEventInput::new("Appeal limitation expires", Category::Deadline, self.day(12), "11:59 PM")
                .with_reference("CRA-2026-0031"),
            NewEventInput::new("Arbitration hearing", Category::Hearing, self.day(20), "3:30 PM")
                .with_location("Arbitration Centre, Room 2")
                .with_duration("3 hours")
                .with_party("Mehta Textiles Pvt. Ltd."),
        ])
    }
}

/// Events read from a TOML file of `[[events]]` tables. Dates are quoted
/// `YYYY-MM-DD` strings.
#[derive(Debug, Clone)]
pub struct TomlFileSource {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    events: Vec<NewEventInput>,
}

impl TomlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EventSource for TomlFileSource {
    fn name(&self) -> &'static str {
        "toml_file"
    }

    async fn load(&self) -> CalendarResult<Vec<NewEventInput>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let file: SeedFile = toml::from_str(&content)?;
        info!("Read {} events from {}", file.events.len(), self.path.display());
        Ok(file.events)
    }
}

/// Build a store from each source in turn
pub async fn load_store(sources: &[Box<dyn EventSource>]) -> CalendarResult<EventStore> {
    let mut store = EventStore::new();
    for source in sources {
        let inputs = source.load().await?;
        info!("Loading {} events from source '{}'", inputs.len(), source.name());
        for input in inputs {
            store.add(input)?;
        }
    }
    Ok(store)
}
