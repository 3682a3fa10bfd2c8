use chrono::NaiveDate;
use std::io::Write;
use yugality_calendar::components::calendar::seed::{load_store, EventSource, TomlFileSource};
use yugality_calendar::components::calendar::{Category, EventId, Projection};
use yugality_calendar::error::Error;

const SEED: &str = r#"
[[events]]
title = "Bail hearing"
category = "hearing"
date = "2026-01-06"
time_of_day = "10:30 AM"
location = "District Court"
reference_number = "CR-2026-0142"

[[events]]
title = "Client sync"
category = "meeting"
date = "2026-01-06"
time_of_day = "10:45 AM"
"#;

fn seed_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_toml_seed_file() {
    let file = seed_file(SEED);
    let sources: Vec<Box<dyn EventSource>> = vec![Box::new(TomlFileSource::new(file.path()))];

    let store = load_store(&sources).await.unwrap();
    assert_eq!(store.len(), 2);

    let first = &store.list()[0];
    assert_eq!(first.id, EventId(1));
    assert_eq!(first.category, Category::Hearing);
    assert_eq!(first.location.as_deref(), Some("District Court"));
    assert_eq!(first.notes, None);

    let jan6 = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap();
    let projection = Projection::new(store.list(), jan6);
    assert_eq!(projection.events_on_at_hour(jan6, 10).map(|e| e.id), Some(EventId(1)));
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let file = seed_file(&SEED.replace("\"meeting\"", "\"lunch\""));
    let source = TomlFileSource::new(file.path());

    assert!(matches!(source.load().await, Err(Error::Serialization(_))));
}

#[tokio::test]
async fn test_blank_title_in_seed_file_fails_loading() {
    let file = seed_file(&SEED.replace("\"Client sync\"", "\"  \""));
    let sources: Vec<Box<dyn EventSource>> = vec![Box::new(TomlFileSource::new(file.path()))];

    assert!(matches!(
        load_store(&sources).await,
        Err(Error::MissingRequiredField { field: "title" })
    ));
}

#[tokio::test]
async fn test_missing_seed_file() {
    let source = TomlFileSource::new("does/not/exist.toml");
    assert!(matches!(source.load().await, Err(Error::Io(_))));
}

#[tokio::test]
async fn test_bundled_sample_events() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_events.toml");
    let sources: Vec<Box<dyn EventSource>> = vec![Box::new(TomlFileSource::new(path))];
    let store = load_store(&sources).await.unwrap();
    assert_eq!(store.len(), 4);

    let deadline = store.get(EventId(3)).unwrap();
    assert_eq!(deadline.category, Category::Deadline);
    assert_eq!(deadline.hour(), 17);
    assert_eq!(deadline.time.to_string(), "5:00 PM");
}
