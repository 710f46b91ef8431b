use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use mediaseed_core::{ContentRecord, EngagementRecord, ViewingRecord};
use mediaseed_generate::output::{to_csv, to_ndjson};
use mediaseed_generate::{CsvMode, GenerateOptions, GenerationEngine};

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 10)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .unwrap_or_default()
}

fn engine() -> GenerationEngine {
    GenerationEngine::new(GenerateOptions {
        content_count: 40,
        viewing_count: 300,
        engagement_attempts: 200,
        ..GenerateOptions::default()
    })
}

#[test]
fn ndjson_round_trips_every_dataset() {
    let datasets = engine().generate(42, base_time()).expect("generate");

    let content = to_ndjson(&datasets.content).expect("content ndjson");
    assert!(!content.ends_with('\n'));
    let parsed: Vec<ContentRecord> = content
        .split('\n')
        .map(|line| serde_json::from_str(line).expect("parse content line"))
        .collect();
    assert_eq!(parsed, datasets.content);

    let viewings = to_ndjson(&datasets.viewings).expect("viewing ndjson");
    let parsed: Vec<ViewingRecord> = viewings
        .split('\n')
        .map(|line| serde_json::from_str(line).expect("parse viewing line"))
        .collect();
    assert_eq!(parsed, datasets.viewings);

    let engagements = to_ndjson(&datasets.engagements).expect("engagement ndjson");
    let parsed: Vec<EngagementRecord> = engagements
        .lines()
        .map(|line| serde_json::from_str(line).expect("parse engagement line"))
        .collect();
    assert_eq!(parsed, datasets.engagements);
}

#[test]
fn viewing_csv_has_consistent_shape() {
    let datasets = engine().generate(7, base_time()).expect("generate");
    let text = to_csv(&datasets.viewings, CsvMode::Raw).expect("viewing csv");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), datasets.viewings.len() + 1);

    let header: Vec<&str> = lines[0].split(',').collect();
    let mut sorted = header.clone();
    sorted.sort_unstable();
    assert_eq!(header, sorted);
    assert_eq!(header.len(), 12);
    assert_eq!(header.first(), Some(&"completion_percentage"));
    assert_eq!(header.last(), Some(&"view_id"));

    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), header.len());
    }
}

#[test]
fn content_csv_unions_optional_series_columns() {
    let datasets = engine().generate(11, base_time()).expect("generate");
    let keys: BTreeSet<String> = datasets
        .content
        .iter()
        .flat_map(|record| {
            let value = serde_json::to_value(record).expect("to value");
            value
                .as_object()
                .map(|map| map.keys().cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        })
        .collect();

    let text = to_csv(&datasets.content, CsvMode::Quoted).expect("content csv");
    let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());
    let header = reader.headers().expect("read header").clone();
    assert_eq!(header.len(), keys.len());

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("read rows");
    assert_eq!(rows.len(), datasets.content.len());
    assert!(rows.iter().all(|row| row.len() == header.len()));
}
