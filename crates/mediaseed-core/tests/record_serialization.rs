use chrono::NaiveDate;
use mediaseed_core::{
    ContentRecord, ContentType, Country, DeviceType, EngagementRecord, EngagementType, Genre,
    Language, Platform, Rating, StreamingQuality, Tag, ViewingRecord,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn movie() -> ContentRecord {
    ContentRecord {
        content_id: "CONT000001".to_string(),
        title: "Sample Media Title 1".to_string(),
        content_type: ContentType::MusicVideo,
        genre: Genre::ScienceFiction,
        release_date: date(2024, 2, 29),
        rating: Rating::Pg13,
        duration_minutes: 60,
        is_original: true,
        language: Language::Ja,
        creator: "Creator Studio 4".to_string(),
        description: "This is a sample description for content CONT000001.".to_string(),
        tags: vec![Tag::AwardWinning, Tag::Trending],
        season_count: None,
        episode_count: None,
    }
}

#[test]
fn content_omits_absent_series_fields() {
    let json = serde_json::to_string(&movie()).expect("serialize content");
    let expected = concat!(
        r#"{"content_id":"CONT000001","title":"Sample Media Title 1","#,
        r#""content_type":"music_video","genre":"science_fiction","#,
        r#""release_date":"2024-02-29","rating":"PG-13","duration_minutes":60,"#,
        r#""is_original":true,"language":"ja","creator":"Creator Studio 4","#,
        r#""description":"This is a sample description for content CONT000001.","#,
        r#""tags":["award_winning","trending"]}"#
    );
    assert_eq!(json, expected);
}

#[test]
fn content_keeps_series_fields_when_present() {
    let mut record = movie();
    record.season_count = Some(2);
    record.episode_count = Some(30);

    let value = serde_json::to_value(&record).expect("serialize content");
    assert_eq!(value["season_count"], 2);
    assert_eq!(value["episode_count"], 30);

    let parsed: ContentRecord = serde_json::from_value(value).expect("parse content");
    assert_eq!(parsed, record);
}

#[test]
fn viewing_uses_space_separated_start_time() {
    let record = ViewingRecord {
        view_id: "3f1c1a56-4f0e-4a57-9d7c-9d1f0d0b9a11".to_string(),
        user_id: "USER0000042".to_string(),
        content_id: "CONT000001_S01E05".to_string(),
        view_date: date(2024, 5, 1),
        start_time: date(2024, 5, 1).and_hms_opt(21, 7, 0).expect("valid time"),
        view_duration_minutes: 30,
        completion_percentage: 50,
        platform: Platform::SmartTv,
        device_type: DeviceType::Tv,
        location: Country::Uk,
        streaming_quality: StreamingQuality::Uhd4k,
        is_downloaded: false,
    };

    let value = serde_json::to_value(&record).expect("serialize viewing");
    assert_eq!(value["start_time"], "2024-05-01 21:07:00");
    assert_eq!(value["device_type"], "TV");
    assert_eq!(value["location"], "UK");
    assert_eq!(value["streaming_quality"], "4K");
    assert_eq!(value["platform"], "smart_tv");

    let parsed: ViewingRecord = serde_json::from_value(value).expect("parse viewing");
    assert_eq!(parsed, record);
}

#[test]
fn engagement_writes_unknown_flags_as_null() {
    let record = EngagementRecord {
        engagement_id: "e".to_string(),
        view_id: "v".to_string(),
        user_id: "USER0000001".to_string(),
        content_id: "CONT000001".to_string(),
        engagement_date: date(2024, 5, 1),
        rating: None,
        liked: Some(true),
        added_to_list: None,
        shared: Some(false),
        comment_added: None,
        engagement_type: EngagementType::AddToList,
    };

    let json = serde_json::to_string(&record).expect("serialize engagement");
    assert!(json.contains(r#""rating":null"#));
    assert!(json.contains(r#""added_to_list":null"#));
    assert!(json.contains(r#""liked":true"#));
    assert!(json.contains(r#""engagement_type":"add_to_list""#));
}
