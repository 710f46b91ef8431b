use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::reference::{
    ContentType, Country, DeviceType, EngagementType, Genre, Language, Platform, Rating,
    StreamingQuality, Tag,
};

/// A catalog entry (movie, series, documentary, ...).
///
/// `season_count` and `episode_count` are set by an independent draw and do
/// not necessarily agree with `content_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub content_id: String,
    pub title: String,
    pub content_type: ContentType,
    pub genre: Genre,
    pub release_date: NaiveDate,
    pub rating: Rating,
    pub duration_minutes: u32,
    pub is_original: bool,
    pub language: Language,
    pub creator: String,
    pub description: String,
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<u32>,
}

/// A single viewing session of a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewingRecord {
    pub view_id: String,
    pub user_id: String,
    /// Bare catalog id, or an episode-qualified id for series content.
    pub content_id: String,
    pub view_date: NaiveDate,
    #[serde(with = "start_time_format")]
    pub start_time: NaiveDateTime,
    pub view_duration_minutes: u32,
    pub completion_percentage: u8,
    pub platform: Platform,
    pub device_type: DeviceType,
    pub location: Country,
    pub streaming_quality: StreamingQuality,
    pub is_downloaded: bool,
}

/// Engagement attached to a viewing session.
///
/// Optional fields serialize as `null` rather than being omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementRecord {
    pub engagement_id: String,
    pub view_id: String,
    pub user_id: String,
    pub content_id: String,
    pub engagement_date: NaiveDate,
    pub rating: Option<u8>,
    pub liked: Option<bool>,
    pub added_to_list: Option<bool>,
    pub shared: Option<bool>,
    pub comment_added: Option<bool>,
    pub engagement_type: EngagementType,
}

mod start_time_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
