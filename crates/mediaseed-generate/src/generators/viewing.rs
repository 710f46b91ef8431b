use chrono::{Duration, NaiveDateTime, Timelike};
use rand::{Rng, RngCore};

use mediaseed_core::{
    ContentRecord, ContentType, Country, DeviceType, Platform, StreamingQuality, ViewingRecord,
    episode_content_id, user_id,
};

use crate::errors::GenerationError;
use crate::model::ensure_count;

use super::{pick, random_uuid};

const USER_POOL: u32 = 10_000;
const LOOKBACK_DAYS: i64 = 30;
const DEFAULT_DURATION_MINUTES: u32 = 90;
const DEFAULT_EPISODE_COUNT: u32 = 10;

/// Builds viewing sessions over an existing catalog.
#[derive(Debug, Clone)]
pub struct ViewingGenerator {
    /// Sessions start within the 30 days before this instant.
    pub base_time: NaiveDateTime,
}

impl ViewingGenerator {
    pub fn new(base_time: NaiveDateTime) -> Self {
        Self { base_time }
    }

    /// Generate exactly `count` sessions, sampling content with replacement.
    pub fn generate(
        &self,
        content: &[ContentRecord],
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ViewingRecord>, GenerationError> {
        if content.is_empty() {
            return Err(GenerationError::InvalidInput(
                "viewing generation requires at least one content record".to_string(),
            ));
        }
        ensure_count("viewing count", count)?;

        let base_time = truncate_to_minute(self.base_time);
        Ok((0..count)
            .map(|_| {
                let item = &content[rng.random_range(0..content.len())];
                generate_one(item, base_time, rng)
            })
            .collect())
    }
}

fn generate_one(
    content: &ContentRecord,
    base_time: NaiveDateTime,
    rng: &mut dyn RngCore,
) -> ViewingRecord {
    let start_time = base_time
        - Duration::days(rng.random_range(0..=LOOKBACK_DAYS))
        - Duration::hours(rng.random_range(0..=23))
        - Duration::minutes(rng.random_range(0..=59));

    let duration = effective_duration(content);
    let view_duration = rng.random_range(1..=duration);

    // Keyed on content_type alone; season/episode counts may be missing.
    let content_id = if content.content_type == ContentType::Series {
        let seasons = content.season_count.unwrap_or(1).max(1);
        let episodes = content.episode_count.unwrap_or(DEFAULT_EPISODE_COUNT);
        let season = rng.random_range(1..=seasons);
        let episode = rng.random_range(1..=(episodes / seasons).max(1));
        episode_content_id(&content.content_id, season, episode)
    } else {
        content.content_id.clone()
    };

    ViewingRecord {
        view_id: random_uuid(rng),
        user_id: user_id(rng.random_range(1..=USER_POOL)),
        content_id,
        view_date: start_time.date(),
        start_time,
        view_duration_minutes: view_duration,
        completion_percentage: completion_percentage(view_duration, duration),
        platform: pick(&Platform::ALL, rng),
        device_type: pick(&DeviceType::ALL, rng),
        location: pick(&Country::ALL, rng),
        streaming_quality: pick(&StreamingQuality::ALL, rng),
        is_downloaded: rng.random_bool(0.5),
    }
}

/// Runtime used to bound a session; zero-length entries fall back to 90 minutes.
pub(crate) fn effective_duration(content: &ContentRecord) -> u32 {
    if content.duration_minutes == 0 {
        DEFAULT_DURATION_MINUTES
    } else {
        content.duration_minutes
    }
}

/// `100 * viewed / duration` rounded half to even, capped at 100.
pub fn completion_percentage(view_duration: u32, duration: u32) -> u8 {
    let duration = if duration == 0 {
        DEFAULT_DURATION_MINUTES
    } else {
        duration
    };
    let percent = (100.0 * f64::from(view_duration) / f64::from(duration)).round_ties_even();
    percent.min(100.0) as u8
}

fn truncate_to_minute(value: NaiveDateTime) -> NaiveDateTime {
    value
        .with_second(0)
        .and_then(|value| value.with_nanosecond(0))
        .unwrap_or(value)
}
