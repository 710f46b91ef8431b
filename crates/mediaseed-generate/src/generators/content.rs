use chrono::{Duration, NaiveDate};
use rand::{Rng, RngCore};

use mediaseed_core::{ContentRecord, ContentType, Genre, Language, Rating, Tag, content_id};

use crate::errors::GenerationError;
use crate::model::{SeriesPolicy, ensure_count};

use super::pick;

const MAX_RELEASE_AGE_DAYS: i64 = 1000;
const MAX_DURATION_MINUTES: u32 = 180;
const CREATOR_STUDIOS: u32 = 20;
const MAX_TAGS: usize = 3;
const MAX_SEASONS: u32 = 5;
const EPISODES_PER_SEASON: (u32, u32) = (8, 24);

/// Builds the content catalog.
#[derive(Debug, Clone)]
pub struct ContentGenerator {
    /// Release dates fall strictly before this date.
    pub base_date: NaiveDate,
    pub series_policy: SeriesPolicy,
}

impl ContentGenerator {
    pub fn new(base_date: NaiveDate, series_policy: SeriesPolicy) -> Self {
        Self {
            base_date,
            series_policy,
        }
    }

    /// Generate exactly `count` records with ids `CONT000001..`.
    pub fn generate(
        &self,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ContentRecord>, GenerationError> {
        ensure_count("content count", count)?;
        Ok((1..=count as u64)
            .map(|index| self.generate_one(index, rng))
            .collect())
    }

    fn generate_one(&self, index: u64, rng: &mut dyn RngCore) -> ContentRecord {
        let id = content_id(index);
        let content_type = pick(&ContentType::ALL, rng);
        let is_series = match self.series_policy {
            SeriesPolicy::Independent => pick(&ContentType::ALL, rng) == ContentType::Series,
            SeriesPolicy::Derived => content_type == ContentType::Series,
        };

        let age_days = rng.random_range(1..=MAX_RELEASE_AGE_DAYS);
        let tag_count = rng.random_range(1..=MAX_TAGS);
        let tags = rand::seq::index::sample(rng, Tag::ALL.len(), tag_count)
            .into_iter()
            .map(|idx| Tag::ALL[idx])
            .collect();

        let (season_count, episode_count) = if is_series {
            let seasons = rng.random_range(1..=MAX_SEASONS);
            let per_season = rng.random_range(EPISODES_PER_SEASON.0..=EPISODES_PER_SEASON.1);
            (Some(seasons), Some(per_season * seasons))
        } else {
            (None, None)
        };

        ContentRecord {
            title: format!("Sample Media Title {index}"),
            content_type,
            genre: pick(&Genre::ALL, rng),
            release_date: self.base_date - Duration::days(age_days),
            rating: pick(&Rating::ALL, rng),
            duration_minutes: rng.random_range(1..=MAX_DURATION_MINUTES),
            is_original: rng.random_bool(0.5),
            language: pick(&Language::ALL, rng),
            creator: format!("Creator Studio {}", rng.random_range(1..=CREATOR_STUDIOS)),
            description: format!("This is a sample description for content {id}."),
            tags,
            season_count,
            episode_count,
            content_id: id,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
    }

    #[test]
    fn rejects_zero_count() {
        let generator = ContentGenerator::new(base_date(), SeriesPolicy::Independent);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            generator.generate(0, &mut rng),
            Err(GenerationError::InvalidInput(_))
        ));
    }

    #[test]
    fn fields_stay_within_ranges() {
        let generator = ContentGenerator::new(base_date(), SeriesPolicy::Independent);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let records = generator.generate(300, &mut rng).expect("generate content");

        for record in &records {
            assert!((1..=180).contains(&record.duration_minutes));
            assert!(record.release_date < base_date());
            assert!(record.release_date >= base_date() - Duration::days(1000));
            assert!((1..=3).contains(&record.tags.len()));
            let distinct: HashSet<_> = record.tags.iter().collect();
            assert_eq!(distinct.len(), record.tags.len(), "tags drawn without replacement");

            match (record.season_count, record.episode_count) {
                (Some(seasons), Some(episodes)) => {
                    assert!((1..=5).contains(&seasons));
                    assert_eq!(episodes % seasons, 0);
                    assert!((8..=24).contains(&(episodes / seasons)));
                }
                (None, None) => {}
                other => panic!("season/episode counts must come together: {other:?}"),
            }
        }
    }

    #[test]
    fn independent_policy_decouples_series_fields_from_type() {
        let generator = ContentGenerator::new(base_date(), SeriesPolicy::Independent);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let records = generator.generate(500, &mut rng).expect("generate content");

        let mismatched = records
            .iter()
            .filter(|record| {
                (record.content_type == ContentType::Series) != record.season_count.is_some()
            })
            .count();
        assert!(mismatched > 0, "independent draws should disagree sometimes");
    }

    #[test]
    fn derived_policy_ties_series_fields_to_type() {
        let generator = ContentGenerator::new(base_date(), SeriesPolicy::Derived);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let records = generator.generate(500, &mut rng).expect("generate content");

        for record in &records {
            assert_eq!(
                record.content_type == ContentType::Series,
                record.season_count.is_some()
            );
        }
    }
}
