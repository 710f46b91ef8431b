use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use mediaseed_core::Dataset;
use mediaseed_publish::PublishedObject;

use crate::checks::CheckIssue;
use crate::errors::GenerationError;

/// How the catalog decides whether an entry carries season/episode counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesPolicy {
    /// Separate categorical draw, unrelated to `content_type`.
    #[default]
    Independent,
    /// Season/episode counts exactly when `content_type` is `series`.
    Derived,
}

/// CSV rendering mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvMode {
    /// Values joined by commas with no quoting or escaping.
    #[default]
    Raw,
    /// RFC 4180 style quoting where needed.
    Quoted,
}

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Run seed; a random one is drawn and reported when absent.
    pub seed: Option<u64>,
    /// Reference "now" for dates and the batch partition. Defaults to local time.
    pub base_time: Option<NaiveDateTime>,
    pub content_count: usize,
    pub viewing_count: usize,
    /// Sampling attempts; roughly `engagement_rate` of them yield a record.
    pub engagement_attempts: usize,
    pub engagement_rate: f64,
    pub rating_rate: f64,
    pub series_policy: SeriesPolicy,
    pub csv_mode: CsvMode,
    /// Datasets that also get a CSV object.
    pub csv_datasets: Vec<Dataset>,
    /// Fail before publishing when dataset checks report issues.
    pub strict: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            seed: None,
            base_time: None,
            content_count: 200,
            viewing_count: 2000,
            engagement_attempts: 1000,
            engagement_rate: 0.7,
            rating_rate: 0.3,
            series_policy: SeriesPolicy::Independent,
            csv_mode: CsvMode::Raw,
            csv_datasets: vec![Dataset::ViewingData],
            strict: false,
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        ensure_count("content_count", self.content_count)?;
        ensure_count("viewing_count", self.viewing_count)?;
        ensure_count("engagement_attempts", self.engagement_attempts)?;
        ensure_rate("engagement_rate", self.engagement_rate)?;
        ensure_rate("rating_rate", self.rating_rate)?;
        Ok(())
    }
}

pub(crate) fn ensure_count(name: &str, count: usize) -> Result<(), GenerationError> {
    if count == 0 {
        return Err(GenerationError::InvalidInput(format!(
            "{name} must be positive"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_rate(name: &str, rate: f64) -> Result<(), GenerationError> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(GenerationError::InvalidInput(format!(
            "{name} must be within [0, 1], got {rate}"
        )));
    }
    Ok(())
}

/// Summary of a generated dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub dataset: Dataset,
    pub records_requested: u64,
    pub records_generated: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub batch_date: NaiveDate,
    pub datasets: Vec<DatasetReport>,
    pub objects: Vec<PublishedObject>,
    pub bytes_written: u64,
    pub issues: Vec<CheckIssue>,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64, batch_date: NaiveDate) -> Self {
        Self {
            run_id,
            seed,
            batch_date,
            datasets: Vec::new(),
            objects: Vec::new(),
            bytes_written: 0,
            issues: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn record_dataset(&mut self, dataset: Dataset, requested: usize, generated: usize) {
        self.datasets.push(DatasetReport {
            dataset,
            records_requested: requested as u64,
            records_generated: generated as u64,
        });
    }

    pub fn record_object(&mut self, object: PublishedObject) {
        self.bytes_written += object.bytes;
        self.objects.push(object);
    }
}
