use std::time::Instant;

use chrono::NaiveDateTime;
use rand::Rng;
use tracing::{info, warn};

use mediaseed_core::{ContentRecord, Dataset, EngagementRecord, ViewingRecord};
use mediaseed_publish::{BlobStore, ObjectFormat, Publisher};

use crate::checks::check_datasets;
use crate::errors::GenerationError;
use crate::generators::{ContentGenerator, EngagementGenerator, ViewingGenerator, dataset_rng};
use crate::model::{CsvMode, GenerateOptions, GenerationReport};
use crate::output::{to_csv, to_ndjson};

/// Message returned by a successful run.
pub const SUCCESS_MESSAGE: &str = "Successfully generated synthetic media data";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub message: &'static str,
    pub report: GenerationReport,
}

/// The three datasets of one run, held in memory until published.
#[derive(Debug, Clone)]
pub struct GeneratedDatasets {
    pub content: Vec<ContentRecord>,
    pub viewings: Vec<ViewingRecord>,
    pub engagements: Vec<EngagementRecord>,
}

impl GeneratedDatasets {
    pub fn record_count(&self, dataset: Dataset) -> usize {
        match dataset {
            Dataset::ContentMetadata => self.content.len(),
            Dataset::ViewingData => self.viewings.len(),
            Dataset::EngagementData => self.engagements.len(),
        }
    }

    pub fn to_ndjson(&self, dataset: Dataset) -> Result<String, GenerationError> {
        match dataset {
            Dataset::ContentMetadata => to_ndjson(&self.content),
            Dataset::ViewingData => to_ndjson(&self.viewings),
            Dataset::EngagementData => to_ndjson(&self.engagements),
        }
    }

    pub fn to_csv(&self, dataset: Dataset, mode: CsvMode) -> Result<String, GenerationError> {
        match dataset {
            Dataset::ContentMetadata => to_csv(&self.content, mode),
            Dataset::ViewingData => to_csv(&self.viewings, mode),
            Dataset::EngagementData => to_csv(&self.engagements, mode),
        }
    }
}

/// Entry point for generating and publishing the media datasets.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate content, then viewings over it, then engagements over those.
    pub fn generate(
        &self,
        seed: u64,
        base_time: NaiveDateTime,
    ) -> Result<GeneratedDatasets, GenerationError> {
        self.options.validate()?;

        let mut rng = dataset_rng(seed, Dataset::ContentMetadata);
        let content = ContentGenerator::new(base_time.date(), self.options.series_policy)
            .generate(self.options.content_count, &mut rng)?;
        info!(
            event = "dataset_generated",
            dataset = %Dataset::ContentMetadata,
            records = content.len()
        );

        let mut rng = dataset_rng(seed, Dataset::ViewingData);
        let viewings = ViewingGenerator::new(base_time).generate(
            &content,
            self.options.viewing_count,
            &mut rng,
        )?;
        info!(
            event = "dataset_generated",
            dataset = %Dataset::ViewingData,
            records = viewings.len()
        );

        let mut rng = dataset_rng(seed, Dataset::EngagementData);
        let engagements =
            EngagementGenerator::new(self.options.engagement_rate, self.options.rating_rate)
                .generate(&viewings, self.options.engagement_attempts, &mut rng)?;
        info!(
            event = "dataset_generated",
            dataset = %Dataset::EngagementData,
            attempts = self.options.engagement_attempts,
            records = engagements.len()
        );

        Ok(GeneratedDatasets {
            content,
            viewings,
            engagements,
        })
    }

    /// Generate all datasets and publish them in order.
    ///
    /// The first failure aborts the run; objects already written stay in the
    /// store.
    pub async fn run(&self, store: &dyn BlobStore) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        let base_time = self
            .options
            .base_time
            .unwrap_or_else(|| chrono::Local::now().naive_local());
        let mut report = GenerationReport::new(run_id.clone(), seed, base_time.date());

        info!(
            event = "generation_started",
            run_id = %run_id,
            seed,
            batch_date = %report.batch_date,
            store = store.kind(),
            strict = self.options.strict,
        );

        match self.execute(store, seed, base_time, &mut report).await {
            Ok(()) => {
                report.duration_ms = start.elapsed().as_millis() as u64;
                info!(
                    event = "generation_completed",
                    run_id = %run_id,
                    objects = report.objects.len(),
                    bytes_written = report.bytes_written,
                    duration_ms = report.duration_ms,
                );
                Ok(GenerationResult {
                    message: SUCCESS_MESSAGE,
                    report,
                })
            }
            Err(err) => {
                warn!(
                    event = "generation_failed",
                    run_id = %run_id,
                    objects_published = report.objects.len(),
                    error = %err,
                );
                Err(err)
            }
        }
    }

    async fn execute(
        &self,
        store: &dyn BlobStore,
        seed: u64,
        base_time: NaiveDateTime,
        report: &mut GenerationReport,
    ) -> Result<(), GenerationError> {
        let datasets = self.generate(seed, base_time)?;
        report.record_dataset(
            Dataset::ContentMetadata,
            self.options.content_count,
            datasets.content.len(),
        );
        report.record_dataset(
            Dataset::ViewingData,
            self.options.viewing_count,
            datasets.viewings.len(),
        );
        report.record_dataset(
            Dataset::EngagementData,
            self.options.engagement_attempts,
            datasets.engagements.len(),
        );

        self.publish(&datasets, store, report).await
    }

    /// Check the datasets, then write each one to the store.
    ///
    /// Issues are recorded in the report; in strict mode any issue fails the
    /// run before the first write.
    pub async fn publish(
        &self,
        datasets: &GeneratedDatasets,
        store: &dyn BlobStore,
        report: &mut GenerationReport,
    ) -> Result<(), GenerationError> {
        let issues = check_datasets(&datasets.content, &datasets.viewings, &datasets.engagements);
        for issue in &issues {
            warn!(
                event = "check_issue",
                dataset = %issue.dataset,
                code = %issue.code,
                record_id = %issue.record_id,
                detail = %issue.message,
            );
        }
        if self.options.strict && !issues.is_empty() {
            return Err(GenerationError::ChecksFailed(issues));
        }
        report.issues = issues;

        let publisher = Publisher::new(store, report.batch_date);
        for dataset in Dataset::ALL {
            let body = datasets.to_ndjson(dataset)?;
            let object = publisher
                .publish_dataset(dataset, ObjectFormat::Ndjson, body.into_bytes())
                .await?;
            report.record_object(object);

            if self.options.csv_datasets.contains(&dataset) {
                let body = datasets.to_csv(dataset, self.options.csv_mode)?;
                let object = publisher
                    .publish_dataset(dataset, ObjectFormat::Csv, body.into_bytes())
                    .await?;
                report.record_object(object);
            }
            info!(
                event = "dataset_published",
                dataset = %dataset,
                records = datasets.record_count(dataset)
            );
        }

        Ok(())
    }
}
