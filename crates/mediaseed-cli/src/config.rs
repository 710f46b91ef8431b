use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use mediaseed_core::Dataset;
use mediaseed_generate::{CsvMode, GenerateOptions, SeriesPolicy};

use crate::CliError;

pub const DEFAULT_CONFIG_PATH: &str = "mediaseed.toml";
pub const DEFAULT_BUCKET: &str = "media-datalake-iceberg-demo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    S3,
    Local,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bucket: String,
    pub store: StoreKind,
    /// Root directory for the `local` store.
    pub out_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub strict: bool,
    pub counts: Counts,
    pub sampling: Sampling,
    pub output: Output,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            store: StoreKind::S3,
            out_dir: PathBuf::from("lake"),
            seed: None,
            strict: false,
            counts: Counts::default(),
            sampling: Sampling::default(),
            output: Output::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Counts {
    pub content: usize,
    pub viewings: usize,
    pub engagement_attempts: usize,
}

impl Default for Counts {
    fn default() -> Self {
        Self {
            content: 200,
            viewings: 2000,
            engagement_attempts: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sampling {
    pub engagement_rate: f64,
    pub rating_rate: f64,
    pub series_policy: SeriesPolicy,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            engagement_rate: 0.7,
            rating_rate: 0.3,
            series_policy: SeriesPolicy::Independent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    pub csv_mode: CsvMode,
    pub csv_datasets: Vec<Dataset>,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            csv_mode: CsvMode::Raw,
            csv_datasets: vec![Dataset::ViewingData],
        }
    }
}

impl Config {
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            seed: self.seed,
            base_time: None,
            content_count: self.counts.content,
            viewing_count: self.counts.viewings,
            engagement_attempts: self.counts.engagement_attempts,
            engagement_rate: self.sampling.engagement_rate,
            rating_rate: self.sampling.rating_rate,
            series_policy: self.sampling.series_policy,
            csv_mode: self.output.csv_mode,
            csv_datasets: self.output.csv_datasets.clone(),
            strict: self.strict,
        }
    }
}

/// Load an explicit config file, or `mediaseed.toml` when present, or defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                return Ok(Config::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|err| {
        CliError::InvalidConfig(format!("cannot read {}: {err}", path.display()))
    })?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config, CliError> {
    Ok(toml::from_str(content)?)
}

pub fn render_config(config: &Config) -> Result<String, CliError> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips() {
        let config = Config::default();
        let rendered = render_config(&config).expect("render config");
        assert!(rendered.contains("bucket = \"media-datalake-iceberg-demo\""));
        let parsed = parse_config(&rendered).expect("parse config");
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
store = "local"
seed = 99

[counts]
content = 10

[sampling]
series_policy = "derived"
"#,
        )
        .expect("parse config");

        assert_eq!(config.store, StoreKind::Local);
        assert_eq!(config.counts.content, 10);
        assert_eq!(config.counts.viewings, 2000);

        let options = config.generate_options();
        assert_eq!(options.seed, Some(99));
        assert_eq!(options.content_count, 10);
        assert_eq!(options.series_policy, SeriesPolicy::Derived);
        assert_eq!(options.engagement_rate, 0.7);
        assert_eq!(options.csv_datasets, vec![Dataset::ViewingData]);
    }

    #[test]
    fn rejects_unknown_dataset_names() {
        let result = parse_config(
            r#"
[output]
csv_datasets = ["viewings"]
"#,
        );
        assert!(matches!(result, Err(CliError::ConfigParse(_))));
    }
}
