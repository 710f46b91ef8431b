use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mediaseed_core::Dataset;

/// Top-level prefix read by the lake's crawlers.
pub const RAW_PREFIX: &str = "raw";

/// Payload format of a published object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectFormat {
    Ndjson,
    Csv,
}

impl ObjectFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ObjectFormat::Ndjson => "json",
            ObjectFormat::Csv => "csv",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ObjectFormat::Ndjson => "application/x-ndjson",
            ObjectFormat::Csv => "text/csv",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.rsplit_once('.').map(|(_, ext)| ext) {
            Some("json") => Some(ObjectFormat::Ndjson),
            Some("csv") => Some(ObjectFormat::Csv),
            _ => None,
        }
    }
}

/// Date-partitioned key for a dataset payload.
///
/// CSV payloads live under a sibling `<dataset>_csv` prefix so that
/// partition-aware readers never mix the two formats.
pub fn object_key(dataset: Dataset, format: ObjectFormat, batch_date: NaiveDate) -> String {
    let name = dataset.name();
    let folder = match format {
        ObjectFormat::Ndjson => name.to_string(),
        ObjectFormat::Csv => format!("{name}_csv"),
    };
    format!(
        "{RAW_PREFIX}/{folder}/batch_date={}/{name}.{}",
        batch_date.format("%Y-%m-%d"),
        format.extension()
    )
}
