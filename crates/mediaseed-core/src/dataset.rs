use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The three datasets produced by a run, in publish order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    ContentMetadata,
    ViewingData,
    EngagementData,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [
        Dataset::ContentMetadata,
        Dataset::ViewingData,
        Dataset::EngagementData,
    ];

    /// Name used in object keys and file names.
    pub fn name(self) -> &'static str {
        match self {
            Dataset::ContentMetadata => "content_metadata",
            Dataset::ViewingData => "viewing_data",
            Dataset::EngagementData => "engagement_data",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|dataset| dataset.name() == value)
            .ok_or_else(|| Error::UnknownDataset(value.to_string()))
    }
}
