//! Integrity checks run on generated datasets before they are published.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use mediaseed_core::{ContentRecord, Dataset, EngagementRecord, ViewingRecord, base_content_id};

use crate::generators::viewing::effective_duration;

/// Structured check issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIssue {
    pub dataset: Dataset,
    pub code: String,
    pub record_id: String,
    pub message: String,
}

impl CheckIssue {
    fn new(dataset: Dataset, code: &str, record_id: &str, message: impl Into<String>) -> Self {
        Self {
            dataset,
            code: code.to_string(),
            record_id: record_id.to_string(),
            message: message.into(),
        }
    }
}

/// Check catalog ids, session bounds and join keys across the three datasets.
pub fn check_datasets(
    content: &[ContentRecord],
    viewings: &[ViewingRecord],
    engagements: &[EngagementRecord],
) -> Vec<CheckIssue> {
    let mut issues = Vec::new();
    let catalog = check_content(content, &mut issues);
    let sessions = check_viewings(viewings, &catalog, &mut issues);
    check_engagements(engagements, &sessions, &mut issues);
    issues
}

fn check_content<'a>(
    content: &'a [ContentRecord],
    issues: &mut Vec<CheckIssue>,
) -> HashMap<&'a str, &'a ContentRecord> {
    let mut catalog = HashMap::with_capacity(content.len());
    for record in content {
        let id = record.content_id.as_str();
        if base_content_id(id).ok() != Some(id) {
            issues.push(CheckIssue::new(
                Dataset::ContentMetadata,
                "invalid_content_id",
                id,
                "content id does not match CONT######",
            ));
        }
        if catalog.insert(id, record).is_some() {
            issues.push(CheckIssue::new(
                Dataset::ContentMetadata,
                "duplicate_content_id",
                id,
                "content id appears more than once",
            ));
        }
    }
    catalog
}

fn check_viewings<'a>(
    viewings: &'a [ViewingRecord],
    catalog: &HashMap<&str, &ContentRecord>,
    issues: &mut Vec<CheckIssue>,
) -> HashMap<&'a str, &'a ViewingRecord> {
    let mut sessions = HashMap::with_capacity(viewings.len());
    for view in viewings {
        let id = view.view_id.as_str();
        if sessions.insert(id, view).is_some() {
            issues.push(CheckIssue::new(
                Dataset::ViewingData,
                "duplicate_view_id",
                id,
                "view id appears more than once",
            ));
        }

        let content = base_content_id(&view.content_id)
            .ok()
            .and_then(|base| catalog.get(base));
        let Some(content) = content else {
            issues.push(CheckIssue::new(
                Dataset::ViewingData,
                "unknown_content",
                id,
                format!("content id '{}' is not in the catalog", view.content_id),
            ));
            continue;
        };

        let duration = effective_duration(content);
        if view.view_duration_minutes == 0 || view.view_duration_minutes > duration {
            issues.push(CheckIssue::new(
                Dataset::ViewingData,
                "view_duration_out_of_range",
                id,
                format!(
                    "view duration {} outside 1..={duration}",
                    view.view_duration_minutes
                ),
            ));
        }
        if view.completion_percentage > 100 {
            issues.push(CheckIssue::new(
                Dataset::ViewingData,
                "completion_out_of_range",
                id,
                format!("completion {} exceeds 100", view.completion_percentage),
            ));
        }
    }
    sessions
}

fn check_engagements(
    engagements: &[EngagementRecord],
    sessions: &HashMap<&str, &ViewingRecord>,
    issues: &mut Vec<CheckIssue>,
) {
    let mut seen = HashSet::with_capacity(engagements.len());
    for engagement in engagements {
        let id = engagement.engagement_id.as_str();
        if !seen.insert(id) {
            issues.push(CheckIssue::new(
                Dataset::EngagementData,
                "duplicate_engagement_id",
                id,
                "engagement id appears more than once",
            ));
        }

        let matches = sessions
            .get(engagement.view_id.as_str())
            .is_some_and(|view| {
                view.user_id == engagement.user_id
                    && view.content_id == engagement.content_id
                    && view.view_date == engagement.engagement_date
            });
        if !matches {
            issues.push(CheckIssue::new(
                Dataset::EngagementData,
                "join_mismatch",
                id,
                format!(
                    "join fields do not match viewing '{}'",
                    engagement.view_id
                ),
            ));
        }
    }
}
