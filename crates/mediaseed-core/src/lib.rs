//! Core contracts for mediaseed.
//!
//! This crate defines the record types for the three generated datasets, the
//! static reference vocabularies they sample from, and the identifier helpers
//! shared by the generators, the publisher and the CLI.

pub mod dataset;
pub mod error;
pub mod ids;
pub mod records;
pub mod reference;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use ids::{base_content_id, content_id, episode_content_id, user_id};
pub use records::{ContentRecord, EngagementRecord, ViewingRecord};
pub use reference::{
    ContentType, Country, DeviceType, EngagementType, Genre, Language, Platform, Rating,
    StreamingQuality, Tag,
};
