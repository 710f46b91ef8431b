//! Synthetic media dataset generation for mediaseed.
//!
//! Builds the content catalog, viewing sessions and engagement events from a
//! seeded RNG, serializes them as NDJSON/CSV and publishes them through a
//! [`mediaseed_publish::BlobStore`].

pub mod checks;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{GeneratedDatasets, GenerationEngine, GenerationResult, SUCCESS_MESSAGE};
pub use errors::GenerationError;
pub use model::{CsvMode, GenerateOptions, GenerationReport, SeriesPolicy};
