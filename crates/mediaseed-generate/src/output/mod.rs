pub mod csv;
pub mod ndjson;

pub use self::csv::to_csv;
pub use self::ndjson::to_ndjson;
