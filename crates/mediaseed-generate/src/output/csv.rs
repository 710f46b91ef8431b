use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::GenerationError;
use crate::model::CsvMode;

/// Render records as CSV.
///
/// The header is the sorted union of every key seen across the records, so
/// rows missing an optional field get an empty cell. Every line, including
/// the last, ends with `\n`. Empty input renders as empty text.
///
/// In [`CsvMode::Raw`] cells are written verbatim: a value containing a comma
/// or newline shifts the row.
pub fn to_csv<T: Serialize>(records: &[T], mode: CsvMode) -> Result<String, GenerationError> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let objects = records
        .iter()
        .map(to_object)
        .collect::<Result<Vec<_>, _>>()?;

    let columns: Vec<&str> = objects
        .iter()
        .flat_map(|object| object.keys().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let rows = objects.iter().map(|object| {
        columns
            .iter()
            .map(|column| object.get(*column).map(render_cell).unwrap_or_default())
            .collect::<Vec<_>>()
    });

    match mode {
        CsvMode::Raw => {
            let mut out = columns.join(",");
            out.push('\n');
            for row in rows {
                out.push_str(&row.join(","));
                out.push('\n');
            }
            Ok(out)
        }
        CsvMode::Quoted => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(Vec::new());
            writer.write_record(&columns)?;
            for row in rows {
                writer.write_record(&row)?;
            }
            writer.flush().map_err(csv::Error::from)?;
            let bytes = writer
                .into_inner()
                .map_err(|err| csv::Error::from(err.into_error()))?;
            String::from_utf8(bytes).map_err(|err| {
                GenerationError::InvalidInput(format!("csv output is not utf-8: {err}"))
            })
        }
    }
}

fn to_object<T: Serialize>(record: &T) -> Result<Map<String, Value>, GenerationError> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(GenerationError::InvalidInput(format!(
            "csv rows must serialize to JSON objects, got {other}"
        ))),
    }
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        nested => nested.to_string(),
    }
}
