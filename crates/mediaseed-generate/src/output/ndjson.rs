use serde::Serialize;

use crate::errors::GenerationError;

/// One compact JSON object per record, joined by `\n` with no trailing newline.
pub fn to_ndjson<T: Serialize>(records: &[T]) -> Result<String, GenerationError> {
    let lines = records
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn joins_lines_without_trailing_newline() {
        let records = vec![json!({"a": 1}), json!({"b": null})];
        let text = to_ndjson(&records).expect("serialize");
        assert_eq!(text, "{\"a\":1}\n{\"b\":null}");
    }

    #[test]
    fn empty_input_is_empty_text() {
        let records: Vec<serde_json::Value> = Vec::new();
        assert_eq!(to_ndjson(&records).expect("serialize"), "");
    }
}
