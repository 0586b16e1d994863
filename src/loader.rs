//! Loading participant tables from JSON documents.
//!
//! Three document shapes are accepted:
//! - a single table object: `{"headers": [...], "rows": [...], ...}`
//! - an array of tables: `[{...}, {...}]`
//! - a wrapper object: `{"tables": [{...}, {...}]}`

use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::model::ParticipantTable;

/// Errors that can occur while loading participant tables.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// I/O error while reading the document.
    Io(String),
    /// The document is not valid JSON or does not describe tables.
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            LoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

/// Parses participant tables from a JSON string.
pub fn parse_tables(json: &str) -> Result<Vec<ParticipantTable>, LoadError> {
    let value: Value = serde_json::from_str(json).map_err(|e| LoadError::Parse(e.to_string()))?;

    let tables = match value {
        Value::Array(_) => serde_json::from_value::<Vec<ParticipantTable>>(value),
        Value::Object(mut map) if map.contains_key("tables") => {
            let tables = map.remove("tables").unwrap_or(Value::Null);
            serde_json::from_value::<Vec<ParticipantTable>>(tables)
        }
        Value::Object(_) => serde_json::from_value::<ParticipantTable>(value).map(|t| vec![t]),
        other => {
            return Err(LoadError::Parse(format!(
                "expected a table object or an array of tables, found {}",
                json_kind(&other)
            )));
        }
    }
    .map_err(|e| LoadError::Parse(e.to_string()))?;

    for (i, table) in tables.iter().enumerate() {
        let ragged = table.ragged_rows().count();
        if ragged > 0 {
            warn!(
                table = i,
                rows = ragged,
                columns = table.headers.len(),
                "rows with a cell count different from the header count"
            );
        }
    }

    Ok(tables)
}

/// Reads and parses participant tables from `path`.
pub fn load_tables(path: impl AsRef<Path>) -> Result<Vec<ParticipantTable>, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("{}: {}", path.display(), e)))?;
    let tables = parse_tables(&json)?;
    info!(
        path = %path.display(),
        tables = tables.len(),
        rows = tables.iter().map(|t| t.rows.len()).sum::<usize>(),
        "participant tables loaded"
    );
    Ok(tables)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TABLE: &str = r#"{
        "headers": ["First name", "Last name", "Picture"],
        "rows": [
            {"id": 11, "checked_in": true, "columns": [
                {"id": 1, "text": "Ada", "is_picture": false},
                {"id": 2, "text": "Lovelace", "is_picture": false},
                {"id": 3, "text": "/pictures/11.png", "is_picture": true}
            ]},
            {"id": 12, "checked_in": false, "columns": [
                {"id": 1, "text": "Alan", "is_picture": false},
                {"id": 2, "text": "Turing", "is_picture": false},
                {"id": 3, "text": "", "is_picture": true}
            ]}
        ],
        "num_participants": 4,
        "show_checkin": true,
        "title": "Conference"
    }"#;

    #[test]
    fn test_parse_single_table() {
        let tables = parse_tables(TABLE).unwrap();
        assert_eq!(tables.len(), 1);
        let t = &tables[0];
        assert_eq!(t.title.as_deref(), Some("Conference"));
        assert_eq!(t.headers.len(), 3);
        assert_eq!(t.rows[0].id, 11);
        assert!(t.rows[0].checked_in);
        assert!(t.rows[0].columns[2].is_picture);
        assert_eq!(t.rows[0].columns[1].id, Some(2));
        assert_eq!(t.hidden_count(), 2);
    }

    #[test]
    fn test_parse_array() {
        let json = format!("[{}, {{\"headers\": [], \"rows\": []}}]", TABLE);
        let tables = parse_tables(&json).unwrap();
        assert_eq!(tables.len(), 2);
        assert!(tables[1].rows.is_empty());
    }

    #[test]
    fn test_parse_wrapped() {
        let json = format!("{{\"tables\": [{}]}}", TABLE);
        let tables = parse_tables(&json).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 2);
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_tables("{\"headers\": [").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_parse_wrong_shape() {
        let err = parse_tables("42").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error: expected a table object or an array of tables, found a number"
        );

        let err = parse_tables(r#"{"rows": [{"checked_in": true}]}"#).unwrap_err();
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(TABLE.as_bytes()).unwrap();
        let tables = load_tables(file.path()).unwrap();
        assert_eq!(tables[0].rows.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_tables(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert!(err.to_string().contains("missing.json"));
    }
}
