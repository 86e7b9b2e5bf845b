//! In-memory model of the structured-data side: sheet name -> ordered rows.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{ConvertError, Result};

/// One row: column name -> scalar. Keys keep the order they were read in.
pub type Record = IndexMap<String, Value>;

/// Sheet name -> records, in sheet order.
pub type Document = IndexMap<String, Vec<Record>>;

const JSON_INDENT: &[u8] = b"    ";

pub fn load_document(path: &Path) -> Result<Document> {
    let file = File::open(path).map_err(|e| ConvertError::read(path, e))?;
    let document: Document = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ConvertError::read(path, e))?;

    debug!(
        path = %path.display(),
        sheets = document.len(),
        "loaded JSON document"
    );
    Ok(document)
}

pub fn serialize_document(document: &Document) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    document.serialize(&mut serializer)?;
    Ok(buf)
}

pub fn save_document(document: &Document, path: &Path) -> Result<()> {
    let bytes = serialize_document(document).map_err(|e| ConvertError::write(path, e))?;

    let file = File::create(path).map_err(|e| ConvertError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| ConvertError::write(path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_keys_keep_source_order() {
        let document: Document =
            serde_json::from_str(r#"{"b": [{"z": 1, "a": 2, "m": 3}], "a": []}"#).unwrap();

        assert_eq!(document.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        let keys: Vec<_> = document["b"][0].keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn serialized_output_uses_four_space_indent_and_raw_unicode() {
        let mut record = Record::new();
        record.insert("Имя".to_string(), json!("Раджеш"));
        let mut document = Document::new();
        document.insert("staff".to_string(), vec![record]);

        let text = String::from_utf8(serialize_document(&document).unwrap()).unwrap();
        assert!(text.contains("\n    \"staff\": ["));
        assert!(text.contains("\"Имя\": \"Раджеш\""));
    }

    #[test]
    fn top_level_array_is_rejected() {
        let parsed: serde_json::Result<Document> = serde_json::from_str("[1, 2]");
        assert!(parsed.is_err());
    }
}
