use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::document::{Document, Record};
use crate::error::Result;
use crate::excel::{Sheet, Workbook, open_workbook};
use crate::json_export::converters::process_cell_value;
use crate::json_export::extractors::extract_headers;

/// Zip the header row with each later row by column position.
pub fn process_sheet_for_json(sheet: &Sheet) -> Vec<Record> {
    let headers = extract_headers(sheet);
    let row_count = sheet.max_rows.saturating_sub(1);
    let mut records = Vec::with_capacity(row_count);

    for row_idx in 2..=sheet.max_rows {
        let mut record = Record::with_capacity(headers.len());

        for (offset, header) in headers.iter().enumerate() {
            let value = sheet
                .value(row_idx, offset + 1)
                .map(process_cell_value)
                .unwrap_or(Value::Null);
            record.insert(header.clone(), value);
        }

        records.push(record);
    }

    records
}

pub fn workbook_to_document(workbook: &Workbook) -> Document {
    let mut document = Document::with_capacity(workbook.sheets.len());

    for sheet in &workbook.sheets {
        let records = process_sheet_for_json(sheet);
        debug!(sheet = %sheet.name, records = records.len(), "extracted records");
        document.insert(sheet.name.clone(), records);
    }

    document
}

/// Load an xlsx workbook into a [`Document`].
pub fn read_document(source: &Path) -> Result<Document> {
    let workbook = open_workbook(source)?;
    Ok(workbook_to_document(&workbook))
}
