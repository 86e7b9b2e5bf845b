use serde_json::Value;
use tracing::{debug, warn};

use crate::document::{Document, Record};
use crate::excel::{Cell, CellValue, Sheet, Workbook};
use crate::schema::derive_schema;
use crate::style::StylePolicy;
use crate::utils::cell_reference;

pub fn json_to_cell_value(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Bool(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => CellValue::Number(f),
            None => CellValue::Text(n.to_string()),
        },
        Value::String(s) => CellValue::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => CellValue::Text(value.to_string()),
    }
}

fn create_headers(sheet: &mut Sheet, schema: &[String], policy: &StylePolicy) {
    for (offset, header) in schema.iter().enumerate() {
        let col = offset + 1;
        sheet.set_cell(
            1,
            col,
            Cell::new(CellValue::Text(header.clone()), policy.header_style()),
        );
        sheet.set_column_width(col, policy.column_width(header.chars().count()));
    }
}

fn write_row(
    sheet: &mut Sheet,
    record: &Record,
    schema: &[String],
    row: usize,
    policy: &StylePolicy,
) {
    for (offset, column) in schema.iter().enumerate() {
        let col = offset + 1;
        let value = match record.get(column) {
            Some(value @ (Value::Array(_) | Value::Object(_))) => {
                warn!(
                    sheet = %sheet.name,
                    cell = %cell_reference((row, col)),
                    column = %column,
                    "non-scalar value written as JSON text"
                );
                json_to_cell_value(value)
            }
            Some(value) => json_to_cell_value(value),
            None => CellValue::Empty,
        };
        sheet.set_cell(row, col, Cell::new(value, policy.data_style()));
    }
}

/// Lay out one sheet: header row from the derived schema, one row per
/// record, then size every column to its content.
pub fn build_sheet(name: &str, records: &[Record], policy: &StylePolicy) -> Sheet {
    let mut sheet = Sheet::new(name);
    let schema = derive_schema(records);

    create_headers(&mut sheet, &schema, policy);

    for (row, record) in (2..).zip(records) {
        write_row(&mut sheet, record, &schema, row, policy);
    }

    for col in 1..=schema.len() {
        sheet.autofit_column(col, policy.column_padding());
    }

    debug!(
        sheet = %name,
        columns = schema.len(),
        rows = records.len(),
        "built worksheet"
    );
    sheet
}

pub fn build_workbook(document: &Document, policy: &StylePolicy) -> Workbook {
    let sheets = document
        .iter()
        .map(|(name, records)| build_sheet(name, records, policy))
        .collect();

    Workbook { sheets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn header_and_first_value_positions() {
        let rows = records(json!([{"ID": 637, "Name": "Rajesh"}]));
        let sheet = build_sheet("employees", &rows, &StylePolicy::default());

        assert_eq!(sheet.value(1, 1), Some(&CellValue::Text("ID".into())));
        assert_eq!(sheet.value(1, 2), Some(&CellValue::Text("Name".into())));
        assert_eq!(sheet.value(2, 1), Some(&CellValue::Number(637.0)));
    }

    #[test]
    fn missing_keys_leave_blank_cells_in_place() {
        let rows = records(json!([
            {"a": 1, "b": 2, "c": 3},
            {"a": 4, "c": 6}
        ]));
        let sheet = build_sheet("s", &rows, &StylePolicy::default());

        assert_eq!(sheet.value(3, 1), Some(&CellValue::Number(4.0)));
        assert_eq!(sheet.value(3, 2), Some(&CellValue::Empty));
        assert_eq!(sheet.value(3, 3), Some(&CellValue::Number(6.0)));
    }

    #[test]
    fn width_is_longest_text_plus_padding() {
        let rows = records(json!([{"Name": "Rajesh"}, {"Name": "Al"}]));
        let sheet = build_sheet("s", &rows, &StylePolicy::default());
        assert_eq!(sheet.column_width(1), Some(8.0));
    }

    #[test]
    fn header_only_width_when_values_are_short() {
        let rows = records(json!([{"Department": 1}, {"Department": null}]));
        let sheet = build_sheet("s", &rows, &StylePolicy::default());
        assert_eq!(sheet.column_width(1), Some(12.0));
    }

    #[test]
    fn styles_follow_policy() {
        let policy = StylePolicy::default();
        let rows = records(json!([{"ID": 1}]));
        let sheet = build_sheet("s", &rows, &policy);

        assert_eq!(sheet.cell(1, 1).map(|c| c.style), Some(policy.header_style()));
        assert_eq!(sheet.cell(2, 1).map(|c| c.style), Some(policy.data_style()));
    }

    #[test]
    fn scalar_mapping() {
        assert_eq!(json_to_cell_value(&json!(null)), CellValue::Empty);
        assert_eq!(json_to_cell_value(&json!(false)), CellValue::Bool(false));
        assert_eq!(json_to_cell_value(&json!(1.5)), CellValue::Number(1.5));
        assert_eq!(
            json_to_cell_value(&json!([1, 2])),
            CellValue::Text("[1,2]".into())
        );
    }

    #[test]
    fn non_scalar_values_land_as_json_text_in_place() {
        let rows = records(json!([{"id": 1, "tags": ["a", "b"]}]));
        let sheet = build_sheet("s", &rows, &StylePolicy::default());

        assert_eq!(sheet.value_at("B2"), Some(&CellValue::Text("[\"a\",\"b\"]".into())));
        assert_eq!(cell_reference((2, 2)), "B2");
    }

    #[test]
    fn sheets_follow_document_order() {
        let document: Document =
            serde_json::from_value(json!({"employees": [], "offices": [{"ID": 1}]})).unwrap();
        let workbook = build_workbook(&document, &StylePolicy::default());

        assert_eq!(workbook.get_sheet_names(), vec!["employees", "offices"]);
        assert_eq!(workbook.sheets[0].max_rows, 0);
    }
}
