use crate::excel::Sheet;

/// Row 1 taken verbatim as header text; blank header cells give `""`.
pub fn extract_headers(sheet: &Sheet) -> Vec<String> {
    sheet
        .row(1)
        .iter()
        .map(|cell| cell.value.display_text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::{Cell, CellStyle, CellValue};

    #[test]
    fn headers_come_from_first_row_in_column_order() {
        let mut sheet = Sheet::new("s");
        sheet.set_cell(1, 1, Cell::new(CellValue::Text("ID".into()), CellStyle::default()));
        sheet.set_cell(1, 3, Cell::new(CellValue::Number(2021.0), CellStyle::default()));
        sheet.set_cell(2, 1, Cell::new(CellValue::Number(1.0), CellStyle::default()));

        assert_eq!(extract_headers(&sheet), vec!["ID", "", "2021"]);
    }

    #[test]
    fn empty_sheet_has_no_headers() {
        assert!(extract_headers(&Sheet::new("s")).is_empty());
    }
}
