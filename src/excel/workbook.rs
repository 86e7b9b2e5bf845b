use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook as XlsxWorkbook, XlsxError};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::excel::{
    BorderStyle, Cell, CellStyle, CellValue, HorizontalAlign, Sheet, VerticalAlign,
};

/// Excel worksheet maximum row count.
pub const MAX_ROWS: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const MAX_COLS: usize = 16_384;

const DATE_NUM_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Ordered collection of sections, fully held in memory.
#[derive(Clone, Debug, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

pub fn open_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();

    let mut workbook = open_workbook_auto(path).map_err(|e| ConvertError::read(path, e))?;
    let sheet_names = workbook.sheet_names().to_vec();

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .map_err(|e| ConvertError::read(path, e))?;

        let mut sheet = create_sheet_from_range(name, &range);

        // styled blank cells are not part of the used range, but the stored
        // dimension still covers them
        if let Some((rows, cols)) = stored_dimensions(&mut workbook, name)
            .map_err(|e| ConvertError::read(path, e))?
        {
            sheet.extend_to(rows, cols);
        }

        debug!(
            sheet = %name,
            rows = sheet.max_rows,
            cols = sheet.max_cols,
            "loaded worksheet"
        );
        sheets.push(sheet);
    }

    Ok(Workbook { sheets })
}

/// Extent recorded in the worksheet's `<dimension>` element, as 1-based
/// `(rows, cols)`. Only xlsx files carry it.
fn stored_dimensions(
    workbook: &mut Sheets<BufReader<File>>,
    name: &str,
) -> std::result::Result<Option<(usize, usize)>, calamine::XlsxError> {
    match workbook {
        Sheets::Xlsx(xlsx) => {
            let dimensions = xlsx.worksheet_cells_reader(name)?.dimensions();
            Ok(Some((
                dimensions.end.0 as usize + 1,
                dimensions.end.1 as usize + 1,
            )))
        }
        _ => Ok(None),
    }
}

fn convert_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::DateTimeIso(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

fn create_sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
    let mut sheet = Sheet::new(name);

    // calamine ranges start at the first used cell, not at A1
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    for (row_idx, col_idx, data) in range.used_cells() {
        sheet.set_cell(
            row_offset + row_idx + 1,
            col_offset + col_idx + 1,
            Cell::new(convert_data(data), CellStyle::default()),
        );
    }

    if let Some((end_row, end_col)) = range.end() {
        sheet.extend_to(end_row as usize + 1, end_col as usize + 1);
    }

    sheet
}

fn create_format(style: &CellStyle) -> Format {
    let mut format = Format::new();

    format = match style.horizontal {
        HorizontalAlign::General => format,
        HorizontalAlign::Left => format.set_align(FormatAlign::Left),
        HorizontalAlign::Center => format.set_align(FormatAlign::Center),
    };

    if style.vertical == VerticalAlign::Center {
        format = format.set_align(FormatAlign::VerticalCenter);
    }

    if style.border == BorderStyle::Thin {
        format = format.set_border(FormatBorder::Thin);
    }

    if style.bold {
        format = format.set_bold();
    }

    format
}

impl Workbook {
    pub fn get_sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Persist every section in order. The file is written in one go after
    /// all sections have been rendered.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if self.sheets.is_empty() {
            return Err(ConvertError::write(path, "a workbook needs at least one sheet"));
        }

        let mut workbook = XlsxWorkbook::new();
        let mut formats: HashMap<CellStyle, Format> = HashMap::new();

        for sheet in &self.sheets {
            write_sheet(&mut workbook, sheet, &mut formats).map_err(|e| {
                ConvertError::InvalidSheet {
                    sheet: sheet.name.clone(),
                    source: e.into(),
                }
            })?;
        }

        workbook
            .save(path)
            .map_err(|e| ConvertError::write(path, e))?;

        debug!(path = %path.display(), sheets = self.sheets.len(), "saved workbook");
        Ok(())
    }
}

fn write_sheet(
    workbook: &mut XlsxWorkbook,
    sheet: &Sheet,
    formats: &mut HashMap<CellStyle, Format>,
) -> std::result::Result<(), XlsxError> {
    if sheet.max_rows > MAX_ROWS || sheet.max_cols > MAX_COLS {
        return Err(XlsxError::RowColumnLimitError);
    }

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&sheet.name)?;

    for (col, width) in sheet.column_widths() {
        worksheet.set_column_width((col - 1) as u16, width)?;
    }

    for row in 1..=sheet.max_rows {
        for (offset, cell) in sheet.row(row).iter().enumerate() {
            if cell.value.is_empty() && cell.style == CellStyle::default() {
                continue;
            }

            let row_idx = (row - 1) as u32;
            let col_idx = offset as u16;
            let format = formats
                .entry(cell.style)
                .or_insert_with(|| create_format(&cell.style));

            match &cell.value {
                CellValue::Empty => {
                    worksheet.write_blank(row_idx, col_idx, format)?;
                }
                CellValue::Text(s) | CellValue::DateTimeIso(s) | CellValue::Error(s) => {
                    worksheet.write_string_with_format(row_idx, col_idx, s, format)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number_with_format(row_idx, col_idx, *n, format)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean_with_format(row_idx, col_idx, *b, format)?;
                }
                CellValue::DateTime(serial) => {
                    let date_format = format.clone().set_num_format(DATE_NUM_FORMAT);
                    worksheet.write_number_with_format(row_idx, col_idx, *serial, &date_format)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_lookup_by_name() {
        let workbook = Workbook {
            sheets: vec![Sheet::new("employees"), Sheet::new("offices")],
        };

        assert_eq!(workbook.get_sheet_names(), vec!["employees", "offices"]);
        assert!(workbook.sheet("offices").is_some());
        assert!(workbook.sheet("missing").is_none());
    }

    #[test]
    fn empty_data_is_empty_cell() {
        assert_eq!(convert_data(&Data::Empty), CellValue::Empty);
        assert_eq!(convert_data(&Data::Int(4)), CellValue::Number(4.0));
        assert_eq!(
            convert_data(&Data::String("x".into())),
            CellValue::Text("x".into())
        );
    }
}
