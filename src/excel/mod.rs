mod cell;
mod sheet;
mod workbook;

pub use cell::{BorderStyle, Cell, CellStyle, CellValue, HorizontalAlign, VerticalAlign};
pub use sheet::Sheet;
pub use workbook::{MAX_COLS, MAX_ROWS, Workbook, open_workbook};
