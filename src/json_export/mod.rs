mod converters;
mod exporters;
mod extractors;

pub use converters::{excel_date_to_iso_string, process_cell_value};
pub use exporters::{process_sheet_for_json, read_document, workbook_to_document};
pub use extractors::extract_headers;
