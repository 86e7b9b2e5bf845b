mod builders;

use std::path::Path;
use tracing::debug;

use crate::document::Document;
use crate::error::Result;
use crate::style::StylePolicy;

pub use builders::{build_sheet, build_workbook, json_to_cell_value};

/// Render `document` as a styled workbook at `destination`. Every section is
/// built in memory before the file is touched.
pub fn write_document(
    document: &Document,
    destination: &Path,
    policy: &StylePolicy,
) -> Result<()> {
    let workbook = build_workbook(document, policy);
    workbook.save(destination)?;
    debug!(path = %destination.display(), "workbook written");
    Ok(())
}
