//! Picks the conversion direction from the input file and runs it.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

use crate::document::{load_document, save_document};
use crate::error::{ConvertError, Result};
use crate::json_export::read_document;
use crate::json_import::write_document;
use crate::style::StylePolicy;

pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_XLSX_OUTPUT: &str = "output.xlsx";
pub const DEFAULT_JSON_OUTPUT: &str = "output.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Xlsx,
}

impl FromStr for FileFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(FileFormat::Json),
            "xlsx" => Ok(FileFormat::Xlsx),
            _ => Err(ConvertError::UnsupportedFormat {
                extension: s.to_string(),
            }),
        }
    }
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .map(|ext| ext.to_string_lossy())
            .unwrap_or_default()
            .parse()
    }

    /// The format a file of this kind is converted into.
    pub fn target(self) -> Self {
        match self {
            FileFormat::Json => FileFormat::Xlsx,
            FileFormat::Xlsx => FileFormat::Json,
        }
    }

    fn default_file_name(self) -> &'static str {
        match self {
            FileFormat::Json => DEFAULT_JSON_OUTPUT,
            FileFormat::Xlsx => DEFAULT_XLSX_OUTPUT,
        }
    }
}

/// Where output goes when no path is given: `<dir>/output.xlsx` for JSON
/// input, `<dir>/output.json` for workbook input.
pub fn default_output_path(input_format: FileFormat, default_dir: &Path) -> PathBuf {
    default_dir.join(input_format.target().default_file_name())
}

/// Convert `input` into the opposite format and return the path written.
pub fn convert(input: &Path, output: Option<&Path>, policy: &StylePolicy) -> Result<PathBuf> {
    convert_with_default_dir(input, output, Path::new(DEFAULT_OUTPUT_DIR), policy)
}

pub fn convert_with_default_dir(
    input: &Path,
    output: Option<&Path>,
    default_dir: &Path,
    policy: &StylePolicy,
) -> Result<PathBuf> {
    let format = FileFormat::from_path(input)?;

    // the default directory is only created once the input has been read
    let (output, create_dir) = match output {
        Some(path) => (path.to_path_buf(), None),
        None => (default_output_path(format, default_dir), Some(default_dir)),
    };
    let prepare_output = || match create_dir {
        Some(dir) => fs::create_dir_all(dir).map_err(|e| ConvertError::write(dir, e)),
        None => Ok(()),
    };

    match format {
        FileFormat::Json => {
            let document = load_document(input)?;
            prepare_output()?;
            write_document(&document, &output, policy)?;
            info!(
                input = %input.display(),
                output = %output.display(),
                sheets = document.len(),
                "converted JSON to workbook"
            );
        }
        FileFormat::Xlsx => {
            let document = read_document(input)?;
            prepare_output()?;
            save_document(&document, &output)?;
            info!(
                input = %input.display(),
                output = %output.display(),
                sheets = document.len(),
                "converted workbook to JSON"
            );
        }
    }

    Ok(output)
}
