pub mod convert;
pub mod document;
pub mod error;
pub mod excel;
pub mod json_export;
pub mod json_import;
pub mod schema;
pub mod style;
pub mod utils;

pub use convert::{FileFormat, convert};
pub use document::{Document, Record};
pub use error::{ConvertError, Result};
pub use json_export::read_document;
pub use json_import::write_document;
pub use schema::derive_schema;
pub use style::StylePolicy;
