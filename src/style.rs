//! Fixed presentation rules applied to every generated workbook.

use crate::excel::{BorderStyle, CellStyle, HorizontalAlign, VerticalAlign};

/// Extra character units added to the longest cell text of a column.
pub const COLUMN_WIDTH_PADDING: f64 = 2.0;

/// Immutable styling rules handed to the writer. Only the padding can be
/// changed; everything else is the house style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StylePolicy {
    header: CellStyle,
    data: CellStyle,
    column_padding: f64,
}

impl Default for StylePolicy {
    fn default() -> Self {
        Self {
            header: CellStyle {
                horizontal: HorizontalAlign::Center,
                vertical: VerticalAlign::Center,
                border: BorderStyle::Thin,
                bold: true,
            },
            data: CellStyle {
                horizontal: HorizontalAlign::Left,
                vertical: VerticalAlign::Center,
                border: BorderStyle::Thin,
                bold: false,
            },
            column_padding: COLUMN_WIDTH_PADDING,
        }
    }
}

impl StylePolicy {
    pub fn with_padding(self, column_padding: f64) -> Self {
        Self {
            column_padding,
            ..self
        }
    }

    pub fn header_style(&self) -> CellStyle {
        self.header
    }

    pub fn data_style(&self) -> CellStyle {
        self.data
    }

    pub fn column_padding(&self) -> f64 {
        self.column_padding
    }

    pub fn column_width(&self, text_len: usize) -> f64 {
        text_len as f64 + self.column_padding
    }
}
