#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Excel serial date; only produced when reading foreign workbooks
    DateTime(f64),
    /// ISO text calamine reports for date/duration cells it cannot convert
    DateTimeIso(String),
    Error(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Text as a spreadsheet user would see it; drives column sizing.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) | CellValue::DateTimeIso(s) | CellValue::Error(s) => s.clone(),
            CellValue::Number(n) | CellValue::DateTime(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    (*n as i64).to_string()
                } else {
                    n.to_string()
                }
            }
            CellValue::Bool(true) => "TRUE".to_string(),
            CellValue::Bool(false) => "FALSE".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    #[default]
    General,
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    #[default]
    Bottom,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    None,
    Thin,
}

/// Presentation attributes of one cell. Border applies to all four sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    pub border: BorderStyle,
    pub bold: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

impl Cell {
    pub fn new(value: CellValue, style: CellStyle) -> Self {
        Self { value, style }
    }

    pub fn empty() -> Self {
        Self {
            value: CellValue::Empty,
            style: CellStyle::default(),
        }
    }
}
