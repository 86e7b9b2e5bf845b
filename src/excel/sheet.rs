use crate::excel::{Cell, CellValue};
use crate::utils::parse_cell_reference;

/// One workbook section. Cells are addressed 1-based; row 0 and column 0 of
/// `data` are unused padding so `data[row][col]` matches A1 coordinates.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub name: String,
    pub data: Vec<Vec<Cell>>,
    pub max_rows: usize,
    pub max_cols: usize,
    column_widths: Vec<Option<f64>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: vec![vec![Cell::empty(); 1]; 1],
            max_rows: 0,
            max_cols: 0,
            column_widths: vec![None],
        }
    }

    pub fn ensure_cell_exists(&mut self, row: usize, col: usize) {
        if row >= self.data.len() {
            let row_len = self.data[0].len().max(col + 1);
            self.data.resize_with(row + 1, || vec![Cell::empty(); row_len]);
        }

        if col >= self.data[0].len() {
            for row_data in &mut self.data {
                row_data.resize_with(col + 1, Cell::empty);
            }
        }

        if col >= self.column_widths.len() {
            self.column_widths.resize(col + 1, None);
        }

        // rows added above may be shorter than an earlier widening
        let width = self.data[0].len();
        for row_data in &mut self.data {
            if row_data.len() < width {
                row_data.resize_with(width, Cell::empty);
            }
        }
    }

    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        if row == 0 || col == 0 {
            return;
        }

        self.extend_to(row, col);
        self.data[row][col] = cell;
    }

    /// Grow the grid so its extent covers at least `row` x `col`, even when
    /// the trailing cells stay empty.
    pub fn extend_to(&mut self, row: usize, col: usize) {
        if row == 0 || col == 0 {
            return;
        }
        self.ensure_cell_exists(row, col);
        self.max_rows = self.max_rows.max(row);
        self.max_cols = self.max_cols.max(col);
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row == 0 || col == 0 || row > self.max_rows || col > self.max_cols {
            return None;
        }
        self.data.get(row).and_then(|r| r.get(col))
    }

    pub fn value(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.cell(row, col).map(|cell| &cell.value)
    }

    /// Lookup by A1-style reference.
    pub fn value_at(&self, reference: &str) -> Option<&CellValue> {
        let (row, col) = parse_cell_reference(reference)?;
        self.value(row, col)
    }

    /// Cells of `row` from column 1 through `max_cols`.
    pub fn row(&self, row: usize) -> &[Cell] {
        if row == 0 || row > self.max_rows {
            return &[];
        }
        &self.data[row][1..=self.max_cols]
    }

    pub fn set_column_width(&mut self, col: usize, width: f64) {
        if col == 0 {
            return;
        }
        if col >= self.column_widths.len() {
            self.column_widths.resize(col + 1, None);
        }
        self.column_widths[col] = Some(width);
    }

    pub fn column_width(&self, col: usize) -> Option<f64> {
        self.column_widths.get(col).copied().flatten()
    }

    /// `(col, width)` for every column with an explicit width.
    pub fn column_widths(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.column_widths
            .iter()
            .enumerate()
            .filter_map(|(col, width)| width.map(|w| (col, w)))
    }

    /// Longest displayed text in the column across every row, in characters.
    pub fn max_text_len(&self, col: usize) -> usize {
        (1..=self.max_rows)
            .filter_map(|row| self.value(row, col))
            .map(|value| value.display_text().chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Size the column to its longest cell plus `padding`, replacing any
    /// width set earlier.
    pub fn autofit_column(&mut self, col: usize, padding: f64) -> f64 {
        let width = self.max_text_len(col) as f64 + padding;
        self.set_column_width(col, width);
        width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::CellStyle;

    fn text(s: &str) -> Cell {
        Cell::new(CellValue::Text(s.to_string()), CellStyle::default())
    }

    #[test]
    fn cells_are_one_based_and_grid_stays_rectangular() {
        let mut sheet = Sheet::new("s");
        sheet.set_cell(3, 1, text("a"));
        sheet.set_cell(1, 4, text("b"));

        assert_eq!(sheet.max_rows, 3);
        assert_eq!(sheet.max_cols, 4);
        assert!(sheet.data.iter().all(|r| r.len() == 5));
        assert_eq!(sheet.value(3, 1), Some(&CellValue::Text("a".into())));
        assert_eq!(sheet.value(2, 2), Some(&CellValue::Empty));
        assert_eq!(sheet.value(0, 1), None);
        assert_eq!(sheet.value(4, 1), None);
        assert_eq!(sheet.row(1).len(), 4);
        assert_eq!(sheet.value_at("A3"), Some(&CellValue::Text("a".into())));
        assert_eq!(sheet.value_at("D1"), Some(&CellValue::Text("b".into())));
    }

    #[test]
    fn autofit_uses_longest_cell_plus_padding() {
        let mut sheet = Sheet::new("employees");
        sheet.set_cell(1, 1, text("Name"));
        sheet.set_cell(2, 1, text("Rajesh"));
        sheet.set_cell(3, 1, text("Al"));
        sheet.set_column_width(1, 6.0);

        assert_eq!(sheet.autofit_column(1, 2.0), 8.0);
        assert_eq!(sheet.column_width(1), Some(8.0));
        assert_eq!(sheet.column_widths().collect::<Vec<_>>(), vec![(1, 8.0)]);
    }

    #[test]
    fn text_length_counts_characters_not_bytes() {
        let mut sheet = Sheet::new("s");
        sheet.set_cell(1, 1, text("Раджеш"));
        assert_eq!(sheet.max_text_len(1), 6);
    }
}
