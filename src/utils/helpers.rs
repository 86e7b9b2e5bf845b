/// 1-based column index to its letter name: 1 -> A, 27 -> AA. Index 0 is
/// treated as column A.
#[must_use]
pub fn index_to_col_name(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index.max(1);

    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }

    letters.iter().rev().map(|&b| char::from(b)).collect()
}

#[must_use]
pub fn col_name_to_index(name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }

    let mut result: usize = 0;
    for c in name.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }

        let val = (c.to_ascii_uppercase() as u8 - b'A' + 1) as usize;
        result = result.checked_mul(26)?.checked_add(val)?;
    }

    Some(result)
}

// Format cell reference (e.g., A1, B2)
#[must_use]
pub fn cell_reference(cell: (usize, usize)) -> String {
    format!("{}{}", index_to_col_name(cell.1), cell.0)
}

/// "B12" -> (12, 2). Rows and columns are 1-based.
#[must_use]
pub fn parse_cell_reference(reference: &str) -> Option<(usize, usize)> {
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);

    let col = col_name_to_index(letters)?;
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }

    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters() {
        assert_eq!(index_to_col_name(1), "A");
        assert_eq!(index_to_col_name(26), "Z");
        assert_eq!(index_to_col_name(27), "AA");
        assert_eq!(index_to_col_name(703), "AAA");
        assert_eq!(index_to_col_name(0), "A");
        assert_eq!(col_name_to_index("AA"), Some(27));
        assert_eq!(col_name_to_index("az"), Some(52));
        assert_eq!(col_name_to_index("A1"), None);
    }

    #[test]
    fn cell_references() {
        assert_eq!(cell_reference((2, 1)), "A2");
        assert_eq!(parse_cell_reference("A2"), Some((2, 1)));
        assert_eq!(parse_cell_reference("AB10"), Some((10, 28)));
        assert_eq!(parse_cell_reference("A0"), None);
        assert_eq!(parse_cell_reference("12"), None);
        assert_eq!(parse_cell_reference("B"), None);
    }
}
