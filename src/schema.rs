use indexmap::IndexSet;

use crate::document::Record;

/// Union of all record keys in order of first appearance.
#[must_use]
pub fn derive_schema(records: &[Record]) -> Vec<String> {
    let mut columns: IndexSet<&str> = IndexSet::new();

    for record in records {
        for key in record.keys() {
            columns.insert(key.as_str());
        }
    }

    columns.into_iter().map(str::to_string).collect()
}
