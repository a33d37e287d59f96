use super::model::RawTable;

/// Return a copy of `table` with every column name lower-cased.
///
/// Cells, row order and row count are untouched.
pub fn normalize(table: &RawTable) -> RawTable {
    RawTable {
        name: table.name.clone(),
        headers: table.headers.iter().map(|h| h.to_lowercase()).collect(),
        rows: table.rows.clone(),
    }
}
