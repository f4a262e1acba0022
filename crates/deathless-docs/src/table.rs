//! Shared table preprocessing.

/// Normalize a table whose first row is the header.
///
/// Rows are padded to the widest row. With `remove_empty_columns`, every
/// column whose data cells are all empty is dropped, header included. A
/// header-only table keeps all its columns.
pub fn preprocess_table(rows: &[Vec<String>], remove_empty_columns: bool) -> Vec<Vec<String>> {
    let Some(header) = rows.first() else {
        return Vec::new();
    };

    let width = rows.iter().map(Vec::len).max().unwrap_or(header.len());
    let remove_empty_columns = remove_empty_columns && rows.len() > 1;
    let keep: Vec<usize> = (0..width)
        .filter(|&col| {
            !remove_empty_columns
                || rows[1..]
                    .iter()
                    .any(|row| row.get(col).is_some_and(|cell| !cell.is_empty()))
        })
        .collect();

    rows.iter()
        .map(|row| {
            keep.iter()
                .map(|&col| row.get(col).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}
