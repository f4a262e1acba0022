//! Markdown table rendering.

use crate::table::preprocess_table;

/// Column alignment in a Markdown table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    fn separator(self, width: usize) -> String {
        match self {
            Alignment::Left => format!(":{}", "-".repeat(width + 1)),
            Alignment::Center => format!(":{}:", "-".repeat(width)),
            Alignment::Right => format!("{}:", "-".repeat(width + 1)),
        }
    }

    fn pad(self, cell: &str, width: usize) -> String {
        match self {
            Alignment::Left => format!("{cell:<width$}"),
            Alignment::Center => format!("{cell:^width$}"),
            Alignment::Right => format!("{cell:>width$}"),
        }
    }
}

/// Render rows (header first) as Markdown table lines.
///
/// Columns without an entry in `alignment` are left-aligned. Cells are padded
/// to the widest cell of their column, counted in characters. A table left
/// with no columns renders no lines.
pub fn markdown_table(
    rows: &[Vec<String>],
    alignment: &[Alignment],
    remove_empty_columns: bool,
) -> Vec<String> {
    let table = preprocess_table(rows, remove_empty_columns);
    let Some(header) = table.first().filter(|header| !header.is_empty()) else {
        return Vec::new();
    };

    let align = |col: usize| alignment.get(col).copied().unwrap_or_default();
    let mut widths = vec![0; header.len()];
    for row in &table {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    let format_row = |row: &Vec<String>| {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, cell)| align(col).pad(cell, widths[col]))
            .collect();
        format!("| {} |", cells.join(" | "))
    };

    let separators: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(col, &width)| align(col).separator(width))
        .collect();

    let mut lines = Vec::with_capacity(table.len() + 1);
    lines.push(format_row(header));
    lines.push(format!("|{}|", separators.join("|")));
    lines.extend(table[1..].iter().map(format_row));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_markdown_table() {
        let table = rows(&[&["Name", "Effect"], &["Axe", "Deal 5"], &["Longbow", "Shoot"]]);
        assert_eq!(
            markdown_table(&table, &[], false),
            [
                "| Name    | Effect |",
                "|:--------|:-------|",
                "| Axe     | Deal 5 |",
                "| Longbow | Shoot  |",
            ]
        );
    }

    #[test]
    fn test_alignment() {
        let table = rows(&[&["L", "C", "R"], &["a", "b", "c"], &["aaa", "bbb", "ccc"]]);
        assert_eq!(
            markdown_table(&table, &[Alignment::Left, Alignment::Center, Alignment::Right], false),
            [
                "| L   |  C  |   R |",
                "|:----|:---:|----:|",
                "| a   |  b  |   c |",
                "| aaa | bbb | ccc |",
            ]
        );
    }

    #[test]
    fn test_all_columns_empty() {
        let table = rows(&[&["Name", "Hero"], &["", ""], &["", ""]]);
        assert!(markdown_table(&table, &[], true).is_empty());
        assert_eq!(markdown_table(&table, &[], false).len(), 4);
    }

    #[test]
    fn test_widths_count_characters() {
        let table = rows(&[&["Название"], &["Топор"]]);
        assert_eq!(
            markdown_table(&table, &[], false),
            ["| Название |", "|:---------|", "| Топор    |"]
        );
    }

    #[test]
    fn test_drops_empty_columns() {
        let table = rows(&[&["Name", "Hero"], &["Axe", ""]]);
        assert_eq!(markdown_table(&table, &[], true), ["| Name |", "|:-----|", "| Axe  |"]);
    }

    #[test]
    fn test_empty() {
        assert!(markdown_table(&[], &[], true).is_empty());
    }
}
