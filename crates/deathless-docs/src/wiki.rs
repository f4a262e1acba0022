//! Fandom wiki table rendering.

use crate::table::preprocess_table;

/// Render rows (header first) as a sortable wiki table, one cell per line.
pub fn wiki_table(rows: &[Vec<String>], remove_empty_columns: bool) -> Vec<String> {
    let table = preprocess_table(rows, remove_empty_columns);
    let Some((header, data)) = table.split_first().filter(|(header, _)| !header.is_empty()) else {
        return Vec::new();
    };

    let mut lines = vec![
        r#"{| class="sortable fandom-table""#.to_string(),
        "|+".to_string(),
    ];
    lines.extend(header.iter().map(|cell| format!("!'''{cell}'''")));
    lines.push("|-".to_string());

    for (i, row) in data.iter().enumerate() {
        if i > 0 {
            lines.push("|-".to_string());
        }
        lines.extend(row.iter().map(|cell| format!("|{cell}")));
    }

    lines.push("|}".to_string());
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
    fn test_wiki_table() {
        let table = rows(&[&["Name", "Hero"], &["Axe", ""], &["Bow", ""]]);
        assert_eq!(
            wiki_table(&table, true),
            [
                r#"{| class="sortable fandom-table""#,
                "|+",
                "!'''Name'''",
                "|-",
                "|Axe",
                "|-",
                "|Bow",
                "|}",
            ]
        );
    }

    #[test]
    fn test_all_columns_empty() {
        let table = rows(&[&["Name", "Hero"], &["", ""]]);
        assert!(wiki_table(&table, true).is_empty());
    }

    #[test]
    fn test_header_only() {
        let table = rows(&[&["Name", "Cost"]]);
        assert_eq!(
            wiki_table(&table, true),
            [
                r#"{| class="sortable fandom-table""#,
                "|+",
                "!'''Name'''",
                "!'''Cost'''",
                "|-",
                "|}",
            ]
        );
    }
}
