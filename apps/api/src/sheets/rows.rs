use std::collections::HashMap;

use crate::sheets::csv::{sniff_delimiter, tokenize_rows};

/// How column names are assigned to the cells of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// The first row names the columns.
    #[default]
    Header,
    /// Columns are named `col0`, `col1`, … and every row is data.
    Positional,
}

/// One data row keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    cells: HashMap<String, String>,
}

impl SheetRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SheetRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Strips byte-order marks, turns ideographic spaces into ASCII spaces and trims.
pub fn normalize_header(header: &str) -> String {
    header
        .replace('\u{FEFF}', "")
        .replace('\u{3000}', " ")
        .trim()
        .to_string()
}

/// Turns tokenized rows into row-mappings. Ragged rows are padded with `""`.
pub fn rows_to_mappings(rows: &[Vec<String>], mode: HeaderMode) -> Vec<SheetRow> {
    match mode {
        HeaderMode::Header => {
            if rows.len() < 2 {
                return Vec::new();
            }
            let headers: Vec<String> = rows[0].iter().map(|h| normalize_header(h)).collect();
            rows[1..].iter().map(|values| zip_row(&headers, values)).collect()
        }
        HeaderMode::Positional => {
            let width = rows.iter().map(Vec::len).max().unwrap_or(0);
            let headers: Vec<String> = (0..width).map(|i| format!("col{i}")).collect();
            rows.iter().map(|values| zip_row(&headers, values)).collect()
        }
    }
}

/// Full text-to-rows pipeline for one export body.
pub fn parse_sheet(text: &str, mode: HeaderMode) -> Vec<SheetRow> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let delimiter = sniff_delimiter(text);
    let rows = tokenize_rows(text, delimiter);
    rows_to_mappings(&rows, mode)
}

fn zip_row(headers: &[String], values: &[String]) -> SheetRow {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let value = values.get(i).cloned().unwrap_or_default();
            (header.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_normalize_header_strips_bom_and_fullwidth_space() {
        assert_eq!(normalize_header("\u{FEFF}no"), "no");
        assert_eq!(normalize_header("Start\u{3000}Date"), "Start Date");
        assert_eq!(normalize_header("\u{3000} 所属 \u{3000}"), "所属");
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        assert!(rows_to_mappings(&raw(&[&["a", "b"]]), HeaderMode::Header).is_empty());
        assert!(rows_to_mappings(&[], HeaderMode::Header).is_empty());
    }

    #[test]
    fn test_header_mode_pads_missing_cells() {
        let mapped = rows_to_mappings(
            &raw(&[&["\u{FEFF}skill", "level"], &["Go"]]),
            HeaderMode::Header,
        );
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[0].get("skill"), Some("Go"));
        assert_eq!(mapped[0].get("level"), Some(""));
    }

    #[test]
    fn test_header_mode_ignores_extra_cells() {
        let mapped = rows_to_mappings(&raw(&[&["a"], &["1", "2", "3"]]), HeaderMode::Header);
        assert_eq!(mapped[0], [("a", "1")].into_iter().collect::<SheetRow>());
    }

    #[test]
    fn test_positional_mode_uses_widest_row() {
        let mapped = rows_to_mappings(
            &raw(&[&["名前", "小林"], &["GitHub", "https://github.com/x", "extra"]]),
            HeaderMode::Positional,
        );
        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped[0].get("col0"), Some("名前"));
        assert_eq!(mapped[0].get("col2"), Some(""));
        assert_eq!(mapped[1].get("col2"), Some("extra"));
    }

    #[test]
    fn test_parse_sheet_blank_text_is_empty() {
        assert!(parse_sheet("  \n\r\n", HeaderMode::Header).is_empty());
    }

    #[test]
    fn test_parse_sheet_tab_export() {
        let rows = parse_sheet("skill\tlevel\nRust\tA\n", HeaderMode::Header);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("skill"), Some("Rust"));
        assert_eq!(rows[0].get("level"), Some("A"));
    }
}
