//! Synonym-aware field lookup over loosely-structured sheet rows.
//!
//! Each logical field declares the column spellings it accepts, in priority
//! order. The first spelling with a non-blank value wins.

use crate::sheets::SheetRow;

/// Separators for comma-style lists (ASCII, full-width and ideographic commas).
pub const LIST_SEPARATORS: &[char] = &[',', '，', '、', '\n'];

/// Separators for line-per-item lists.
pub const LINE_SEPARATORS: &[char] = &['\n'];

/// Returns the trimmed value of the first synonym with non-blank content, or `""`.
pub fn lookup(row: &SheetRow, synonyms: &[&str]) -> String {
    synonyms
        .iter()
        .filter_map(|key| row.get(key))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// True if any of `columns` holds non-blank content.
pub fn has_any(row: &SheetRow, columns: &[&str]) -> bool {
    columns
        .iter()
        .filter_map(|key| row.get(key))
        .any(|value| !value.trim().is_empty())
}

/// Splits on any of `separators`, trimming items and dropping empty ones.
pub fn split_list(value: &str, separators: &[char]) -> Vec<String> {
    value
        .split(separators)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Joins the non-empty parts with `sep`.
pub fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}
