//! Tokenizer for the spreadsheet export dialect.
//!
//! Exports are either comma- or tab-separated depending on how the sheet was
//! published, so the delimiter is sniffed from the header line before the
//! body is split into rows. Quoted fields may contain delimiters, line breaks
//! and doubled quotes.

use std::iter::Peekable;
use std::str::Chars;

const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }
}

/// Decides the delimiter by counting unquoted commas and tabs on the first line.
/// Ties (including an empty line) resolve to comma.
pub fn sniff_delimiter(text: &str) -> Delimiter {
    let mut chars = text.chars().peekable();
    let mut inside_quotes = false;
    let mut commas = 0usize;
    let mut tabs = 0usize;

    while let Some(c) = chars.next() {
        if c == QUOTE {
            if inside_quotes && chars.peek() == Some(&QUOTE) {
                chars.next();
            } else {
                inside_quotes = !inside_quotes;
            }
            continue;
        }
        if inside_quotes {
            continue;
        }
        match c {
            ',' => commas += 1,
            '\t' => tabs += 1,
            '\n' => break,
            '\r' if chars.peek() == Some(&'\n') => break,
            _ => {}
        }
    }

    if tabs > commas {
        Delimiter::Tab
    } else {
        Delimiter::Comma
    }
}

/// Splits export text into rows of trimmed fields.
///
/// Rows whose cells are all empty are dropped. A final row without a
/// trailing line break is still emitted.
pub fn tokenize_rows(text: &str, delimiter: Delimiter) -> Vec<Vec<String>> {
    let delimiter = delimiter.as_char();
    let mut chars = text.chars().peekable();
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;

    while let Some(c) = chars.next() {
        if c == QUOTE {
            if inside_quotes && chars.peek() == Some(&QUOTE) {
                current.push(QUOTE);
                chars.next();
            } else {
                inside_quotes = !inside_quotes;
            }
            continue;
        }

        if !inside_quotes && c == delimiter {
            row.push(take_field(&mut current));
            continue;
        }

        if !inside_quotes && is_line_break(c, &mut chars) {
            row.push(take_field(&mut current));
            rows.push(std::mem::take(&mut row));
            continue;
        }

        current.push(c);
    }

    if !current.is_empty() || !row.is_empty() {
        row.push(take_field(&mut current));
        rows.push(row);
    }

    rows.retain(|r| r.iter().any(|cell| !cell.is_empty()));
    rows
}

/// Consumes the `\n` of a `\r\n` pair. A lone `\r` is not a line break.
fn is_line_break(c: char, chars: &mut Peekable<Chars<'_>>) -> bool {
    match c {
        '\n' => true,
        '\r' if chars.peek() == Some(&'\n') => {
            chars.next();
            true
        }
        _ => false,
    }
}

fn take_field(current: &mut String) -> String {
    let field = current.trim().to_string();
    current.clear();
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_sniff_prefers_comma_when_commas_dominate() {
        assert_eq!(sniff_delimiter("a,b\tc,d\n1,2"), Delimiter::Comma);
    }

    #[test]
    fn test_sniff_prefers_tab_when_tabs_dominate() {
        assert_eq!(sniff_delimiter("a\tb,c\td\n"), Delimiter::Tab);
    }

    #[test]
    fn test_sniff_only_reads_first_line() {
        assert_eq!(sniff_delimiter("a,b\r\nc\td\te\tf\n"), Delimiter::Comma);
    }

    #[test]
    fn test_sniff_ignores_quoted_delimiters() {
        assert_eq!(sniff_delimiter("\"a,b,c,\"\"d\"\"\"\tx\ty"), Delimiter::Tab);
    }

    #[test]
    fn test_sniff_empty_text_is_comma() {
        assert_eq!(sniff_delimiter(""), Delimiter::Comma);
    }

    #[test]
    fn test_tokenize_quoted_comma_end_to_end() {
        let text = "name,value\nA,B\n\"C, D\",E\n";
        assert_eq!(
            tokenize_rows(text, Delimiter::Comma),
            rows(&[&["name", "value"], &["A", "B"], &["C, D", "E"]])
        );
    }

    #[test]
    fn test_tokenize_doubled_quote_decodes_to_one() {
        assert_eq!(
            tokenize_rows("\"a\"\"b\"", Delimiter::Comma),
            rows(&[&["a\"b"]])
        );
    }

    #[test]
    fn test_tokenize_embedded_newline_kept_verbatim() {
        let text = "h1,h2\n\"line one\nline two\",x\n";
        let parsed = tokenize_rows(text, Delimiter::Comma);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1][0], "line one\nline two");
        assert_eq!(parsed[1][1], "x");
    }

    #[test]
    fn test_tokenize_crlf_line_endings() {
        assert_eq!(
            tokenize_rows("a,b\r\nc,d\r\n", Delimiter::Comma),
            rows(&[&["a", "b"], &["c", "d"]])
        );
    }

    #[test]
    fn test_tokenize_lone_carriage_return_is_content() {
        let parsed = tokenize_rows("a\rb,c\n", Delimiter::Comma);
        assert_eq!(parsed, rows(&[&["a\rb", "c"]]));
    }

    #[test]
    fn test_tokenize_trims_fields_outside_quotes() {
        assert_eq!(
            tokenize_rows("  a  ,\t b \n", Delimiter::Comma),
            rows(&[&["a", "b"]])
        );
    }

    #[test]
    fn test_tokenize_tab_delimited_keeps_commas() {
        assert_eq!(
            tokenize_rows("Go, Rust\tA\n", Delimiter::Tab),
            rows(&[&["Go, Rust", "A"]])
        );
    }

    #[test]
    fn test_tokenize_final_row_without_newline() {
        assert_eq!(
            tokenize_rows("a,b\nc,d", Delimiter::Comma),
            rows(&[&["a", "b"], &["c", "d"]])
        );
    }

    #[test]
    fn test_tokenize_drops_blank_rows() {
        assert_eq!(
            tokenize_rows("a,b\n,\n  ,  \n\nc,d\n", Delimiter::Comma),
            rows(&[&["a", "b"], &["c", "d"]])
        );
    }

    #[test]
    fn test_tokenize_rejoin_reproduces_plain_rows() {
        let text = "no,company,role\n1,Acme,Lead\n2,Initech,Dev";
        let rejoined: Vec<String> = tokenize_rows(text, Delimiter::Comma)
            .iter()
            .map(|r| r.join(","))
            .collect();
        assert_eq!(rejoined.join("\n"), text);
    }

    #[test]
    fn test_tokenize_empty_text_yields_no_rows() {
        assert!(tokenize_rows("", Delimiter::Comma).is_empty());
    }
}
