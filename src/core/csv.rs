// src/core/csv.rs
use std::io::{self, Write};
use std::mem::take;

use thiserror::Error;

/* ---------------- Parsing ---------------- */

/// The input ended inside a quoted field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unterminated quoted field starting on line {line}")]
pub struct UnterminatedQuote {
    pub line: usize,
}

/// Minimal CSV/TSV parser (CRLF tolerant, newlines allowed inside quotes).
/// A `"` opens a quoted field only as the first character of the field;
/// anywhere else it is literal text (`12" PIPE LOT`). Blank lines are skipped.
pub fn parse_rows(text: &str, sep: char) -> Result<Vec<Vec<String>>, UnterminatedQuote> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    // current field has content or a closed quote
    let mut started = false;
    let mut line = 1;
    let mut quote_line = 0;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if matches!(chars.peek(), Some('"')) => {
                    chars.next(); // double-quote escape
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if !started => {
                in_quotes = true;
                started = true;
                quote_line = line;
            }
            c if c == sep => {
                row.push(take(&mut field));
                started = false;
            }
            '\n' | '\r' => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                line += 1;
                row.push(take(&mut field));
                started = false;
                if row.len() == 1 && row[0].is_empty() {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
            }
            _ => {
                field.push(ch);
                started = true;
            }
        }
    }

    if in_quotes {
        return Err(UnterminatedQuote { line: quote_line });
    }
    if started || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Ok(rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify rows (optionally preceded by a header line).
pub fn rows_to_string<S: AsRef<str>>(headers: Option<&[S]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_keep_separators_and_newlines() {
        let text = "a,\"b, c\",\"line1\nline2\"\r\n\n\"say \"\"hi\"\"\",x\n";
        let rows = parse_rows(text, ',').unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "b, c", "line1\nline2"]);
        assert_eq!(rows[1], vec!["say \"hi\"", "x"]);
    }

    #[test]
    fn trailing_row_without_newline_is_kept() {
        let rows = parse_rows("h1\th2\nv1\tv2", '\t').unwrap();
        assert_eq!(rows, vec![vec!["h1", "h2"], vec!["v1", "v2"]]);
    }

    #[test]
    fn writer_quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["105-20-013", "BOB NANCE, ET AL", "a\"b"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "105-20-013,\"BOB NANCE, ET AL\",\"a\"\"b\"\n");
    }

    #[test]
    fn written_rows_parse_back() {
        let rows = vec![vec![s!("x,y"), s!("multi\nline"), s!("")]];
        let text = rows_to_string(Some(&["a", "b", "c"][..]), &rows, ',');
        let parsed = parse_rows(&text, ',').unwrap();
        assert_eq!(parsed[0], vec!["a", "b", "c"]);
        assert_eq!(parsed[1], rows[0]);
    }

    #[test]
    fn quote_inside_unquoted_field_is_literal() {
        let text = "a,12\" PIPE LOT,c\nd,e,f\ng,h,i\n";
        let rows = parse_rows(text, ',').unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["a", "12\" PIPE LOT", "c"]);
        assert_eq!(rows[2], vec!["g", "h", "i"]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        let text = "h1,h2\nv1,v2\n\"open,x\nmore\n";
        assert_eq!(parse_rows(text, ','), Err(UnterminatedQuote { line: 3 }));
    }
}
