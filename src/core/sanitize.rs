// src/core/sanitize.rs
//
// Cell-text cleanup shared by the extractor and the dashboard forms.

use crate::config::consts::{DEFAULT_PROPERTY_TYPE, NAN_PLACEHOLDER};

/// Trim, collapse every whitespace run (newlines included) to one space and
/// drop the `nan` tokens left behind by stringified empty cells.
/// `"8215 ST CLAIR AVE\nnan"` → `"8215 ST CLAIR AVE"`.
pub fn clean_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for tok in s.split_whitespace() {
        if tok == NAN_PLACEHOLDER { continue; }
        if !out.is_empty() { out.push(' '); }
        out.push_str(tok);
    }
    out
}

/// Trimmed property type; blank → `"land"`.
pub fn property_type_or_default(s: &str) -> String {
    let t = s.trim();
    if t.is_empty() { s!(DEFAULT_PROPERTY_TYPE) } else { s!(t) }
}

/// Lenient money parse: `"212204.35"`, `"$1,250.00"`, `" 75 "`.
/// `None` for anything non-numeric, negative or non-finite.
pub fn parse_amount(s: &str) -> Option<f64> {
    let t = s.trim();
    let t = t.strip_prefix('$').unwrap_or(t).trim_start();
    if t.is_empty() { return None; }
    let digits: String = t.chars().filter(|&c| c != ',').collect();
    let v: f64 = digits.parse().ok()?;
    (v.is_finite() && v >= 0.0).then_some(v)
}

/// Coerce to a non-negative amount; unparseable → 0.
pub fn amount_or_zero(s: &str) -> f64 {
    parse_amount(s).unwrap_or(0.0)
}

/// `1234.5` → `"$1,234.50"`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i128;
    let neg = cents < 0;
    let cents = cents.abs();
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 { grouped.push(','); }
        grouped.push(ch);
    }
    format!("{}${}.{:02}", if neg { "-" } else { "" }, grouped, frac)
}
