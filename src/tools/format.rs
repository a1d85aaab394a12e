//! Display formatting shared by the tool screens.

use chrono::{Locale, NaiveDate};

const LOCALE: Locale = Locale::es_ES;

/// Format a count with comma thousands separators (`12345` → `12,345`).
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Long Spanish date, e.g. `19 de octubre de 2026`.
#[must_use]
pub fn spanish_date(date: NaiveDate) -> String {
    date.format_localized("%-d de %B de %Y", LOCALE).to_string()
}

/// Long Spanish date with weekday, e.g. `lunes, 19 de octubre de 2026`.
#[must_use]
pub fn spanish_date_with_weekday(date: NaiveDate) -> String {
    date.format_localized("%A, %-d de %B de %Y", LOCALE).to_string()
}

/// Uppercase the first character.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Round half away from zero to a whole number.
#[must_use]
pub fn round_whole(value: f64) -> i64 {
    value.round() as i64
}
