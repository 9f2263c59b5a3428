//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::i18n::Locale;

/// Parse a date string in the formats posts and indexes use
///
/// Date-times are accepted too; only their date part is kept.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}

/// Machine-readable form for `datetime` attributes
pub fn date_xml(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Generate a <time> HTML element with the localized long date
pub fn time_tag(date: NaiveDate, locale: &Locale) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        date_xml(date),
        locale.long_date(date)
    )
}

/// Localized long date when `raw` parses, otherwise `raw` as written
pub fn display_date(raw: &str, locale: &Locale) -> String {
    match parse_date(raw) {
        Some(date) => locale.long_date(date),
        None => raw.trim().to_string(),
    }
}
