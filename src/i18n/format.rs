//! Date and number formatting for the two dashboard locales.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::i18n::Language;

/// Store clocks run on Japan Standard Time (UTC+9, no daylight saving).
const TOKYO_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// What: Offset used for every displayed timestamp.
///
/// Output:
/// - `FixedOffset` of UTC+9
fn tokyo_offset() -> FixedOffset {
    FixedOffset::east_opt(TOKYO_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// What: Format a timestamp for display in the store's time zone.
///
/// Inputs:
/// - `ts`: Instant to format
/// - `language`: Active language
///
/// Output:
/// - Japanese: `2024/01/15 14:03:05` (24-hour clock)
/// - English: `01/15/2024, 02:03:05 PM` (12-hour clock)
#[must_use]
pub fn format_datetime(ts: DateTime<Utc>, language: Language) -> String {
    let local = ts.with_timezone(&tokyo_offset());
    match language {
        Language::Ja => local.format("%Y/%m/%d %H:%M:%S").to_string(),
        Language::En => local.format("%m/%d/%Y, %I:%M:%S %p").to_string(),
    }
}

/// What: Format a unit count with thousands separators.
///
/// Inputs:
/// - `n`: Count to format
///
/// Output:
/// - e.g. `1234567` -> `"1,234,567"`; both locales group with commas
#[must_use]
pub fn format_count(n: u64) -> String {
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

/// What: Format a duration in hours with one decimal place.
#[must_use]
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.1}")
}

/// What: Format a sales rate without trailing zeros.
///
/// Output:
/// - `12.0` -> `"12"`, `2.50` -> `"2.5"`
#[must_use]
pub fn format_rate(rate: f64) -> String {
    let fixed = format!("{rate:.2}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
