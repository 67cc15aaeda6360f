//! Pure display helpers: glyphs, dates, and local time at the queried
//! location. No side effects, no clock reads; callers pass the instant in.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Map a provider icon code to a weather glyph. Total: unrecognized codes
/// fall through to the rainbow.
pub fn icon_glyph(code: &str) -> &'static str {
    match code {
        "01d" => "\u{2600}\u{fe0f}",             // ☀️
        "01n" => "\u{1f319}",                    // 🌙
        "02d" | "02n" => "\u{26c5}",             // ⛅
        "03d" | "03n" => "\u{2601}\u{fe0f}",     // ☁️
        "04d" | "04n" => "\u{2601}\u{fe0f}\u{2601}\u{fe0f}", // ☁️☁️
        "09d" | "09n" => "\u{1f327}\u{fe0f}",    // 🌧️
        "10d" | "10n" => "\u{1f326}\u{fe0f}",    // 🌦️
        "11d" | "11n" => "\u{26c8}\u{fe0f}",     // ⛈️
        "13d" | "13n" => "\u{2744}\u{fe0f}",     // ❄️
        "50d" | "50n" => "\u{1f32b}\u{fe0f}",    // 🌫️
        _ => "\u{1f308}",                        // 🌈
    }
}

/// Format a calendar date as "Wednesday, 6 August 2025".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// Time of day at the queried location: the device's UTC instant shifted by
/// the location's UTC offset, in 12-hour clock form. An offset outside the
/// representable range falls back to plain UTC.
pub fn local_time(device_utc: DateTime<Utc>, utc_offset_secs: i32) -> String {
    match FixedOffset::east_opt(utc_offset_secs) {
        Some(offset) => device_utc.with_timezone(&offset).format("%I:%M %p").to_string(),
        None => device_utc.format("%I:%M %p").to_string(),
    }
}
