//! Wall-clock access and timestamp display.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;

/// Current time in milliseconds since the Unix epoch.
///
/// Uses the JS `Date.now()` API in the browser and `SystemTime` elsewhere.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as i64)
    }
}

/// Formats a millisecond epoch timestamp as `YYYY-MM-DD HH:MM` (UTC).
pub fn format_timestamp(ms: i64) -> String {
    let Ok(dt) = OffsetDateTime::from_unix_timestamp(ms.div_euclid(1000)) else {
        return "—".to_owned();
    };
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        dt.year(),
        u8::from(dt.month()),
        dt.day(),
        dt.hour(),
        dt.minute()
    )
}

/// Like [`format_timestamp`], with a dash for a missing value.
pub fn format_optional(ms: Option<i64>) -> String {
    ms.map_or_else(|| "—".to_owned(), format_timestamp)
}
