//! Time utilities: local rendering of stored instants, export date stamps.

use chrono::{DateTime, Local, Utc};

/// Render a stored UTC instant in the local timezone.
pub fn format_local(t: &DateTime<Utc>, fmt: &str) -> String {
    t.with_timezone(&Local).format(fmt).to_string()
}

/// `YYYY-MM-DD` of the given instant, in UTC.
pub fn date_stamp(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_stamp_uses_utc_day() {
        let t = Utc.with_ymd_and_hms(2025, 3, 9, 23, 59, 0).unwrap();
        assert_eq!(date_stamp(&t), "2025-03-09");
    }
}
