/// Shared formatting utilities for the UI layer.
///
/// All functions accept ISO-8601 date strings (e.g. "2026-03-14T10:00:00Z")
/// and produce human-readable output without external crate dependencies.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Mar 14, 2026" (date-only, human-readable).
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    // `get` keeps this total on short input or non-ASCII byte boundaries
    let (Some(year), Some(month), Some(day)) =
        (date_str.get(..4), date_str.get(5..7), date_str.get(8..10))
    else {
        return date_str.to_string();
    };

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str.get(..10).unwrap_or(date_str).to_string()
    }
}

/// Format an ISO datetime string as "Mar 14, 2026 10:00 AM" (with 12-hour time).
///
/// Falls back to date-only if the time portion is missing.
pub fn format_datetime_human(date_str: &str) -> String {
    let date_part = format_date_human(date_str);

    // Need at least "YYYY-MM-DDTHH:MM" (16 chars)
    let (Some(hour_str), Some(min_str)) = (date_str.get(11..13), date_str.get(14..16)) else {
        return date_part;
    };

    let hour: u32 = match hour_str.parse() {
        Ok(h) => h,
        Err(_) => return date_part,
    };

    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{} {}:{} {}", date_part, display_hour, min_str, ampm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_only_formats() {
        assert_eq!(format_date_human("2026-03-14"), "Mar 14, 2026");
        assert_eq!(format_date_human("2025-12-01"), "Dec 1, 2025");
    }

    #[test]
    fn datetime_formats_with_am_pm() {
        assert_eq!(
            format_datetime_human("2026-03-14T10:00:00Z"),
            "Mar 14, 2026 10:00 AM"
        );
        assert_eq!(
            format_datetime_human("2026-03-14T21:35:00Z"),
            "Mar 14, 2026 9:35 PM"
        );
        assert_eq!(
            format_datetime_human("2026-03-14T00:05:00Z"),
            "Mar 14, 2026 12:05 AM"
        );
        assert_eq!(
            format_datetime_human("2026-03-14T12:00:00Z"),
            "Mar 14, 2026 12:00 PM"
        );
    }

    #[test]
    fn short_or_garbled_input_falls_back() {
        assert_eq!(format_date_human("2026"), "2026");
        assert_eq!(format_date_human("2026-99-14"), "2026-99-14");
        assert_eq!(format_datetime_human("2026-03-14"), "Mar 14, 2026");
    }

    #[test]
    fn multibyte_input_falls_back_without_panicking() {
        // A two-byte char straddling the day slice boundary
        assert_eq!(format_date_human("2026-03-1é"), "2026-03-1é");
        // Valid date portion, two-byte char inside the hour slice
        assert_eq!(format_datetime_human("2026-03-14T1é:30"), "Mar 14, 2026");
    }
}
