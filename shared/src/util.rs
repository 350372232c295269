/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a unix-millis timestamp as a calendar date (`YYYY-MM-DD`, UTC).
///
/// Out-of-range timestamps render as an empty string.
pub fn format_date(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Best-effort leading-integer parse.
///
/// Skips leading whitespace, accepts an optional sign, then reads digits up
/// to the first non-digit: `"2"` → 2, `" 3 adults"` → 3, `"-1"` → -1.
/// Returns `None` when no digit follows.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = {
        let end = rest
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_leading_int_accepts_prefixes() {
        assert_eq!(parse_leading_int("2"), Some(2));
        assert_eq!(parse_leading_int("  12 guests"), Some(12));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int("-3x"), Some(-3));
    }

    #[test]
    fn parse_leading_int_rejects_non_numeric() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("two"), None);
        assert_eq!(parse_leading_int("-"), None);
        // overflow is not coerced silently
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn format_date_renders_utc_day() {
        // 2025-06-01T12:00:00Z
        assert_eq!(format_date(1_748_779_200_000), "2025-06-01");
    }
}
