use chrono::{DateTime, Utc};

// "$1,234" -- whole dollars with en-US grouping, sign before the symbol.
pub fn format_usdc(amount: f64) -> String {
    let negative = amount < 0.0;
    let digits = (amount.abs().round() as u64).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

// "42s ago" / "17m ago" / "3h ago" / "5d ago". Timestamps that do not
// parse come back unchanged rather than erroring a whole render.
pub fn time_ago(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) else {
        return timestamp.to_string();
    };

    let seconds = (now - parsed.with_timezone(&Utc)).num_seconds().max(0);
    if seconds < 60 {
        format!("{seconds}s ago")
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn usdc_groups_thousands() {
        assert_eq!(format_usdc(0.0), "$0");
        assert_eq!(format_usdc(950.0), "$950");
        assert_eq!(format_usdc(1_234.0), "$1,234");
        assert_eq!(format_usdc(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn usdc_rounds_to_whole_dollars() {
        assert_eq!(format_usdc(120.5), "$121");
        assert_eq!(format_usdc(120.4), "$120");
        assert_eq!(format_usdc(-1_500.0), "-$1,500");
    }

    #[test]
    fn time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2025, 11, 2, 12, 0, 0).unwrap();

        assert_eq!(time_ago("2025-11-02T11:59:18+00:00", now), "42s ago");
        assert_eq!(time_ago("2025-11-02T11:43:00+00:00", now), "17m ago");
        assert_eq!(time_ago("2025-11-02T09:00:00+00:00", now), "3h ago");
        assert_eq!(time_ago("2025-10-28T12:00:00+00:00", now), "5d ago");
    }

    #[test]
    fn unparseable_timestamp_is_passed_through() {
        let now = Utc.with_ymd_and_hms(2025, 11, 2, 12, 0, 0).unwrap();
        assert_eq!(time_ago("not-a-timestamp", now), "not-a-timestamp");
    }
}
