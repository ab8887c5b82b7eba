// ============================================================
// PERIOD NORMALIZER
// ============================================================
// Canonical, sortable time-bucket keys from raw date strings

use chrono::{NaiveDate, NaiveDateTime};

/// Day-precision formats the uploads actually arrive in.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Month-precision formats; the missing day is pinned to the 1st.
const MONTH_FORMATS: &[&str] = &["%Y-%m", "%Y/%m", "%m/%Y", "%b %Y", "%B %Y"];

/// Best-effort calendar parse of a raw date-like string.
///
/// Also used to re-parse period keys ("Jan 2024") when sorting the trend.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }

    for fmt in MONTH_FORMATS {
        let pinned = format!("1 {}", s);
        let pinned_fmt = format!("%d {}", fmt);
        if let Ok(date) = NaiveDate::parse_from_str(&pinned, &pinned_fmt) {
            return Some(date);
        }
    }

    // Bare 4-digit years show up in yearly summary exports
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(year) = s.parse::<i32>() {
            return NaiveDate::from_ymd_opt(year, 1, 1);
        }
    }

    None
}

/// Normalize a raw date value into a period key like "Jan 2024".
///
/// Total over arbitrary input: values that fail the calendar parse degrade
/// to their first seven characters (keeps "YYYY-MM"-shaped prefixes), and
/// failing that the raw string passes through unchanged.
pub fn period_key(raw: &str) -> String {
    if let Some(date) = parse_flexible_date(raw) {
        return date.format("%b %Y").to_string();
    }

    let prefix: String = raw.chars().take(7).collect();
    if prefix.is_empty() {
        raw.to_string()
    } else {
        prefix
    }
}

/// Sort trend entries chronologically by re-parsing their period keys.
///
/// Keys that no longer parse (substring or raw fallbacks) have no
/// meaningful position; the stable sort leaves them in first-seen order
/// ahead of the parseable keys.
pub fn sort_chronologically(entries: &mut [(String, f64)]) {
    entries.sort_by_key(|(key, _)| parse_flexible_date(key));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_dates_collapse_to_month_key() {
        assert_eq!(period_key("2024-01-05"), "Jan 2024");
        assert_eq!(period_key("2024-01-20"), "Jan 2024");
        assert_eq!(period_key("2024-02-01"), "Feb 2024");
    }

    #[test]
    fn test_other_calendar_shapes() {
        assert_eq!(period_key("2024/03/15"), "Mar 2024");
        assert_eq!(period_key("12/31/2023"), "Dec 2023");
        assert_eq!(period_key("2024-07"), "Jul 2024");
        assert_eq!(period_key("2024-01-05T08:30:00"), "Jan 2024");
        assert_eq!(period_key("2025"), "Jan 2025");
    }

    #[test]
    fn test_period_key_reparses_itself() {
        assert_eq!(
            parse_flexible_date("Jan 2024"),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(period_key("Jan 2024"), "Jan 2024");
    }

    #[test]
    fn test_unparseable_value_keeps_seven_char_prefix() {
        assert_eq!(period_key("202403"), "202403");
        assert_eq!(period_key("2024-13-99x"), "2024-13");
        assert_eq!(period_key("not a date at all"), "not a d");
    }

    #[test]
    fn test_sorts_months_chronologically() {
        let mut entries = vec![
            ("Feb 2024".to_string(), 200.0),
            ("Dec 2023".to_string(), 75.0),
            ("Jan 2024".to_string(), 150.0),
        ];
        sort_chronologically(&mut entries);
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Dec 2023", "Jan 2024", "Feb 2024"]);
    }

    #[test]
    fn test_unparseable_keys_stay_in_first_seen_order() {
        let mut entries = vec![
            ("zzz-key".to_string(), 1.0),
            ("Jan 2024".to_string(), 2.0),
            ("aaa-key".to_string(), 3.0),
        ];
        sort_chronologically(&mut entries);
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zzz-key", "aaa-key", "Jan 2024"]);
    }
}
