use chrono::{Datelike, NaiveDate};

/// Whole days from `today` until the next December 25, ignoring time of day.
/// Returns 0 on Christmas itself; the day after, the target rolls over to
/// next year.
pub fn days_until_christmas(today: NaiveDate) -> i64 {
    let christmas = christmas_of(today.year());
    let target = if today > christmas { christmas_of(today.year() + 1) } else { christmas };
    (target - today).num_days()
}

fn christmas_of(year: i32) -> NaiveDate {
    // Dec 25 exists in every year.
    NaiveDate::from_ymd_opt(year, 12, 25).unwrap()
}

/// Display label for the countdown: "Today!", "1 day" or "N days".
pub fn days_label(days: i64) -> String {
    match days {
        0 => "Today!".to_string(),
        1 => "1 day".to_string(),
        n => format!("{n} days"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_christmas_day_is_zero() {
        assert_eq!(days_until_christmas(date(2025, 12, 25)), 0);
    }

    #[test]
    fn test_christmas_eve_is_one() {
        assert_eq!(days_until_christmas(date(2025, 12, 24)), 1);
    }

    #[test]
    fn test_day_after_targets_next_year() {
        // Dec 26 2025 -> Dec 25 2026.
        assert_eq!(days_until_christmas(date(2025, 12, 26)), 364);
        // Dec 26 2027 -> Dec 25 2028 crosses Feb 29 2028.
        assert_eq!(days_until_christmas(date(2027, 12, 26)), 365);
    }

    #[test]
    fn test_always_within_a_year() {
        let mut day = date(2025, 1, 1);
        let end = date(2026, 12, 31);
        while day <= end {
            let days = days_until_christmas(day);
            assert!((0..=365).contains(&days), "{day} -> {days}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(days_label(0), "Today!");
        assert_eq!(days_label(1), "1 day");
        assert_eq!(days_label(42), "42 days");
    }
}
