/// Pure date utility functions (Discord-agnostic)
use chrono::{DateTime, Datelike, Utc};

/// Extract the month and day from a tick timestamp
pub fn month_day(now: &DateTime<Utc>) -> (i32, i32) {
    (now.month() as i32, now.day() as i32)
}

/// Validate if a month/day combination is valid
pub fn is_valid_month_day(month: i32, day: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }

    let max_day = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29, // Allow Feb 29 for leap years
        _ => return false,
    };

    (1..=max_day).contains(&day)
}

/// Validate a birth year against the current year
pub fn is_valid_birth_year(year: i32, current_year: i32) -> bool {
    year > 1900 && year <= current_year
}

/// Sort key ordering birthdays by how soon they come up after today.
/// Today's own birthdays sort first; yesterday's sort last.
pub fn upcoming_sort_key(month: i32, day: i32, today_month: i32, today_day: i32) -> i32 {
    let ordinal = month * 32 + day;
    let today_ordinal = today_month * 32 + today_day;
    (ordinal - today_ordinal).rem_euclid(12 * 32)
}

/// Format a birthday as "Day MonthName" or "Day MonthName Year"
pub fn format_birthday_display(month: i32, day: i32, year: Option<i32>) -> String {
    let month_name = get_month_name(month);
    match year {
        Some(y) => format!("{} {} {}", day, month_name, y),
        None => format!("{} {}", day, month_name),
    }
}

/// Get month name from month number (1-12)
pub fn get_month_name(month: i32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_day() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap();
        assert_eq!(month_day(&ts), (3, 14));

        // Straddling midnight does not matter; the tick captures one snapshot
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(month_day(&ts), (12, 31));
    }

    #[test]
    fn test_is_valid_month_day() {
        assert!(is_valid_month_day(1, 31));
        assert!(is_valid_month_day(2, 29)); // Leap day allowed
        assert!(is_valid_month_day(4, 30));
        assert!(is_valid_month_day(12, 31));

        assert!(!is_valid_month_day(0, 15));
        assert!(!is_valid_month_day(13, 15));
        assert!(!is_valid_month_day(2, 30));
        assert!(!is_valid_month_day(4, 31));
        assert!(!is_valid_month_day(6, 0));
        assert!(!is_valid_month_day(6, 32));
    }

    #[test]
    fn test_is_valid_birth_year() {
        assert!(is_valid_birth_year(1990, 2024));
        assert!(is_valid_birth_year(2024, 2024));

        assert!(!is_valid_birth_year(1900, 2024));
        assert!(!is_valid_birth_year(2025, 2024));
    }

    #[test]
    fn test_upcoming_sort_key_today_first() {
        assert_eq!(upcoming_sort_key(3, 14, 3, 14), 0);
    }

    #[test]
    fn test_upcoming_sort_key_wraps_year() {
        // January birthday seen from December sorts before a yesterday birthday
        let january = upcoming_sort_key(1, 5, 12, 20);
        let yesterday = upcoming_sort_key(12, 19, 12, 20);
        assert!(january < yesterday);
    }

    #[test]
    fn test_upcoming_sort_key_orders_within_month() {
        let sooner = upcoming_sort_key(3, 15, 3, 14);
        let later = upcoming_sort_key(3, 20, 3, 14);
        assert!(sooner < later);
    }

    #[test]
    fn test_format_birthday_display() {
        assert_eq!(format_birthday_display(3, 15, None), "15 March");
        assert_eq!(format_birthday_display(3, 15, Some(1990)), "15 March 1990");
        assert_eq!(format_birthday_display(1, 1, None), "1 January");
    }

    #[test]
    fn test_get_month_name() {
        assert_eq!(get_month_name(1), "January");
        assert_eq!(get_month_name(12), "December");
        assert_eq!(get_month_name(0), "Unknown");
        assert_eq!(get_month_name(13), "Unknown");
    }
}
