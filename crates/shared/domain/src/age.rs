//! Age calculation from a date of birth.

use chrono::{Datelike, NaiveDate};

/// Whole years elapsed from `date_of_birth` to `as_of`.
///
/// The birthday counts as reached on its calendar day. A date of birth after
/// `as_of` yields 0.
pub fn completed_years(date_of_birth: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut years = as_of.year() - date_of_birth.year();

    if (as_of.month(), as_of.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }

    u32::try_from(years).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_passed_this_year() {
        assert_eq!(completed_years(date(1990, 1, 10), date(2025, 6, 1)), 35);
    }

    #[test]
    fn test_birthday_today() {
        assert_eq!(completed_years(date(2000, 12, 15), date(2025, 12, 15)), 25);
    }

    #[test]
    fn test_birthday_upcoming_this_year() {
        assert_eq!(completed_years(date(1995, 12, 31), date(2025, 12, 1)), 29);
    }

    #[test]
    fn test_day_before_birthday_is_one_less() {
        let dob = date(1984, 7, 4);
        let on_birthday = completed_years(dob, date(2024, 7, 4));
        let day_before = completed_years(dob, date(2024, 7, 3));
        assert_eq!(day_before, on_birthday - 1);
    }

    #[test]
    fn test_same_day_is_zero() {
        let dob = date(2010, 3, 14);
        assert_eq!(completed_years(dob, dob), 0);
    }

    #[test]
    fn test_future_dob_clamps_to_zero() {
        assert_eq!(completed_years(date(2030, 1, 1), date(2025, 1, 1)), 0);
        assert_eq!(completed_years(date(2025, 1, 2), date(2025, 1, 1)), 0);
    }

    #[test]
    fn test_leap_day_birthday() {
        let dob = date(2000, 2, 29);
        assert_eq!(completed_years(dob, date(2023, 2, 28)), 22);
        assert_eq!(completed_years(dob, date(2023, 3, 1)), 23);
        assert_eq!(completed_years(dob, date(2024, 2, 29)), 24);
    }
}
