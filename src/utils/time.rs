use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use chrono_tz::Tz;

/// First day of the given month, or None if the year/month pair is invalid
pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Number of days in a month.
///
/// Computed as "day 0 of the next month": the first of the following month
/// minus one day, so December rolls into January and leap years come from
/// chrono rather than a table.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    first_of_month(year, month)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Shift a (year, month) pair by a signed number of months
pub fn shift_year_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let index = year as i64 * 12 + month as i64 - 1 + offset as i64;
    let year = index.div_euclid(12).clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    (year, index.rem_euclid(12) as u32 + 1)
}

/// Shift a date by a signed number of months, clamping the day to the
/// length of the target month
pub fn shift_months(date: NaiveDate, offset: i32) -> NaiveDate {
    let shifted = if offset >= 0 {
        date.checked_add_months(Months::new(offset.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(offset.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Shift a date by a signed number of days
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(date)
}

/// Sunday of the week containing the given date
pub fn sunday_of_week(date: NaiveDate) -> NaiveDate {
    shift_days(date, -(date.weekday().num_days_from_sunday() as i64))
}

/// The seven dates of the Sunday-start week containing the given date
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let sunday = sunday_of_week(date);
    let mut days = [sunday; 7];
    for (offset, day) in days.iter_mut().enumerate() {
        *day = shift_days(sunday, offset as i64);
    }
    days
}

/// Today's date in the given timezone
pub fn today_in(timezone: &Tz) -> NaiveDate {
    today_at(Utc::now(), timezone)
}

/// The calendar date of an instant in the given timezone
pub fn today_at(now: DateTime<Utc>, timezone: &Tz) -> NaiveDate {
    now.with_timezone(timezone).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 12), 31);

        // Leap years
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);

        // Invalid month
        assert_eq!(days_in_month(2026, 13), 0);
    }

    #[test]
    fn test_shift_year_month() {
        assert_eq!(shift_year_month(2026, 11, 1), (2026, 12));
        assert_eq!(shift_year_month(2026, 12, 1), (2027, 1));
        assert_eq!(shift_year_month(2026, 1, -1), (2025, 12));
        assert_eq!(shift_year_month(2026, 11, 3), (2027, 2));
        assert_eq!(shift_year_month(2026, 3, -27), (2023, 12));
        assert_eq!(shift_year_month(2026, 1, i32::MAX).1, 8);
    }

    #[test]
    fn test_shifts_beyond_chrono_range_are_no_ops() {
        assert_eq!(shift_days(date(2026, 1, 6), i64::MAX), date(2026, 1, 6));
        assert_eq!(shift_days(date(2026, 1, 6), 7 * i32::MAX as i64), date(2026, 1, 6));
        assert_eq!(shift_months(date(2026, 1, 6), i32::MIN), date(2026, 1, 6));
    }

    #[test]
    fn test_shift_months_clamps_day() {
        assert_eq!(shift_months(date(2026, 1, 31), 1), date(2026, 2, 28));
        assert_eq!(shift_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_months(date(2026, 11, 15), 3), date(2027, 2, 15));
        assert_eq!(shift_months(date(2026, 3, 31), -1), date(2026, 2, 28));
    }

    #[test]
    fn test_sunday_of_week() {
        // Tuesday, 2026-01-06
        let sunday = sunday_of_week(date(2026, 1, 6));
        assert_eq!(sunday, date(2026, 1, 4));
        assert_eq!(sunday.weekday(), Weekday::Sun);

        // A Sunday maps to itself
        assert_eq!(sunday_of_week(date(2026, 1, 4)), date(2026, 1, 4));

        // Saturday crosses a year boundary backwards
        assert_eq!(sunday_of_week(date(2027, 1, 2)), date(2026, 12, 27));
    }

    #[test]
    fn test_week_dates() {
        let week = week_dates(date(2026, 1, 6));
        assert_eq!(week[0], date(2026, 1, 4));
        assert_eq!(week[6], date(2026, 1, 10));
        for pair in week.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_today_at_respects_timezone() {
        // 20:00 UTC is already the next day in Kolkata (+05:30)
        let now = Utc.with_ymd_and_hms(2026, 1, 6, 20, 0, 0).unwrap();
        assert_eq!(today_at(now, &chrono_tz::Asia::Kolkata), date(2026, 1, 7));
        assert_eq!(today_at(now, &chrono_tz::UTC), date(2026, 1, 6));
    }
}
