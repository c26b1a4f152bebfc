//! Persian (Jalali) calendar conversion
//!
//! The Jalali year starts at the northward equinox. This module uses the
//! arithmetic 33-year approximation of the astronomical rule: a year is leap
//! iff `year mod 33` is one of `1, 5, 9, 13, 17, 22, 26, 30`, i.e. eight leap
//! years in every 33.
//!
//! Month lengths are fixed except for the last one:
//! - months 0..=5 (Farvardin..Shahrivar) have 31 days
//! - months 6..=10 (Mehr..Bahman) have 30 days
//! - month 11 (Esfand) has 30 days in a leap year, 29 otherwise
//!
//! Both directions are closed-form; the only iteration is a one-step
//! correction of the estimated year in [`jalali_from_days`].

use crate::day_count::CivilDate;

/// Day count of 1 Farvardin, year 1 (622-03-21 proleptic Gregorian).
pub const JALALI_EPOCH: i64 = -492_268;

/// Days in one full 33-year cycle (33 * 365 + 8).
const DAYS_PER_CYCLE: i64 = 12_053;

/// Returns true if the given Jalali year is a leap year.
pub fn is_jalali_leap_year(year: i32) -> bool {
    (25 * i64::from(year) + 11).rem_euclid(33) < 8
}

/// Number of leap years in `1..year`.
fn leap_years_before(year: i64) -> i64 {
    (8 * year + 21).div_euclid(33)
}

/// Returns the number of days in a Jalali month (zero-based).
pub fn jalali_month_length(year: i32, month: u8) -> u8 {
    match month {
        0..=5 => 31,
        6..=10 => 30,
        _ if is_jalali_leap_year(year) => 30,
        _ => 29,
    }
}

/// Days from 1 Farvardin to the first day of `month`.
fn days_before_month(month: u8) -> i64 {
    let month = i64::from(month);
    if month <= 6 {
        31 * month
    } else {
        30 * month + 6
    }
}

/// Day count of 1 Farvardin of the given year.
fn new_year(year: i64) -> i64 {
    JALALI_EPOCH + 365 * (year - 1) + leap_years_before(year)
}

/// Convert a Jalali date to a day count.
pub fn jalali_to_days(date: CivilDate) -> i64 {
    new_year(i64::from(date.year)) + days_before_month(date.month) + i64::from(date.day) - 1
}

/// Convert a day count to a Jalali date.
pub fn jalali_from_days(days: i64) -> CivilDate {
    let since_epoch = days - JALALI_EPOCH + 1;
    let mut year = 1 + (33 * since_epoch + 3).div_euclid(DAYS_PER_CYCLE);

    // The estimate is exact across the supported range; the correction keeps
    // the inverse exact for any input.
    while new_year(year) > days {
        year -= 1;
    }
    while new_year(year + 1) <= days {
        year += 1;
    }

    let day_of_year = days - new_year(year);
    let month = if day_of_year < 186 {
        day_of_year / 31
    } else {
        (day_of_year - 6) / 30
    };
    let day = day_of_year - days_before_month(month as u8) + 1;

    CivilDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
    }
}
