//! Hijri (Islamic) calendar conversion
//!
//! Two paths are combined here:
//!
//! 1. The active [`OfficialMonthTable`](crate::official::OfficialMonthTable)
//!    (Umm al-Qura), which is authoritative for the years it covers.
//! 2. The tabular Islamic calendar everywhere else: a 30-year cycle with 11
//!    leap years, odd months of 30 days and even months of 29, the last month
//!    gaining a day in leap years.
//!
//! ## Accuracy
//!
//! Real-world observance can differ from the tabular arithmetic by a day in
//! some months. Dates resolved through the table are reported as
//! [`HijriSource::Official`]; everything else is [`HijriSource::Tabular`] and
//! should be treated as lower confidence, especially right next to the table.
//!
//! Outside the table the tabular calendar is re-anchored by the offset seen at
//! the nearer edge of the table, so the combined calendar has no gaps or
//! overlapping dates and conversions stay exact two-sided inverses.

use crate::day_count::CivilDate;
use crate::official;

/// Which path produced a Hijri date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HijriSource {
    /// Resolved from the official month table.
    Official,
    /// Computed with the tabular approximation.
    Tabular,
}

/// The pure tabular Islamic calendar, civil (Friday) epoch.
///
/// These functions never consult the official table.
pub mod tabular {
    use crate::day_count::CivilDate;

    /// Day count of 1 Muharram, year 1 (622-07-19 proleptic Gregorian).
    pub const HIJRI_EPOCH: i64 = -492_148;

    /// Mean synodic month in days, used to estimate the month of a day count.
    pub const MEAN_SYNODIC_MONTH: f64 = 29.530588;

    /// Returns true if the given year has 355 days in the tabular calendar.
    pub fn is_leap_year(year: i32) -> bool {
        (i64::from(year) * 11 + 14).rem_euclid(30) < 11
    }

    /// Returns the number of days in a (zero-based) tabular month.
    pub fn month_length(year: i32, month: u8) -> u8 {
        if month % 2 == 0 || (month == 11 && is_leap_year(year)) {
            30
        } else {
            29
        }
    }

    fn month_start(year: i64, month: i64) -> i64 {
        HIJRI_EPOCH + 354 * (year - 1) + (3 + 11 * year).div_euclid(30) + 29 * month + (month + 1) / 2
    }

    /// Convert a tabular Hijri date to a day count.
    pub fn to_days(date: CivilDate) -> i64 {
        month_start(i64::from(date.year), i64::from(date.month)) + i64::from(date.day) - 1
    }

    /// Convert a day count to a tabular Hijri date.
    pub fn from_days(days: i64) -> CivilDate {
        let estimate = ((days - HIJRI_EPOCH) as f64 / MEAN_SYNODIC_MONTH).floor() as i64;
        let mut year = estimate.div_euclid(12) + 1;
        let mut month = estimate.rem_euclid(12);

        // The mean-month estimate is at most one month away.
        for _ in 0..4 {
            let start = month_start(year, month);
            if days < start {
                if month == 0 {
                    month = 11;
                    year -= 1;
                } else {
                    month -= 1;
                }
            } else if days - start >= i64::from(month_length(year as i32, month as u8)) {
                if month == 11 {
                    month = 0;
                    year += 1;
                } else {
                    month += 1;
                }
            } else {
                break;
            }
        }

        let length = i64::from(month_length(year as i32, month as u8));
        let day = (days - month_start(year, month) + 1).clamp(1, length);
        CivilDate {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        }
    }
}

/// Returns true if the last month of the given Hijri year has 30 days.
///
/// Inside the official window this follows the published month 12, which
/// need not coincide with a 355-day year.
pub fn is_hijri_leap_year(year: i32) -> bool {
    match official::active().month_length(year, 11) {
        Some(length) => length == 30,
        None => tabular::is_leap_year(year),
    }
}

/// Returns the number of days in a (zero-based) Hijri month.
pub fn hijri_month_length(year: i32, month: u8) -> u8 {
    official::active()
        .month_length(year, month)
        .unwrap_or_else(|| tabular::month_length(year, month))
}

/// Convert a Hijri date to a day count.
pub fn hijri_to_days(date: CivilDate) -> i64 {
    let table = official::active();
    match table.to_days(date) {
        Some(days) => days,
        None => tabular::to_days(date) + table.shift_for_year(date.year),
    }
}

/// Convert a day count to a Hijri date.
pub fn hijri_from_days(days: i64) -> CivilDate {
    hijri_from_days_with_source(days).0
}

/// Convert a day count to a Hijri date, reporting which path resolved it.
pub fn hijri_from_days_with_source(days: i64) -> (CivilDate, HijriSource) {
    let table = official::active();
    match table.from_days(days) {
        Some(date) => (date, HijriSource::Official),
        None => (
            tabular::from_days(days - table.shift_for_day(days)),
            HijriSource::Tabular,
        ),
    }
}
