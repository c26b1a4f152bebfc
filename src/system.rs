//! Calendar system selection and dispatch to the conversion kernels.

use std::fmt;

use crate::day_count::{
    gregorian_from_days, gregorian_month_length, gregorian_to_days, is_gregorian_leap_year,
    CivilDate, Weekday, MAX_YEAR, MIN_YEAR,
};
use crate::error::DateError;
use crate::hijri::{hijri_from_days, hijri_month_length, hijri_to_days, is_hijri_leap_year};
use crate::jalali::{is_jalali_leap_year, jalali_from_days, jalali_month_length, jalali_to_days};

/// The calendar systems supported by the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalendarSystem {
    /// Proleptic Gregorian.
    Gregorian,
    /// Persian solar calendar (33-year leap cycle).
    #[default]
    Jalali,
    /// Islamic lunar calendar (official table, tabular fallback).
    Hijri,
}

impl CalendarSystem {
    pub const ALL: [CalendarSystem; 3] = [
        CalendarSystem::Gregorian,
        CalendarSystem::Jalali,
        CalendarSystem::Hijri,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "Gregorian",
            CalendarSystem::Jalali => "Jalali",
            CalendarSystem::Hijri => "Hijri",
        }
    }

    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            CalendarSystem::Gregorian => is_gregorian_leap_year(year),
            CalendarSystem::Jalali => is_jalali_leap_year(year),
            CalendarSystem::Hijri => is_hijri_leap_year(year),
        }
    }

    /// Number of days in a (zero-based) month.
    pub fn month_length(self, year: i32, month: u8) -> u8 {
        match self {
            CalendarSystem::Gregorian => gregorian_month_length(year, month),
            CalendarSystem::Jalali => jalali_month_length(year, month),
            CalendarSystem::Hijri => hijri_month_length(year, month),
        }
    }

    /// Number of days in a year.
    pub fn year_length(self, year: i32) -> u16 {
        (0..12).map(|m| u16::from(self.month_length(year, m))).sum()
    }

    /// Day on which weeks start by convention.
    pub fn first_day_of_week(self) -> Weekday {
        match self {
            CalendarSystem::Gregorian => Weekday::Sunday,
            CalendarSystem::Jalali | CalendarSystem::Hijri => Weekday::Saturday,
        }
    }

    /// Checks that a date lies in years `1..=9999` and that its month and
    /// day exist in this calendar.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] otherwise.
    pub fn validate(self, date: CivilDate) -> Result<CivilDate, DateError> {
        let valid = (MIN_YEAR..=MAX_YEAR).contains(&date.year)
            && date.month < 12
            && date.day >= 1
            && date.day <= self.month_length(date.year, date.month);
        if valid {
            Ok(date)
        } else {
            Err(self.invalid(date.year, date.month.into(), date.day.into()))
        }
    }

    /// Creates a validated date in this calendar.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] if the date does not exist.
    pub fn date(self, year: i32, month: u8, day: u8) -> Result<CivilDate, DateError> {
        self.validate(CivilDate::new(year, month, day))
    }

    /// Convert a date in this calendar to a day count.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] for dates outside years `1..=9999`
    /// or that do not exist in this calendar.
    pub fn to_days(self, date: CivilDate) -> Result<i64, DateError> {
        let date = self.validate(date)?;
        Ok(self.to_days_unchecked(date))
    }

    /// Convert a day count to a date in this calendar.
    ///
    /// The result may fall outside years `1..=9999` for extreme inputs; use
    /// [`validate`](Self::validate) where that matters.
    pub fn from_days(self, days: i64) -> CivilDate {
        match self {
            CalendarSystem::Gregorian => gregorian_from_days(days),
            CalendarSystem::Jalali => jalali_from_days(days),
            CalendarSystem::Hijri => hijri_from_days(days),
        }
    }

    pub(crate) fn to_days_unchecked(self, date: CivilDate) -> i64 {
        match self {
            CalendarSystem::Gregorian => gregorian_to_days(date),
            CalendarSystem::Jalali => jalali_to_days(date),
            CalendarSystem::Hijri => hijri_to_days(date),
        }
    }

    pub(crate) fn invalid(self, year: i32, month: i32, day: i32) -> DateError {
        DateError::InvalidDate {
            system: self,
            year,
            month,
            day,
        }
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert a date from one calendar system to another via the day count.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] if `date` is not valid in `from`, or if
/// the converted date falls outside years `1..=9999` of `to`.
pub fn convert(date: CivilDate, from: CalendarSystem, to: CalendarSystem) -> Result<CivilDate, DateError> {
    let days = from.to_days(date)?;
    to.validate(to.from_days(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_known_dates() {
        let nowruz = CivilDate::new(1403, 0, 1);
        let gregorian = convert(nowruz, CalendarSystem::Jalali, CalendarSystem::Gregorian).unwrap();
        assert_eq!(gregorian, CivilDate::new(2024, 2, 20));
        assert_eq!(
            convert(gregorian, CalendarSystem::Gregorian, CalendarSystem::Jalali).unwrap(),
            nowruz
        );
    }

    #[test]
    fn test_validate_rejects_year_zero_and_negative() {
        for system in CalendarSystem::ALL {
            assert!(system.to_days(CivilDate::new(0, 0, 1)).is_err());
            assert!(system.to_days(CivilDate::new(-5, 0, 1)).is_err());
            assert!(system.to_days(CivilDate::new(10000, 0, 1)).is_err());
            assert!(system.to_days(CivilDate::new(100, 12, 1)).is_err());
            assert!(system.to_days(CivilDate::new(100, 0, 0)).is_err());
        }
    }

    #[test]
    fn test_validate_month_length() {
        assert!(CalendarSystem::Jalali.date(1402, 11, 30).is_err());
        assert!(CalendarSystem::Jalali.date(1403, 11, 30).is_ok());
        assert!(CalendarSystem::Gregorian.date(2023, 1, 29).is_err());
        assert!(CalendarSystem::Gregorian.date(2024, 1, 29).is_ok());
        assert!(CalendarSystem::Hijri.date(1300, 1, 30).is_err());
    }

    #[test]
    fn test_year_lengths() {
        assert_eq!(CalendarSystem::Gregorian.year_length(2024), 366);
        assert_eq!(CalendarSystem::Jalali.year_length(1402), 365);
        assert_eq!(CalendarSystem::Jalali.year_length(1403), 366);
        assert_eq!(CalendarSystem::Hijri.year_length(1441), 355);
        assert_eq!(CalendarSystem::Hijri.year_length(1440), 354);
    }

    #[test]
    fn test_convert_out_of_range_target() {
        // Gregorian 0622-03-20 is before Jalali year 1
        let date = CivilDate::new(622, 2, 20);
        assert!(convert(date, CalendarSystem::Gregorian, CalendarSystem::Jalali).is_err());
    }
}
