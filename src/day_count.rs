//! The day-count timeline and the Gregorian kernel.
//!
//! Every calendar system in this crate maps its `(year, month, day)` triples to
//! and from a single signed day count: the number of days since 1970-01-01
//! (proleptic Gregorian). An absolute instant is the matching millisecond count,
//! so `days * MILLIS_PER_DAY` is midnight UTC of that day.
//!
//! Months are zero-based throughout (`0..=11`), days are one-based.
//!
//! The Gregorian conversion uses the 400-year era decomposition:
//! - an era is 146097 days (97 leap years in 400)
//! - the year is shifted to start in March so the leap day is the last day
//!   of the computational year, which makes month offsets a linear formula

use crate::error::DateError;
use crate::state::Field;

/// Milliseconds in one civil day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Smallest year accepted by any calendar system.
pub const MIN_YEAR: i32 = 1;
/// Largest year accepted by any calendar system.
pub const MAX_YEAR: i32 = 9999;

/// Day count of 0000-03-01 relative to the Unix epoch.
const DAYS_TO_UNIX_EPOCH: i64 = 719_468;
const DAYS_PER_ERA: i64 = 146_097;

/// Days in each Gregorian month for non-leap years.
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A `(year, month, day)` triple in some calendar system.
///
/// A `CivilDate` only has meaning together with the [`CalendarSystem`] it was
/// produced by; validity is checked by [`CalendarSystem::validate`].
///
/// [`CalendarSystem`]: crate::CalendarSystem
/// [`CalendarSystem::validate`]: crate::CalendarSystem::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDate {
    pub year: i32,
    /// Zero-based month (`0..=11`).
    pub month: u8,
    /// One-based day of month.
    pub day: u8,
}

impl CivilDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// Wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
    };

    /// Creates a time of day, validating each component.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::FieldOutOfRange`] naming the first component that
    /// is out of range.
    pub fn new(hour: u8, minute: u8, second: u8, millisecond: u16) -> Result<Self, DateError> {
        check_range(Field::HourOfDay, hour.into(), 0, 23)?;
        check_range(Field::Minute, minute.into(), 0, 59)?;
        check_range(Field::Second, second.into(), 0, 59)?;
        check_range(Field::Millisecond, millisecond.into(), 0, 999)?;
        Ok(Self {
            hour,
            minute,
            second,
            millisecond,
        })
    }

    /// Builds a time of day from milliseconds since midnight.
    ///
    /// Values outside one day are wrapped into `0..MILLIS_PER_DAY`.
    pub fn from_millis_of_day(millis: i64) -> Self {
        let ms = millis.rem_euclid(MILLIS_PER_DAY);
        Self {
            hour: (ms / 3_600_000) as u8,
            minute: (ms / 60_000 % 60) as u8,
            second: (ms / 1000 % 60) as u8,
            millisecond: (ms % 1000) as u16,
        }
    }

    /// Milliseconds since midnight.
    pub fn millis_of_day(&self) -> i64 {
        i64::from(self.hour) * 3_600_000
            + i64::from(self.minute) * 60_000
            + i64::from(self.second) * 1000
            + i64::from(self.millisecond)
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Weekday of a day count. 1970-01-01 was a Thursday.
    pub fn from_days(days: i64) -> Self {
        Self::ALL[(days + 4).rem_euclid(7) as usize]
    }

    /// Weekday from a Sunday-based index, wrapping modulo 7.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    /// Sunday-based index (`0..=6`).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Position of this weekday in a week that starts on `first` (`0..=6`).
    pub fn index_from(self, first: Weekday) -> u8 {
        (self as u8 + 7 - first as u8) % 7
    }
}

/// Returns true if the given Gregorian year is a leap year.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a Gregorian month (zero-based).
pub fn gregorian_month_length(year: i32, month: u8) -> u8 {
    if month == 1 && is_gregorian_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[usize::from(month % 12)]
    }
}

/// Convert a proleptic Gregorian date to a day count.
///
/// No range checks are applied; callers validate through
/// [`CalendarSystem::to_days`](crate::CalendarSystem::to_days).
pub fn gregorian_to_days(date: CivilDate) -> i64 {
    let month = i64::from(date.month);
    let year = i64::from(date.year) - i64::from(date.month < 2);
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let march_month = (month + 10) % 12;
    let day_of_year = (153 * march_month + 2) / 5 + i64::from(date.day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - DAYS_TO_UNIX_EPOCH
}

/// Convert a day count to a proleptic Gregorian date.
pub fn gregorian_from_days(days: i64) -> CivilDate {
    let z = days + DAYS_TO_UNIX_EPOCH;
    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let march_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * march_month + 2) / 5 + 1;
    let month = if march_month < 10 {
        march_month + 2
    } else {
        march_month - 10
    };
    let year = year_of_era + era * 400 + i64::from(month < 2);

    CivilDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
    }
}

/// Split an instant into its day count and the milliseconds into that day.
pub fn split_millis(millis: i64) -> (i64, i64) {
    (
        millis.div_euclid(MILLIS_PER_DAY),
        millis.rem_euclid(MILLIS_PER_DAY),
    )
}

pub(crate) fn check_range(field: Field, value: i64, min: i64, max: i64) -> Result<(), DateError> {
    if value < min || value > max {
        return Err(DateError::FieldOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(feature = "chrono")]
mod chrono_interop {
    use super::{gregorian_from_days, CivilDate, TimeOfDay};
    use crate::error::DateError;
    use crate::system::CalendarSystem;
    use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

    const UNIX_EPOCH_CE_DAYS: i64 = 719_163;

    impl From<NaiveDate> for CivilDate {
        /// Gregorian triple of a chrono date.
        fn from(date: NaiveDate) -> Self {
            gregorian_from_days(i64::from(date.num_days_from_ce()) - UNIX_EPOCH_CE_DAYS)
        }
    }

    impl TryFrom<CivilDate> for NaiveDate {
        type Error = DateError;

        /// Interprets the triple as a Gregorian date.
        fn try_from(date: CivilDate) -> Result<Self, Self::Error> {
            let days = CalendarSystem::Gregorian.to_days(date)?;
            i32::try_from(days + UNIX_EPOCH_CE_DAYS)
                .ok()
                .and_then(NaiveDate::from_num_days_from_ce_opt)
                .ok_or(DateError::InvalidDate {
                    system: CalendarSystem::Gregorian,
                    year: date.year,
                    month: date.month.into(),
                    day: date.day.into(),
                })
        }
    }

    impl From<NaiveTime> for TimeOfDay {
        fn from(time: NaiveTime) -> Self {
            TimeOfDay {
                hour: time.hour() as u8,
                minute: time.minute() as u8,
                second: time.second().min(59) as u8,
                millisecond: (time.nanosecond() / 1_000_000).min(999) as u16,
            }
        }
    }

    impl From<TimeOfDay> for NaiveTime {
        fn from(time: TimeOfDay) -> Self {
            NaiveTime::from_hms_milli_opt(
                time.hour.into(),
                time.minute.into(),
                time.second.into(),
                time.millisecond.into(),
            )
            .unwrap_or(NaiveTime::MIN)
        }
    }
}
