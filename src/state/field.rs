//! Calendar fields and their static ranges.

use std::fmt;

use crate::error::DateError;

/// A field of a [`CalendarState`](crate::CalendarState).
///
/// Numeric indices follow the conventional generic-calendar numbering, so
/// [`Field::from_index`] accepts the same values callers of such APIs use.
/// Index 0 (era) is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    Year = 1,
    /// Zero-based month.
    Month = 2,
    WeekOfYear = 3,
    WeekOfMonth = 4,
    DayOfMonth = 5,
    DayOfYear = 6,
    /// Day of week as an index from the calendar's first day of the week.
    DayOfWeek = 7,
    DayOfWeekInMonth = 8,
    AmPm = 9,
    /// Hour in the half-day (`0..=11`).
    Hour = 10,
    HourOfDay = 11,
    Minute = 12,
    Second = 13,
    Millisecond = 14,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::Year,
        Field::Month,
        Field::WeekOfYear,
        Field::WeekOfMonth,
        Field::DayOfMonth,
        Field::DayOfYear,
        Field::DayOfWeek,
        Field::DayOfWeekInMonth,
        Field::AmPm,
        Field::Hour,
        Field::HourOfDay,
        Field::Minute,
        Field::Second,
        Field::Millisecond,
    ];

    /// Maps a numeric field index to a field.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::UnsupportedField`] for indices outside the
    /// recognised set.
    pub fn from_index(index: i32) -> Result<Field, DateError> {
        Field::ALL
            .into_iter()
            .find(|field| *field as i32 == index)
            .ok_or_else(|| DateError::unsupported(format!("#{index}")))
    }

    pub fn index(self) -> i32 {
        self as i32
    }

    /// Smallest value the field takes in any date.
    pub fn min(self) -> i32 {
        match self {
            Field::Year => 1,
            Field::WeekOfYear | Field::WeekOfMonth | Field::DayOfMonth | Field::DayOfYear => 1,
            Field::DayOfWeekInMonth => 1,
            _ => 0,
        }
    }

    /// Largest value the field takes in any date of any supported calendar.
    pub fn max(self) -> i32 {
        match self {
            Field::Year => 9999,
            Field::Month => 11,
            Field::WeekOfYear => 54,
            Field::WeekOfMonth => 6,
            Field::DayOfMonth => 31,
            Field::DayOfYear => 366,
            Field::DayOfWeek => 6,
            Field::DayOfWeekInMonth => 5,
            Field::AmPm => 1,
            Field::Hour => 11,
            Field::HourOfDay => 23,
            Field::Minute | Field::Second => 59,
            Field::Millisecond => 999,
        }
    }

    /// True for fields that only hold the time of day.
    pub fn is_time_field(self) -> bool {
        matches!(
            self,
            Field::AmPm
                | Field::Hour
                | Field::HourOfDay
                | Field::Minute
                | Field::Second
                | Field::Millisecond
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Year => "YEAR",
            Field::Month => "MONTH",
            Field::WeekOfYear => "WEEK_OF_YEAR",
            Field::WeekOfMonth => "WEEK_OF_MONTH",
            Field::DayOfMonth => "DAY_OF_MONTH",
            Field::DayOfYear => "DAY_OF_YEAR",
            Field::DayOfWeek => "DAY_OF_WEEK",
            Field::DayOfWeekInMonth => "DAY_OF_WEEK_IN_MONTH",
            Field::AmPm => "AM_PM",
            Field::Hour => "HOUR",
            Field::HourOfDay => "HOUR_OF_DAY",
            Field::Minute => "MINUTE",
            Field::Second => "SECOND",
            Field::Millisecond => "MILLISECOND",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
