//! The calendar state engine.
//!
//! A [`CalendarState`] holds one absolute instant together with its
//! breakdown into calendar fields in one [`CalendarSystem`]. Either side may be
//! the one last written; the other is re-derived lazily on the next read and
//! then served from cache until the next mutation:
//!
//! - mutating a field marks the instant stale,
//! - mutating the instant marks the fields stale,
//! - a read resolves whichever side is stale exactly once.
//!
//! Interior mutability (`Cell`) lets reads resolve the cache through `&self`.
//! A state is therefore `Send` but not `Sync`; share copies, not references.

mod arith;
mod field;
mod snapshot;

pub use field::Field;
pub use snapshot::FieldSnapshot;

use std::cell::Cell;
use std::fmt;

use tracing::trace;

use crate::day_count::{check_range, split_millis, CivilDate, TimeOfDay, Weekday, MILLIS_PER_DAY};
use crate::error::DateError;
use crate::system::CalendarSystem;
use crate::zone::Zone;

/// Calendar fields cached together with the local day count they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fields {
    date: CivilDate,
    time: TimeOfDay,
    /// Local (wall-clock) day count of `date`.
    days: i64,
}

/// A mutable date-time in one calendar system and time zone.
#[derive(Debug, Clone)]
pub struct CalendarState {
    system: CalendarSystem,
    zone: Zone,
    first_day_of_week: Weekday,
    instant: Cell<i64>,
    fields: Cell<Fields>,
    fields_stale: Cell<bool>,
    instant_stale: Cell<bool>,
    #[cfg(test)]
    conversions: Cell<u32>,
}

impl CalendarState {
    fn with_parts(system: CalendarSystem, zone: Zone, instant: i64, fields: Fields) -> Self {
        CalendarState {
            system,
            zone,
            first_day_of_week: system.first_day_of_week(),
            instant: Cell::new(instant),
            fields: Cell::new(fields),
            fields_stale: Cell::new(false),
            instant_stale: Cell::new(false),
            #[cfg(test)]
            conversions: Cell::new(0),
        }
    }

    /// The current time.
    #[cfg(feature = "chrono")]
    pub fn now(system: CalendarSystem, zone: Zone) -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let mut state = Self::with_parts(system, zone, 0, Self::epoch_fields(system));
        state.store_instant(millis);
        state
    }

    /// A state at the given date and wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] if `date` does not exist in `system`
    /// or lies outside years `1..=9999`.
    pub fn from_civil(
        system: CalendarSystem,
        date: CivilDate,
        time: TimeOfDay,
        zone: Zone,
    ) -> Result<Self, DateError> {
        let date = system.validate(date)?;
        let time = TimeOfDay::new(time.hour, time.minute, time.second, time.millisecond)?;
        let mut state = Self::with_parts(system, zone, 0, Self::epoch_fields(system));
        state.store_fields(Fields {
            date,
            time,
            days: system.to_days_unchecked(date),
        });
        Ok(state)
    }

    /// A state at the given instant, in milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::FieldOutOfRange`] if the instant falls outside
    /// years `1..=9999` of `system` in `zone`.
    pub fn from_instant(system: CalendarSystem, millis: i64, zone: Zone) -> Result<Self, DateError> {
        let mut state = Self::with_parts(system, zone, 0, Self::epoch_fields(system));
        state.set_instant_millis(millis)?;
        Ok(state)
    }

    /// Placeholder fields for a state whose instant is about to be stored.
    fn epoch_fields(system: CalendarSystem) -> Fields {
        Fields {
            date: system.from_days(0),
            time: TimeOfDay::MIDNIGHT,
            days: 0,
        }
    }

    pub fn system(&self) -> CalendarSystem {
        self.system
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn set_first_day_of_week(&mut self, first: Weekday) {
        self.first_day_of_week = first;
    }

    /// Moves the state to another zone, keeping the instant.
    pub fn set_zone(&mut self, zone: Zone) {
        let instant = self.instant_millis();
        self.zone = zone;
        self.store_instant(instant);
    }

    /// The instant, in milliseconds since the Unix epoch.
    pub fn instant_millis(&self) -> i64 {
        self.resolve_instant();
        self.instant.get()
    }

    pub fn civil_date(&self) -> CivilDate {
        self.resolved().date
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.resolved().time
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_days(self.resolved().days)
    }

    /// Whether the current year is a leap year in this calendar.
    pub fn is_leap_year(&self) -> bool {
        self.system.is_leap_year(self.civil_date().year)
    }

    /// Length of the current month.
    pub fn month_length(&self) -> u8 {
        let date = self.civil_date();
        self.system.month_length(date.year, date.month)
    }

    /// Reads a field, resolving the cache first if needed.
    pub fn get(&self, field: Field) -> i32 {
        let fields = self.resolved();
        let date = fields.date;
        let time = fields.time;
        match field {
            Field::Year => date.year,
            Field::Month => date.month.into(),
            Field::DayOfMonth => date.day.into(),
            Field::DayOfYear => self.day_of_year(date),
            Field::DayOfWeek => self.weekday_index(fields.days),
            Field::WeekOfYear => {
                let day_of_year = self.day_of_year(date);
                self.week_number(fields.days, day_of_year)
            }
            Field::WeekOfMonth => self.week_number(fields.days, date.day.into()),
            Field::DayOfWeekInMonth => (i32::from(date.day) - 1) / 7 + 1,
            Field::AmPm => i32::from(time.hour >= 12),
            Field::Hour => i32::from(time.hour % 12),
            Field::HourOfDay => time.hour.into(),
            Field::Minute => time.minute.into(),
            Field::Second => time.second.into(),
            Field::Millisecond => time.millisecond.into(),
        }
    }

    /// Largest value `field` can take given the current year and month.
    pub fn actual_maximum(&self, field: Field) -> i32 {
        let fields = self.resolved();
        let date = fields.date;
        let month_length = i32::from(self.system.month_length(date.year, date.month));
        match field {
            Field::DayOfMonth => month_length,
            Field::DayOfYear => self.system.year_length(date.year).into(),
            Field::DayOfWeekInMonth => (month_length - 1) / 7 + 1,
            Field::WeekOfMonth => {
                let last = fields.days + i64::from(month_length - i32::from(date.day));
                self.week_number(last, month_length)
            }
            Field::WeekOfYear => {
                let year_length = i32::from(self.system.year_length(date.year));
                let day_of_year = self.day_of_year(date);
                let last = fields.days + i64::from(year_length - day_of_year);
                self.week_number(last, year_length)
            }
            _ => field.max(),
        }
    }

    fn day_of_year(&self, date: CivilDate) -> i32 {
        let before: i32 = (0..date.month)
            .map(|m| i32::from(self.system.month_length(date.year, m)))
            .sum();
        before + i32::from(date.day)
    }

    fn weekday_index(&self, days: i64) -> i32 {
        Weekday::from_days(days).index_from(self.first_day_of_week).into()
    }

    /// One-based week of the period containing `days`, where `ordinal` is
    /// the one-based position of `days` in that period. A partial first week
    /// counts as week 1.
    fn week_number(&self, days: i64, ordinal: i32) -> i32 {
        let period_start = days - i64::from(ordinal - 1);
        (ordinal - 1 + self.weekday_index(period_start)) / 7 + 1
    }

    /// Sets a field.
    ///
    /// Changing the year or month clamps the day of month to the new month's
    /// length. `DayOfWeek` moves within the current week. The other derived
    /// week fields are read-only.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::FieldOutOfRange`] for values outside the field's
    /// range and [`DateError::UnsupportedField`] for read-only fields. The
    /// state is unchanged on error.
    pub fn set(&mut self, field: Field, value: i32) -> Result<(), DateError> {
        let current = self.resolved();
        let date = current.date;
        let mut time = current.time;
        let value64 = i64::from(value);

        let fields = match field {
            Field::Year => {
                check_range(field, value64, field.min().into(), field.max().into())?;
                self.clamped(value, date.month, date.day, time)?
            }
            Field::Month => {
                check_range(field, value64, 0, 11)?;
                self.clamped(date.year, value as u8, date.day, time)?
            }
            Field::DayOfMonth => {
                let length = self.system.month_length(date.year, date.month);
                check_range(field, value64, 1, length.into())?;
                self.fields_at(CivilDate::new(date.year, date.month, value as u8), time)
            }
            Field::DayOfYear => {
                let length = self.system.year_length(date.year);
                check_range(field, value64, 1, length.into())?;
                let start = current.days - i64::from(self.day_of_year(date) - 1);
                self.fields_at_days(start + value64 - 1, time)?
            }
            Field::DayOfWeek => {
                check_range(field, value64, 0, 6)?;
                let shift = value64 - i64::from(self.weekday_index(current.days));
                self.fields_at_days(current.days + shift, time)?
            }
            Field::WeekOfYear | Field::WeekOfMonth | Field::DayOfWeekInMonth => {
                return Err(DateError::unsupported(field));
            }
            Field::AmPm => {
                check_range(field, value64, 0, 1)?;
                time.hour = time.hour % 12 + value as u8 * 12;
                Fields { time, ..current }
            }
            Field::Hour => {
                check_range(field, value64, 0, 11)?;
                time.hour = time.hour / 12 * 12 + value as u8;
                Fields { time, ..current }
            }
            Field::HourOfDay => {
                check_range(field, value64, 0, 23)?;
                time.hour = value as u8;
                Fields { time, ..current }
            }
            Field::Minute => {
                check_range(field, value64, 0, 59)?;
                time.minute = value as u8;
                Fields { time, ..current }
            }
            Field::Second => {
                check_range(field, value64, 0, 59)?;
                time.second = value as u8;
                Fields { time, ..current }
            }
            Field::Millisecond => {
                check_range(field, value64, 0, 999)?;
                time.millisecond = value as u16;
                Fields { time, ..current }
            }
        };
        self.store_fields(fields);
        Ok(())
    }

    /// Replaces the date, keeping the time of day.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] if `date` does not exist in this
    /// calendar.
    pub fn set_date(&mut self, date: CivilDate) -> Result<(), DateError> {
        let date = self.system.validate(date)?;
        let time = self.time_of_day();
        self.store_fields(self.fields_at(date, time));
        Ok(())
    }

    /// Replaces the time of day, keeping the date.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::FieldOutOfRange`] for an invalid time.
    pub fn set_time(&mut self, time: TimeOfDay) -> Result<(), DateError> {
        let time = TimeOfDay::new(time.hour, time.minute, time.second, time.millisecond)?;
        let fields = Fields {
            time,
            ..self.resolved()
        };
        self.store_fields(fields);
        Ok(())
    }

    /// Replaces the instant, keeping the calendar system and zone.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::FieldOutOfRange`] if the instant falls outside
    /// years `1..=9999` of this calendar.
    pub fn set_instant_millis(&mut self, millis: i64) -> Result<(), DateError> {
        let (first, last) = supported_days(self.system);
        let days = match self.zone.checked_local_from_instant(millis) {
            Some(local) => split_millis(local).0,
            None if millis < 0 => i64::MIN,
            None => i64::MAX,
        };
        if days < first || days > last {
            // one day past the nearer end names the offending year
            let outside = days.clamp(first - 1, last + 1);
            return Err(DateError::FieldOutOfRange {
                field: Field::Year,
                value: self.system.from_days(outside).year.into(),
                min: Field::Year.min().into(),
                max: Field::Year.max().into(),
            });
        }
        self.store_instant(millis);
        Ok(())
    }

    /// A copy with one field set.
    ///
    /// # Errors
    ///
    /// See [`set`](Self::set).
    pub fn with(&self, field: Field, value: i32) -> Result<Self, DateError> {
        let mut copy = self.clone();
        copy.set(field, value)?;
        Ok(copy)
    }

    /// The same instant expressed in another calendar system.
    ///
    /// The first day of the week follows the new system's convention.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::FieldOutOfRange`] if the instant has no date in
    /// years `1..=9999` of `system`.
    pub fn in_system(&self, system: CalendarSystem) -> Result<Self, DateError> {
        let instant = self.instant_millis();
        let mut state = Self::with_parts(system, self.zone, 0, Self::epoch_fields(system));
        state.set_instant_millis(instant)?;
        Ok(state)
    }

    /// Fields for `(year, month, day)` with the day clamped to the month.
    fn clamped(&self, year: i32, month: u8, day: u8, time: TimeOfDay) -> Result<Fields, DateError> {
        check_range(Field::Year, year.into(), Field::Year.min().into(), Field::Year.max().into())?;
        let day = day.min(self.system.month_length(year, month));
        Ok(self.fields_at(CivilDate::new(year, month, day), time))
    }

    fn fields_at(&self, date: CivilDate, time: TimeOfDay) -> Fields {
        Fields {
            date,
            time,
            days: self.system.to_days_unchecked(date),
        }
    }

    fn fields_at_days(&self, days: i64, time: TimeOfDay) -> Result<Fields, DateError> {
        let date = self.system.from_days(days);
        check_range(Field::Year, date.year.into(), Field::Year.min().into(), Field::Year.max().into())?;
        Ok(Fields { date, time, days })
    }

    fn store_fields(&mut self, fields: Fields) {
        self.fields.set(fields);
        self.fields_stale.set(false);
        self.instant_stale.set(true);
    }

    fn store_instant(&mut self, millis: i64) {
        self.instant.set(millis);
        self.instant_stale.set(false);
        self.fields_stale.set(true);
    }

    fn resolved(&self) -> Fields {
        if self.fields_stale.get() {
            let local = self.zone.local_from_instant(self.instant.get());
            let (days, millis_of_day) = split_millis(local);
            let fields = Fields {
                date: self.system.from_days(days),
                time: TimeOfDay::from_millis_of_day(millis_of_day),
                days,
            };
            trace!(system = %self.system, days, "re-derived fields from instant");
            self.fields.set(fields);
            self.fields_stale.set(false);
            self.count_conversion();
        }
        self.fields.get()
    }

    fn resolve_instant(&self) {
        if self.instant_stale.get() {
            let fields = self.fields.get();
            let local = fields.days * MILLIS_PER_DAY + fields.time.millis_of_day();
            let instant = self.zone.instant_from_local(local);
            trace!(system = %self.system, instant, "re-derived instant from fields");
            self.instant.set(instant);
            self.instant_stale.set(false);
            self.count_conversion();
        }
    }

    #[cfg(test)]
    fn count_conversion(&self) {
        self.conversions.set(self.conversions.get() + 1);
    }

    #[cfg(not(test))]
    fn count_conversion(&self) {}
}

/// First and last local day counts of years `1..=9999` in a calendar.
fn supported_days(system: CalendarSystem) -> (i64, i64) {
    let first = system.to_days_unchecked(CivilDate::new(1, 0, 1));
    let last_month = system.month_length(9999, 11);
    let last = system.to_days_unchecked(CivilDate::new(9999, 11, last_month));
    (first, last)
}

impl PartialEq for CalendarState {
    fn eq(&self, other: &Self) -> bool {
        self.system == other.system
            && self.zone == other.zone
            && self.first_day_of_week == other.first_day_of_week
            && self.instant_millis() == other.instant_millis()
            && self.resolved() == other.resolved()
    }
}

impl fmt::Display for CalendarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Fields { date, time, .. } = self.resolved();
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}.{:03} {} ({})",
            date.year,
            date.month + 1,
            date.day,
            time.hour,
            time.minute,
            time.second,
            time.millisecond,
            self.zone,
            self.system,
        )
    }
}

#[cfg(feature = "chrono")]
mod chrono_interop {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::CalendarState;
    use crate::day_count::{CivilDate, TimeOfDay};
    use crate::error::DateError;
    use crate::system::{convert, CalendarSystem};
    use crate::zone::Zone;

    impl CalendarState {
        /// A state at the Gregorian wall-clock reading `value` in `zone`.
        ///
        /// # Errors
        ///
        /// Returns [`DateError::InvalidDate`] if the date has no counterpart
        /// in years `1..=9999` of `system`.
        pub fn from_naive(system: CalendarSystem, value: NaiveDateTime, zone: Zone) -> Result<Self, DateError> {
            let date = convert(
                CivilDate::from(value.date()),
                CalendarSystem::Gregorian,
                system,
            )?;
            CalendarState::from_civil(system, date, TimeOfDay::from(value.time()), zone)
        }

        /// The Gregorian wall-clock reading of this state.
        ///
        /// # Errors
        ///
        /// Returns [`DateError::InvalidDate`] if the Gregorian date is outside
        /// years `1..=9999`.
        pub fn to_naive(&self) -> Result<NaiveDateTime, DateError> {
            let gregorian = convert(self.civil_date(), self.system, CalendarSystem::Gregorian)?;
            let date = NaiveDate::try_from(gregorian)?;
            Ok(date.and_time(self.time_of_day().into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::TEHRAN;

    fn jalali(year: i32, month: u8, day: u8) -> CalendarState {
        CalendarState::from_civil(
            CalendarSystem::Jalali,
            CivilDate::new(year, month, day),
            TimeOfDay::MIDNIGHT,
            Zone::Utc,
        )
        .unwrap()
    }

    #[test]
    fn test_from_civil_and_instant_agree() {
        let state = jalali(1403, 0, 1);
        let instant = state.instant_millis();
        assert_eq!(instant, 19802 * MILLIS_PER_DAY);

        let other = CalendarState::from_instant(CalendarSystem::Jalali, instant, Zone::Utc).unwrap();
        assert_eq!(other.civil_date(), CivilDate::new(1403, 0, 1));
        assert_eq!(other, state);
    }

    #[test]
    fn test_exactly_one_side_stale_after_mutation() {
        let mut state = jalali(1402, 6, 20);
        assert!(state.instant_stale.get());
        assert!(!state.fields_stale.get());

        state.instant_millis();
        assert!(!state.instant_stale.get());
        assert!(!state.fields_stale.get());

        state.set_instant_millis(0).unwrap();
        assert!(state.fields_stale.get());
        assert!(!state.instant_stale.get());

        state.set(Field::DayOfMonth, 5).unwrap();
        assert!(state.instant_stale.get());
        assert!(!state.fields_stale.get());
    }

    #[test]
    fn test_reads_resolve_once() {
        let mut state = jalali(1402, 6, 20);
        state.set_instant_millis(1_700_000_000_000).unwrap();
        let before = state.conversions.get();
        let year = state.get(Field::Year);
        let month = state.get(Field::Month);
        let day = state.get(Field::DayOfMonth);
        state.get(Field::DayOfWeek);
        assert_eq!(state.conversions.get(), before + 1);
        assert_eq!((year, month, day), (1402, 7, 23));

        state.instant_millis();
        state.instant_millis();
        assert_eq!(state.conversions.get(), before + 1);
    }

    #[test]
    fn test_derived_fields() {
        // 1403/01/01 was a Wednesday
        let state = jalali(1403, 0, 1);
        assert_eq!(state.weekday(), Weekday::Wednesday);
        assert_eq!(state.get(Field::DayOfWeek), 4);
        assert_eq!(state.get(Field::DayOfYear), 1);
        assert_eq!(state.get(Field::WeekOfYear), 1);
        assert_eq!(state.get(Field::WeekOfMonth), 1);

        // the first Saturday starts week 2
        let state = jalali(1403, 0, 4);
        assert_eq!(state.get(Field::DayOfWeek), 0);
        assert_eq!(state.get(Field::WeekOfYear), 2);

        let state = jalali(1403, 6, 15);
        assert_eq!(state.get(Field::DayOfYear), 6 * 31 + 15);
        assert_eq!(state.get(Field::DayOfWeekInMonth), 3);
    }

    #[test]
    fn test_actual_maximum() {
        let state = jalali(1403, 11, 1);
        assert_eq!(state.actual_maximum(Field::DayOfMonth), 30);
        assert_eq!(state.actual_maximum(Field::DayOfYear), 366);
        let state = jalali(1402, 11, 1);
        assert_eq!(state.actual_maximum(Field::DayOfMonth), 29);
        assert_eq!(state.actual_maximum(Field::DayOfWeekInMonth), 5);
        assert_eq!(state.actual_maximum(Field::Month), 11);
        assert!(state.actual_maximum(Field::WeekOfYear) >= 53);
    }

    #[test]
    fn test_set_clamps_day_on_month_change() {
        let mut state = jalali(1402, 0, 31);
        state.set(Field::Month, 6).unwrap();
        assert_eq!(state.civil_date(), CivilDate::new(1402, 6, 30));

        // Esfand 30 in a leap year, moved to a common year
        let mut state = jalali(1403, 11, 30);
        state.set(Field::Year, 1402).unwrap();
        assert_eq!(state.civil_date(), CivilDate::new(1402, 11, 29));
    }

    #[test]
    fn test_set_rejects_without_mutating() {
        let mut state = jalali(1402, 6, 20);
        let before = state.clone();
        assert!(state.set(Field::Month, 12).unwrap_err().is_invalid_date());
        assert!(state.set(Field::DayOfMonth, 31).is_err());
        assert!(state.set(Field::Year, 0).is_err());
        assert!(state.set(Field::HourOfDay, 24).is_err());
        assert!(matches!(
            state.set(Field::WeekOfYear, 2),
            Err(DateError::UnsupportedField { .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_set_time_fields() {
        let mut state = jalali(1402, 6, 20);
        state.set(Field::HourOfDay, 15).unwrap();
        assert_eq!(state.get(Field::Hour), 3);
        assert_eq!(state.get(Field::AmPm), 1);
        state.set(Field::AmPm, 0).unwrap();
        assert_eq!(state.get(Field::HourOfDay), 3);
        state.set(Field::Hour, 11).unwrap();
        state.set(Field::Minute, 30).unwrap();
        state.set(Field::Second, 5).unwrap();
        state.set(Field::Millisecond, 250).unwrap();
        assert_eq!(state.time_of_day(), TimeOfDay::new(11, 30, 5, 250).unwrap());
    }

    #[test]
    fn test_set_day_of_week_and_year() {
        let mut state = jalali(1403, 0, 1);
        state.set(Field::DayOfWeek, 0).unwrap();
        assert_eq!(state.civil_date(), CivilDate::new(1402, 11, 26));
        state.set(Field::DayOfYear, 365).unwrap();
        assert_eq!(state.civil_date(), CivilDate::new(1402, 11, 29));
        assert!(state.set(Field::DayOfYear, 366).is_err());
    }

    #[test]
    fn test_zone_shifts_fields_not_instant() {
        let mut state = CalendarState::from_instant(CalendarSystem::Gregorian, 0, Zone::Utc).unwrap();
        assert_eq!(state.civil_date(), CivilDate::new(1970, 0, 1));
        state.set_zone(Zone::fixed(-5, 0));
        assert_eq!(state.instant_millis(), 0);
        assert_eq!(state.civil_date(), CivilDate::new(1969, 11, 31));
        assert_eq!(state.get(Field::HourOfDay), 19);
    }

    #[test]
    fn test_local_fields_in_tehran() {
        let state = CalendarState::from_civil(
            CalendarSystem::Jalali,
            CivilDate::new(1403, 0, 1),
            TimeOfDay::new(3, 30, 0, 0).unwrap(),
            TEHRAN,
        )
        .unwrap();
        assert_eq!(state.instant_millis(), 19802 * MILLIS_PER_DAY);
    }

    #[test]
    fn test_in_system() {
        let state = jalali(1403, 0, 1);
        let gregorian = state.in_system(CalendarSystem::Gregorian).unwrap();
        assert_eq!(gregorian.civil_date(), CivilDate::new(2024, 2, 20));
        assert_eq!(gregorian.instant_millis(), state.instant_millis());
        assert_eq!(gregorian.first_day_of_week(), Weekday::Sunday);

        // year 1 Gregorian precedes the Jalali epoch
        let early = CalendarState::from_civil(
            CalendarSystem::Gregorian,
            CivilDate::new(5, 0, 1),
            TimeOfDay::MIDNIGHT,
            Zone::Utc,
        )
        .unwrap();
        assert!(early.in_system(CalendarSystem::Jalali).is_err());
    }

    #[test]
    fn test_instant_out_of_range() {
        assert!(CalendarState::from_instant(CalendarSystem::Gregorian, i64::MAX / 4, Zone::Utc).is_err());
        for (millis, zone, year) in [(i64::MAX, TEHRAN, 10_000), (i64::MIN, Zone::Fixed(-1), 0)] {
            for system in CalendarSystem::ALL {
                let err = CalendarState::from_instant(system, millis, zone).unwrap_err();
                assert!(
                    matches!(err, DateError::FieldOutOfRange { field: Field::Year, value, .. } if value == year),
                    "{system} {err:?}"
                );
            }
        }
        let mut state = jalali(1402, 0, 1);
        let before = state.clone();
        assert!(state.set_instant_millis(-70_000_000_000_000).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_display() {
        let state = jalali(1402, 6, 20);
        assert_eq!(state.to_string(), "1402/07/20 00:00:00.000 UTC (Jalali)");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_naive_roundtrip() {
        let naive = chrono::NaiveDate::from_ymd_opt(1979, 8, 18)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let state = CalendarState::from_naive(CalendarSystem::Jalali, naive, Zone::Utc).unwrap();
        assert_eq!(state.civil_date(), CivilDate::new(1358, 4, 27));
        assert_eq!(state.to_naive().unwrap(), naive);
    }
}
