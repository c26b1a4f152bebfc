//! Calendar arithmetic: `add` carries into higher fields, `roll` wraps.

use super::{CalendarState, Field, Fields};
use crate::day_count::{check_range, CivilDate, MAX_YEAR, MIN_YEAR};
use crate::error::DateError;

const MILLIS_PER_HOUR: i64 = 3_600_000;

impl CalendarState {
    /// Adds `amount` to a field, carrying into higher fields.
    ///
    /// Year and month arithmetic clamps the day of month to the resulting
    /// month. Day and week fields move the date by whole days, walking month
    /// boundaries one month at a time. Time fields move the instant.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::FieldOutOfRange`] if the result leaves years
    /// `1..=9999`. The state is unchanged on error.
    pub fn add(&mut self, field: Field, amount: i32) -> Result<(), DateError> {
        if amount == 0 {
            return Ok(());
        }
        let amount = i64::from(amount);
        match field {
            Field::Year => {
                let current = self.resolved();
                let year = i64::from(current.date.year) + amount;
                check_year(year)?;
                let fields = self.clamped(year as i32, current.date.month, current.date.day, current.time)?;
                self.store_fields(fields);
            }
            Field::Month => {
                let current = self.resolved();
                let total = i64::from(current.date.year) * 12 + i64::from(current.date.month) + amount;
                let year = total.div_euclid(12);
                check_year(year)?;
                let month = total.rem_euclid(12) as u8;
                let fields = self.clamped(year as i32, month, current.date.day, current.time)?;
                self.store_fields(fields);
            }
            Field::DayOfMonth | Field::DayOfYear | Field::DayOfWeek => {
                let fields = self.shifted_by_days(amount)?;
                self.store_fields(fields);
            }
            Field::WeekOfYear | Field::WeekOfMonth | Field::DayOfWeekInMonth => {
                let fields = self.shifted_by_days(amount * 7)?;
                self.store_fields(fields);
            }
            Field::AmPm => self.shift_instant(amount * 12 * MILLIS_PER_HOUR)?,
            Field::Hour | Field::HourOfDay => self.shift_instant(amount * MILLIS_PER_HOUR)?,
            Field::Minute => self.shift_instant(amount * 60_000)?,
            Field::Second => self.shift_instant(amount * 1000)?,
            Field::Millisecond => self.shift_instant(amount)?,
        }
        Ok(())
    }

    /// Moves a field by one step, wrapping within the field's range.
    ///
    /// `Year` steps by one without wrapping. `Month` is the exception to
    /// non-carrying rolls: rolling up from the last month goes to the first
    /// month of the next year, and rolling down from the first month goes to
    /// the last month of the previous year.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::UnsupportedField`] for the week fields and
    /// [`DateError::FieldOutOfRange`] if a year step leaves `1..=9999`.
    pub fn roll(&mut self, field: Field, up: bool) -> Result<(), DateError> {
        let step: i32 = if up { 1 } else { -1 };
        let current = self.resolved();
        let date = current.date;
        let mut time = current.time;

        let fields = match field {
            Field::Year | Field::Month => return self.add(field, step),
            Field::DayOfMonth => {
                let length = i32::from(self.system.month_length(date.year, date.month));
                let day = wrap(date.day.into(), step, 1, length);
                self.fields_at(CivilDate::new(date.year, date.month, day as u8), time)
            }
            Field::DayOfYear => {
                let length = i32::from(self.system.year_length(date.year));
                let day_of_year = self.day_of_year(date);
                let target = wrap(day_of_year, step, 1, length);
                self.fields_at_days(current.days + i64::from(target - day_of_year), time)?
            }
            Field::DayOfWeek => {
                let index = self.weekday_index(current.days);
                let target = wrap(index, step, 0, 6);
                self.fields_at_days(current.days + i64::from(target - index), time)?
            }
            Field::WeekOfYear | Field::WeekOfMonth | Field::DayOfWeekInMonth => {
                return Err(DateError::unsupported(field));
            }
            Field::AmPm => {
                time.hour = (time.hour + 12) % 24;
                Fields { time, ..current }
            }
            Field::Hour => {
                let hour = wrap(i32::from(time.hour % 12), step, 0, 11);
                time.hour = time.hour / 12 * 12 + hour as u8;
                Fields { time, ..current }
            }
            Field::HourOfDay => {
                time.hour = wrap(time.hour.into(), step, 0, 23) as u8;
                Fields { time, ..current }
            }
            Field::Minute => {
                time.minute = wrap(time.minute.into(), step, 0, 59) as u8;
                Fields { time, ..current }
            }
            Field::Second => {
                time.second = wrap(time.second.into(), step, 0, 59) as u8;
                Fields { time, ..current }
            }
            Field::Millisecond => {
                time.millisecond = wrap(time.millisecond.into(), step, 0, 999) as u16;
                Fields { time, ..current }
            }
        };
        self.store_fields(fields);
        Ok(())
    }

    /// A copy moved by `days` days.
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    pub fn plus_days(&self, days: i32) -> Result<Self, DateError> {
        self.plus(Field::DayOfMonth, days)
    }

    /// A copy moved by `months` months, clamping the day of month.
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    pub fn plus_months(&self, months: i32) -> Result<Self, DateError> {
        self.plus(Field::Month, months)
    }

    /// A copy moved by `years` years, clamping the day of month.
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    pub fn plus_years(&self, years: i32) -> Result<Self, DateError> {
        self.plus(Field::Year, years)
    }

    fn plus(&self, field: Field, amount: i32) -> Result<Self, DateError> {
        let mut copy = self.clone();
        copy.add(field, amount)?;
        Ok(copy)
    }

    /// Fields moved by `amount` days, normalising the day of month against
    /// each month's length in turn.
    fn shifted_by_days(&self, amount: i64) -> Result<Fields, DateError> {
        let current = self.resolved();
        let mut year = i64::from(current.date.year);
        let mut month = current.date.month;
        let mut day = i64::from(current.date.day) + amount;

        loop {
            let length = i64::from(self.system.month_length(year as i32, month));
            if day <= length {
                break;
            }
            day -= length;
            if month == 11 {
                month = 0;
                year += 1;
                check_year(year)?;
            } else {
                month += 1;
            }
        }
        while day < 1 {
            if month == 0 {
                month = 11;
                year -= 1;
                check_year(year)?;
            } else {
                month -= 1;
            }
            day += i64::from(self.system.month_length(year as i32, month));
        }

        Ok(Fields {
            date: CivilDate::new(year as i32, month, day as u8),
            time: current.time,
            days: current.days + amount,
        })
    }

    /// Deltas are bounded by `i32::MAX` half-days, far from overflowing.
    fn shift_instant(&mut self, delta: i64) -> Result<(), DateError> {
        let target = self.instant_millis() + delta;
        self.set_instant_millis(target)
    }
}

fn check_year(year: i64) -> Result<(), DateError> {
    check_range(Field::Year, year, MIN_YEAR.into(), MAX_YEAR.into())
}

fn wrap(value: i32, step: i32, min: i32, max: i32) -> i32 {
    (value - min + step).rem_euclid(max - min + 1) + min
}
