//! Flat field snapshots for persistence and IPC.

use super::{CalendarState, Fields};
use crate::day_count::{CivilDate, TimeOfDay, MILLIS_PER_DAY};
use crate::error::DateError;
use crate::system::CalendarSystem;
use crate::zone::Zone;

/// Every stored value of a [`CalendarState`], resolved.
///
/// Restoring from a snapshot reinstates both representations as they were,
/// after checking that they agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FieldSnapshot {
    pub calendar_system: CalendarSystem,
    pub year: i32,
    /// Zero-based.
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
    pub instant_millis: i64,
}

impl FieldSnapshot {
    pub fn date(&self) -> CivilDate {
        CivilDate::new(self.year, self.month, self.day)
    }

    pub fn time(&self) -> TimeOfDay {
        TimeOfDay {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            millisecond: self.millisecond,
        }
    }
}

impl CalendarState {
    pub fn snapshot(&self) -> FieldSnapshot {
        let Fields { date, time, .. } = self.resolved();
        FieldSnapshot {
            calendar_system: self.system,
            year: date.year,
            month: date.month,
            day: date.day,
            hour: time.hour,
            minute: time.minute,
            second: time.second,
            millisecond: time.millisecond,
            instant_millis: self.instant_millis(),
        }
    }

    /// Rebuilds a state from a snapshot taken in `zone`.
    ///
    /// The date and time are checked against the instant's wall-clock
    /// reading in `zone` so both representations agree.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDate`] or [`DateError::FieldOutOfRange`]
    /// for values a state could not have held, and
    /// [`DateError::InconsistentSnapshot`] when the fields describe a
    /// different moment than the instant.
    pub fn from_snapshot(snapshot: FieldSnapshot, zone: Zone) -> Result<Self, DateError> {
        let system = snapshot.calendar_system;
        let date = system.validate(snapshot.date())?;
        let time = snapshot.time();
        let time = TimeOfDay::new(time.hour, time.minute, time.second, time.millisecond)?;

        let days = system.to_days_unchecked(date);
        let local = days * MILLIS_PER_DAY + time.millis_of_day();
        // wall-clock times skipped by an offset change read back differently
        let agrees = zone.checked_local_from_instant(snapshot.instant_millis) == Some(local)
            || zone.instant_from_local(local) == snapshot.instant_millis;
        if !agrees {
            return Err(DateError::InconsistentSnapshot {
                instant_millis: snapshot.instant_millis,
                zone,
            });
        }

        Ok(CalendarState::with_parts(
            system,
            zone,
            snapshot.instant_millis,
            Fields { date, time, days },
        ))
    }
}
