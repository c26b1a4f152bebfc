//! Time-zone offset resolution.
//!
//! The calendar engine needs exactly one thing from a time zone: the UTC
//! offset in effect at an instant. Offset rules themselves are delegated to
//! the host (through chrono's `Local`) or fixed.

use std::fmt;

/// Source of UTC offsets for converting between wall-clock fields and instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zone {
    #[default]
    Utc,
    /// A constant offset east of UTC, in milliseconds.
    Fixed(i64),
    /// The host's local time-zone rules.
    #[cfg(feature = "chrono")]
    Local,
}

/// Iran Standard Time (+03:30), which has had no daylight saving since 2022.
pub const TEHRAN: Zone = Zone::Fixed(12_600_000);

impl Zone {
    /// Fixed offset from hours and minutes east of UTC.
    pub fn fixed(hours: i32, minutes: i32) -> Zone {
        let sign = if hours < 0 { -1 } else { 1 };
        Zone::Fixed(i64::from(hours) * 3_600_000 + i64::from(sign * minutes.abs()) * 60_000)
    }

    /// UTC offset in milliseconds at the given instant.
    pub fn utc_offset_millis(&self, instant_millis: i64) -> i64 {
        match self {
            Zone::Utc => 0,
            Zone::Fixed(offset) => *offset,
            #[cfg(feature = "chrono")]
            Zone::Local => local_offset_millis(instant_millis),
        }
    }

    /// Instant whose wall-clock reading in this zone is `local_millis`.
    ///
    /// When the offset changes around `local_millis` (a skipped or repeated
    /// wall-clock time), the larger of the two candidate offsets is used.
    pub fn instant_from_local(&self, local_millis: i64) -> i64 {
        let first = self.utc_offset_millis(local_millis);
        let second = self.utc_offset_millis(local_millis - first);
        if first == second {
            local_millis - first
        } else {
            local_millis - first.max(second)
        }
    }

    /// Wall-clock reading of an instant in this zone, saturating at the ends
    /// of the `i64` range.
    pub fn local_from_instant(&self, instant_millis: i64) -> i64 {
        instant_millis.saturating_add(self.utc_offset_millis(instant_millis))
    }

    /// Wall-clock reading of an instant in this zone, or `None` if it does
    /// not fit in an `i64`.
    pub fn checked_local_from_instant(&self, instant_millis: i64) -> Option<i64> {
        instant_millis.checked_add(self.utc_offset_millis(instant_millis))
    }

    /// Identifier of the zone (`UTC`, `+03:30`, `Local`).
    pub fn id(&self) -> String {
        match self {
            Zone::Utc => "UTC".to_string(),
            Zone::Fixed(offset) => {
                let sign = if *offset < 0 { '-' } else { '+' };
                let minutes = offset.abs() / 60_000;
                format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
            }
            #[cfg(feature = "chrono")]
            Zone::Local => "Local".to_string(),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

#[cfg(feature = "chrono")]
fn local_offset_millis(instant_millis: i64) -> i64 {
    use chrono::{DateTime, Local, Offset, TimeZone};

    DateTime::from_timestamp_millis(instant_millis)
        .map(|utc| {
            let offset = Local.offset_from_utc_datetime(&utc.naive_utc());
            i64::from(offset.fix().local_minus_utc()) * 1000
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_offsets() {
        assert_eq!(Zone::fixed(3, 30), TEHRAN);
        assert_eq!(Zone::fixed(-4, 30), Zone::Fixed(-16_200_000));
        assert_eq!(TEHRAN.utc_offset_millis(0), 12_600_000);
        assert_eq!(Zone::Utc.utc_offset_millis(123), 0);
    }

    #[test]
    fn test_local_instant_roundtrip() {
        let local = 1_700_000_000_000;
        let instant = TEHRAN.instant_from_local(local);
        assert_eq!(instant, local - 12_600_000);
        assert_eq!(TEHRAN.local_from_instant(instant), local);
    }

    #[test]
    fn test_local_reading_at_range_ends() {
        assert_eq!(TEHRAN.checked_local_from_instant(i64::MAX), None);
        assert_eq!(Zone::Fixed(-1).checked_local_from_instant(i64::MIN), None);
        assert_eq!(TEHRAN.local_from_instant(i64::MAX), i64::MAX);
        assert_eq!(Zone::Fixed(-1).local_from_instant(i64::MIN), i64::MIN);
        assert_eq!(TEHRAN.checked_local_from_instant(0), Some(12_600_000));
    }

    #[test]
    fn test_ids() {
        assert_eq!(Zone::Utc.id(), "UTC");
        assert_eq!(TEHRAN.id(), "+03:30");
        assert_eq!(Zone::fixed(-4, 30).to_string(), "-04:30");
    }
}
