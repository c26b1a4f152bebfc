//! Official (Umm al-Qura) Hijri month table.
//!
//! The civil Hijri calendar follows published month boundaries that deviate
//! from the tabular arithmetic by up to a day. An [`OfficialMonthTable`] holds
//! the published month lengths for a contiguous window of Hijri years and the
//! day count on which the first of those years starts; it takes precedence
//! over the tabular approximation inside that window.
//!
//! One table is active per process. It is installed at most once, either
//! explicitly through [`install`] or implicitly on first use with the bundled
//! window returned by [`OfficialMonthTable::bundled`], and is never mutated
//! afterwards.

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::day_count::{gregorian_to_days, CivilDate};
use crate::error::DateError;
use crate::hijri::tabular;

static ACTIVE: OnceLock<OfficialMonthTable> = OnceLock::new();

/// First year of the bundled window.
const BUNDLED_FIRST_YEAR: i32 = 1440;

/// 1 Muharram 1440 = 2018-09-11.
const BUNDLED_FIRST_DAY: CivilDate = CivilDate::new(2018, 8, 11);

/// Month lengths for 1440..=1446 AH.
///
/// Muharram, Ramadan, Shawwal and Dhu al-Hijjah start on the dates announced
/// in Saudi Arabia; months between two announced starts alternate 30/29.
const BUNDLED_MONTHS: [[u8; 12]; 7] = [
    [30, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 29],
    [30, 30, 30, 29, 30, 29, 30, 29, 30, 30, 29, 29],
    [30, 29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 29],
    [30, 29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30],
    [30, 29, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30],
    [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30],
    [30, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 29],
];

/// Published Hijri month lengths for a contiguous range of years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficialMonthTable {
    first_year: i32,
    months: Vec<[u8; 12]>,
    /// Day count of 1 Muharram for every covered year plus the year after.
    year_starts: Vec<i64>,
    /// Offset applied to tabular dates before the window.
    lower_shift: i64,
    /// Offset applied to tabular dates after the window.
    upper_shift: i64,
}

impl OfficialMonthTable {
    /// Builds a table starting at `first_year`, whose 1 Muharram falls on
    /// day count `first_day`, with one row of month lengths per year.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidTable`] if the table is empty, starts
    /// before year 1, or contains a month length other than 29 or 30.
    pub fn new(first_year: i32, first_day: i64, months: Vec<[u8; 12]>) -> Result<Self, DateError> {
        if months.is_empty() {
            return Err(DateError::InvalidTable {
                reason: "no years".to_string(),
            });
        }
        if first_year < 1 {
            return Err(DateError::InvalidTable {
                reason: format!("first year {first_year} is before year 1"),
            });
        }
        for (offset, row) in months.iter().enumerate() {
            if let Some(month) = row.iter().position(|len| !(29..=30).contains(len)) {
                return Err(DateError::InvalidTable {
                    reason: format!(
                        "year {} month {} has {} days",
                        first_year + offset as i32,
                        month + 1,
                        row[month]
                    ),
                });
            }
        }

        Ok(Self::build(first_year, first_day, months))
    }

    fn build(first_year: i32, first_day: i64, months: Vec<[u8; 12]>) -> Self {
        let mut year_starts = Vec::with_capacity(months.len() + 1);
        let mut start = first_day;
        year_starts.push(start);
        for row in &months {
            start += row.iter().map(|len| i64::from(*len)).sum::<i64>();
            year_starts.push(start);
        }

        let last_year = first_year + months.len() as i32 - 1;
        let lower_shift = first_day - tabular::to_days(CivilDate::new(first_year, 0, 1));
        let upper_shift = start - tabular::to_days(CivilDate::new(last_year + 1, 0, 1));

        Self {
            first_year,
            months,
            year_starts,
            lower_shift,
            upper_shift,
        }
    }

    /// The window shipped with the crate (1440..=1446 AH).
    pub fn bundled() -> Self {
        Self::build(
            BUNDLED_FIRST_YEAR,
            gregorian_to_days(BUNDLED_FIRST_DAY),
            BUNDLED_MONTHS.to_vec(),
        )
    }

    /// Parses a table from JSON of the form
    /// `{"first_year": 1440, "first_day": [2018, 9, 11], "months": [[30, 29, ...], ...]}`
    /// where `first_day` is the Gregorian date (1-based month) of 1 Muharram.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidTable`] for malformed JSON or table data.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, DateError> {
        #[derive(serde::Deserialize)]
        struct Raw {
            first_year: i32,
            first_day: [i32; 3],
            months: Vec<[u8; 12]>,
        }

        let raw: Raw = serde_json::from_str(json).map_err(|e| DateError::InvalidTable {
            reason: e.to_string(),
        })?;
        let [year, month, day] = raw.first_day;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(DateError::InvalidTable {
                reason: format!("invalid first_day {year}-{month}-{day}"),
            });
        }
        let first_day = gregorian_to_days(CivilDate::new(year, (month - 1) as u8, day as u8));
        Self::new(raw.first_year, first_day, raw.months)
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn last_year(&self) -> i32 {
        self.first_year + self.months.len() as i32 - 1
    }

    /// Day counts covered by the table, as a half-open range.
    pub fn span(&self) -> std::ops::Range<i64> {
        self.year_starts[0]..self.year_starts[self.months.len()]
    }

    pub fn covers_year(&self, year: i32) -> bool {
        (self.first_year..=self.last_year()).contains(&year)
    }

    pub fn covers_day(&self, days: i64) -> bool {
        self.span().contains(&days)
    }

    /// Length of a (zero-based) month in a covered year.
    pub fn month_length(&self, year: i32, month: u8) -> Option<u8> {
        self.row(year).map(|row| row[usize::from(month % 12)])
    }

    /// Day count of 1 Muharram of a covered year.
    pub fn year_start(&self, year: i32) -> Option<i64> {
        self.covers_year(year)
            .then(|| self.year_starts[(year - self.first_year) as usize])
    }

    /// Offset between the official and tabular calendars at the nearer edge
    /// of the window, for a year outside it.
    pub(crate) fn shift_for_year(&self, year: i32) -> i64 {
        if year < self.first_year {
            self.lower_shift
        } else {
            self.upper_shift
        }
    }

    /// Offset between the official and tabular calendars at the nearer edge
    /// of the window, for a day count outside it.
    pub(crate) fn shift_for_day(&self, days: i64) -> i64 {
        if days < self.year_starts[0] {
            self.lower_shift
        } else {
            self.upper_shift
        }
    }

    fn row(&self, year: i32) -> Option<&[u8; 12]> {
        if !self.covers_year(year) {
            return None;
        }
        self.months.get((year - self.first_year) as usize)
    }

    /// Day count of a covered date, without validating the day.
    pub(crate) fn to_days(&self, date: CivilDate) -> Option<i64> {
        let row = self.row(date.year)?;
        let start = self.year_starts[(date.year - self.first_year) as usize];
        let before: i64 = row[..usize::from(date.month.min(11))]
            .iter()
            .map(|len| i64::from(*len))
            .sum();
        Some(start + before + i64::from(date.day) - 1)
    }

    /// Date of a covered day count.
    pub(crate) fn from_days(&self, days: i64) -> Option<CivilDate> {
        if !self.covers_day(days) {
            return None;
        }
        // year_starts is sorted; the containing year is the last start <= days
        let index = match self.year_starts.binary_search(&days) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let mut remaining = days - self.year_starts[index];
        let row = &self.months[index];
        let mut month = 0;
        while remaining >= i64::from(row[month]) {
            remaining -= i64::from(row[month]);
            month += 1;
        }
        Some(CivilDate::new(
            self.first_year + index as i32,
            month as u8,
            remaining as u8 + 1,
        ))
    }
}

/// Installs the process-wide table.
///
/// Succeeds only if no table has been installed or used yet; otherwise the
/// rejected table is handed back.
pub fn install(table: OfficialMonthTable) -> Result<(), OfficialMonthTable> {
    let years = (table.first_year(), table.last_year());
    match ACTIVE.set(table) {
        Ok(()) => {
            debug!(first = years.0, last = years.1, "installed official Hijri table");
            Ok(())
        }
        Err(table) => {
            warn!("official Hijri table already active, ignoring new table");
            Err(table)
        }
    }
}

/// The process-wide table, installing the bundled one on first use.
pub fn active() -> &'static OfficialMonthTable {
    ACTIVE.get_or_init(|| {
        debug!("installing bundled official Hijri table");
        OfficialMonthTable::bundled()
    })
}
