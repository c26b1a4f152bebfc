//! taqvim - Jalali, Hijri and Gregorian calendar conversion
//!
//! This crate converts dates between the proleptic Gregorian, Persian (Jalali)
//! and Islamic (Hijri) calendars through a shared day-count timeline, and
//! provides a [`CalendarState`] with field access, calendar arithmetic and
//! pattern-based formatting and parsing.
//!
//! ```
//! use taqvim::{convert, CalendarSystem, CivilDate};
//!
//! // Months are zero-based: 1403/01/01 is Nowruz, 2024-03-20
//! let gregorian = convert(
//!     CivilDate::new(1403, 0, 1),
//!     CalendarSystem::Jalali,
//!     CalendarSystem::Gregorian,
//! ).unwrap();
//! assert_eq!(gregorian, CivilDate::new(2024, 2, 20));
//! ```

pub mod ast;
pub mod error;
pub mod options;
pub mod presets;

pub mod day_count;
pub mod hijri;
pub mod jalali;
pub mod official;
mod system;
mod zone;

mod state;

mod cache;
mod formatter;
mod locale;
mod matcher;
pub mod parser;

pub use ast::{FieldToken, Pattern, PatternPart};
pub use day_count::{CivilDate, TimeOfDay, Weekday};
pub use error::{DateError, ParseError, PatternError};
pub use hijri::HijriSource;
pub use locale::{normalize_digits, Locale, MonthNames};
pub use official::OfficialMonthTable;
pub use options::{FormatOptions, ParseOptions};
pub use state::{CalendarState, Field, FieldSnapshot};
pub use system::{convert, CalendarSystem};
pub use zone::{Zone, TEHRAN};

/// Format a state with a pattern string, using the pattern cache.
///
/// # Examples
/// ```
/// use taqvim::{format, CalendarState, CalendarSystem, CivilDate, FormatOptions, Locale, TimeOfDay, Zone};
///
/// let state = CalendarState::from_civil(
///     CalendarSystem::Jalali,
///     CivilDate::new(1402, 8, 15),
///     TimeOfDay::MIDNIGHT,
///     Zone::Utc,
/// ).unwrap();
/// let opts = FormatOptions::new(Locale::fa());
/// assert_eq!(format("yyyy/MM/dd", &state, &opts).unwrap(), "۱۴۰۲/۰۹/۱۵");
/// ```
pub fn format(pattern: &str, state: &CalendarState, opts: &FormatOptions) -> Result<String, PatternError> {
    let compiled = cache::get_or_compile(pattern)?;
    Ok(compiled.format(state, opts))
}

/// Parse text with a pattern string, using the pattern cache.
///
/// # Examples
/// ```
/// use taqvim::{parse, CivilDate, ParseOptions};
///
/// let state = parse("1402/07/20", "yyyy/MM/dd", &ParseOptions::default()).unwrap();
/// assert_eq!(state.civil_date(), CivilDate::new(1402, 6, 20));
/// ```
pub fn parse(text: &str, pattern: &str, opts: &ParseOptions) -> Result<CalendarState, ParseError> {
    let compiled = cache::get_or_compile(pattern)?;
    compiled.parse(text, opts)
}
