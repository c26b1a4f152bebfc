//! Formatting and parsing options.

use crate::locale::Locale;
use crate::system::CalendarSystem;
use crate::zone::Zone;

/// Options for formatting states.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Names, AM/PM markers and digits.
    pub locale: Locale,
}

impl FormatOptions {
    pub fn new(locale: Locale) -> Self {
        FormatOptions { locale }
    }
}

/// Options for parsing text into states.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// The calendar system the text is written in.
    pub system: CalendarSystem,
    /// Names and AM/PM markers accepted in the text. Persian and Arabic-Indic
    /// digits are accepted regardless.
    pub locale: Locale,
    /// Zone of the wall-clock time in the text.
    pub zone: Zone,
    /// Century added to two-digit years (`yy`). `None` uses the system's
    /// default.
    pub two_digit_year_base: Option<i32>,
}

impl ParseOptions {
    pub fn new(system: CalendarSystem) -> Self {
        ParseOptions {
            system,
            ..Default::default()
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_two_digit_year_base(mut self, base: i32) -> Self {
        self.two_digit_year_base = Some(base);
        self
    }

    /// The century two-digit years are placed in.
    pub fn century_base(&self) -> i32 {
        self.two_digit_year_base.unwrap_or(match self.system {
            CalendarSystem::Gregorian => 2000,
            CalendarSystem::Jalali | CalendarSystem::Hijri => 1400,
        })
    }
}
