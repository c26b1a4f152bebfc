//! Month and weekday names, AM/PM markers and digit glyphs.

mod builtin;

pub use builtin::{Locale, MonthNames};

use crate::day_count::Weekday;
use crate::system::CalendarSystem;

impl Locale {
    /// Looks up a locale by identifier (`en`, `fa`, or a tag starting with either).
    pub fn by_id(id: &str) -> Option<Locale> {
        let language = id.split(['-', '_']).next().unwrap_or(id);
        match language.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::en()),
            "fa" => Some(Locale::fa()),
            _ => None,
        }
    }

    pub fn months(&self, system: CalendarSystem) -> &MonthNames {
        match system {
            CalendarSystem::Gregorian => &self.gregorian_months,
            CalendarSystem::Jalali => &self.jalali_months,
            CalendarSystem::Hijri => &self.hijri_months,
        }
    }

    /// Name of a zero-based month.
    pub fn month_name(&self, system: CalendarSystem, month: u8, full: bool) -> &'static str {
        let names = self.months(system);
        let index = usize::from(month % 12);
        if full {
            names.full[index]
        } else {
            names.short[index]
        }
    }

    pub fn weekday_name(&self, weekday: Weekday, full: bool) -> &'static str {
        let index = usize::from(weekday.index());
        if full {
            self.day_names_full[index]
        } else {
            self.day_names_short[index]
        }
    }

    pub fn am_pm(&self, pm: bool) -> &'static str {
        if pm {
            self.pm_string
        } else {
            self.am_string
        }
    }

    /// Glyph for an ASCII digit value `0..=9`.
    pub fn digit_glyph(&self, digit: u8) -> char {
        self.digits[usize::from(digit % 10)]
    }

    pub fn uses_ascii_digits(&self) -> bool {
        self.digits[0] == '0'
    }

    /// Replaces ASCII digits with this locale's glyphs, leaving everything
    /// else untouched.
    pub fn localize_digits(&self, text: &str) -> String {
        if self.uses_ascii_digits() {
            return text.to_string();
        }
        text.chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => self.digit_glyph(d as u8),
                _ => c,
            })
            .collect()
    }
}

/// Replaces Persian (`U+06F0..`) and Arabic-Indic (`U+0660..`) digits with
/// ASCII digits.
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => ascii_digit(c as u32 - 0x06F0),
            '\u{0660}'..='\u{0669}' => ascii_digit(c as u32 - 0x0660),
            _ => c,
        })
        .collect()
}

fn ascii_digit(value: u32) -> char {
    char::from_digit(value, 10).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        let en = Locale::en();
        assert_eq!(en.month_name(CalendarSystem::Jalali, 11, true), "Esfand");
        assert_eq!(en.month_name(CalendarSystem::Gregorian, 1, false), "Feb");
        assert_eq!(en.month_name(CalendarSystem::Hijri, 8, true), "Ramadan");
        let fa = Locale::fa();
        assert_eq!(fa.month_name(CalendarSystem::Jalali, 0, true), "فروردین");
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Locale::en().weekday_name(Weekday::Saturday, true), "Saturday");
        assert_eq!(Locale::fa().weekday_name(Weekday::Saturday, true), "شنبه");
        assert_eq!(Locale::fa().weekday_name(Weekday::Friday, false), "ج");
    }

    #[test]
    fn test_digits() {
        let fa = Locale::fa();
        assert_eq!(fa.digit_glyph(4), '۴');
        assert_eq!(fa.localize_digits("1402/09/15"), "۱۴۰۲/۰۹/۱۵");
        assert_eq!(Locale::en().localize_digits("1402/09/15"), "1402/09/15");
        assert_eq!(normalize_digits("۱۴۰۲/۰۹/۱۵"), "1402/09/15");
        assert_eq!(normalize_digits("\u{0661}\u{0664}\u{0664}\u{0665}"), "1445");
        assert_eq!(normalize_digits("abc 12"), "abc 12");
    }

    #[test]
    fn test_by_id() {
        assert_eq!(Locale::by_id("fa-IR"), Some(Locale::fa()));
        assert_eq!(Locale::by_id("EN_us"), Some(Locale::en()));
        assert_eq!(Locale::by_id("de"), None);
    }
}
