//! Named built-in patterns.
//!
//! Presets are numbered so that a stored preset id can be turned back into a
//! pattern for the reader's locale.

use crate::locale::Locale;

/// A built-in pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// `1402/07/20`
    ShortDate = 1,
    /// `20 Mehr 1402`
    MediumDate = 2,
    /// `Thursday, 20 Mehr 1402`
    LongDate = 3,
    /// `18:45`
    Time = 4,
    /// `18:45:09`
    TimeWithSeconds = 5,
    /// `6:45 PM`
    ClockTime = 6,
    /// `1402/07/20 18:45`
    DateTime = 7,
    /// `1402-07-20T18:45:09`
    Iso = 8,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::ShortDate,
        Preset::MediumDate,
        Preset::LongDate,
        Preset::Time,
        Preset::TimeWithSeconds,
        Preset::ClockTime,
        Preset::DateTime,
        Preset::Iso,
    ];

    /// The preset with the given id.
    ///
    /// # Examples
    /// ```
    /// use taqvim::presets::Preset;
    ///
    /// assert_eq!(Preset::from_id(1), Some(Preset::ShortDate));
    /// assert_eq!(Preset::from_id(0), None);
    /// ```
    pub fn from_id(id: u32) -> Option<Preset> {
        Preset::ALL.into_iter().find(|preset| *preset as u32 == id)
    }

    pub fn id(self) -> u32 {
        self as u32
    }
}

/// Get the pattern string for a preset in a locale.
///
/// # Examples
/// ```
/// use taqvim::presets::{pattern, Preset};
/// use taqvim::Locale;
///
/// assert_eq!(pattern(Preset::ShortDate, &Locale::en()), "yyyy/MM/dd");
/// assert_eq!(pattern(Preset::LongDate, &Locale::fa()), "dddd d MMMM yyyy");
/// ```
pub fn pattern(preset: Preset, locale: &Locale) -> &'static str {
    let persian = locale.id == "fa";
    match preset {
        Preset::ShortDate => "yyyy/MM/dd",
        Preset::MediumDate if persian => "d MMMM yyyy",
        Preset::MediumDate => "d MMM yyyy",
        Preset::LongDate if persian => "dddd d MMMM yyyy",
        Preset::LongDate => "dddd, d MMMM yyyy",
        Preset::Time => "HH:mm",
        Preset::TimeWithSeconds => "HH:mm:ss",
        Preset::ClockTime => "h:mm A",
        Preset::DateTime => "yyyy/MM/dd HH:mm",
        Preset::Iso => "yyyy-MM-dd'T'HH:mm:ss",
    }
}

/// Get the pattern string for a preset id.
pub fn pattern_from_id(id: u32, locale: &Locale) -> Option<&'static str> {
    Preset::from_id(id).map(|preset| pattern(preset, locale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Pattern;

    #[test]
    fn test_ids_roundtrip() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_id(preset.id()), Some(preset));
        }
        assert_eq!(pattern_from_id(99, &Locale::en()), None);
    }

    #[test]
    fn test_all_presets_compile() {
        for locale in [Locale::en(), Locale::fa()] {
            for preset in Preset::ALL {
                assert!(Pattern::compile(pattern(preset, &locale)).is_ok(), "{preset:?}");
            }
        }
    }

    #[test]
    fn test_locale_variants() {
        assert_eq!(pattern(Preset::MediumDate, &Locale::en()), "d MMM yyyy");
        assert_eq!(pattern(Preset::MediumDate, &Locale::fa()), "d MMMM yyyy");
        assert_eq!(pattern_from_id(8, &Locale::fa()), Some("yyyy-MM-dd'T'HH:mm:ss"));
    }
}
