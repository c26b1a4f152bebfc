//! AST types for compiled date patterns.

use crate::state::Field;

/// A field reference in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldToken {
    /// `yyyy` - Four-digit year
    Year4,
    /// `yy` - Two-digit year
    Year2,
    /// `MMMM` - Full month name
    MonthFull,
    /// `MMM` - Abbreviated month name
    MonthAbbr,
    /// `MM` - Month number with leading zero (01-12)
    Month2,
    /// `M` - Month number (1-12)
    Month,
    /// `dddd` or `DDDD` - Full weekday name
    WeekdayFull,
    /// `ddd` - Abbreviated weekday name
    WeekdayAbbr,
    /// `dd` - Day of month with leading zero
    Day2,
    /// `d` - Day of month
    Day,
    /// `HH` - Hour of day with leading zero (00-23)
    Hour24Padded,
    /// `H` - Hour of day (0-23)
    Hour24,
    /// `hh` - Clock hour with leading zero (01-12)
    Hour12Padded,
    /// `h` - Clock hour (1-12)
    Hour12,
    /// `mm` - Minute with leading zero
    Minute2,
    /// `m` - Minute
    Minute,
    /// `ss` - Second with leading zero
    Second2,
    /// `s` - Second
    Second,
    /// `a` - Lowercase AM/PM marker
    AmPmLower,
    /// `A` - AM/PM marker as the locale spells it
    AmPmUpper,
}

impl FieldToken {
    /// Token spellings, longest first so that a shorter token never consumes
    /// the start of a longer one.
    pub const SPELLINGS: [(&'static str, FieldToken); 21] = [
        ("yyyy", FieldToken::Year4),
        ("MMMM", FieldToken::MonthFull),
        ("dddd", FieldToken::WeekdayFull),
        ("DDDD", FieldToken::WeekdayFull),
        ("MMM", FieldToken::MonthAbbr),
        ("ddd", FieldToken::WeekdayAbbr),
        ("yy", FieldToken::Year2),
        ("MM", FieldToken::Month2),
        ("dd", FieldToken::Day2),
        ("HH", FieldToken::Hour24Padded),
        ("hh", FieldToken::Hour12Padded),
        ("mm", FieldToken::Minute2),
        ("ss", FieldToken::Second2),
        ("M", FieldToken::Month),
        ("d", FieldToken::Day),
        ("H", FieldToken::Hour24),
        ("h", FieldToken::Hour12),
        ("m", FieldToken::Minute),
        ("s", FieldToken::Second),
        ("a", FieldToken::AmPmLower),
        ("A", FieldToken::AmPmUpper),
    ];

    /// The calendar field this token reads or writes.
    pub fn field(self) -> Field {
        match self {
            FieldToken::Year4 | FieldToken::Year2 => Field::Year,
            FieldToken::MonthFull | FieldToken::MonthAbbr | FieldToken::Month2 | FieldToken::Month => {
                Field::Month
            }
            FieldToken::WeekdayFull | FieldToken::WeekdayAbbr => Field::DayOfWeek,
            FieldToken::Day2 | FieldToken::Day => Field::DayOfMonth,
            FieldToken::Hour24Padded | FieldToken::Hour24 => Field::HourOfDay,
            FieldToken::Hour12Padded | FieldToken::Hour12 => Field::Hour,
            FieldToken::Minute2 | FieldToken::Minute => Field::Minute,
            FieldToken::Second2 | FieldToken::Second => Field::Second,
            FieldToken::AmPmLower | FieldToken::AmPmUpper => Field::AmPm,
        }
    }

    pub fn is_time(self) -> bool {
        self.field().is_time_field()
    }

    /// Digit count for numeric tokens: `(min, max)`.
    pub fn digits(self) -> Option<(usize, usize)> {
        match self {
            FieldToken::Year4 => Some((4, 4)),
            FieldToken::Year2
            | FieldToken::Month2
            | FieldToken::Day2
            | FieldToken::Hour24Padded
            | FieldToken::Hour12Padded
            | FieldToken::Minute2
            | FieldToken::Second2 => Some((2, 2)),
            FieldToken::Month
            | FieldToken::Day
            | FieldToken::Hour24
            | FieldToken::Hour12
            | FieldToken::Minute
            | FieldToken::Second => Some((1, 2)),
            _ => None,
        }
    }

    /// The spelling this token was compiled from.
    pub fn spelling(self) -> &'static str {
        FieldToken::SPELLINGS
            .iter()
            .find(|(_, token)| *token == self)
            .map_or("", |(text, _)| text)
    }
}

/// A single part of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    Field(FieldToken),
    Literal(String),
}

/// A compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    parts: Vec<PatternPart>,
}

impl Pattern {
    pub(crate) fn from_parts(source: &str, parts: Vec<PatternPart>) -> Self {
        Pattern {
            source: source.to_string(),
            parts,
        }
    }

    /// The pattern string this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldToken> + '_ {
        self.parts.iter().filter_map(|part| match part {
            PatternPart::Field(token) => Some(*token),
            PatternPart::Literal(_) => None,
        })
    }

    pub fn has_date_fields(&self) -> bool {
        self.fields().any(|token| !token.is_time())
    }

    pub fn has_time_fields(&self) -> bool {
        self.fields().any(FieldToken::is_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spellings_longest_first() {
        let lengths: Vec<usize> = FieldToken::SPELLINGS.iter().map(|(s, _)| s.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_token_fields() {
        assert_eq!(FieldToken::Month2.field(), Field::Month);
        assert_eq!(FieldToken::Hour12.field(), Field::Hour);
        assert!(FieldToken::AmPmLower.is_time());
        assert!(!FieldToken::WeekdayFull.is_time());
        assert_eq!(FieldToken::WeekdayFull.spelling(), "dddd");
        assert_eq!(FieldToken::Year4.digits(), Some((4, 4)));
        assert_eq!(FieldToken::MonthFull.digits(), None);
    }
}
