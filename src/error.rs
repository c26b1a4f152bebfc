//! Error types for conversion, calendar state mutation, and pattern handling.

use thiserror::Error;

use crate::state::Field;
use crate::system::CalendarSystem;
use crate::zone::Zone;

/// Errors raised by the conversion kernel and the calendar state engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The year, month or day is outside the valid range for the calendar system.
    ///
    /// `month` is zero-based, as everywhere else in the crate; the message shows it 1-based.
    #[error("invalid {system} date: {year}/{}/{day}", .month + 1)]
    InvalidDate {
        system: CalendarSystem,
        year: i32,
        month: i32,
        day: i32,
    },

    #[error("{field} value {value} out of range {min}..={max}")]
    FieldOutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("unsupported field: {field}")]
    UnsupportedField { field: String },

    #[error("invalid official month table: {reason}")]
    InvalidTable { reason: String },

    /// A snapshot whose fields do not describe its instant in the given zone.
    #[error("snapshot fields do not match instant {instant_millis} in zone {zone}")]
    InconsistentSnapshot { instant_millis: i64, zone: Zone },
}

impl DateError {
    /// Returns true for both whole-date and single-field range failures.
    pub fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            DateError::InvalidDate { .. } | DateError::FieldOutOfRange { .. }
        )
    }

    pub(crate) fn unsupported(field: impl ToString) -> Self {
        DateError::UnsupportedField {
            field: field.to_string(),
        }
    }
}

/// Errors that can occur when compiling a pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("empty pattern")]
    EmptyPattern,

    #[error("unterminated quoted literal starting at position {position}")]
    UnterminatedQuote { position: usize },
}

/// Errors that can occur when parsing text against a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("'{text}' does not match pattern '{pattern}'")]
    NoMatch { text: String, pattern: String },

    #[error("'{text}' matched pattern '{pattern}' but is not a valid date: {source}")]
    InvalidValue {
        text: String,
        pattern: String,
        #[source]
        source: DateError,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message_is_one_based() {
        let err = DateError::InvalidDate {
            system: CalendarSystem::Jalali,
            year: 1402,
            month: 11,
            day: 30,
        };
        assert_eq!(err.to_string(), "invalid Jalali date: 1402/12/30");
        assert!(err.is_invalid_date());
    }

    #[test]
    fn field_out_of_range_message() {
        let err = DateError::FieldOutOfRange {
            field: Field::Month,
            value: 12,
            min: 0,
            max: 11,
        };
        assert_eq!(err.to_string(), "MONTH value 12 out of range 0..=11");
        assert!(err.is_invalid_date());
        assert!(!DateError::unsupported("DAY_OF_WEEK").is_invalid_date());
    }

    #[test]
    fn parse_error_carries_text_and_pattern() {
        let err = ParseError::NoMatch {
            text: "1402-07".to_string(),
            pattern: "yyyy/MM/dd".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("1402-07"));
        assert!(msg.contains("yyyy/MM/dd"));
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DateError>();
        assert_impl::<PatternError>();
        assert_impl::<ParseError>();
    }
}
