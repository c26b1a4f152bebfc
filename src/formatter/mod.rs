//! Pattern formatting over a calendar state.

mod date;

use crate::ast::{Pattern, PatternPart};
use crate::options::FormatOptions;
use crate::state::CalendarState;

impl Pattern {
    /// Format a calendar state with this pattern.
    ///
    /// Numbers are rendered with the locale's digits; literal text is copied
    /// unchanged. The state is only read.
    pub fn format(&self, state: &CalendarState, opts: &FormatOptions) -> String {
        let values = date::FieldValues::read(state);
        let mut result = String::new();
        for part in self.parts() {
            match part {
                PatternPart::Field(token) => {
                    date::format_field(&mut result, *token, &values, &opts.locale);
                }
                PatternPart::Literal(text) => result.push_str(text),
            }
        }
        result
    }
}
