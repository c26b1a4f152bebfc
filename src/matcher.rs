//! Parsing text against compiled patterns.
//!
//! A pattern is turned into anchored regular expressions with one capture
//! group per field token. When the pattern mixes date and time tokens it is
//! split where the token class first changes: the first sub-pattern must match
//! a prefix of the text and the second must match the rest. A missing second
//! part (only whitespace left) leaves its fields at their defaults.
//!
//! Fields the text does not supply default to January 1st style values:
//! month 0 and day 1, the system's Unix-epoch year when the year is missing
//! too, and midnight.

use regex::Regex;
use tracing::debug;

use crate::ast::{FieldToken, Pattern, PatternPart};
use crate::cache;
use crate::day_count::{check_range, CivilDate, TimeOfDay};
use crate::error::{DateError, ParseError};
use crate::locale::{normalize_digits, Locale};
use crate::options::ParseOptions;
use crate::state::{CalendarState, Field};
use crate::system::CalendarSystem;

/// Compiled regular expressions for one pattern, system and locale.
#[derive(Debug, Clone)]
pub(crate) struct Matcher {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone)]
struct Segment {
    regex: Regex,
    slots: Vec<FieldToken>,
}

impl Matcher {
    pub(crate) fn build(
        pattern: &Pattern,
        system: CalendarSystem,
        locale: &Locale,
    ) -> Result<Matcher, regex::Error> {
        let parts = pattern.parts();
        let segments = match split_point(parts) {
            Some(at) => vec![
                Segment::build(&parts[..at], false, system, locale)?,
                Segment::build(&parts[at..], true, system, locale)?,
            ],
            None => vec![Segment::build(parts, true, system, locale)?],
        };
        Ok(Matcher { segments })
    }

    /// Match `text` (ASCII digits) and collect the captured values.
    fn capture<'t>(&self, text: &'t str) -> Option<Vec<(FieldToken, &'t str)>> {
        let mut values = Vec::new();
        let mut rest = text;
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 && rest.trim().is_empty() {
                break;
            }
            let captures = segment.regex.captures(rest)?;
            for (slot, token) in segment.slots.iter().enumerate() {
                let value = captures.get(slot + 1)?;
                values.push((*token, value.as_str()));
            }
            let end = captures.get(0)?.end();
            rest = &rest[end..];
        }
        Some(values)
    }
}

/// Index of the first part after the leading run of same-class fields, when
/// date and time fields are mixed. Literals between the runs go with the
/// second sub-pattern.
fn split_point(parts: &[PatternPart]) -> Option<usize> {
    let mut first_class = None;
    let mut last_in_run = 0;
    for (index, part) in parts.iter().enumerate() {
        if let PatternPart::Field(token) = part {
            match first_class {
                None => first_class = Some(token.is_time()),
                Some(class) if class != token.is_time() => return Some(last_in_run + 1),
                Some(_) => {}
            }
            last_in_run = index;
        }
    }
    None
}

impl Segment {
    fn build(
        parts: &[PatternPart],
        anchored_end: bool,
        system: CalendarSystem,
        locale: &Locale,
    ) -> Result<Segment, regex::Error> {
        let mut source = String::from("^");
        let mut slots = Vec::new();
        for part in parts {
            match part {
                PatternPart::Field(token) => {
                    source.push_str(&token_regex(*token, system, locale));
                    slots.push(*token);
                }
                PatternPart::Literal(text) => push_literal(&mut source, text),
            }
        }
        if anchored_end {
            source.push_str(r"\s*$");
        }
        Ok(Segment {
            regex: Regex::new(&source)?,
            slots,
        })
    }
}

/// Whitespace runs match any amount of whitespace; everything else matches
/// itself.
fn push_literal(source: &mut String, text: &str) {
    let mut in_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_space {
                source.push_str(r"\s+");
            }
            in_space = true;
        } else {
            source.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4])));
            in_space = false;
        }
    }
}

fn token_regex(token: FieldToken, system: CalendarSystem, locale: &Locale) -> String {
    if let Some((min, max)) = token.digits() {
        return if min == max {
            format!("([0-9]{{{min}}})")
        } else {
            format!("([0-9]{{{min},{max}}})")
        };
    }
    let names: Vec<&str> = match token {
        FieldToken::MonthFull => locale.months(system).full.to_vec(),
        FieldToken::MonthAbbr => locale.months(system).short.to_vec(),
        FieldToken::WeekdayFull => locale.day_names_full.to_vec(),
        FieldToken::WeekdayAbbr => locale.day_names_short.to_vec(),
        _ => vec![locale.am_string, locale.pm_string],
    };
    alternation(names)
}

/// Case-insensitive alternation, longest names first.
fn alternation(mut names: Vec<&str>) -> String {
    names.sort_by_key(|name| std::cmp::Reverse(name.chars().count()));
    let escaped: Vec<String> = names.iter().map(|name| regex::escape(name)).collect();
    format!("((?i:{}))", escaped.join("|"))
}

/// Field values collected from a match.
#[derive(Debug, Default)]
struct Parsed {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
    hour_of_day: Option<i64>,
    clock_hour: Option<i64>,
    pm: Option<bool>,
    minute: Option<i64>,
    second: Option<i64>,
}

impl Parsed {
    fn collect(values: &[(FieldToken, &str)], opts: &ParseOptions) -> Result<Parsed, DateError> {
        let locale = &opts.locale;
        let mut parsed = Parsed::default();
        for (token, text) in values {
            let number = || text.parse::<i64>().unwrap_or_default();
            match token {
                FieldToken::Year4 => parsed.year = Some(number()),
                FieldToken::Year2 => parsed.year = Some(i64::from(opts.century_base()) + number()),
                FieldToken::MonthFull | FieldToken::MonthAbbr => {
                    let names = locale.months(opts.system);
                    let list = if *token == FieldToken::MonthFull {
                        &names.full
                    } else {
                        &names.short
                    };
                    parsed.month = position_of(list, text).map(|i| i as i64);
                }
                FieldToken::Month2 | FieldToken::Month => {
                    let month = number() - 1;
                    check_range(Field::Month, month, 0, 11)?;
                    parsed.month = Some(month);
                }
                FieldToken::Day2 | FieldToken::Day => parsed.day = Some(number()),
                FieldToken::WeekdayFull | FieldToken::WeekdayAbbr => {}
                FieldToken::Hour24Padded | FieldToken::Hour24 => parsed.hour_of_day = Some(number()),
                FieldToken::Hour12Padded | FieldToken::Hour12 => {
                    let hour = number();
                    check_range(Field::Hour, hour, 1, 12)?;
                    parsed.clock_hour = Some(hour);
                }
                FieldToken::Minute2 | FieldToken::Minute => parsed.minute = Some(number()),
                FieldToken::Second2 | FieldToken::Second => parsed.second = Some(number()),
                FieldToken::AmPmLower | FieldToken::AmPmUpper => {
                    parsed.pm = Some(text.to_lowercase() == locale.pm_string.to_lowercase());
                }
            }
        }
        Ok(parsed)
    }

    fn into_state(self, opts: &ParseOptions) -> Result<CalendarState, DateError> {
        let system = opts.system;
        let date = if self.year.is_none() && self.month.is_none() && self.day.is_none() {
            system.from_days(0)
        } else {
            let year = self.year.unwrap_or_else(|| system.from_days(0).year.into());
            let month = self.month.unwrap_or(0);
            let day = self.day.unwrap_or(1);
            let year = i32::try_from(year).map_err(|_| system.invalid(i32::MAX, month as i32, day as i32))?;
            system.validate(CivilDate::new(year, month as u8, day.clamp(0, 255) as u8))?
        };

        let pm = self.pm.unwrap_or(false);
        let hour = match (self.hour_of_day, self.clock_hour) {
            (Some(hour), _) => hour,
            (None, Some(hour)) => hour % 12 + if pm { 12 } else { 0 },
            (None, None) if pm => 12,
            (None, None) => 0,
        };
        check_range(Field::HourOfDay, hour, 0, 23)?;
        let minute = self.minute.unwrap_or(0);
        check_range(Field::Minute, minute, 0, 59)?;
        let second = self.second.unwrap_or(0);
        check_range(Field::Second, second, 0, 59)?;
        let time = TimeOfDay::new(hour as u8, minute as u8, second as u8, 0)?;

        CalendarState::from_civil(system, date, time, opts.zone)
    }
}

fn position_of(names: &[&str], text: &str) -> Option<usize> {
    let text = text.to_lowercase();
    names.iter().position(|name| name.to_lowercase() == text)
}

impl Pattern {
    /// Parse text written with this pattern.
    ///
    /// Persian and Arabic-Indic digits are accepted anywhere ASCII digits
    /// are.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoMatch`] if the text does not have the
    /// pattern's shape and [`ParseError::InvalidValue`] if it does but names a
    /// date or time that does not exist.
    pub fn parse(&self, text: &str, opts: &ParseOptions) -> Result<CalendarState, ParseError> {
        let no_match = || ParseError::NoMatch {
            text: text.to_string(),
            pattern: self.source().to_string(),
        };

        let matcher = cache::get_or_build_matcher(self, opts.system, &opts.locale).map_err(|err| {
            debug!(pattern = self.source(), %err, "could not build matcher");
            no_match()
        })?;

        let normalized = normalize_digits(text);
        let Some(values) = matcher.capture(&normalized) else {
            debug!(text, pattern = self.source(), "text does not match pattern");
            return Err(no_match());
        };

        Parsed::collect(&values, opts)
            .and_then(|parsed| parsed.into_state(opts))
            .map_err(|source| {
                debug!(text, pattern = self.source(), %source, "parsed value rejected");
                ParseError::InvalidValue {
                    text: text.to_string(),
                    pattern: self.source().to_string(),
                    source,
                }
            })
    }
}
