//! Date and time field rendering

use crate::ast::FieldToken;
use crate::day_count::{CivilDate, TimeOfDay, Weekday};
use crate::locale::Locale;
use crate::state::CalendarState;
use crate::system::CalendarSystem;

/// Field values read once from a state before rendering.
pub(crate) struct FieldValues {
    system: CalendarSystem,
    date: CivilDate,
    time: TimeOfDay,
    weekday: Weekday,
}

impl FieldValues {
    pub(crate) fn read(state: &CalendarState) -> Self {
        FieldValues {
            system: state.system(),
            date: state.civil_date(),
            time: state.time_of_day(),
            weekday: state.weekday(),
        }
    }
}

/// Append one rendered field to `out`.
pub(crate) fn format_field(out: &mut String, token: FieldToken, values: &FieldValues, locale: &Locale) {
    let date = values.date;
    let time = values.time;
    let number = |out: &mut String, value: i64, width: usize| {
        out.push_str(&locale.localize_digits(&format!("{value:0width$}")));
    };

    match token {
        FieldToken::Year4 => number(out, date.year.into(), 4),
        FieldToken::Year2 => number(out, i64::from(date.year).rem_euclid(100), 2),

        FieldToken::MonthFull => out.push_str(locale.month_name(values.system, date.month, true)),
        FieldToken::MonthAbbr => out.push_str(locale.month_name(values.system, date.month, false)),
        FieldToken::Month2 => number(out, i64::from(date.month) + 1, 2),
        FieldToken::Month => number(out, i64::from(date.month) + 1, 1),

        FieldToken::WeekdayFull => out.push_str(locale.weekday_name(values.weekday, true)),
        FieldToken::WeekdayAbbr => out.push_str(locale.weekday_name(values.weekday, false)),
        FieldToken::Day2 => number(out, date.day.into(), 2),
        FieldToken::Day => number(out, date.day.into(), 1),

        FieldToken::Hour24Padded => number(out, time.hour.into(), 2),
        FieldToken::Hour24 => number(out, time.hour.into(), 1),
        FieldToken::Hour12Padded => number(out, to_12_hour(time.hour).into(), 2),
        FieldToken::Hour12 => number(out, to_12_hour(time.hour).into(), 1),

        FieldToken::Minute2 => number(out, time.minute.into(), 2),
        FieldToken::Minute => number(out, time.minute.into(), 1),
        FieldToken::Second2 => number(out, time.second.into(), 2),
        FieldToken::Second => number(out, time.second.into(), 1),

        FieldToken::AmPmUpper => out.push_str(locale.am_pm(time.hour >= 12)),
        FieldToken::AmPmLower => out.push_str(&locale.am_pm(time.hour >= 12).to_lowercase()),
    }
}

/// Convert 24-hour time to 12-hour clock time.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
pub(crate) fn to_12_hour(hour: u8) -> u8 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}
