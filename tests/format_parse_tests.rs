//! Pattern formatting and parsing through the public API.

use taqvim::presets::{pattern, Preset};
use taqvim::{
    format, parse, CalendarState, CalendarSystem, CivilDate, Field, FormatOptions, Locale, ParseError,
    ParseOptions, Pattern, PatternError, TimeOfDay, Zone,
};

fn jalali(year: i32, month: u8, day: u8, time: TimeOfDay) -> CalendarState {
    CalendarState::from_civil(CalendarSystem::Jalali, CivilDate::new(year, month, day), time, Zone::Utc).unwrap()
}

#[test]
fn test_format_persian_digits() {
    let date = jalali(1402, 8, 15, TimeOfDay::MIDNIGHT);
    let opts = FormatOptions::new(Locale::fa());
    assert_eq!(format("yyyy/MM/dd", &date, &opts).unwrap(), "۱۴۰۲/۰۹/۱۵");
    assert_eq!(
        format("yyyy/MM/dd", &date, &FormatOptions::default()).unwrap(),
        "1402/09/15"
    );
}

#[test]
fn test_format_names() {
    let date = jalali(1403, 0, 1, TimeOfDay::new(14, 5, 9, 0).unwrap());
    let opts = FormatOptions::default();
    assert_eq!(
        format("dddd, d MMMM yyyy", &date, &opts).unwrap(),
        "Wednesday, 1 Farvardin 1403"
    );
    assert_eq!(format("ddd d MMM yy", &date, &opts).unwrap(), "Wed 1 Far 03");
    assert_eq!(format("h:mm:ss a", &date, &opts).unwrap(), "2:05:09 pm");
    assert_eq!(format("hh A", &date, &opts).unwrap(), "02 PM");
    assert_eq!(format("H:m:s", &date, &opts).unwrap(), "14:5:9");

    let fa = FormatOptions::new(Locale::fa());
    assert_eq!(format("dddd d MMMM", &date, &fa).unwrap(), "چهارشنبه ۱ فروردین");
    assert_eq!(format("A", &date, &fa).unwrap(), "ب.ظ");
}

#[test]
fn test_format_quoted_literals_verbatim() {
    let date = jalali(1403, 0, 1, TimeOfDay::MIDNIGHT);
    let opts = FormatOptions::new(Locale::fa());
    assert_eq!(format("'yyyy' 12 yyyy", &date, &opts).unwrap(), "yyyy 12 ۱۴۰۳");
    assert_eq!(format("dd 'o''clock'", &date, &opts).unwrap(), "۰۱ o'clock");
}

#[test]
fn test_format_other_systems() {
    let date = jalali(1403, 0, 1, TimeOfDay::MIDNIGHT);
    let opts = FormatOptions::default();
    let gregorian = date.in_system(CalendarSystem::Gregorian).unwrap();
    assert_eq!(format("yyyy-MM-dd MMMM", &gregorian, &opts).unwrap(), "2024-03-20 March");
    let hijri = date.in_system(CalendarSystem::Hijri).unwrap();
    assert_eq!(format("MMMM yyyy", &hijri, &opts).unwrap(), "Ramadan 1445");
}

#[test]
fn test_parse_jalali_date() {
    let date = parse("1402/07/20", "yyyy/MM/dd", &ParseOptions::default()).unwrap();
    assert_eq!(date.civil_date(), CivilDate::new(1402, 6, 20));
    assert_eq!(date.system(), CalendarSystem::Jalali);
}

#[test]
fn test_parse_persian_digits() {
    let opts = ParseOptions::default().with_locale(Locale::fa());
    let date = parse("۱۴۰۲/۰۷/۲۰", "yyyy/MM/dd", &opts).unwrap();
    assert_eq!(date.civil_date(), CivilDate::new(1402, 6, 20));

    // Arabic-Indic digits work with any locale
    let date = parse("١٤٠٢/٠٧/٢٠", "yyyy/MM/dd", &ParseOptions::default()).unwrap();
    assert_eq!(date.civil_date(), CivilDate::new(1402, 6, 20));
}

#[test]
fn test_parse_names_and_time() {
    let opts = ParseOptions::default();
    let date = parse("Thursday, 20 mehr 1402 6:45 PM", "dddd, d MMMM yyyy h:mm A", &opts).unwrap();
    assert_eq!(date.civil_date(), CivilDate::new(1402, 6, 20));
    assert_eq!(date.time_of_day(), TimeOfDay::new(18, 45, 0, 0).unwrap());

    let fa = ParseOptions::default().with_locale(Locale::fa());
    let date = parse("۲۰ مهر ۱۴۰۲", "d MMMM yyyy", &fa).unwrap();
    assert_eq!(date.civil_date(), CivilDate::new(1402, 6, 20));
}

#[test]
fn test_parse_two_digit_year() {
    let date = parse("02/07/20", "yy/MM/dd", &ParseOptions::default()).unwrap();
    assert_eq!(date.get(Field::Year), 1402);

    let opts = ParseOptions::new(CalendarSystem::Gregorian);
    let date = parse("24-03-20", "yy-MM-dd", &opts).unwrap();
    assert_eq!(date.civil_date(), CivilDate::new(2024, 2, 20));
}

#[test]
fn test_parse_zone() {
    let opts = ParseOptions::default().with_zone(taqvim::TEHRAN);
    let date = parse("1403/01/01 03:30", "yyyy/MM/dd HH:mm", &opts).unwrap();
    assert_eq!(date.instant_millis(), 1_710_892_800_000);
}

#[test]
fn test_parse_failures() {
    let opts = ParseOptions::default();
    match parse("1402-07-20", "yyyy/MM/dd", &opts) {
        Err(ParseError::NoMatch { text, pattern }) => {
            assert_eq!(text, "1402-07-20");
            assert_eq!(pattern, "yyyy/MM/dd");
        }
        other => panic!("expected NoMatch, got {other:?}"),
    }

    // Esfand 30 does not exist in 1402
    match parse("1402/12/30", "yyyy/MM/dd", &opts) {
        Err(ParseError::InvalidValue { text, source, .. }) => {
            assert_eq!(text, "1402/12/30");
            assert!(source.is_invalid_date());
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }

    assert!(matches!(
        parse("1402/13/01", "yyyy/MM/dd", &opts),
        Err(ParseError::InvalidValue { .. })
    ));
    assert!(matches!(
        parse("1402/01/01 24:00", "yyyy/MM/dd HH:mm", &opts),
        Err(ParseError::InvalidValue { .. })
    ));
    assert_eq!(
        parse("1402", "'yyyy", &opts).unwrap_err(),
        ParseError::Pattern(PatternError::UnterminatedQuote { position: 0 })
    );
}

#[test]
fn test_format_parse_roundtrip_presets() {
    let date = jalali(1402, 6, 20, TimeOfDay::new(18, 45, 9, 0).unwrap());
    for locale in [Locale::en(), Locale::fa()] {
        let format_opts = FormatOptions::new(locale.clone());
        let parse_opts = ParseOptions::default().with_locale(locale.clone());
        for preset in [Preset::ShortDate, Preset::MediumDate, Preset::LongDate, Preset::DateTime, Preset::Iso] {
            let compiled = Pattern::cached(pattern(preset, &locale)).unwrap();
            let text = compiled.format(&date, &format_opts);
            let parsed = compiled.parse(&text, &parse_opts).unwrap();
            assert_eq!(parsed.civil_date(), date.civil_date(), "{preset:?} {text}");
        }
    }
}

#[test]
fn test_format_does_not_mutate_state() {
    let date = jalali(1402, 6, 20, TimeOfDay::MIDNIGHT);
    let before = date.snapshot();
    format("yyyy MMMM dddd HH", &date, &FormatOptions::default()).unwrap();
    assert_eq!(date.snapshot(), before);
}
